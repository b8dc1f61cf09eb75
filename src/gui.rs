//! The "PDF Unlocker" window: a label and one button that walks through the
//! native file pickers and reports the result in a modal dialog.

use crate::constants::{
    PICK_OUTPUT_TITLE, PICK_PDF_TITLE, UNLOCK_BUTTON, UNLOCK_LABEL, UNLOCK_WINDOW_SIZE,
    UNLOCK_WINDOW_TITLE,
};
use crate::unlock::{Notice, NoticeLevel, UnlockFlow, UnlockPrompter};
use eframe::egui;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

/// Native pickers and message boxes. Every call blocks until the user closes
/// the dialog.
struct DialogPrompter;

impl UnlockPrompter for DialogPrompter {
    fn pick_pdf(&mut self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title(PICK_PDF_TITLE)
            .add_filter("PDF files", &["pdf"])
            .pick_file()
    }

    fn pick_output_dir(&mut self) -> Option<PathBuf> {
        FileDialog::new().set_title(PICK_OUTPUT_TITLE).pick_folder()
    }

    fn show_notice(&mut self, notice: &Notice) {
        let level = match notice.level {
            NoticeLevel::Info => MessageLevel::Info,
            NoticeLevel::Error => MessageLevel::Error,
        };
        MessageDialog::new()
            .set_level(level)
            .set_title(notice.title)
            .set_description(notice.body.as_str())
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

#[derive(Default)]
struct UnlockerApp {
    flow: UnlockFlow,
}

impl eframe::App for UnlockerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(egui::RichText::new(UNLOCK_LABEL).size(14.0));
                ui.add_space(10.0);
                if ui.button(UNLOCK_BUTTON).clicked() {
                    self.flow.run(&mut DialogPrompter);
                }
            });
        });
    }
}

/// Opens the 300x150 fixed-size window and blocks until it is closed.
pub fn run_unlock_window() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(UNLOCK_WINDOW_TITLE)
            .with_inner_size(UNLOCK_WINDOW_SIZE)
            .with_resizable(false)
            .with_maximize_button(false),
        ..Default::default()
    };

    eframe::run_native(
        UNLOCK_WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(UnlockerApp::default()))),
    )
}
