//! Re-saving PDFs without their encryption dictionary.
//!
//! A PDF whose user password is empty opens without a prompt but may still
//! carry permission flags (no printing, no copying). Writing the document back
//! out unencrypted drops those flags. Files that need a real password to open
//! are rejected; no password is ever tried besides the empty one.

use crate::constants::{ERROR_PREFIX, LOCKED_PREFIX, SUCCESS_PREFIX};
use crate::error::UnlockError;
use lopdf::Document;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Opens `input` and writes an unrestricted copy with the same file name into
/// `output_dir`. Returns the path of the copy.
///
/// Nothing is written when the document cannot be opened.
pub fn unlock_pdf(input: &Path, output_dir: &Path) -> Result<PathBuf, UnlockError> {
    let file_name = input
        .file_name()
        .ok_or_else(|| UnlockError::MissingFileName(input.to_path_buf()))?;
    let output = output_dir.join(file_name);

    if is_same_file(input, &output) {
        return Err(UnlockError::WouldOverwriteInput(input.to_path_buf()));
    }

    let mut doc = open_document(input)?;
    crate::verbose!("Loaded {:?} ({} pages)", input, doc.get_pages().len());

    save_unencrypted(&mut doc, &output)?;
    Ok(output)
}

/// Loads a document, decrypting it with the empty user password if needed.
pub fn open_document(input: &Path) -> Result<Document, UnlockError> {
    let mut doc = Document::load(input).map_err(|e| UnlockError::Load {
        path: input.to_path_buf(),
        message: e.to_string(),
    })?;

    if doc.is_encrypted() {
        doc.decrypt("").map_err(|_| UnlockError::PasswordRequired)?;
    }

    Ok(doc)
}

fn save_unencrypted(doc: &mut Document, output: &Path) -> Result<(), UnlockError> {
    doc.trailer.remove(b"Encrypt");

    let save_error = |message: String| UnlockError::Save {
        path: output.to_path_buf(),
        message,
    };

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    doc.save_to(&mut temp).map_err(|e| save_error(e.to_string()))?;
    temp.flush()?;
    temp.persist(output).map_err(|e| save_error(e.error.to_string()))?;
    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Message shown to the user once an unlock attempt finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub body: String,
}

impl Notice {
    pub fn success(output: &Path) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: "Success",
            body: format!("{} Unlocked PDF saved as:\n{}", SUCCESS_PREFIX, output.display()),
        }
    }

    pub fn failure(error: &UnlockError) -> Self {
        let body = match error {
            UnlockError::PasswordRequired => format!("{} {}", LOCKED_PREFIX, error),
            other => format!("{} Something went wrong:\n{}", ERROR_PREFIX, other),
        };
        Self {
            level: NoticeLevel::Error,
            title: "Error",
            body,
        }
    }

    pub fn from_result(result: &Result<PathBuf, UnlockError>) -> Self {
        match result {
            Ok(output) => Notice::success(output),
            Err(error) => Notice::failure(error),
        }
    }
}

/// The user-facing side of the unlock form: two pickers and a message box.
pub trait UnlockPrompter {
    /// Asks for the PDF to unlock. `None` means the user cancelled.
    fn pick_pdf(&mut self) -> Option<PathBuf>;

    /// Asks where to put the copy. `None` means the user cancelled.
    fn pick_output_dir(&mut self) -> Option<PathBuf>;

    fn show_notice(&mut self, notice: &Notice);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UnlockState {
    #[default]
    Idle,
    AwaitingInputPath,
    AwaitingOutputDir {
        input: PathBuf,
    },
    Processing {
        input: PathBuf,
        output_dir: PathBuf,
    },
    Done(Notice),
}

/// State machine behind the "Select PDF and Unlock" button.
#[derive(Debug, Default)]
pub struct UnlockFlow {
    state: UnlockState,
}

impl UnlockFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UnlockState {
        &self.state
    }

    /// Runs one button press to completion. Cancelling either picker returns
    /// to `Idle` without showing anything; otherwise the flow ends in `Done`
    /// after the notice has been shown.
    pub fn run<P: UnlockPrompter>(&mut self, prompter: &mut P) -> &UnlockState {
        self.state = UnlockState::AwaitingInputPath;

        loop {
            let next = match std::mem::take(&mut self.state) {
                finished @ (UnlockState::Idle | UnlockState::Done(_)) => {
                    self.state = finished;
                    break;
                }
                UnlockState::AwaitingInputPath => match prompter.pick_pdf() {
                    Some(input) => UnlockState::AwaitingOutputDir { input },
                    None => UnlockState::Idle,
                },
                UnlockState::AwaitingOutputDir { input } => match prompter.pick_output_dir() {
                    Some(output_dir) => UnlockState::Processing { input, output_dir },
                    None => UnlockState::Idle,
                },
                UnlockState::Processing { input, output_dir } => {
                    let notice = Notice::from_result(&unlock_pdf(&input, &output_dir));
                    prompter.show_notice(&notice);
                    UnlockState::Done(notice)
                }
            };
            self.state = next;
        }

        &self.state
    }
}
