pub mod logger;

pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod export;
pub mod filter;
#[cfg(feature = "gui")]
pub mod gui;
pub mod orientation;
pub mod processing;
pub mod report;
pub mod unlock;

pub use batch::{
    batch_compress_images, collect_image_files, default_output_dir, generate_output_path,
};
pub use error::{CompressionError, ExportError, Result, UnlockError};
pub use export::export_names;
pub use filter::ExtensionFilter;
pub use orientation::{apply_orientation, read_orientation, Orientation};
pub use processing::{
    encode_jpeg, fit_within, load_image, normalize_color, process_image_pipeline, resize_to_fit,
    CompressionOptions, ProcessedImage,
};
pub use report::{BatchReport, FileOutcome};
pub use unlock::{unlock_pdf, Notice, NoticeLevel, UnlockFlow, UnlockPrompter, UnlockState};
