pub const DEFAULT_QUALITY: u8 = 75;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Images larger than this on either axis are scaled down to fit.
pub const DEFAULT_MAX_DIMENSION: u32 = 1280;

/// Subdirectory of the input folder used when no output directory is given.
pub const COMPRESSED_DIR_NAME: &str = "compressed";

pub const COMPRESSIBLE_SUFFIXES: &[&str] = &[".jpg", ".jpeg"];
pub const EXPORTABLE_SUFFIXES: &[&str] = &[".jpg"];

pub const DEFAULT_NAMES_FILE: &str = "photo_names.txt";

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";

// Unlock window
pub const UNLOCK_WINDOW_TITLE: &str = "PDF Unlocker";
pub const UNLOCK_WINDOW_SIZE: [f32; 2] = [300.0, 150.0];
pub const UNLOCK_LABEL: &str = "Unlock a PDF file";
pub const UNLOCK_BUTTON: &str = "Select PDF and Unlock";
pub const PICK_PDF_TITLE: &str = "Select Locked PDF";
pub const PICK_OUTPUT_TITLE: &str = "Select Output Folder";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const ERROR_PREFIX: &str = "❌";
pub const LOCKED_PREFIX: &str = "🔒";
