use crate::constants::{COMPRESSED_DIR_NAME, PROGRESS_BAR_TEMPLATE};
use crate::error::{CompressionError, Result};
use crate::filter::{list_matching, ExtensionFilter};
use crate::processing::{process_image_pipeline, CompressionOptions};
use crate::report::{format_file_size, BatchReport, FileOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// `<input>/compressed`, used when no output directory is given.
pub fn default_output_dir(input_dir: &Path) -> PathBuf {
    input_dir.join(COMPRESSED_DIR_NAME)
}

/// Lists the `.jpg`/`.jpeg` entries directly inside `input_dir`, in
/// filesystem order.
pub fn collect_image_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(CompressionError::NotADirectory(input_dir.to_path_buf()));
    }
    Ok(list_matching(input_dir, ExtensionFilter::compressible())?)
}

/// Same file name, inside the output directory.
pub fn generate_output_path(input_path: &Path, output_dir: &Path) -> Option<PathBuf> {
    input_path.file_name().map(|name| output_dir.join(name))
}

/// Compresses every JPEG in `input_dir` into `output_dir`.
///
/// A file that fails is recorded in the report and the batch moves on; only
/// an unreadable input directory or an output directory that cannot be
/// created ends the run early.
pub fn batch_compress_images(
    input_dir: &Path,
    output_dir: &Path,
    options: &CompressionOptions,
) -> Result<BatchReport> {
    crate::info!("🚀 Starting batch compression...");
    crate::info!("📁 Input: {:?}", input_dir);
    crate::info!("📁 Output: {:?}", output_dir);

    let start_time = Instant::now();
    let image_files = collect_image_files(input_dir)?;

    fs::create_dir_all(output_dir)
        .map_err(|_| CompressionError::DirectoryCreationFailed(output_dir.to_path_buf()))?;

    let mut report = BatchReport::default();
    if image_files.is_empty() {
        crate::warn!("No .jpg or .jpeg files found in {:?}", input_dir);
        return Ok(report);
    }

    crate::verbose!("Found {} image files to process", image_files.len());

    let progress = if crate::logger::is_quiet() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(image_files.len() as u64)
    };
    if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        progress.set_style(style);
    }

    for input_path in image_files {
        let outcome = process_single_image(input_path, output_dir, options);
        progress.suspend(|| print_outcome(&outcome));
        progress.inc(1);
        report.push(outcome);
    }

    progress.finish_and_clear();
    report.elapsed = start_time.elapsed();
    Ok(report)
}

fn process_single_image(
    input_path: PathBuf,
    output_dir: &Path,
    options: &CompressionOptions,
) -> FileOutcome {
    let Some(output_path) = generate_output_path(&input_path, output_dir) else {
        return FileOutcome::Failed {
            input: input_path,
            error: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name").into(),
        };
    };

    match process_image_pipeline(&input_path, &output_path, options) {
        Ok(image) => FileOutcome::Compressed {
            input: input_path,
            output: output_path,
            image,
        },
        Err(error) => FileOutcome::Failed {
            input: input_path,
            error,
        },
    }
}

fn print_outcome(outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Compressed { image, .. } => {
            crate::info!("Compressed & corrected: {}", outcome.file_name());
            crate::verbose!(
                "{}x{} -> {}x{}, {} -> {}",
                image.original_dimensions.0,
                image.original_dimensions.1,
                image.output_dimensions.0,
                image.output_dimensions.1,
                format_file_size(image.original_size),
                format_file_size(image.compressed_size)
            );
        }
        FileOutcome::Failed { error, .. } => {
            crate::error!("Error with {}: {}", outcome.file_name(), error);
        }
    }
}
