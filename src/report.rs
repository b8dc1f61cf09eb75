//! Per-file outcomes of a compression batch and the summary printed after it.

use crate::error::CompressionError;
use crate::processing::ProcessedImage;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug)]
pub enum FileOutcome {
    Compressed {
        input: PathBuf,
        output: PathBuf,
        image: ProcessedImage,
    },
    Failed {
        input: PathBuf,
        error: CompressionError,
    },
}

impl FileOutcome {
    pub fn input(&self) -> &Path {
        match self {
            FileOutcome::Compressed { input, .. } | FileOutcome::Failed { input, .. } => input,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Compressed { .. })
    }

    /// Bare file name used in console messages.
    pub fn file_name(&self) -> String {
        self.input()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input().display().to_string())
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &CompressionError)> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Failed { input, error } => Some((input.as_path(), error)),
            FileOutcome::Compressed { .. } => None,
        })
    }

    /// Summed (original, compressed) size of the successful files.
    pub fn total_sizes(&self) -> (u64, u64) {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                FileOutcome::Compressed { image, .. } => {
                    Some((image.original_size, image.compressed_size))
                }
                FileOutcome::Failed { .. } => None,
            })
            .fold((0, 0), |(before, after), (b, a)| (before + b, after + a))
    }

    pub fn print_summary(&self) {
        let (before, after) = self.total_sizes();

        crate::info!("\n📊 Batch Compression Summary:");
        crate::info!("  📁 Files compressed: {}/{}", self.succeeded(), self.total());
        crate::info!("  📊 Total original size: {}", format_file_size(before));
        crate::info!("  📊 Total compressed size: {}", format_file_size(after));
        crate::info!(
            "  🎯 Overall compression ratio: {:.1}%",
            calculate_compression_ratio(before, after)
        );
        crate::info!("  ⏱️  Total time: {:.2?}", self.elapsed);

        if self.failed() > 0 {
            crate::warn!("Failed files: {}", self.failed());
            for (input, _) in self.failures() {
                let name = input
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_else(|| input.to_string_lossy());
                crate::warn!("  - {}", name);
            }
        }
    }
}

/// Format file size in human-readable format ("512 B", "1.5 KB").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Size reduction as a percentage; negative when the output grew.
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}
