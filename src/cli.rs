use crate::constants::DEFAULT_NAMES_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "photo-kit",
    about = "Small utilities for photo folders: JPEG compression, name export and PDF unlocking",
    long_about = "photo-kit bundles three independent tools: a batch JPEG compressor that fixes \
                  EXIF orientation and caps image size, an exporter that writes the names of a \
                  folder's .jpg files to a text file, and a PDF unlocker that re-saves documents \
                  without their permission restrictions.",
    version,
    after_help = "EXAMPLES:\n  \
    photo-kit compress ./passport\n  \
    photo-kit compress ./passport -o ./small -q 80 -m 1600\n  \
    photo-kit export-names ./class-photos -o names.txt\n  \
    photo-kit unlock locked.pdf ./unlocked"
)]
pub struct Args {
    #[arg(long, global = true, help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, global = true, help = "Print per-file sizes and dimensions")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Compress every .jpg/.jpeg file in a folder",
        long_about = "Re-encode every .jpg/.jpeg file directly inside INPUT_DIR as a metadata-free \
                      baseline JPEG. EXIF orientation is applied to the pixels, transparency and \
                      palettes are flattened to RGB, and images larger than the maximum dimension \
                      are scaled down. A file that fails is reported and skipped."
    )]
    Compress {
        #[arg(help = "Folder containing the photos")]
        input_dir: PathBuf,

        #[arg(
            short = 'o',
            long,
            help = "Output folder (default: INPUT_DIR/compressed)"
        )]
        output: Option<PathBuf>,

        #[arg(
            short = 'q',
            long,
            help = "JPEG quality (1-100, default: 75)"
        )]
        quality: Option<u8>,

        #[arg(
            short = 'm',
            long,
            help = "Maximum width and height in pixels (default: 1280)",
            long_help = "Images wider or taller than this are scaled down, keeping their aspect \
                         ratio. Smaller images are never enlarged."
        )]
        max_dimension: Option<u32>,
    },

    #[command(
        about = "Write the names of a folder's .jpg files to a text file",
        long_about = "Write the name of every .jpg file directly inside INPUT_DIR, without its \
                      extension, one per line. The output file is overwritten. Names appear in \
                      the order the filesystem lists them."
    )]
    ExportNames {
        #[arg(help = "Folder containing the photos")]
        input_dir: PathBuf,

        #[arg(short = 'o', long, default_value = DEFAULT_NAMES_FILE, help = "Output text file")]
        output: PathBuf,
    },

    #[command(
        about = "Re-save a PDF without its permission restrictions",
        long_about = "Open INPUT and save a copy with the same file name into OUTPUT_DIR, \
                      without encryption. This only works for documents that open without a \
                      password; password-protected files are rejected."
    )]
    Unlock {
        #[arg(help = "PDF file to unlock")]
        input: PathBuf,

        #[arg(help = "Folder for the unlocked copy")]
        output_dir: PathBuf,
    },

    #[cfg(feature = "gui")]
    #[command(about = "Open the PDF Unlocker window")]
    UnlockGui,
}
