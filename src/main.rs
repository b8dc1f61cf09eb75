use clap::Parser;
use photo_kit::cli::{Args, Commands};
use photo_kit::logger::{self, Verbosity};
use photo_kit::{
    batch_compress_images, default_output_dir, export_names, unlock_pdf, CompressionOptions,
    Notice,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    match args.command {
        Commands::Compress {
            input_dir,
            output,
            quality,
            max_dimension,
        } => {
            let options = CompressionOptions::new(quality, max_dimension)?;
            let output = output.unwrap_or_else(|| default_output_dir(&input_dir));
            let report = batch_compress_images(&input_dir, &output, &options)?;
            report.print_summary();
        }
        Commands::ExportNames { input_dir, output } => {
            export_names(&input_dir, &output)?;
        }
        Commands::Unlock { input, output_dir } => {
            unlock_to_console(&input, &output_dir)?;
        }
        #[cfg(feature = "gui")]
        Commands::UnlockGui => {
            photo_kit::gui::run_unlock_window()
                .map_err(|e| anyhow::anyhow!("failed to open window: {e}"))?;
        }
    }

    Ok(())
}

fn unlock_to_console(input: &Path, output_dir: &Path) -> anyhow::Result<()> {
    match unlock_pdf(input, output_dir) {
        Ok(output) => {
            photo_kit::info!("{}", Notice::success(&output).body);
            Ok(())
        }
        Err(error) => anyhow::bail!("{}", Notice::failure(&error).body),
    }
}
