//! Writes the base names of a folder's `.jpg` files to a text file, one per
//! line.

use crate::error::ExportError;
use crate::filter::{list_matching, ExtensionFilter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Exports the names of the `.jpg` entries of `source_dir` into
/// `output_file`, truncating it first. Returns the number of names written.
///
/// Any listing or write error ends the export; the output file may then hold
/// a partial list.
pub fn export_names(source_dir: &Path, output_file: &Path) -> Result<usize, ExportError> {
    if !source_dir.is_dir() {
        return Err(ExportError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not a directory", source_dir.display()),
        )));
    }

    let mut writer = BufWriter::new(File::create(output_file)?);
    let count = write_names(source_dir, &mut writer)?;
    writer.flush()?;

    crate::info!("✅ All names saved to '{}'", output_file.display());
    Ok(count)
}

/// Writes one stem per line into `out`, in filesystem order.
pub fn write_names<W: Write>(source_dir: &Path, out: &mut W) -> Result<usize, ExportError> {
    let entries = list_matching(source_dir, ExtensionFilter::exportable())?;

    for path in &entries {
        writeln!(out, "{}", strip_extension(path))?;
    }

    Ok(entries.len())
}

/// File name without its last extension. A leading dot does not start an
/// extension, so `.jpg` stays `.jpg`.
pub fn strip_extension(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
