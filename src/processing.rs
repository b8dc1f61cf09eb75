use crate::constants::{DEFAULT_MAX_DIMENSION, DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::error::{CompressionError, Result};
use crate::orientation::{apply_orientation, read_orientation};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use jpeg_encoder::{ColorType, Encoder};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionOptions {
    pub quality: u8,
    pub max_dimension: u32,
}

impl CompressionOptions {
    pub fn new(quality: Option<u8>, max_dimension: Option<u32>) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressionError::InvalidQuality(quality));
        }

        let max_dimension = max_dimension.unwrap_or(DEFAULT_MAX_DIMENSION);
        if max_dimension == 0 {
            return Err(CompressionError::InvalidMaxDimension(max_dimension));
        }

        Ok(Self {
            quality,
            max_dimension,
        })
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

/// Sizes and dimensions of one successfully compressed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessedImage {
    pub original_size: u64,
    pub compressed_size: u64,
    pub original_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
}

/// Core image processing pipeline:
/// load -> orient -> normalize color -> resize -> encode -> save
///
/// # Arguments
/// * `input_path` - Path to the input image file
/// * `output_path` - Path where the JPEG will be written
/// * `options` - Quality and size limit
///
/// # Returns
/// * `Ok(ProcessedImage)` - File sizes and dimensions before and after
/// * `Err(CompressionError)` - If any step fails; nothing is written in that case
pub fn process_image_pipeline(
    input_path: &Path,
    output_path: &Path,
    options: &CompressionOptions,
) -> Result<ProcessedImage> {
    let (img, original_size) = load_image(input_path)?;
    let original_dimensions = img.dimensions();

    let img = apply_orientation(img, read_orientation(input_path));
    let img = normalize_color(img);
    let img = resize_to_fit(img, options.max_dimension);
    let output_dimensions = img.dimensions();

    let bytes = encode_jpeg(&img, options.quality)?;
    drop(img);
    write_atomically(output_path, &bytes)?;

    Ok(ProcessedImage {
        original_size,
        compressed_size: bytes.len() as u64,
        original_dimensions,
        output_dimensions,
    })
}

/// Loads an image file and returns it along with its size on disk.
///
/// The decoder is picked from the file content, not the extension, so a PNG
/// saved as `.jpeg` still opens.
pub fn load_image(input_path: &Path) -> Result<(DynamicImage, u64)> {
    let file_size = fs::metadata(input_path)?.len();
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;
    Ok((img, file_size))
}

/// Brings the image into a color mode baseline JPEG can store: grayscale
/// stays single-channel, everything else (alpha, palette, 16-bit, float)
/// becomes 8-bit RGB.
pub fn normalize_color(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => img,
        DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma8(img.to_luma8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// Target size for an image that exceeds `max` on either axis, or `None` when
/// it already fits. Aspect ratio is kept; the image is never enlarged.
pub fn fit_within(width: u32, height: u32, max: u32) -> Option<(u32, u32)> {
    if width <= max && height <= max {
        return None;
    }

    let scale = (max as f64 / width as f64).min(max as f64 / height as f64);
    let new_width = ((width as f64 * scale).round() as u32).clamp(1, max);
    let new_height = ((height as f64 * scale).round() as u32).clamp(1, max);
    Some((new_width, new_height))
}

pub fn resize_to_fit(img: DynamicImage, max: u32) -> DynamicImage {
    match fit_within(img.width(), img.height(), max) {
        Some((width, height)) => img.resize_exact(width, height, FilterType::Lanczos3),
        None => img,
    }
}

/// Encodes to baseline JPEG with optimized Huffman tables. Only pixels are
/// written, no EXIF or ICC data from the source survives.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(CompressionError::DimensionsTooLarge(width, height));
    };

    let mut bytes = Vec::new();
    let mut encoder = Encoder::new(&mut bytes, quality);
    encoder.set_optimized_huffman_tables(true);

    let encoded = match img {
        DynamicImage::ImageLuma8(gray) => encoder.encode(gray.as_raw(), w, h, ColorType::Luma),
        _ => {
            let rgb = img.to_rgb8();
            encoder.encode(rgb.as_raw(), w, h, ColorType::Rgb)
        }
    };
    encoded.map_err(|e| CompressionError::Encode(e.to_string()))?;

    Ok(bytes)
}

/// Writes `bytes` to a temporary file next to `output` and renames it into
/// place, so `output` is either untouched or complete.
pub fn write_atomically(output: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    temp.persist(output).map_err(|e| e.error)?;
    Ok(())
}
