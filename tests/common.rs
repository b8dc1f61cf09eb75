#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, EncryptionState, EncryptionVersion, Object, Permissions, Stream};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Gradient so the encoder has something to work on.
pub fn gradient_rgb(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    DynamicImage::ImageRgb8(img)
}

pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    gradient_rgb(width, height)
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
}

/// RGBA pixels stored as PNG; the file name decides nothing about the format.
pub fn write_rgba_png(path: &Path, width: u32, height: u32) {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 128])))
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

pub fn write_text(path: &Path, contents: &str) {
    File::create(path)
        .unwrap()
        .write_all(contents.as_bytes())
        .unwrap();
}

/// The mixed folder from the README example: a large JPEG, a small RGBA
/// image with a `.jpeg` name and a text file.
pub fn create_mixed_photo_folder(dir: &Path) -> Vec<PathBuf> {
    let a = dir.join("a.jpg");
    let b = dir.join("b.jpeg");
    let c = dir.join("c.txt");

    write_jpeg(&a, 2000, 1000);
    write_rgba_png(&b, 400, 300);
    write_text(&c, "not an image");

    vec![a, b, c]
}

fn sample_document() -> Document {
    let mut doc = Document::with_version("1.5");
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(b"photo-kit-test-1".to_vec()),
            Object::string_literal(b"photo-kit-test-2".to_vec()),
        ],
    );
    let pages_id = doc.new_object_id();
    let content = Content {
        operations: vec![Operation::new(
            "re",
            vec![20.into(), 20.into(), 100.into(), 100.into()],
        )],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Single-page PDF without encryption.
pub fn write_sample_pdf(path: &Path) {
    sample_document().save(path).unwrap();
}

/// Single-page PDF encrypted with RC4-128 and every permission revoked.
/// Pass `""` for a file that opens without a prompt.
pub fn write_encrypted_pdf(path: &Path, user_password: &str) {
    let mut doc = sample_document();
    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::empty(),
    };
    let state = EncryptionState::try_from(version).unwrap();
    doc.encrypt(&state).unwrap();
    doc.save(path).unwrap();
}
