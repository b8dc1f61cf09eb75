mod common;

use image::GenericImageView;
use photo_kit::{batch_compress_images, default_output_dir, export_names, CompressionOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_mixed_folder_report() {
    let temp_dir = TempDir::new().unwrap();
    common::create_mixed_photo_folder(temp_dir.path());
    let output = default_output_dir(temp_dir.path());

    let report =
        batch_compress_images(temp_dir.path(), &output, &CompressionOptions::default()).unwrap();

    assert_eq!(report.total(), 2);
    assert_eq!(report.failed(), 0);
    assert!(report.outcomes.iter().all(|o| o.file_name() != "c.txt"));

    let mut written: Vec<String> = fs::read_dir(&output)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, vec!["a.jpg", "b.jpeg"]);
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    common::write_jpeg(&temp_dir.path().join("portrait.jpg"), 300, 500);
    common::write_rgba_png(&temp_dir.path().join("badge.JPEG"), 120, 90);
    let output = temp_dir.path().join("out");
    let options = CompressionOptions::default();

    batch_compress_images(temp_dir.path(), &output, &options).unwrap();
    let first_portrait = fs::read(output.join("portrait.jpg")).unwrap();
    let first_badge = fs::read(output.join("badge.JPEG")).unwrap();

    batch_compress_images(temp_dir.path(), &output, &options).unwrap();
    assert_eq!(fs::read(output.join("portrait.jpg")).unwrap(), first_portrait);
    assert_eq!(fs::read(output.join("badge.JPEG")).unwrap(), first_badge);
}

#[test]
fn test_custom_limit_and_quality() {
    let temp_dir = TempDir::new().unwrap();
    common::write_jpeg(&temp_dir.path().join("tall.jpg"), 300, 600);
    let output = temp_dir.path().join("out");
    let options = CompressionOptions::new(Some(40), Some(200)).unwrap();

    let report = batch_compress_images(temp_dir.path(), &output, &options).unwrap();

    assert_eq!(report.succeeded(), 1);
    let img = image::open(output.join("tall.jpg")).unwrap();
    assert_eq!(img.dimensions(), (100, 200));
}

#[test]
fn test_export_line_count_matches_jpg_entries() {
    let temp_dir = TempDir::new().unwrap();
    let photos = temp_dir.path().join("photos");
    fs::create_dir(&photos).unwrap();
    let names = ["A. Mensah", "b_okello", "Chen Wei", "d-4"];
    for name in names {
        common::write_text(&photos.join(format!("{name}.jpg")), "");
    }
    common::write_text(&photos.join("ignored.jpeg"), "");
    common::write_text(&photos.join("ignored.png"), "");

    let output = temp_dir.path().join("names.txt");
    let count = export_names(&photos, &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort();
    let mut expected = names.to_vec();
    expected.sort();

    assert_eq!(count, names.len());
    assert_eq!(lines, expected);
}
