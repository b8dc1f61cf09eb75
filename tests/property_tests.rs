use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use photo_kit::processing::{fit_within, normalize_color, resize_to_fit, CompressionOptions};
use photo_kit::ExtensionFilter;
use proptest::prelude::*;
use std::path::Path;

proptest! {
    #[test]
    fn compression_options_quality_range(quality in 0u8..=255u8) {
        let result = CompressionOptions::new(Some(quality), None);
        if (1..=100).contains(&quality) {
            prop_assert_eq!(result.unwrap().quality, quality);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn fit_within_never_upscales(width in 1u32..=1280u32, height in 1u32..=1280u32) {
        prop_assert_eq!(fit_within(width, height, 1280), None);
    }

    #[test]
    fn fit_within_caps_larger_side(width in 1u32..=20_000u32, height in 1u32..=20_000u32) {
        prop_assume!(width > 1280 || height > 1280);

        let (new_width, new_height) = fit_within(width, height, 1280).unwrap();

        prop_assert!(new_width <= 1280 && new_height <= 1280);
        prop_assert_eq!(new_width.max(new_height), 1280);
        prop_assert!(new_width >= 1 && new_height >= 1);
    }

    #[test]
    fn fit_within_keeps_aspect_ratio(width in 1281u32..=8000u32, height in 100u32..=8000u32) {
        let (new_width, new_height) = fit_within(width, height, 1280).unwrap();

        // each side is rounded once, so the error is bounded by half a pixel
        // on the short side relative to the long one
        let original = width as f64 / height as f64;
        let resized = new_width as f64 / new_height as f64;
        let tolerance = original * (0.5 / new_height.min(new_width) as f64) * 2.0;
        prop_assert!((original - resized).abs() <= tolerance + 1e-9);
    }

    #[test]
    fn resize_to_fit_matches_fit_within(width in 1u32..=200u32, height in 1u32..=200u32) {
        let img = DynamicImage::new_rgb8(width, height);
        let expected = fit_within(width, height, 64).unwrap_or((width, height));

        prop_assert_eq!(resize_to_fit(img, 64).dimensions(), expected);
    }

    #[test]
    fn alpha_input_becomes_three_channels(
        width in 1u32..=64u32,
        height in 1u32..=64u32,
        alpha in 0u8..=255u8
    ) {
        let pixel = Rgba([9, 8, 7, alpha]);
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, pixel));
        let normalized = normalize_color(img);

        prop_assert_eq!(normalized.color().channel_count(), 3);
        prop_assert_eq!(normalized.dimensions(), (width, height));
    }

    #[test]
    fn compressible_filter_is_case_insensitive(
        stem in "[a-zA-Z0-9_ -]{1,12}",
        ext in prop::sample::select(vec!["jpg", "JPG", "Jpg", "jpeg", "JPEG", "jPeG"])
    ) {
        let name = format!("{}.{}", stem, ext);
        prop_assert!(ExtensionFilter::compressible().matches(Path::new(&name)));
    }

    #[test]
    fn compressible_filter_rejects_other_extensions(
        stem in "[a-zA-Z0-9_]{1,12}",
        ext in prop::sample::select(vec!["png", "txt", "webp", "jp", "jpgx", "pdf"])
    ) {
        let name = format!("{}.{}", stem, ext);
        prop_assert!(!ExtensionFilter::compressible().matches(Path::new(&name)));
    }
}
