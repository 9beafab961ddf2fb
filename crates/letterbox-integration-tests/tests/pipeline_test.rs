use image::{DynamicImage, GenericImageView};
use letterbox_cli::source::read_source;
use letterbox_core::{Compressor, ImageLoader};
use tempfile::TempDir;

#[tokio::test]
async fn test_file_to_jpeg_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.png");

    let img = DynamicImage::new_rgb8(1200, 400);
    img.save(&input_path).unwrap();

    let source = read_source(&input_path).unwrap();
    assert_eq!(source.media_type(), "image/png");

    let result = Compressor::new().compress(&source).await.unwrap();

    let output_path = temp_dir.path().join("compressed_input.jpg");
    std::fs::write(&output_path, &result.jpeg).unwrap();

    let reloaded = image::open(&output_path).unwrap();
    assert_eq!(reloaded.dimensions(), (500, 500));
}

#[tokio::test]
async fn test_dimensions_probe_matches_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("probe.png");

    let img = DynamicImage::new_rgb8(321, 123);
    img.save(&input_path).unwrap();

    let source = read_source(&input_path).unwrap();
    let dims = ImageLoader::dimensions(&source).await.unwrap();

    assert_eq!((dims.width, dims.height), (321, 123));
}

#[tokio::test]
async fn test_unknown_extension_rejected_before_decode() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.dat");

    // Perfectly decodable PNG bytes, but the declared type is not image/*
    let img = DynamicImage::new_rgb8(10, 10);
    img.save_with_format(&input_path, image::ImageFormat::Png)
        .unwrap();

    let source = read_source(&input_path).unwrap();
    assert!(!source.is_image());

    let err = Compressor::new().compress(&source).await.unwrap_err();
    assert!(matches!(
        err,
        letterbox_common::Error::InvalidMediaType(_)
    ));
}
