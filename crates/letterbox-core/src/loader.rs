use std::io::Cursor;

use image::{DynamicImage, ImageReader};
use letterbox_common::{Error, ImageSource, Result};

use crate::letterbox::Dimensions;

/// Decoder for in-memory image payloads.
///
/// Format detection is content-based (magic bytes), independent of the
/// source's declared media type.
pub struct ImageLoader;

impl ImageLoader {
    /// Probe natural dimensions without a full decode
    pub async fn dimensions(source: &ImageSource) -> Result<Dimensions> {
        let bytes = source.bytes().to_vec();
        tokio::task::spawn_blocking(move || Self::probe_blocking(&bytes))
            .await
            .map_err(|e| Error::Task(e.to_string()))?
    }

    /// Decode the full image
    pub async fn decode(source: &ImageSource) -> Result<DynamicImage> {
        let bytes = source.bytes().to_vec();
        tokio::task::spawn_blocking(move || Self::decode_blocking(&bytes))
            .await
            .map_err(|e| Error::Task(e.to_string()))?
    }

    pub(crate) fn decode_blocking(bytes: &[u8]) -> Result<DynamicImage> {
        let img = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| Error::Decode(e.to_string()))?
            .decode()
            .map_err(|e| Error::Decode(e.to_string()))?;

        // Zero-dimension sources surface as a decode failure, never as a
        // NaN aspect ratio downstream
        Dimensions::new(img.width(), img.height())?;

        tracing::debug!("Decoded {}x{} image", img.width(), img.height());
        Ok(img)
    }

    pub(crate) fn probe_blocking(bytes: &[u8]) -> Result<Dimensions> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| Error::Decode(e.to_string()))?
            .into_dimensions()
            .map_err(|e| Error::Decode(e.to_string()))?;

        Dimensions::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(width, height);
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[tokio::test]
    async fn test_probe_dimensions() {
        let source = ImageSource::new(png_bytes(64, 48), "image/png");
        let dims = ImageLoader::dimensions(&source).await.unwrap();
        assert_eq!(dims, Dimensions::new(64, 48).unwrap());
    }

    #[tokio::test]
    async fn test_garbage_bytes_fail_decode() {
        let source = ImageSource::new(vec![0xde, 0xad, 0xbe, 0xef], "image/png");
        let err = ImageLoader::decode(&source).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_decode_matches_probe() {
        let source = ImageSource::new(png_bytes(10, 20), "image/png");
        let img = ImageLoader::decode(&source).await.unwrap();
        assert_eq!((img.width(), img.height()), (10, 20));
    }
}
