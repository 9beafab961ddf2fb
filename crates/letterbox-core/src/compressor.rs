use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::RgbaImage;
use letterbox_common::{Error, ImageSource, Result};

use crate::letterbox::{self, TARGET_SIZE};
use crate::loader::ImageLoader;
use crate::pixel::{pixel_at, PixelRgba};

/// JPEG quality factor on a [0, 1] scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quality(f32);

impl Quality {
    /// Clamped to (0, 1]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.01, 1.0))
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// Quality on the 0-100 scale the JPEG encoder expects
    pub fn jpeg_scale(&self) -> f32 {
        self.0 * 100.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(0.8)
    }
}

/// Everything derived from one rendered canvas
#[derive(Debug)]
pub struct CompressionResult {
    /// Raw RGBA8 canvas readback, row-major, top-left origin
    pub pixels: Vec<u8>,

    /// Lossy compressed stream
    pub jpeg: Vec<u8>,

    /// `data:image/jpeg;base64,` embedding of the same stream
    pub data_uri: String,

    /// Canvas edge length in pixels
    pub target_size: u32,
}

impl CompressionResult {
    /// RGBA value at canvas coordinate (x, y)
    pub fn pixel_at(&self, x: u32, y: u32) -> Result<PixelRgba> {
        pixel_at(&self.pixels, x, y, self.target_size)
    }

    pub fn compressed_size(&self) -> usize {
        self.jpeg.len()
    }
}

/// Letterboxing compressor.
///
/// Scales a source image into a fixed square over an opaque white
/// background and derives the pixel buffer, the JPEG stream and its data
/// URI from that one canvas. Each call renders on its own canvas; nothing
/// is shared or cached between requests.
#[derive(Debug, Clone, Copy)]
pub struct Compressor {
    target_size: u32,
    quality: Quality,
}

impl Compressor {
    pub fn new() -> Self {
        Self {
            target_size: TARGET_SIZE,
            quality: Quality::default(),
        }
    }

    pub fn with_target_size(mut self, target_size: u32) -> Self {
        self.target_size = target_size;
        self
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// Validate, decode, letterbox and encode `source`.
    ///
    /// Fails atomically: a decode or encode error returns no partial
    /// result.
    pub async fn compress(&self, source: &ImageSource) -> Result<CompressionResult> {
        if !source.is_image() {
            return Err(Error::InvalidMediaType(source.media_type().to_string()));
        }

        tracing::info!(
            "Compressing {} byte {} source to {}x{} (quality {:.2})",
            source.len(),
            source.media_type(),
            self.target_size,
            self.target_size,
            self.quality.value()
        );

        let bytes = source.bytes().to_vec();
        let (target, quality) = (self.target_size, self.quality);

        tokio::task::spawn_blocking(move || Self::compress_blocking(&bytes, target, quality))
            .await
            .map_err(|e| Error::Task(e.to_string()))?
    }

    fn compress_blocking(bytes: &[u8], target: u32, quality: Quality) -> Result<CompressionResult> {
        let img = ImageLoader::decode_blocking(bytes)?;
        let canvas = letterbox::render(&img, target)?;

        let jpeg = encode_jpeg(&canvas, quality)?;
        let data_uri = format!("data:image/jpeg;base64,{}", STANDARD.encode(&jpeg));

        tracing::debug!(
            "Rendered {} pixel bytes, {} JPEG bytes",
            canvas.as_raw().len(),
            jpeg.len()
        );

        Ok(CompressionResult {
            pixels: canvas.into_raw(),
            jpeg,
            data_uri,
            target_size: target,
        })
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

/// mozjpeg encode of the rendered canvas.
///
/// Alpha is dropped; the canvas background is opaque so nothing is lost.
fn encode_jpeg(canvas: &RgbaImage, quality: Quality) -> Result<Vec<u8>> {
    use mozjpeg::{ColorSpace, Compress, ScanMode};

    let width = canvas.width() as usize;
    let height = canvas.height() as usize;

    let mut rgb = Vec::with_capacity(width * height * 3);
    for pixel in canvas.pixels() {
        rgb.extend_from_slice(&pixel.0[..3]);
    }

    let mut comp = Compress::new(ColorSpace::JCS_RGB);
    comp.set_size(width, height);
    comp.set_quality(quality.jpeg_scale());
    comp.set_scan_optimization_mode(ScanMode::AllComponentsTogether);
    comp.set_optimize_coding(true);

    let mut comp = comp
        .start_compress(Vec::new())
        .map_err(|e| Error::Encode(format!("JPEG compression failed: {}", e)))?;

    comp.write_scanlines(&rgb)
        .map_err(|e| Error::Encode(format!("JPEG write failed: {}", e)))?;

    comp.finish()
        .map_err(|e| Error::Encode(format!("JPEG finish failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_quality_default_and_clamp() {
        assert_eq!(Quality::default().value(), 0.8);
        assert_eq!(Quality::new(1.5).value(), 1.0);
        assert_eq!(Quality::new(-0.3).value(), 0.01);
        assert_eq!(Quality::new(0.8).jpeg_scale(), 80.0);
    }

    #[test]
    fn test_encode_jpeg_produces_soi_marker() {
        let canvas = RgbaImage::from_pixel(32, 32, Rgba([255, 255, 255, 255]));
        let jpeg = encode_jpeg(&canvas, Quality::default()).unwrap();

        assert_eq!(&jpeg[..2], &[0xff, 0xd8]);
    }

    #[tokio::test]
    async fn test_wrong_media_type_rejected_before_decode() {
        // Not even decodable bytes, but validation must fire first
        let source = ImageSource::new(b"hello".to_vec(), "text/plain");

        let err = Compressor::new().compress(&source).await.unwrap_err();
        assert!(matches!(err, Error::InvalidMediaType(t) if t == "text/plain"));
    }
}
