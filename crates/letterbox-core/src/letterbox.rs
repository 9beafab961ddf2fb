use image::{imageops, DynamicImage, Rgba, RgbaImage};
use letterbox_common::{Error, Result};

/// Canvas edge length used when no override is given
pub const TARGET_SIZE: u32 = 500;

/// Opaque white fill for the area the image does not cover
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Natural pixel size of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Rejects zero width or height: a degenerate image has no aspect ratio
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Decode(format!(
                "degenerate image dimensions {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}

/// Centered, aspect-preserving placement of an image inside a square canvas.
///
/// Offsets and extents stay fractional here; rounding happens once, at
/// render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Fit `dims` inside a `target`×`target` square.
    ///
    /// The limiting side becomes `target`; the other shrinks by the aspect
    /// ratio. A square source fills the whole canvas.
    pub fn fit(dims: Dimensions, target: u32) -> Self {
        let target = target as f64;
        let aspect = dims.aspect_ratio();

        let (width, height) = if aspect > 1.0 {
            (target, target / aspect)
        } else {
            (target * aspect, target)
        };

        Self {
            x: (target - width) / 2.0,
            y: (target - height) / 2.0,
            width,
            height,
        }
    }

    fn rounded(&self) -> (i64, i64, u32, u32) {
        let width = (self.width.round() as u32).max(1);
        let height = (self.height.round() as u32).max(1);
        (self.x.round() as i64, self.y.round() as i64, width, height)
    }
}

/// Render `img` centered on a white `target`×`target` canvas.
///
/// Pixels outside the placed region keep the background fill.
pub fn render(img: &DynamicImage, target: u32) -> Result<RgbaImage> {
    let dims = Dimensions::new(img.width(), img.height())?;
    let placement = Placement::fit(dims, target);
    let (x, y, width, height) = placement.rounded();

    tracing::debug!(
        "Placing {} image at ({}, {}) as {}x{}",
        dims,
        x,
        y,
        width,
        height
    );

    let mut canvas = RgbaImage::from_pixel(target, target, BACKGROUND);
    let scaled = img
        .resize_exact(width, height, imageops::FilterType::Lanczos3)
        .to_rgba8();
    imageops::overlay(&mut canvas, &scaled, x, y);

    Ok(canvas)
}
