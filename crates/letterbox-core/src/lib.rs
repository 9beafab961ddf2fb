pub mod compressor;
pub mod letterbox;
pub mod loader;
pub mod pixel;

pub use compressor::{CompressionResult, Compressor, Quality};
pub use letterbox::{Dimensions, Placement, BACKGROUND, TARGET_SIZE};
pub use loader::ImageLoader;
pub use pixel::{pixel_at, PixelRgba};
