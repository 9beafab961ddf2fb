/// Unified error type for all letterbox operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unsupported media type: {0}")]
    InvalidMediaType(String),

    #[error("Image decode failed: {0}")]
    Decode(String),

    #[error("Image encode failed: {0}")]
    Encode(String),

    #[error("Pixel coordinate ({x}, {y}) is outside the buffer")]
    OutOfRange { x: u32, y: u32 },

    #[error("Background task failed: {0}")]
    Task(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
