pub mod error;
pub mod media;

pub use error::{Error, Result};
pub use media::{ImageSource, MediaFormat};
