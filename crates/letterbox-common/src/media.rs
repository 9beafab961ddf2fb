use std::path::Path;

/// Prefix all image media types share, per the MIME registry.
const IMAGE_MIME_PREFIX: &str = "image/";

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFormat {
    Png,
    Jpeg,
    Webp,
    Tiff,
    Bmp,
    Gif,
}

impl MediaFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Parse from extension string
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::Webp),
            "tif" | "tiff" => Some(Self::Tiff),
            "bmp" => Some(Self::Bmp),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Get primary file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
            Self::Tiff => "tiff",
            Self::Bmp => "bmp",
            Self::Gif => "gif",
        }
    }

    /// Get MIME type for the declared media type of an [`ImageSource`]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
            Self::Tiff => "image/tiff",
            Self::Bmp => "image/bmp",
            Self::Gif => "image/gif",
        }
    }
}

impl std::fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension().to_uppercase())
    }
}

/// A raw image payload together with its declared media type.
///
/// The declared type is caller-provided metadata, not sniffed from the
/// bytes; decode can still fail on a source that passes [`is_image`].
///
/// [`is_image`]: ImageSource::is_image
#[derive(Debug, Clone)]
pub struct ImageSource {
    bytes: Vec<u8>,
    media_type: String,
}

impl ImageSource {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Payload size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Weak validation: declared media type only, no content sniffing
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with(IMAGE_MIME_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(MediaFormat::from_extension("png"), Some(MediaFormat::Png));
        assert_eq!(MediaFormat::from_extension("JPG"), Some(MediaFormat::Jpeg));
        assert_eq!(MediaFormat::from_extension("unknown"), None);
    }

    #[test]
    fn test_declared_type_validation() {
        let png = ImageSource::new(vec![1, 2, 3], "image/png");
        assert!(png.is_image());
        assert_eq!(png.len(), 3);

        let text = ImageSource::new(vec![1, 2, 3], "text/plain");
        assert!(!text.is_image());
    }

    #[test]
    fn test_mime_from_path() {
        let format = MediaFormat::from_path(Path::new("photos/cat.JPG")).unwrap();
        assert_eq!(format.mime_type(), "image/jpeg");
    }
}
