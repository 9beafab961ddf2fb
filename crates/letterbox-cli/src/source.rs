use anyhow::{Context, Result};
use letterbox_common::{ImageSource, MediaFormat};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

const TEN_MB_IN_BYTES: u64 = 10 * 1024 * 1024;

/// Read a file into an [`ImageSource`].
///
/// The declared media type is derived from the file extension; unknown
/// extensions get `application/octet-stream` and fail validation
/// downstream instead of here.
pub fn read_source(path: &Path) -> Result<ImageSource> {
    let media_type = MediaFormat::from_path(path)
        .map(|format| format.mime_type().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let metadata = file.metadata()?;

    let bytes = if metadata.len() > TEN_MB_IN_BYTES {
        // Memory-mapped read for large files
        tracing::debug!("Using memory-mapped I/O for large file");
        let mmap = unsafe { Mmap::map(&file)? };
        mmap.to_vec()
    } else {
        std::fs::read(path)?
    };

    tracing::debug!("Read {} bytes ({}) from {:?}", bytes.len(), media_type, path);

    Ok(ImageSource::new(bytes, media_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_media_type_from_extension() {
        let mut temp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        temp.write_all(&[1, 2, 3]).unwrap();

        let source = read_source(temp.path()).unwrap();
        assert_eq!(source.media_type(), "image/png");
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn test_unknown_extension_is_not_an_image() {
        let mut temp = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        temp.write_all(b"hello").unwrap();

        let source = read_source(temp.path()).unwrap();
        assert!(!source.is_image());
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(read_source(Path::new("/nonexistent/image.png")).is_err());
    }
}
