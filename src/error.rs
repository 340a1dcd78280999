use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while producing the icon files
#[derive(Debug)]
pub enum IconError {
    /// ICO frame size outside 1..=256
    InvalidIconSize(u32),
    /// PNG encoding failed
    EncodePng(image::ImageError),
    /// ICO frame or container encoding failed
    EncodeIco { size: u32, source: io::Error },
    /// Failed to write an output file
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::InvalidIconSize(size) => {
                write!(f, "invalid icon size {} (must be 1-256)", size)
            }
            IconError::EncodePng(e) => write!(f, "failed to encode PNG: {}", e),
            IconError::EncodeIco { size, source } => {
                write!(f, "failed to encode {}x{} icon frame: {}", size, size, source)
            }
            IconError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::EncodePng(e) => Some(e),
            IconError::EncodeIco { source, .. } => Some(source),
            IconError::Write { source, .. } => Some(source),
            IconError::InvalidIconSize(_) => None,
        }
    }
}

impl From<image::ImageError> for IconError {
    fn from(e: image::ImageError) -> Self {
        IconError::EncodePng(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn write_error_names_path() {
        let err = IconError::Write {
            path: PathBuf::from("out/app.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/app.png"));
        assert!(msg.contains("no such directory"));
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_size_has_no_source() {
        let err = IconError::InvalidIconSize(512);
        assert_eq!(err.to_string(), "invalid icon size 512 (must be 1-256)");
        assert!(err.source().is_none());
    }
}
