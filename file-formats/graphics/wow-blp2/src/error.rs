use crate::parser::FormatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while converting a BLP2 texture to bitmaps
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not a decodable BLP2 texture
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Reading the input or writing an output file failed
    #[error("File system error with file {path}, due: {source}")]
    Io {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// No output name can be derived from the input path
    #[error("Cannot derive output name for {0}")]
    InvalidFilename(PathBuf),
    /// Memory for a canvas could not be obtained
    #[error("Cannot allocate a {width}x{height} canvas")]
    Allocation {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// The level is too large to be described by BMP size fields
    #[error("A {width}x{height} bitmap exceeds the BMP size limits")]
    BitmapTooLarge {
        /// Level width
        width: u32,
        /// Level height
        height: u32,
    },
    /// A pixel store fell outside the canvas
    #[error("Pixel ({x}, {y}) is outside a {width}x{height} canvas")]
    PixelOutOfBounds {
        /// Column of the rejected store
        x: u32,
        /// Row of the rejected store
        y: u32,
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
    },
}

impl Error {
    /// Build an I/O error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error concerns the format of the input rather than the
    /// environment (I/O, memory)
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Error::Format(_) | Error::BitmapTooLarge { .. } | Error::PixelOutOfBounds { .. }
        )
    }

    /// Whether the level was skipped because it is unsupported or cannot be
    /// represented, rather than because the input is damaged or the
    /// environment failed
    pub fn is_skip(&self) -> bool {
        match self {
            Error::Format(error) => matches!(
                error.root(),
                FormatError::UnsupportedEncoding(_) | FormatError::IrregularDimensions { .. }
            ),
            Error::BitmapTooLarge { .. } => true,
            _ => false,
        }
    }
}

/// Failure to convert a single mip level
#[derive(Debug, Error)]
#[error("mipmap level {level}: {error}")]
pub struct LevelError {
    /// Mip level that failed
    pub level: usize,
    /// What went wrong
    #[source]
    pub error: Error,
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_error_names_level() {
        let err = LevelError {
            level: 3,
            error: Error::Format(FormatError::IrregularDimensions {
                level: 3,
                width: 2,
                height: 2,
            }),
        };
        assert_eq!(
            err.to_string(),
            "mipmap level 3: Mipmap 3 has dimensions 2x2, which do not tile into 4x4 blocks"
        );
        assert!(err.error.is_format());
        assert!(err.error.is_skip());
    }

    #[test]
    fn test_truncated_level_is_not_a_skip() {
        let err = Error::Format(FormatError::Truncated {
            level: 1,
            offset: 4096,
            length: 32,
            available: 0,
        });
        assert!(err.is_format());
        assert!(!err.is_skip());

        let err = Error::BitmapTooLarge {
            width: 65536,
            height: 65536,
        };
        assert!(err.is_format());
        assert!(err.is_skip());
    }

    #[test]
    fn test_io_is_not_format() {
        let err = Error::io(
            "out.bmp",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_format());
        assert!(!err.is_skip());
        assert!(err.to_string().contains("out.bmp"));
    }
}
