use thiserror::Error;

/// Reason a texture or one of its mip levels has no decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// Texture type 0, JPEG compressed content
    JpegTexture,
    /// Compression tag other than DXTC
    Compression(u8),
    /// DXTC with an alpha type that is not DXT1, DXT3 or DXT5
    AlphaType(u8),
}

impl std::fmt::Display for Unsupported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unsupported::JpegTexture => write!(f, "JPEG textures are not decoded"),
            Unsupported::Compression(tag) => write!(f, "compression tag {tag} has no decoder"),
            Unsupported::AlphaType(tag) => write!(f, "alpha type {tag} has no DXTC decoder"),
        }
    }
}

/// Errors that the BLP2 parser and block decoders can produce
#[derive(Debug, Error)]
pub enum FormatError {
    /// Invalid magic bytes in BLP header
    #[error("Unexpected magic value {0}. The file format is not BLP2.")]
    BadMagic(String),
    /// Unexpected end of input while reading a fixed-size record
    #[error("Unexpected end of file")]
    UnexpectedEof,
    /// Mip payload extends beyond the input buffer
    #[error(
        "Mipmap {level} at offset {offset} with length {length} exceeds input of {available} bytes"
    )]
    Truncated {
        /// Mip level whose payload is out of range
        level: usize,
        /// Declared payload offset
        offset: usize,
        /// Declared (or required) payload length
        length: usize,
        /// Bytes actually available
        available: usize,
    },
    /// No decoder exists for the texture encoding
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(Unsupported),
    /// Mip dimensions are zero or not a multiple of the 4x4 block size
    #[error("Mipmap {level} has dimensions {width}x{height}, which do not tile into 4x4 blocks")]
    IrregularDimensions {
        /// Mip level with the irregular size
        level: usize,
        /// Computed level width
        width: u32,
        /// Computed level height
        height: u32,
    },
    /// Parser error with context information
    #[error("Context: {0}. Error: {1}")]
    Context(String, Box<Self>),
}

impl FormatError {
    /// Add context information to an error
    pub fn with_context(self, context: &str) -> Self {
        FormatError::Context(context.to_owned(), Box::new(self))
    }

    /// The innermost error, with all context wrappers removed
    pub fn root(&self) -> &Self {
        match self {
            FormatError::Context(_, inner) => inner.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_strips_nested_context() {
        let err = FormatError::UnexpectedEof
            .with_context("width field")
            .with_context("header");
        assert!(matches!(err.root(), FormatError::UnexpectedEof));
        assert_eq!(
            err.to_string(),
            "Context: header. Error: Context: width field. Error: Unexpected end of file"
        );
    }

    #[test]
    fn test_unsupported_display() {
        let err = FormatError::UnsupportedEncoding(Unsupported::AlphaType(8));
        assert_eq!(
            err.to_string(),
            "Unsupported encoding: alpha type 8 has no DXTC decoder"
        );
    }
}
