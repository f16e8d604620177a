pub use super::error::FormatError;

/// Result type for BLP parsing operations
pub type ParseResult<T> = Result<T, FormatError>;
