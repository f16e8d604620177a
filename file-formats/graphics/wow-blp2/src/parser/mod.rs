/// Bounds-checked views into mip payloads
pub mod bounds;
/// Error types for BLP parsing operations
pub mod error;
mod header;
/// Native byte reading utilities
mod reader;
/// Type definitions used by the BLP parser
pub mod types;

pub use bounds::payload_slice;
pub use error::{FormatError, Unsupported};
pub use header::parse_header;
pub use types::ParseResult;
