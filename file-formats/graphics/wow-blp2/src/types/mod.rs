/// BLP2 file header structures
pub mod header;
/// Mip directory entries
pub mod mip;

pub use header::*;
pub use mip::*;
