/// Bitmap (BMP) serialisation of a decoded canvas
pub mod bmp;

pub use bmp::{BmpFileHeader, BmpImage, DibV4Header};
