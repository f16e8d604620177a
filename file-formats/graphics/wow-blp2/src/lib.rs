//! Converter from World of Warcraft BLP2 textures to 32-bit bitmaps.
//!
//! BLP2 stores a fixed 148-byte header followed by up to sixteen mip levels,
//! each compressed with one of the S3TC block formats (DXT1, DXT3 or DXT5).
//! This crate parses the header, decodes each selected level into a
//! [`Canvas`] and writes it out as a `BI_BITFIELDS` BMP with a V4 header.
//!
//! # Examples
//!
//! ```no_run
//! use wow_blp2::{ConvertOptions, MipSelection, convert_file};
//!
//! let options = ConvertOptions {
//!     mips: MipSelection::All,
//!     ..Default::default()
//! };
//! let report = convert_file("BloodElfWall.blp", options)?;
//! for level in &report.converted {
//!     println!("{}: {}x{}", level.path.display(), level.width, level.height);
//! }
//! # Ok::<(), wow_blp2::Error>(())
//! ```
//!
//! Decoding without touching the file system:
//!
//! ```no_run
//! use wow_blp2::{BmpImage, ConvertOptions, Converter};
//!
//! let data = std::fs::read("BloodElfWall.blp")?;
//! let converter = Converter::new(&data, ConvertOptions::default())?;
//! for (entry, canvas) in converter.levels() {
//!     let canvas = canvas?;
//!     let bytes = BmpImage::from_canvas(&canvas)?.to_bytes();
//!     println!("level {}: {} bytes", entry.level, bytes.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// LSB-first bit reading for packed block indices
pub mod bits;
/// Bottom-up pixel buffer
pub mod canvas;
/// Header to bitmap conversion of mip levels
pub mod convert;
/// Debug formatting helpers
pub mod debug;
/// S3TC block decoders
pub mod decode;
/// Bitmap encoding
pub mod encode;
/// Conversion errors
pub mod error;
/// BLP2 header parsing
pub mod parser;
/// Output file naming
pub mod path;
/// Texels and packed pixel layouts
pub mod pixel;
/// Input byte sources
pub mod source;
/// BLP2 data types
pub mod types;

pub use canvas::Canvas;
pub use convert::{
    ConversionReport, ConvertOptions, ConvertedLevel, Converter, MipSelection, convert_file,
    decode_level,
};
pub use decode::{BlockDecoder, DxtnFormat};
pub use encode::BmpImage;
pub use error::{Error, LevelError, Result};
pub use parser::{FormatError, Unsupported, parse_header};
pub use pixel::{PixelLayout, Texel};
pub use source::BlpSource;
pub use types::{BlpHeader, MipEntry};
