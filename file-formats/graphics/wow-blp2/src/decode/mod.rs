//! S3TC block decoders
//!
//! Each decoder maps one fixed-size compressed block to the sixteen texels of
//! its 4x4 tile in row-major order. The decoder is chosen once per texture
//! from the header's compression and alpha type.

mod bc1;
mod bc2;
mod bc3;
/// Color endpoints and palette shared by all block formats
pub mod color;

pub use bc1::Bc1Decoder;
pub use bc2::Bc2Decoder;
pub use bc3::{Bc3Decoder, alpha_ramp};

use crate::parser::{FormatError, ParseResult, Unsupported};
use crate::pixel::Texel;
use crate::types::{AlphaType, BlpHeader, Compression, TextureType};
use log::debug;

/// Which compression algorithm is used to compress the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxtnFormat {
    /// DXT1 compression (BC1)
    Dxt1,
    /// DXT3 compression (BC2)
    Dxt3,
    /// DXT5 compression (BC3)
    Dxt5,
}

impl DxtnFormat {
    /// Returns the block size in bytes for this DXT format
    pub fn block_size(&self) -> usize {
        match self {
            DxtnFormat::Dxt1 => 8,
            DxtnFormat::Dxt3 => 16,
            DxtnFormat::Dxt5 => 16,
        }
    }

    /// Select the block format from the header's texture type, compression
    /// and alpha type
    pub fn from_header(header: &BlpHeader) -> ParseResult<Self> {
        if header.texture_type() == Ok(TextureType::Jpeg) {
            return Err(FormatError::UnsupportedEncoding(Unsupported::JpegTexture));
        }
        match header.compression() {
            Ok(Compression::Dxtc) => {}
            _ => {
                return Err(FormatError::UnsupportedEncoding(
                    Unsupported::Compression(header.compression),
                ));
            }
        }
        let format = match header.alpha_type() {
            Ok(AlphaType::Dxt1) => DxtnFormat::Dxt1,
            Ok(AlphaType::Dxt3) => DxtnFormat::Dxt3,
            Ok(AlphaType::Dxt5) => DxtnFormat::Dxt5,
            Err(tag) => {
                return Err(FormatError::UnsupportedEncoding(Unsupported::AlphaType(
                    tag,
                )));
            }
        };
        debug!("Selected {format:?} for alpha type {}", header.alpha_type);
        Ok(format)
    }

    /// Decoder for this format
    pub fn decoder(&self) -> &'static dyn BlockDecoder {
        match self {
            DxtnFormat::Dxt1 => &Bc1Decoder,
            DxtnFormat::Dxt3 => &Bc2Decoder,
            DxtnFormat::Dxt5 => &Bc3Decoder,
        }
    }

    /// Bytes of compressed data needed for a `width` x `height` image made of
    /// whole blocks
    pub fn compressed_size(&self, width: u32, height: u32) -> usize {
        (width as usize / 4) * (height as usize / 4) * self.block_size()
    }
}

/// Decodes one compressed 4x4 block into sixteen texels
pub trait BlockDecoder: Sync {
    /// Format handled by this decoder
    fn format(&self) -> DxtnFormat;

    /// Size of one compressed block in bytes
    fn block_size(&self) -> usize {
        self.format().block_size()
    }

    /// Decode a block. `block` must hold at least [`Self::block_size`] bytes;
    /// texels are returned in row-major order.
    fn decode(&self, block: &[u8]) -> ParseResult<[Texel; 16]>;
}

/// View the first `N` bytes of a block as an array
fn block_array<const N: usize>(block: &[u8]) -> ParseResult<&[u8; N]> {
    block
        .get(..N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(FormatError::UnexpectedEof)
}
