use super::color::ColorBlock;
use super::{BlockDecoder, DxtnFormat, block_array};
use crate::parser::ParseResult;
use crate::pixel::Texel;

/// DXT1 decoder: 8-byte blocks, opaque 4-color or 3-color plus transparency
#[derive(Debug, Clone, Copy, Default)]
pub struct Bc1Decoder;

impl BlockDecoder for Bc1Decoder {
    fn format(&self) -> DxtnFormat {
        DxtnFormat::Dxt1
    }

    fn decode(&self, block: &[u8]) -> ParseResult<[Texel; 16]> {
        let color = ColorBlock::read(block_array(block)?);
        let palette = if color.is_four_color() {
            color.four_color_palette()
        } else {
            color.three_color_palette()
        };

        let mut texels = [Texel::TRANSPARENT; 16];
        for (texel, index) in texels.iter_mut().zip(color.indices()) {
            *texel = palette[index];
        }
        Ok(texels)
    }
}
