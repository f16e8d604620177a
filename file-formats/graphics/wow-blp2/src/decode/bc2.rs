use super::color::ColorBlock;
use super::{BlockDecoder, DxtnFormat, block_array};
use crate::bits::BitReader;
use crate::parser::ParseResult;
use crate::pixel::Texel;

/// DXT3 decoder: 64 bits of explicit 4-bit alpha followed by a color block
#[derive(Debug, Clone, Copy, Default)]
pub struct Bc2Decoder;

impl BlockDecoder for Bc2Decoder {
    fn format(&self) -> DxtnFormat {
        DxtnFormat::Dxt3
    }

    fn decode(&self, block: &[u8]) -> ParseResult<[Texel; 16]> {
        let block: &[u8; 16] = block_array(block)?;
        let mut alpha_word = [0u8; 8];
        alpha_word.copy_from_slice(&block[..8]);
        let mut alphas = BitReader::new(u64::from_le_bytes(alpha_word));
        let mut color_bytes = [0u8; 8];
        color_bytes.copy_from_slice(&block[8..]);
        let color = ColorBlock::read(&color_bytes);

        // BC2 has no 3-color mode
        let palette = color.four_color_palette();

        let mut texels = [Texel::TRANSPARENT; 16];
        for (texel, index) in texels.iter_mut().zip(color.indices()) {
            let alpha = alphas.read(4) as u8;
            *texel = palette[index].with_alpha(alpha | (alpha << 4));
        }
        Ok(texels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(alpha: u64, color0: u16, color1: u16, lookup: u32) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(16);
        bytes.extend_from_slice(&alpha.to_le_bytes());
        bytes.extend_from_slice(&color0.to_le_bytes());
        bytes.extend_from_slice(&color1.to_le_bytes());
        bytes.extend_from_slice(&lookup.to_le_bytes());
        bytes
    }

    #[test]
    fn test_alpha_nibbles_are_replicated() {
        let texels = Bc2Decoder
            .decode(&block(0xfedc_ba98_7654_3210, 0xf800, 0x001f, 0))
            .unwrap();
        for (i, texel) in texels.iter().enumerate() {
            assert_eq!(texel.a, (i as u8) * 0x11);
            assert_eq!((texel.r, texel.g, texel.b), (31, 0, 0));
        }
    }

    #[test]
    fn test_always_four_colors() {
        // color0 < color1 would be 3-color mode in BC1
        let texels = Bc2Decoder
            .decode(&block(u64::MAX, 0x001f, 0xf800, 0xffff_ffff))
            .unwrap();
        let expected = Texel {
            r: 20,
            g: 0,
            b: 10,
            a: 0xff,
        };
        assert!(texels.iter().all(|t| *t == expected));
    }

    #[test]
    fn test_short_block_is_eof() {
        assert!(Bc2Decoder.decode(&[0; 8]).is_err());
    }
}
