use super::color::ColorBlock;
use super::{BlockDecoder, DxtnFormat, block_array};
use crate::bits::BitReader;
use crate::parser::ParseResult;
use crate::pixel::Texel;

/// DXT5 decoder: two alpha endpoints, 3-bit alpha indices, then a color block
#[derive(Debug, Clone, Copy, Default)]
pub struct Bc3Decoder;

/// Eight-entry alpha ramp selected by endpoint ordering
pub fn alpha_ramp(a0: u8, a1: u8) -> [u8; 8] {
    let (a0w, a1w) = (u32::from(a0), u32::from(a1));
    let mut ramp = [a0, a1, 0, 0, 0, 0, 0, 0];
    if a0 > a1 {
        for (k, value) in ramp.iter_mut().enumerate().skip(2) {
            let k = k as u32;
            *value = ((a0w * (8 - k) + a1w * (k - 1)) / 7) as u8;
        }
    } else {
        for (k, value) in ramp.iter_mut().enumerate().take(6).skip(2) {
            let k = k as u32;
            *value = ((a0w * (6 - k) + a1w * (k - 1)) / 5) as u8;
        }
        ramp[6] = 0;
        ramp[7] = 255;
    }
    ramp
}

impl BlockDecoder for Bc3Decoder {
    fn format(&self) -> DxtnFormat {
        DxtnFormat::Dxt5
    }

    fn decode(&self, block: &[u8]) -> ParseResult<[Texel; 16]> {
        let block: &[u8; 16] = block_array(block)?;
        let ramp = alpha_ramp(block[0], block[1]);
        let mut alpha_word = [0u8; 8];
        alpha_word.copy_from_slice(&block[..8]);
        let mut alpha_indices = BitReader::new(u64::from_le_bytes(alpha_word));
        alpha_indices.skip(16);
        let mut color_bytes = [0u8; 8];
        color_bytes.copy_from_slice(&block[8..]);
        let color = ColorBlock::read(&color_bytes);
        let palette = color.four_color_palette();

        let mut texels = [Texel::TRANSPARENT; 16];
        for (texel, index) in texels.iter_mut().zip(color.indices()) {
            let alpha = ramp[alpha_indices.read(3) as usize];
            *texel = palette[index].with_alpha(alpha);
        }
        Ok(texels)
    }
}
