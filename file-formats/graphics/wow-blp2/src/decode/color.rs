use crate::bits::BitReader;
use crate::pixel::Texel;

/// The color half shared by all three block formats: two 5:6:5 endpoints and
/// sixteen 2-bit palette indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBlock {
    /// First endpoint
    pub color0: u16,
    /// Second endpoint
    pub color1: u16,
    /// Palette indices, 2 bits per pixel, row-major, LSB first
    pub lookup: u32,
}

impl ColorBlock {
    /// Read the 8-byte little-endian color record
    pub fn read(bytes: &[u8; 8]) -> Self {
        Self {
            color0: u16::from_le_bytes([bytes[0], bytes[1]]),
            color1: u16::from_le_bytes([bytes[2], bytes[3]]),
            lookup: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    /// True when the endpoints select the opaque 4-color palette in BC1
    pub fn is_four_color(&self) -> bool {
        self.color0 > self.color1
    }

    /// Two endpoints plus the 2/3 and 1/3 blends, all opaque
    pub fn four_color_palette(&self) -> [Texel; 4] {
        let c0 = Texel::from_rgb565(self.color0, 0xff);
        let c1 = Texel::from_rgb565(self.color1, 0xff);
        [c0, c1, blend(c0, c1, 2, 1, 3), blend(c0, c1, 1, 2, 3)]
    }

    /// Two endpoints, their average, and a transparent black slot
    pub fn three_color_palette(&self) -> [Texel; 4] {
        let c0 = Texel::from_rgb565(self.color0, 0xff);
        let c1 = Texel::from_rgb565(self.color1, 0xff);
        [c0, c1, blend(c0, c1, 1, 1, 2), Texel::TRANSPARENT]
    }

    /// The sixteen palette indices in row-major order
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let mut reader = BitReader::from_u32(self.lookup);
        (0..16).map(move |_| reader.read(2) as usize)
    }
}

/// Per-channel weighted blend, rounded down
fn blend(c0: Texel, c1: Texel, w0: u32, w1: u32, divisor: u32) -> Texel {
    let mix = |a: u8, b: u8| ((u32::from(a) * w0 + u32::from(b) * w1) / divisor) as u8;
    Texel {
        r: mix(c0.r, c1.r),
        g: mix(c0.g, c1.g),
        b: mix(c0.b, c1.b),
        a: 0xff,
    }
}
