//! Decoded texels and the packed pixel layout written to the canvas
//!
//! Block decoders resolve colors as raw 5:6:5 magnitudes plus an 8-bit alpha.
//! A [`PixelLayout`] describes where each channel lands in the 32-bit output
//! pixel; the same masks are written into the BMP header, so changing the
//! layout constant is enough to switch output formats.

/// Bit width of the red channel in a 5:6:5 color
pub const RED_BITS: u32 = 5;
/// Bit width of the green channel in a 5:6:5 color
pub const GREEN_BITS: u32 = 6;
/// Bit width of the blue channel in a 5:6:5 color
pub const BLUE_BITS: u32 = 5;
/// Bit width of the alpha channel
pub const ALPHA_BITS: u32 = 8;

/// A fully resolved pixel: 5-bit red, 6-bit green, 5-bit blue, 8-bit alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Texel {
    /// Red magnitude, 0..=31
    pub r: u8,
    /// Green magnitude, 0..=63
    pub g: u8,
    /// Blue magnitude, 0..=31
    pub b: u8,
    /// Alpha, 0..=255
    pub a: u8,
}

impl Texel {
    /// Fully transparent black
    pub const TRANSPARENT: Texel = Texel {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Unpack a 16-bit 5:6:5 color with the given alpha
    pub fn from_rgb565(color: u16, a: u8) -> Self {
        Self {
            r: ((color >> 11) & 0x1f) as u8,
            g: ((color >> 5) & 0x3f) as u8,
            b: (color & 0x1f) as u8,
            a,
        }
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Channel masks of a packed 32-bit output pixel. Masks must be contiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelLayout {
    /// Bits holding red
    pub red_mask: u32,
    /// Bits holding green
    pub green_mask: u32,
    /// Bits holding blue
    pub blue_mask: u32,
    /// Bits holding alpha
    pub alpha_mask: u32,
}

impl PixelLayout {
    /// Raw 5:6:5 color in the low 16 bits, alpha in bits 16..24
    pub const RGB565_A8: PixelLayout = PixelLayout {
        red_mask: 0x0000_f800,
        green_mask: 0x0000_07e0,
        blue_mask: 0x0000_001f,
        alpha_mask: 0x00ff_0000,
    };

    /// 8 bits per channel, channels widened by bit replication
    pub const ARGB8888: PixelLayout = PixelLayout {
        red_mask: 0x00ff_0000,
        green_mask: 0x0000_ff00,
        blue_mask: 0x0000_00ff,
        alpha_mask: 0xff00_0000,
    };

    /// Pack a texel into a 32-bit pixel
    pub fn pack(&self, texel: Texel) -> u32 {
        place(texel.r, RED_BITS, self.red_mask)
            | place(texel.g, GREEN_BITS, self.green_mask)
            | place(texel.b, BLUE_BITS, self.blue_mask)
            | place(texel.a, ALPHA_BITS, self.alpha_mask)
    }
}

impl Default for PixelLayout {
    fn default() -> Self {
        Self::RGB565_A8
    }
}

fn place(value: u8, source_bits: u32, mask: u32) -> u32 {
    if mask == 0 {
        return 0;
    }
    let shift = mask.trailing_zeros();
    let width = (mask >> shift).count_ones();
    (rescale(u32::from(value), source_bits, width) << shift) & mask
}

fn rescale(value: u32, from: u32, to: u32) -> u32 {
    if to <= from {
        return value >> (from - to);
    }
    let mut out = 0u32;
    let mut filled = 0;
    while filled < to {
        out = (out << from) | value;
        filled += from;
    }
    out >> (filled - to)
}
