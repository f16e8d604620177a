use super::mip::MipEntry;
use std::fmt;

/// Magic bytes every BLP2 file starts with
pub const BLP2_MAGIC: [u8; 4] = *b"BLP2";

/// Number of slots in the mip directory
pub const MAX_MIPMAPS: usize = 16;

/// Size of the fixed BLP2 header in bytes
pub const HEADER_SIZE: usize = 4 + 4 + 4 + 4 + 4 + MAX_MIPMAPS * 4 * 2;

/// Content stored in the texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextureType {
    /// JPEG compressed payloads
    Jpeg,
    /// S3TC (direct) payloads
    S3tc,
}

impl TryFrom<u32> for TextureType {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TextureType::Jpeg),
            1 => Ok(TextureType::S3tc),
            _ => Err(value),
        }
    }
}

/// Compression mode of direct payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Compression {
    /// Palettized raw pixels
    Raw,
    /// DXT block compression
    Dxtc,
}

impl TryFrom<u8> for Compression {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Compression::Raw),
            2 => Ok(Compression::Dxtc),
            _ => Err(value),
        }
    }
}

/// Alpha encoding, which for DXTC textures selects the block format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlphaType {
    /// BC1 blocks, optional 1-bit alpha
    Dxt1,
    /// BC2 blocks, explicit 4-bit alpha
    Dxt3,
    /// BC3 blocks, interpolated alpha
    Dxt5,
}

impl TryFrom<u8> for AlphaType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AlphaType::Dxt1),
            1 => Ok(AlphaType::Dxt3),
            7 => Ok(AlphaType::Dxt5),
            _ => Err(value),
        }
    }
}

/// Fixed-layout BLP2 header. Numeric fields are kept exactly as stored so
/// that unknown tags can still be reported; use the typed accessors to
/// interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlpHeader {
    /// Texture type tag: 0 = JPEG, 1 = S3TC
    pub texture_type: u32,
    /// Compression tag: 1 = raw, 2 = DXTC
    pub compression: u8,
    /// Alpha channel depth: 0, 1, 4 or 8
    pub alpha_bits: u8,
    /// Alpha type tag: 0 = DXT1, 1 = DXT3, 7 = DXT5
    pub alpha_type: u8,
    /// Non-zero when the file stores mip levels
    pub has_mips: u8,
    /// Width of level 0 in pixels
    pub width: u32,
    /// Height of level 0 in pixels
    pub height: u32,
    /// File offset of each mip payload, 0 for unused slots
    pub mipmap_offsets: [u32; MAX_MIPMAPS],
    /// Byte length of each mip payload
    pub mipmap_lengths: [u32; MAX_MIPMAPS],
}

impl BlpHeader {
    /// Interpreted texture type, or the raw tag when unknown
    pub fn texture_type(&self) -> Result<TextureType, u32> {
        self.texture_type.try_into()
    }

    /// Interpreted compression, or the raw tag when unknown
    pub fn compression(&self) -> Result<Compression, u8> {
        self.compression.try_into()
    }

    /// Interpreted alpha type, or the raw tag when unknown
    pub fn alpha_type(&self) -> Result<AlphaType, u8> {
        self.alpha_type.try_into()
    }

    /// Whether the header flags additional mip levels
    pub fn has_mipmaps(&self) -> bool {
        self.has_mips != 0
    }

    /// Populated mip directory entries, in level order. The directory ends at
    /// the first slot with a zero offset, later slots are ignored.
    pub fn mip_entries(&self) -> Vec<MipEntry> {
        self.mipmap_offsets
            .iter()
            .zip(self.mipmap_lengths.iter())
            .enumerate()
            .take_while(|(_, (offset, _))| **offset != 0)
            .map(|(level, (&offset, &length))| MipEntry {
                level,
                offset,
                length,
            })
            .collect()
    }

    /// Dimensions of the given mip level, halved per level with truncation
    pub fn mipmap_size(&self, level: usize) -> (u32, u32) {
        let shift = level as u32;
        (
            self.width.checked_shr(shift).unwrap_or(0),
            self.height.checked_shr(shift).unwrap_or(0),
        )
    }
}

impl fmt::Display for BlpHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // any non-JPEG type is treated as S3TC, and any non-raw mode as DXTC
        let texture_type = match self.texture_type() {
            Ok(TextureType::Jpeg) => "JPG",
            _ => "S3TC",
        };
        let compression = match self.compression() {
            Ok(Compression::Raw) => "RAW",
            _ => "DXTC",
        };
        let alpha_type = match self.alpha_type() {
            Ok(AlphaType::Dxt1) => "DXT1",
            Ok(AlphaType::Dxt3) => "DXT3",
            Ok(AlphaType::Dxt5) => "DXT5",
            Err(_) => "Unspecified",
        };

        writeln!(f, "{:<14} BLP2", "Identity:")?;
        writeln!(
            f,
            "{:<14} {} ({texture_type})",
            "Texture type:", self.texture_type
        )?;
        writeln!(f, "{:<14} {} ({compression})", "Compression:", self.compression)?;
        writeln!(f, "{:<14} {}", "Alpha bits:", self.alpha_bits)?;
        writeln!(f, "{:<14} {} ({alpha_type})", "Alpha type:", self.alpha_type)?;
        writeln!(f, "{:<14} {}", "Width:", self.width)?;
        writeln!(f, "{:<14} {}", "Height:", self.height)?;
        writeln!(f, "{:<14}    | Offset   Length", "Mipmaps:")?;
        writeln!(f, "{:<14} ---+--------------------------", "")?;
        for (i, (offset, length)) in self
            .mipmap_offsets
            .iter()
            .zip(self.mipmap_lengths.iter())
            .enumerate()
        {
            if *offset != 0 {
                writeln!(f, "{:<14} {i:02} | {offset:08x} ({length:08x} bytes)", "")?;
            } else {
                writeln!(f, "{:<14} {i:02} | unused", "")?;
            }
        }
        Ok(())
    }
}
