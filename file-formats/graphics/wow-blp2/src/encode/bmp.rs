use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::pixel::PixelLayout;
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use log::trace;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// "BM" read as a little-endian u16
pub const BMP_SIGNATURE: u16 = 0x4d42;
/// Size of the legacy file header
pub const FILE_HEADER_SIZE: u32 = 14;
/// Size of the BITMAPV4HEADER
pub const DIB_V4_HEADER_SIZE: u32 = 108;
/// BI_BITFIELDS compression code
pub const BI_BITFIELDS: u32 = 3;
/// Resolution written to both axes, 72 dpi in pixels per meter
pub const PIXELS_PER_METER: u32 = 2835;
/// Color space tag for device dependent RGB
pub const CS_DEVICE_RGB: u32 = 1;

/// Legacy 14-byte bitmap file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpFileHeader {
    /// Total file size in bytes
    pub file_size: u32,
    /// Offset of the pixel array from the start of the file
    pub pixel_offset: u32,
}

/// Extended device-independent bitmap header with explicit channel masks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DibV4Header {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels, positive for bottom-up rows
    pub height: u32,
    /// Size of the pixel array in bytes
    pub image_size: u32,
    /// Channel masks
    pub layout: PixelLayout,
}

/// Bytes preceding the pixel array
pub const HEADERS_SIZE: usize = (FILE_HEADER_SIZE + DIB_V4_HEADER_SIZE) as usize;

/// Size of the pixel array of a `width` x `height` 32-bit bitmap, checked
/// against the BMP size fields. Dimensions are signed in the DIB header and
/// the whole file size must fit in a u32.
pub fn pixel_array_size(width: u32, height: u32) -> Result<u32> {
    let too_large = || Error::BitmapTooLarge { width, height };
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(too_large());
    }
    u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|texels| texels.checked_mul(4))
        .and_then(|size| u32::try_from(size).ok())
        .filter(|size| size.checked_add(HEADERS_SIZE as u32).is_some())
        .ok_or_else(too_large)
}

/// A canvas ready to be written as a 32-bit BI_BITFIELDS bitmap
#[derive(Debug, Clone, Copy)]
pub struct BmpImage<'a> {
    /// File header
    pub file_header: BmpFileHeader,
    /// DIB header
    pub dib_header: DibV4Header,
    canvas: &'a Canvas,
}

impl<'a> BmpImage<'a> {
    /// Build both headers for a canvas. Fails when the canvas is too large
    /// for the BMP size fields.
    pub fn from_canvas(canvas: &'a Canvas) -> Result<Self> {
        let image_size = pixel_array_size(canvas.width(), canvas.height())?;
        let pixel_offset = HEADERS_SIZE as u32;
        Ok(Self {
            file_header: BmpFileHeader {
                file_size: pixel_offset + image_size,
                pixel_offset,
            },
            dib_header: DibV4Header {
                width: canvas.width(),
                height: canvas.height(),
                image_size,
                layout: canvas.layout(),
            },
            canvas,
        })
    }

    /// Total encoded size in bytes
    pub fn encoded_len(&self) -> usize {
        self.file_header.file_size as usize
    }

    /// File and DIB headers as they appear on disk
    pub fn header_bytes(&self) -> [u8; HEADERS_SIZE] {
        let mut buf = [0u8; HEADERS_SIZE];
        let file = &self.file_header;
        LittleEndian::write_u16(&mut buf[0..2], BMP_SIGNATURE);
        LittleEndian::write_u32(&mut buf[2..6], file.file_size);
        // 6..10 reserved
        LittleEndian::write_u32(&mut buf[10..14], file.pixel_offset);

        let dib = &self.dib_header;
        LittleEndian::write_u32(&mut buf[14..18], DIB_V4_HEADER_SIZE);
        LittleEndian::write_u32(&mut buf[18..22], dib.width);
        LittleEndian::write_u32(&mut buf[22..26], dib.height);
        LittleEndian::write_u16(&mut buf[26..28], 1); // planes
        LittleEndian::write_u16(&mut buf[28..30], 32); // bits per pixel
        LittleEndian::write_u32(&mut buf[30..34], BI_BITFIELDS);
        LittleEndian::write_u32(&mut buf[34..38], dib.image_size);
        LittleEndian::write_u32(&mut buf[38..42], PIXELS_PER_METER);
        LittleEndian::write_u32(&mut buf[42..46], PIXELS_PER_METER);
        // 46..54 colors used and important
        LittleEndian::write_u32(&mut buf[54..58], dib.layout.red_mask);
        LittleEndian::write_u32(&mut buf[58..62], dib.layout.green_mask);
        LittleEndian::write_u32(&mut buf[62..66], dib.layout.blue_mask);
        LittleEndian::write_u32(&mut buf[66..70], dib.layout.alpha_mask);
        LittleEndian::write_u32(&mut buf[70..74], CS_DEVICE_RGB);
        // CIEXYZ endpoints and gamma stay zero for device RGB
        buf
    }

    /// Serialise headers and pixels
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.header_bytes())?;
        for &pixel in self.canvas.pixels() {
            writer.write_u32::<LittleEndian>(pixel)?;
        }
        Ok(())
    }

    /// Complete file contents
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        bytes.extend_from_slice(&self.header_bytes());
        for &pixel in self.canvas.pixels() {
            bytes.extend_from_slice(&pixel.to_le_bytes());
        }
        bytes
    }

    /// Create `path` and write the bitmap to it
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        trace!("Writing {} bytes to {}", self.encoded_len(), path.display());
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io(path, e))
    }
}
