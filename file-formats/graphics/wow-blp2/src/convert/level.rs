use crate::canvas::Canvas;
use crate::decode::{BlockDecoder, DxtnFormat};
use crate::encode::bmp::pixel_array_size;
use crate::error::Result;
use crate::parser::{FormatError, payload_slice};
use crate::pixel::PixelLayout;
use crate::types::{BlpHeader, MipEntry};
use log::trace;

/// Decode one mip level into a freshly allocated canvas
pub fn decode_level(
    header: &BlpHeader,
    input: &[u8],
    entry: &MipEntry,
    layout: PixelLayout,
) -> Result<Canvas> {
    let format = DxtnFormat::from_header(header)?;

    let (width, height) = header.mipmap_size(entry.level);
    if width == 0 || height == 0 || width % 4 != 0 || height % 4 != 0 {
        return Err(FormatError::IrregularDimensions {
            level: entry.level,
            width,
            height,
        }
        .into());
    }

    // reject before allocating; the canvas must also fit a bitmap
    pixel_array_size(width, height)?;

    let payload = payload_slice(input, entry)?;
    let required = format.compressed_size(width, height);
    trace!(
        "Mipmap {}: {width}x{height} {format:?}, payload {} bytes, required {required}",
        entry.level,
        payload.len()
    );
    if payload.len() < required {
        return Err(FormatError::Truncated {
            level: entry.level,
            offset: entry.offset as usize,
            length: required,
            available: payload.len(),
        }
        .into());
    }

    let mut canvas = Canvas::new(width, height, layout)?;
    decode_blocks(format.decoder(), payload, &mut canvas)?;
    Ok(canvas)
}

/// Fill `canvas` from consecutive row-major blocks in `payload`, returning
/// the number of blocks decoded
pub fn decode_blocks(
    decoder: &dyn BlockDecoder,
    payload: &[u8],
    canvas: &mut Canvas,
) -> Result<usize> {
    let blocks_x = (canvas.width() / 4) as usize;
    let blocks_y = (canvas.height() / 4) as usize;
    let total = blocks_x * blocks_y;

    let mut decoded = 0;
    for (i, block) in payload
        .chunks_exact(decoder.block_size())
        .take(total)
        .enumerate()
    {
        let texels = decoder.decode(block)?;
        let (bx, by) = ((i % blocks_x) as u32, (i / blocks_x) as u32);
        canvas.put_block(bx * 4, by * 4, &texels)?;
        decoded += 1;
    }

    if decoded < total {
        return Err(FormatError::UnexpectedEof.into());
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Bc1Decoder;
    use crate::error::Error;
    use crate::types::{HEADER_SIZE, MAX_MIPMAPS};
    use pretty_assertions::assert_eq;

    fn dxt1_header(width: u32, height: u32) -> BlpHeader {
        BlpHeader {
            texture_type: 1,
            compression: 2,
            alpha_bits: 0,
            alpha_type: 0,
            has_mips: 1,
            width,
            height,
            mipmap_offsets: [0; MAX_MIPMAPS],
            mipmap_lengths: [0; MAX_MIPMAPS],
        }
    }

    fn entry(level: usize, offset: usize, length: usize) -> MipEntry {
        MipEntry {
            level,
            offset: offset as u32,
            length: length as u32,
        }
    }

    /// BC1 block whose color0 encodes the block index, all pixels index 0
    fn indexed_blocks(count: usize) -> Vec<u8> {
        (0..count)
            .flat_map(|i| {
                let color0 = (i as u16 + 1) << 5;
                let mut block = color0.to_le_bytes().to_vec();
                block.extend_from_slice(&[0; 6]);
                block
            })
            .collect()
    }

    #[test]
    fn test_every_pixel_visited_once() {
        let (w, h) = (16u32, 8u32);
        let payload = indexed_blocks(8);
        let mut canvas = Canvas::new(w, h, PixelLayout::RGB565_A8).unwrap();
        let decoded = decode_blocks(&Bc1Decoder, &payload, &mut canvas).unwrap();
        assert_eq!(decoded, 8);

        for y in 0..h {
            for x in 0..w {
                let block_index = (y / 4) * (w / 4) + x / 4;
                let expected = 0x00ff_0000 | ((block_index + 1) << 5);
                assert_eq!(canvas.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_extra_payload_is_ignored() {
        let payload = indexed_blocks(3);
        let mut canvas = Canvas::new(4, 4, PixelLayout::RGB565_A8).unwrap();
        assert_eq!(decode_blocks(&Bc1Decoder, &payload, &mut canvas).unwrap(), 1);
    }

    #[test]
    fn test_short_payload_is_eof() {
        let payload = indexed_blocks(1);
        let mut canvas = Canvas::new(8, 4, PixelLayout::RGB565_A8).unwrap();
        assert!(matches!(
            decode_blocks(&Bc1Decoder, &payload, &mut canvas),
            Err(Error::Format(FormatError::UnexpectedEof))
        ));
    }

    #[test]
    fn test_decode_level_slices_payload() {
        let mut input = vec![0u8; HEADER_SIZE];
        input.extend(indexed_blocks(2));
        let header = dxt1_header(8, 4);
        let canvas = decode_level(
            &header,
            &input,
            &entry(0, HEADER_SIZE, 16),
            PixelLayout::RGB565_A8,
        )
        .unwrap();
        assert_eq!((canvas.width(), canvas.height()), (8, 4));
        assert_eq!(canvas.pixel(0, 0), Some(0x00ff_0020));
        assert_eq!(canvas.pixel(7, 3), Some(0x00ff_0040));
    }

    #[test]
    fn test_declared_range_past_input_is_truncated() {
        let mut input = vec![0u8; HEADER_SIZE];
        input.extend(indexed_blocks(1));
        let header = dxt1_header(4, 4);
        let err = decode_level(
            &header,
            &input,
            &entry(0, HEADER_SIZE, 64),
            PixelLayout::RGB565_A8,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::Truncated {
                level: 0,
                length: 64,
                ..
            })
        ));
    }

    #[test]
    fn test_payload_smaller_than_grid_is_truncated() {
        let mut input = vec![0u8; HEADER_SIZE];
        input.extend(indexed_blocks(4));
        let header = dxt1_header(8, 8);
        let err = decode_level(
            &header,
            &input,
            &entry(0, HEADER_SIZE, 16),
            PixelLayout::RGB565_A8,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::Truncated {
                length: 32,
                available: 16,
                ..
            })
        ));
    }

    #[test]
    fn test_irregular_dimensions() {
        let input = vec![0u8; 512];
        let header = dxt1_header(6, 4);
        assert!(matches!(
            decode_level(&header, &input, &entry(0, 148, 8), PixelLayout::RGB565_A8),
            Err(Error::Format(FormatError::IrregularDimensions {
                width: 6,
                height: 4,
                ..
            }))
        ));

        // 8x8 halves to 2x2 at level 2
        let header = dxt1_header(8, 8);
        assert!(matches!(
            decode_level(&header, &input, &entry(2, 148, 8), PixelLayout::RGB565_A8),
            Err(Error::Format(FormatError::IrregularDimensions { level: 2, .. }))
        ));
    }

    #[test]
    fn test_unsupported_alpha_type() {
        let input = vec![0u8; 512];
        let mut header = dxt1_header(4, 4);
        header.alpha_type = 8;
        assert!(matches!(
            decode_level(&header, &input, &entry(0, 148, 8), PixelLayout::RGB565_A8),
            Err(Error::Format(FormatError::UnsupportedEncoding(_)))
        ));
    }

    #[test]
    fn test_oversized_level_is_rejected_before_allocation() {
        // 65536x65536 would need a 16 GiB canvas; only the header is present
        let input = vec![0u8; HEADER_SIZE];
        let header = dxt1_header(65536, 65536);
        assert!(matches!(
            decode_level(&header, &input, &entry(0, 148, 8), PixelLayout::RGB565_A8),
            Err(Error::BitmapTooLarge {
                width: 65536,
                height: 65536
            })
        ));

        // 32768x32768 needs exactly 2^32 pixel bytes
        assert!(matches!(
            decode_level(&header, &input, &entry(1, 148, 8), PixelLayout::RGB565_A8),
            Err(Error::BitmapTooLarge { width: 32768, .. })
        ));

        // 16384x16384 fits and fails on its payload instead
        assert!(matches!(
            decode_level(&header, &input, &entry(2, 148, 8), PixelLayout::RGB565_A8),
            Err(Error::Format(FormatError::Truncated { level: 2, .. }))
        ));
    }
}
