use super::error::FormatError;
use super::reader::{ByteReader, Cursor, read_u32_array};
use super::types::ParseResult;
use crate::types::*;
use log::*;
use std::str;

/// Parse the fixed BLP2 header from the start of `input`. Only the magic is
/// validated, every numeric field is taken as stored.
pub fn parse_header(input: &[u8]) -> ParseResult<BlpHeader> {
    let mut reader = Cursor::new(input);

    parse_magic(&mut reader)?;
    let texture_type = reader
        .read_u32_le()
        .map_err(|e| e.with_context("texture_type field"))?;
    let compression = reader
        .read_u8()
        .map_err(|e| e.with_context("compression field"))?;
    let alpha_bits = reader
        .read_u8()
        .map_err(|e| e.with_context("alpha_bits field"))?;
    let alpha_type = reader
        .read_u8()
        .map_err(|e| e.with_context("alpha_type field"))?;
    let has_mips = reader
        .read_u8()
        .map_err(|e| e.with_context("has_mips field"))?;
    let width = reader
        .read_u32_le()
        .map_err(|e| e.with_context("width field"))?;
    let height = reader
        .read_u32_le()
        .map_err(|e| e.with_context("height field"))?;
    let mipmap_offsets =
        read_u32_array(&mut reader).map_err(|e| e.with_context("mipmap offsets"))?;
    let mipmap_lengths =
        read_u32_array(&mut reader).map_err(|e| e.with_context("mipmap lengths"))?;

    if !matches!(alpha_bits, 0 | 1 | 4 | 8) {
        warn!("Non standard alpha bits value {alpha_bits}, expected 0, 1, 4 or 8");
    }

    let header = BlpHeader {
        texture_type,
        compression,
        alpha_bits,
        alpha_type,
        has_mips,
        width,
        height,
        mipmap_offsets,
        mipmap_lengths,
    };
    trace!("{header:?}");
    Ok(header)
}

fn parse_magic(reader: &mut impl ByteReader) -> ParseResult<()> {
    let mut magic: [u8; 4] = Default::default();
    reader
        .read_into(&mut magic)
        .map_err(|e| e.with_context("magic"))?;

    if magic != BLP2_MAGIC {
        return Err(FormatError::BadMagic(
            str::from_utf8(&magic)
                .map(|s| s.to_owned())
                .unwrap_or_else(|_| format!("{magic:?}")),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw_header(magic: &[u8; 4]) -> Vec<u8> {
        let mut data = Vec::with_capacity(HEADER_SIZE);
        data.extend_from_slice(magic);
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&[2, 8, 7, 1]);
        data.extend_from_slice(&512u32.to_le_bytes());
        data.extend_from_slice(&256u32.to_le_bytes());
        for i in 0..MAX_MIPMAPS as u32 {
            data.extend_from_slice(&(if i < 2 { 148 + i * 1024 } else { 0 }).to_le_bytes());
        }
        for i in 0..MAX_MIPMAPS as u32 {
            data.extend_from_slice(&(if i < 2 { 1024u32 } else { 0 }).to_le_bytes());
        }
        data
    }

    #[test]
    fn test_parse_header_fields() {
        let data = raw_header(b"BLP2");
        assert_eq!(data.len(), HEADER_SIZE);

        let header = parse_header(&data).unwrap();
        assert_eq!(header.texture_type(), Ok(TextureType::S3tc));
        assert_eq!(header.compression(), Ok(Compression::Dxtc));
        assert_eq!(header.alpha_bits, 8);
        assert_eq!(header.alpha_type(), Ok(AlphaType::Dxt5));
        assert!(header.has_mipmaps());
        assert_eq!((header.width, header.height), (512, 256));
        assert_eq!(header.mipmap_offsets[..3], [148, 1172, 0]);
        assert_eq!(header.mipmap_lengths[..3], [1024, 1024, 0]);
    }

    #[test]
    fn test_blp1_magic_is_rejected() {
        let data = raw_header(b"BLP1");
        match parse_header(&data) {
            Err(FormatError::BadMagic(magic)) => assert_eq!(magic, "BLP1"),
            other => panic!("expected BadMagic, got {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_magic_is_reported() {
        let data = raw_header(&[0xff, 0xfe, 0x00, 0x01]);
        assert!(matches!(
            parse_header(&data),
            Err(FormatError::BadMagic(_))
        ));
    }

    #[test]
    fn test_short_header_is_eof() {
        let data = raw_header(b"BLP2");
        let err = parse_header(&data[..HEADER_SIZE - 1]).unwrap_err();
        assert!(matches!(err.root(), FormatError::UnexpectedEof));

        let err = parse_header(b"BL").unwrap_err();
        assert!(matches!(err.root(), FormatError::UnexpectedEof));
    }
}
