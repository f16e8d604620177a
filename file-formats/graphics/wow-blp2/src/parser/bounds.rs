//! Bounds checking utilities for mip payloads

use super::error::FormatError;
use super::types::ParseResult;
use crate::types::MipEntry;
use log::debug;

/// Check that `offset..offset + length` lies within `input`
pub fn check_bounds(input: &[u8], offset: u32, length: u32, level: usize) -> ParseResult<()> {
    let end = (offset as usize).checked_add(length as usize);
    match end {
        Some(end) if end <= input.len() => Ok(()),
        _ => {
            debug!(
                "Offset+length of mipmap {} is out of bounds: {}+{} > {}",
                level,
                offset,
                length,
                input.len()
            );
            Err(FormatError::Truncated {
                level,
                offset: offset as usize,
                length: length as usize,
                available: input.len(),
            })
        }
    }
}

/// Get the compressed payload of a mip entry after bounds checking
pub fn payload_slice<'a>(input: &'a [u8], entry: &MipEntry) -> ParseResult<&'a [u8]> {
    check_bounds(input, entry.offset, entry.length, entry.level)?;
    let start = entry.offset as usize;
    Ok(&input[start..start + entry.length as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(offset: u32, length: u32) -> MipEntry {
        MipEntry {
            level: 2,
            offset,
            length,
        }
    }

    #[test]
    fn test_valid_bounds() {
        let data = vec![1, 2, 3, 4, 5];
        assert!(check_bounds(&data, 0, 3, 0).is_ok());
        assert!(check_bounds(&data, 2, 3, 0).is_ok());
        assert!(check_bounds(&data, 0, 5, 0).is_ok());
    }

    #[test]
    fn test_length_out_of_bounds() {
        let data = vec![1, 2, 3];
        assert!(check_bounds(&data, 1, 3, 0).is_err());
        assert!(check_bounds(&data, 0, 4, 0).is_err());
        assert!(check_bounds(&data, 5, 1, 0).is_err());
    }

    #[test]
    fn test_overflowing_range_is_truncated() {
        let data = vec![0; 16];
        match payload_slice(&data, &entry(u32::MAX, u32::MAX)) {
            Err(FormatError::Truncated {
                level, available, ..
            }) => {
                assert_eq!(level, 2);
                assert_eq!(available, 16);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn test_payload_slice() {
        let data = vec![1, 2, 3, 4, 5];
        let slice = payload_slice(&data, &entry(1, 3)).unwrap();
        assert_eq!(slice, &[2, 3, 4]);
    }
}
