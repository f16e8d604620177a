//! Native byte reading utilities for BLP parsing
//!
//! This module provides a trait and implementations for reading binary data
//! without external parser dependencies.

use super::error::FormatError;
use super::types::ParseResult;

/// Trait for reading binary data from a byte slice
pub trait ByteReader {
    /// Read a single unsigned 8-bit integer
    fn read_u8(&mut self) -> ParseResult<u8>;

    /// Read a single unsigned 32-bit integer in little-endian format
    fn read_u32_le(&mut self) -> ParseResult<u32>;

    /// Read exactly `buf.len()` bytes into a pre-allocated buffer
    fn read_into(&mut self, buf: &mut [u8]) -> ParseResult<()>;
}

/// A cursor for reading binary data from a byte slice
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the beginning of the data
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    fn take(&mut self, n: usize) -> ParseResult<&'a [u8]> {
        let end = self
            .position
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(FormatError::UnexpectedEof)?;
        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }
}

impl ByteReader for Cursor<'_> {
    fn read_u8(&mut self) -> ParseResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u32_le(&mut self) -> ParseResult<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_into(&mut self, buf: &mut [u8]) -> ParseResult<()> {
        let bytes = self.take(buf.len())?;
        buf.copy_from_slice(bytes);
        Ok(())
    }
}

/// Read a fixed number of little-endian u32 values into an array
pub fn read_u32_array<const N: usize>(reader: &mut impl ByteReader) -> ParseResult<[u32; N]> {
    let mut values = [0u32; N];
    for value in &mut values {
        *value = reader.read_u32_le()?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_little_endian() {
        let data = [0x01, 0x78, 0x56, 0x34, 0x12];
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.read_u8().unwrap(), 0x01);
        assert_eq!(cursor.read_u32_le().unwrap(), 0x1234_5678);
    }

    #[test]
    fn test_eof_does_not_advance() {
        let data = [1, 2, 3];
        let mut cursor = Cursor::new(&data);
        assert!(matches!(
            cursor.read_u32_le(),
            Err(FormatError::UnexpectedEof)
        ));
        assert_eq!(cursor.read_u8().unwrap(), 1);
    }

    #[test]
    fn test_read_u32_array() {
        let data: Vec<u8> = (1u32..=3).flat_map(u32::to_le_bytes).collect();
        let mut cursor = Cursor::new(&data);
        let values: [u32; 3] = read_u32_array(&mut cursor).unwrap();
        assert_eq!(values, [1, 2, 3]);
    }
}
