//! Read-only access to BLP2 input bytes
//!
//! Files are memory-mapped so that mip payloads are sliced straight out of
//! the mapping without copying.

use crate::error::{Error, Result};
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

/// Input buffer for a conversion, either mapped from a file or owned
pub enum BlpSource {
    /// Read-only memory mapping of a file
    Mapped(Mmap),
    /// Bytes already in memory, for example extracted from an archive
    Owned(Vec<u8>),
}

impl BlpSource {
    /// Map a file read-only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let len = file.metadata().map_err(|e| Error::io(path, e))?.len();
        if len == 0 {
            // Zero-length mappings are rejected on some platforms
            return Ok(BlpSource::Owned(Vec::new()));
        }
        // SAFETY: the mapping is read-only and the file is not modified by this process
        #[allow(unsafe_code)]
        let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(|e| Error::io(path, e))?;
        Ok(BlpSource::Mapped(mmap))
    }

    /// Wrap bytes that are already in memory
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        BlpSource::Owned(bytes)
    }
}

impl Deref for BlpSource {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            BlpSource::Mapped(mmap) => mmap,
            BlpSource::Owned(bytes) => bytes,
        }
    }
}

impl std::fmt::Debug for BlpSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            BlpSource::Mapped(_) => "Mapped",
            BlpSource::Owned(_) => "Owned",
        };
        write!(f, "BlpSource::{kind}({} bytes)", self.len())
    }
}
