/// One populated slot of the mip directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MipEntry {
    /// Mip level, equal to the slot index in the directory
    pub level: usize,
    /// File offset of the compressed payload
    pub offset: u32,
    /// Byte length of the compressed payload
    pub length: u32,
}
