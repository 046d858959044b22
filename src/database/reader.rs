//! Bounds-checked access to the raw database bytes
//!
//! All multi-byte values in the format are little-endian. Every read checks the
//! requested range against the file size and reports `OutOfBounds` instead of
//! panicking, so a truncated or damaged file can never crash a lookup.

use crate::database::CacheMode;
use crate::error::{LookupError, OpenError};
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

/// Backing bytes of an open database
pub enum Storage {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Storage {
    /// Load a file according to the cache mode
    pub fn open(path: &Path, mode: CacheMode) -> Result<Self, OpenError> {
        if !path.exists() {
            return Err(OpenError::NotFound(path.to_path_buf()));
        }

        match mode {
            CacheMode::MemoryMap => {
                let file = File::open(path)?;
                // Zero-length mappings are rejected by the OS
                if file.metadata()?.len() == 0 {
                    return Ok(Storage::Owned(Vec::new()));
                }
                // SAFETY: the mapping is read-only and the file is never written through it
                let mmap = unsafe { Mmap::map(&file) }?;
                Ok(Storage::Mapped(mmap))
            }
            CacheMode::Memory => Ok(Storage::Owned(std::fs::read(path)?)),
        }
    }

    pub fn reader(&self) -> Reader<'_> {
        Reader::new(self)
    }
}

impl Deref for Storage {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Storage::Mapped(mmap) => mmap,
            Storage::Owned(bytes) => bytes,
        }
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Storage::Mapped(_) => "Mapped",
            Storage::Owned(_) => "Owned",
        };
        write!(f, "Storage::{}({} bytes)", kind, self.len())
    }
}

/// Read-only cursor-free view over the database bytes
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    data: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn out_of_bounds(&self, offset: usize, len: usize) -> LookupError {
        LookupError::OutOfBounds { offset, len, size: self.data.len() }
    }

    /// Slice of `len` bytes starting at `offset`
    pub fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], LookupError> {
        offset
            .checked_add(len)
            .and_then(|end| self.data.get(offset..end))
            .ok_or_else(|| self.out_of_bounds(offset, len))
    }

    pub fn byte(&self, offset: usize) -> Result<u8, LookupError> {
        self.data.get(offset).copied().ok_or_else(|| self.out_of_bounds(offset, 1))
    }

    /// 3-byte little-endian unsigned integer
    pub fn u24_le(&self, offset: usize) -> Result<u32, LookupError> {
        self.uint_le(offset, 3)
    }

    /// Little-endian unsigned integer of `width` bytes
    ///
    /// Widths above 4 do not fit a `u32` and are reported as out of bounds.
    pub fn uint_le(&self, offset: usize, width: usize) -> Result<u32, LookupError> {
        if width > 4 {
            return Err(self.out_of_bounds(offset, width));
        }
        let bytes = self.bytes(offset, width)?;
        Ok(bytes
            .iter()
            .rev()
            .fold(0u32, |acc, &b| (acc << 8) | b as u32))
    }

    /// Null-terminated string at `offset`
    ///
    /// Returns the bytes without the terminator (`None` when empty) and the
    /// offset just past the terminator. A string that runs off the end of the
    /// file is out of bounds.
    pub fn cstr(&self, offset: usize) -> Result<(Option<&'a [u8]>, usize), LookupError> {
        let tail = self.data.get(offset..).ok_or_else(|| self.out_of_bounds(offset, 1))?;
        let end = tail
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| self.out_of_bounds(offset, tail.len() + 1))?;

        let value = if end == 0 { None } else { Some(&tail[..end]) };
        Ok((value, offset + end + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_u24_le() {
        let data = [0x01, 0x02, 0x03, 0xff];
        let reader = Reader::new(&data);
        assert_eq!(reader.u24_le(0).unwrap(), 0x0003_0201);
        assert_eq!(reader.uint_le(0, 4).unwrap(), 0xff03_0201);
        assert_eq!(reader.uint_le(3, 1).unwrap(), 0xff);
    }

    #[test]
    fn test_reads_past_end_fail() {
        let data = [0u8; 4];
        let reader = Reader::new(&data);
        assert_eq!(
            reader.u24_le(2),
            Err(LookupError::OutOfBounds { offset: 2, len: 3, size: 4 })
        );
        assert!(reader.byte(4).is_err());
        assert!(reader.bytes(usize::MAX, 2).is_err());
        assert!(reader.bytes(4, 0).unwrap().is_empty());
    }

    #[test]
    fn test_uint_wider_than_u32_rejected() {
        let data = [0u8; 8];
        let reader = Reader::new(&data);
        assert_eq!(
            reader.uint_le(0, 5),
            Err(LookupError::OutOfBounds { offset: 0, len: 5, size: 8 })
        );
        assert_eq!(reader.uint_le(4, 4), Ok(0));
    }

    #[test]
    fn test_cstr() {
        let data = b"abc\0\0xyz";
        let reader = Reader::new(data);

        let (value, next) = reader.cstr(0).unwrap();
        assert_eq!(value, Some(&b"abc"[..]));
        assert_eq!(next, 4);

        let (value, next) = reader.cstr(next).unwrap();
        assert_eq!(value, None);
        assert_eq!(next, 5);

        // Unterminated
        assert_eq!(
            reader.cstr(5),
            Err(LookupError::OutOfBounds { offset: 5, len: 4, size: 8 })
        );
        assert!(reader.cstr(9).is_err());
    }

    #[test]
    fn test_storage_modes_agree() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[1, 2, 3, 4, 5]).unwrap();
        file.flush().unwrap();

        let mapped = Storage::open(file.path(), CacheMode::MemoryMap).unwrap();
        let owned = Storage::open(file.path(), CacheMode::Memory).unwrap();
        assert_eq!(&mapped[..], &owned[..]);
        assert_eq!(owned.reader().u24_le(2).unwrap(), 0x0005_0403);
    }

    #[test]
    fn test_storage_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.dat");
        assert!(matches!(
            Storage::open(&path, CacheMode::Memory),
            Err(OpenError::NotFound(p)) if p == path
        ));
    }
}
