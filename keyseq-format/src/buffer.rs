use crate::error::{Error, Result};

/// Owned, contiguous storage for an encoded stream.
///
/// A buffer only ever grows: bytes already appended are never rewritten or
/// reordered. A buffer adopted from external data is read as-is.
///
/// Deliberately not `Clone`, a buffer has exactly one owner.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    #[inline]
    pub fn new() -> ByteBuffer {
        ByteBuffer { bytes: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> ByteBuffer {
        ByteBuffer {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Copies a previously produced encoding.
    #[inline]
    pub fn from_slice(data: &[u8]) -> ByteBuffer {
        ByteBuffer {
            bytes: data.to_vec(),
        }
    }

    /// Adopts an owned encoding without copying.
    #[inline]
    pub fn from_vec(bytes: Vec<u8>) -> ByteBuffer {
        ByteBuffer { bytes }
    }

    #[inline]
    pub fn append(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Borrow `length` bytes starting at `offset`.
    pub fn view_from(&self, offset: usize, length: usize) -> Result<&[u8]> {
        let remaining = self.bytes.len().saturating_sub(offset);
        match offset.checked_add(length) {
            Some(end) if end <= self.bytes.len() => Ok(&self.bytes[offset..end]),
            _ => Err(Error::Exhausted {
                offset,
                needed: length,
                remaining,
            }),
        }
    }

    /// Borrow everything from `offset` to the end.
    pub fn tail(&self, offset: usize) -> Result<&[u8]> {
        self.bytes.get(offset..).ok_or(Error::Exhausted {
            offset,
            needed: 0,
            remaining: 0,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Drops an incomplete trailing value, never committed bytes.
    pub(crate) fn truncate(&mut self, len: usize) {
        debug_assert!(len <= self.bytes.len());
        self.bytes.truncate(len);
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
