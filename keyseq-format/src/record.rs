//! Tagged, comparable streams of values.
//!
//! A stream is built by a [`RecordWriter`] and drained by a [`Record`]. The
//! writer only appends; [`RecordWriter::finish`] freezes it into a record,
//! which only moves its cursor forward. Reads must request the same kinds in
//! the same order they were written.
//!
//! ```
//! use keyseq_format::{Record, RecordWriter};
//!
//! let mut a: RecordWriter = RecordWriter::new();
//! a.write(&454543i32).unwrap();
//! let mut b: RecordWriter = RecordWriter::new();
//! b.write(&-31343i32).unwrap();
//! assert!(a > b);
//!
//! let mut record: Record = a.finish();
//! assert_eq!(record.read::<i32>().unwrap(), 454543);
//! assert!(record.read::<i32>().unwrap_err().is_exhausted());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::buffer::ByteBuffer;
use crate::error::{DecodeResult, Error, Result};
use crate::options::Options;
use crate::registry::{Catalogue, Decode, Encode, Primitives};
use crate::tag::{BuiltinKind, Tag};
use crate::value::Primitive;

/// The write phase of a record.
pub struct RecordWriter<C: Catalogue = Primitives> {
    buffer: ByteBuffer,
    options: Options,
    catalogue: PhantomData<fn() -> C>,
}

impl<C: Catalogue> RecordWriter<C> {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        RecordWriter {
            buffer: ByteBuffer::with_capacity(options.capacity()),
            options,
            catalogue: PhantomData,
        }
    }

    /// Append `value`: its tag, then its payload.
    ///
    /// A failed write leaves the stream as it was before the call.
    pub fn write<T: Encode<C> + ?Sized>(&mut self, value: &T) -> Result<()> {
        let start = self.buffer.len();
        T::TAG.encode(&mut self.buffer);

        if let Err(e) = value.encode(self) {
            self.buffer.truncate(start);
            return Err(e);
        }

        tracing::debug!(
            offset = format_args!("{:#x}", start),
            bytes = self.buffer.len() - start,
            tag = T::TAG.get(),
            "wrote value"
        );
        Ok(())
    }

    /// Chaining form of [`RecordWriter::write`].
    pub fn push<T: Encode<C> + ?Sized>(&mut self, value: &T) -> Result<&mut Self> {
        self.write(value)?;
        Ok(self)
    }

    pub fn write_primitive(&mut self, value: &Primitive) -> Result<()> {
        match value {
            Primitive::I8(v) => self.write(v),
            Primitive::I16(v) => self.write(v),
            Primitive::I32(v) => self.write(v),
            Primitive::I64(v) => self.write(v),
            Primitive::F64(v) => self.write(v),
            Primitive::Text(v) => self.write(v),
        }
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// End the write phase; the returned record reads from the start.
    pub fn finish(self) -> Record<C> {
        Record::from_buffer(self.buffer, self.options)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.into_vec()
    }

    #[inline]
    pub(crate) fn buffer_mut(&mut self) -> &mut ByteBuffer {
        &mut self.buffer
    }
}

impl<C: Catalogue> Default for RecordWriter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Catalogue> fmt::Debug for RecordWriter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordWriter")
            .field("len", &self.buffer.len())
            .field("options", &self.options)
            .finish()
    }
}

/// The read phase of a record: a frozen buffer and a forward-only cursor.
///
/// Records compare by their raw bytes, never by cursor position.
pub struct Record<C: Catalogue = Primitives> {
    buffer: ByteBuffer,
    cursor: usize,
    options: Options,
    catalogue: PhantomData<fn() -> C>,
}

impl<C: Catalogue> Record<C> {
    /// Start a new stream.
    pub fn writer() -> RecordWriter<C> {
        RecordWriter::new()
    }

    /// Read a previously produced encoding, copying it.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_bytes_with(bytes, Options::default())
    }

    pub fn from_bytes_with(bytes: &[u8], options: Options) -> Self {
        Self::from_buffer(ByteBuffer::from_slice(bytes), options)
    }

    /// Read a previously produced encoding without copying it.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self::from_vec_with(bytes, Options::default())
    }

    pub fn from_vec_with(bytes: Vec<u8>, options: Options) -> Self {
        Self::from_buffer(ByteBuffer::from_vec(bytes), options)
    }

    fn from_buffer(buffer: ByteBuffer, options: Options) -> Self {
        Record {
            buffer,
            cursor: 0,
            options,
            catalogue: PhantomData,
        }
    }

    /// Read the next value as a `T`.
    ///
    /// Fails with [`Error::TypeMismatch`] if the next value was written as a
    /// different kind; the cursor is then left on that value's tag. Fails with
    /// [`Error::Exhausted`] if the stream ends early.
    pub fn read<T: Decode<C>>(&mut self) -> Result<T> {
        let start = self.cursor;
        let found = self.peek_tag()?;
        if found != T::TAG {
            tracing::debug!(
                offset = format_args!("{:#x}", start),
                expected = T::TAG.get(),
                found = found.get(),
                "type mismatch"
            );
            return Err(Error::TypeMismatch {
                offset: start,
                expected: T::TAG,
                found,
            });
        }
        self.decode_with(Tag::decode)?;

        let value = T::decode(self)?;
        tracing::debug!(
            offset = format_args!("{:#x}", start),
            bytes = self.cursor - start,
            tag = found.get(),
            "read value"
        );
        Ok(value)
    }

    /// The tag of the next value, without consuming it.
    pub fn peek_tag(&self) -> Result<Tag> {
        let data = self.buffer.tail(self.cursor)?;
        let (tag, _) = Tag::decode(data).map_err(|e| e.rebase(self.cursor))?;
        Ok(tag)
    }

    /// Read the next value, whatever built-in kind it is.
    ///
    /// Fails with [`Error::Unsupported`] when the next value is a custom
    /// kind, whose layout only its own type knows.
    pub fn read_primitive(&mut self) -> Result<Primitive> {
        let tag = self.peek_tag()?;
        let kind = BuiltinKind::from_tag(tag).ok_or(Error::Unsupported { tag })?;
        let value = match kind {
            BuiltinKind::I8 => Primitive::I8(self.read()?),
            BuiltinKind::I16 => Primitive::I16(self.read()?),
            BuiltinKind::I32 => Primitive::I32(self.read()?),
            BuiltinKind::I64 => Primitive::I64(self.read()?),
            BuiltinKind::F64 => Primitive::F64(self.read()?),
            BuiltinKind::Text => Primitive::Text(self.read()?),
        };
        Ok(value)
    }

    /// Drain the remaining values of a primitive-only stream.
    ///
    /// The iterator stops after the last value, or after yielding the first
    /// error.
    pub fn values(&mut self) -> Values<'_, C> {
        Values {
            record: self,
            failed: false,
        }
    }

    /// Offset of the next unread byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.into_vec()
    }

    /// Run a sans-IO decoder at the cursor and advance past what it consumed.
    pub(crate) fn decode_with<T, F>(&mut self, decoder: F) -> Result<T>
    where
        F: FnOnce(&[u8]) -> DecodeResult<T>,
    {
        let data = self.buffer.tail(self.cursor)?;
        let (value, consumed) = decoder(data).map_err(|e| e.rebase(self.cursor))?;
        debug_assert!(consumed <= data.len());
        self.cursor += consumed;
        Ok(value)
    }
}

impl<C: Catalogue> fmt::Debug for Record<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("len", &self.buffer.len())
            .field("cursor", &self.cursor)
            .field("options", &self.options)
            .finish()
    }
}

/// Iterator returned by [`Record::values`].
pub struct Values<'a, C: Catalogue> {
    record: &'a mut Record<C>,
    failed: bool,
}

impl<C: Catalogue> Iterator for Values<'_, C> {
    type Item = Result<Primitive>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.record.is_exhausted() {
            return None;
        }
        let item = self.record.read_primitive();
        self.failed = item.is_err();
        Some(item)
    }
}

macro_rules! byte_order {
    ($ty:ident) => {
        impl<C: Catalogue> PartialEq for $ty<C> {
            fn eq(&self, other: &Self) -> bool {
                self.as_bytes() == other.as_bytes()
            }
        }

        impl<C: Catalogue> Eq for $ty<C> {}

        impl<C: Catalogue> PartialOrd for $ty<C> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<C: Catalogue> Ord for $ty<C> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_bytes().cmp(other.as_bytes())
            }
        }

        impl<C: Catalogue> Hash for $ty<C> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_bytes().hash(state);
            }
        }
    };
}

byte_order!(RecordWriter);
byte_order!(Record);
