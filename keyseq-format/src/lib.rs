//! Order-preserving, type-tagged binary encoding.
//!
//! Values are written to a [`RecordWriter`] and read back from a [`Record`].
//! Each value is stored as a one-byte [`Tag`] followed by its payload, and
//! every payload is laid out so that comparing two encodings as plain
//! unsigned bytes orders them the same way as the values they hold:
//!
//! ```text
//! i8/i16/i32/i64   biased by 2^(8w-1), big-endian, 1/2/4/8 bytes
//! f64              sign-adjusted IEEE-754 bits, big-endian, 8 bytes
//! text             content bytes, then 0x00
//! custom           the fields written by its serialize hook
//! ```
//!
//! Custom kinds are grouped into catalogues with [`catalogue!`]; a record is
//! parameterized by the catalogue it was written with.

mod buffer;
pub mod codec;
mod error;
mod macros;
mod options;
mod record;
mod registry;
mod tag;
mod value;

pub use buffer::ByteBuffer;
pub use codec::FloatLayout;
pub use error::{DecodeResult, Error, Result};
pub use options::Options;
pub use record::{Record, RecordWriter, Values};
pub use registry::{Catalogue, Decode, Encode, Kind, Primitives, Registry, Serializable};
pub use tag::{BuiltinKind, Tag, BUILTIN_KINDS};
pub use value::Primitive;
