//! Sans-IO codecs for the built-in kinds.
//!
//! Encoders append to a [`ByteBuffer`](crate::ByteBuffer). Decoders read from
//! the front of a byte slice and return `(value, bytes_consumed)`, leaving
//! position tracking to the caller. Offsets in decoder errors are relative to
//! the slice they were given.

pub mod float;
pub mod int;
pub mod text;

pub use float::{decode_f64, encode_f64, FloatLayout};
pub use int::{decode_int, encode_int, OrderedInt};
pub use text::{decode_text, encode_text};
