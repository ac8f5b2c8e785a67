//! Order-preserving fixed-width integers.
//!
//! A signed value of width `w` is reinterpreted as unsigned, biased by
//! `2^(8w-1)` with wrapping arithmetic and stored big-endian, so that
//! `i64::MIN` becomes all zero bytes, zero becomes `0x80 00 ..` and
//! `i64::MAX` becomes all `0xFF` bytes.

use byteorder::{BigEndian, ByteOrder};

use crate::buffer::ByteBuffer;
use crate::error::{DecodeResult, Error};

/// A signed integer with an order-preserving fixed-width encoding.
pub trait OrderedInt: Copy + Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;

    fn write_biased(self, buf: &mut ByteBuffer);

    /// Decodes from the front of `data`; consumes exactly [`Self::WIDTH`] bytes.
    fn read_biased(data: &[u8]) -> DecodeResult<Self>;
}

impl OrderedInt for i8 {
    const WIDTH: usize = 1;

    #[inline]
    fn write_biased(self, buf: &mut ByteBuffer) {
        buf.push((self as u8).wrapping_add(0x80));
    }

    #[inline]
    fn read_biased(data: &[u8]) -> DecodeResult<Self> {
        match data.first() {
            Some(byte) => Ok((byte.wrapping_sub(0x80) as i8, 1)),
            None => Err(Error::exhausted(data, 1)),
        }
    }
}

macro_rules! ordered_int {
    ($signed:ty, $unsigned:ty, $write:ident, $read:ident) => {
        impl OrderedInt for $signed {
            const WIDTH: usize = std::mem::size_of::<$signed>();

            #[inline]
            fn write_biased(self, buf: &mut ByteBuffer) {
                const BIAS: $unsigned = 1 << (<$unsigned>::BITS - 1);
                let mut bytes = [0u8; std::mem::size_of::<$signed>()];
                BigEndian::$write(&mut bytes, (self as $unsigned).wrapping_add(BIAS));
                buf.append(&bytes);
            }

            #[inline]
            fn read_biased(data: &[u8]) -> DecodeResult<Self> {
                const BIAS: $unsigned = 1 << (<$unsigned>::BITS - 1);
                if data.len() < Self::WIDTH {
                    return Err(Error::exhausted(data, Self::WIDTH));
                }
                let biased = BigEndian::$read(&data[..Self::WIDTH]);
                Ok((biased.wrapping_sub(BIAS) as $signed, Self::WIDTH))
            }
        }
    };
}

ordered_int!(i16, u16, write_u16, read_u16);
ordered_int!(i32, u32, write_u32, read_u32);
ordered_int!(i64, u64, write_u64, read_u64);

/// Encode an integer to a buffer.
#[inline]
pub fn encode_int<I: OrderedInt>(buf: &mut ByteBuffer, value: I) {
    value.write_biased(buf);
}

/// Decode an integer from the front of `data`.
#[inline]
pub fn decode_int<I: OrderedInt>(data: &[u8]) -> DecodeResult<I> {
    I::read_biased(data)
}
