//! Order-preserving IEEE-754 doubles, always 8 bytes.

use byteorder::{BigEndian, ByteOrder};

use crate::buffer::ByteBuffer;
use crate::error::{DecodeResult, Error};

pub const WIDTH: usize = 8;

const SIGN: u64 = 1 << 63;

/// Bit layout used for `f64` payloads.
///
/// Both layouts sort every non-negative value above every negative one and
/// keep non-negative values in numeric order. Only [`FloatLayout::Ordered`]
/// also keeps two negative values in numeric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FloatLayout {
    /// Sign bit set for non-negative values, all bits complemented for
    /// negative ones. `-0.0` is stored as `0.0`.
    #[default]
    Ordered,
    /// Big-endian bits of the negated value. Reads and writes data produced
    /// by the negate-then-swap transform; negative values sort by magnitude
    /// and `-0.0` sorts below `0.0`.
    Negated,
}

#[inline]
fn to_ordered_bits(value: f64) -> u64 {
    // Both zeros compare equal, so they share one encoding.
    let bits = if value == 0.0 { 0 } else { value.to_bits() };
    if bits & SIGN == 0 {
        bits | SIGN
    } else {
        !bits
    }
}

#[inline]
fn from_ordered_bits(bits: u64) -> f64 {
    if bits & SIGN != 0 {
        f64::from_bits(bits & !SIGN)
    } else {
        f64::from_bits(!bits)
    }
}

/// Encode a double to a buffer.
pub fn encode_f64(buf: &mut ByteBuffer, value: f64, layout: FloatLayout) {
    let bits = match layout {
        FloatLayout::Ordered => to_ordered_bits(value),
        FloatLayout::Negated => (-value).to_bits(),
    };
    let mut bytes = [0u8; WIDTH];
    BigEndian::write_u64(&mut bytes, bits);
    tracing::trace!(value, bits = format_args!("{:#018x}", bits), ?layout, "encoded f64");
    buf.append(&bytes);
}

/// Decode a double from the front of `data`.
pub fn decode_f64(data: &[u8], layout: FloatLayout) -> DecodeResult<f64> {
    if data.len() < WIDTH {
        return Err(Error::exhausted(data, WIDTH));
    }
    let bits = BigEndian::read_u64(&data[..WIDTH]);
    let value = match layout {
        FloatLayout::Ordered => from_ordered_bits(bits),
        FloatLayout::Negated => -f64::from_bits(bits),
    };
    Ok((value, WIDTH))
}
