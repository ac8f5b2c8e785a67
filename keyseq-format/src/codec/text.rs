//! Null-terminated text, the only variable-length kind.

use crate::buffer::ByteBuffer;
use crate::error::{DecodeResult, Error, Result};

pub const TERMINATOR: u8 = 0x00;

/// Encode text followed by the terminator.
///
/// Returns the number of bytes written, always `text.len() + 1`. Text that
/// itself holds a terminator byte is rejected, as it could not be decoded
/// back in full.
pub fn encode_text(buf: &mut ByteBuffer, text: &str) -> Result<usize> {
    if let Some(position) = text.bytes().position(|b| b == TERMINATOR) {
        return Err(Error::InteriorNul { position });
    }
    buf.append(text.as_bytes());
    buf.push(TERMINATOR);
    Ok(text.len() + 1)
}

/// Decode text up to and including the first terminator.
///
/// The consumed count includes the terminator.
pub fn decode_text(data: &[u8]) -> DecodeResult<&str> {
    let end = data
        .iter()
        .position(|&b| b == TERMINATOR)
        .ok_or_else(|| Error::exhausted(data, data.len() + 1))?;
    let text = std::str::from_utf8(&data[..end]).map_err(|_| Error::InvalidText { offset: 0 })?;
    Ok((text, end + 1))
}
