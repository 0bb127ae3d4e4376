//! Length field codec
//!
//! ```text
//! Short form:  0 L L L L L L L            length 0-127
//! Long form:   1 N N N N N N N  [N bytes] big-endian length
//! ```
//!
//! Only definite lengths are accepted. `N == 0` is the BER indefinite form
//! and is rejected, as is `N > 8` which cannot fit a 64-bit length.

use asn1_core::{Asn1Error, Asn1Result};
use bytes::{Buf, BufMut};

/// Largest number of long-form length bytes accepted
pub const MAX_LENGTH_BYTES: usize = 8;

/// Decode a length field, advancing the cursor past it
///
/// # Arguments
/// * `buf` - Cursor positioned at the first byte of the length field
///
/// # Returns
/// Returns the payload length in bytes. Short and long forms of the same
/// value decode identically.
///
/// # Example
/// ```rust
/// use asn1_ber::decode_length;
///
/// let mut cursor = &[0x82, 0x01, 0x00, 0xAA][..];
/// assert_eq!(decode_length(&mut cursor).unwrap(), 256);
/// assert_eq!(cursor, &[0xAA][..]);
/// ```
///
/// # Error Handling
/// - [`Asn1Error::OutOfRange`] if the cursor is already exhausted
/// - [`Asn1Error::MalformedLength`] for the indefinite form or more than 8 length bytes
/// - [`Asn1Error::Truncated`] if fewer length bytes remain than announced
pub fn decode_length<B: Buf>(buf: &mut B) -> Asn1Result<u64> {
    if !buf.has_remaining() {
        return Err(Asn1Error::OutOfRange(
            "no bytes left for length field".to_string(),
        ));
    }

    let first = buf.get_u8();
    if first & 0x80 == 0 {
        return Ok(first as u64);
    }

    let count = (first & 0x7F) as usize;
    if count == 0 {
        return Err(Asn1Error::MalformedLength(
            "indefinite length encoding not supported".to_string(),
        ));
    }
    if count > MAX_LENGTH_BYTES {
        return Err(Asn1Error::MalformedLength(format!(
            "{} length bytes (max {})",
            count, MAX_LENGTH_BYTES
        )));
    }
    if buf.remaining() < count {
        return Err(Asn1Error::Truncated {
            needed: count as u64,
            available: buf.remaining() as u64,
        });
    }

    Ok(buf.get_uint(count))
}

/// Encode a length in its minimal DER form
///
/// # Returns
/// One byte for lengths below 128, otherwise `0x80 | n` followed by the
/// `n` significant big-endian bytes.
pub fn encode_length(length: u64) -> Vec<u8> {
    if length < 0x80 {
        return vec![length as u8];
    }

    let width = MAX_LENGTH_BYTES - (length.leading_zeros() as usize / 8);
    let mut out = Vec::with_capacity(1 + width);
    out.put_u8(0x80 | width as u8);
    out.put_uint(length, width);
    out
}

/// Encode a length in long form with exactly `width` length bytes
///
/// Produces the non-minimal encodings BER permits, e.g. `0x82 0x00 0x03`
/// for a length of 3.
///
/// # Errors
/// Returns [`Asn1Error::MalformedLength`] if `width` is outside `1..=8` or
/// too small to hold `length`.
pub fn encode_length_with_width(length: u64, width: usize) -> Asn1Result<Vec<u8>> {
    if width == 0 || width > MAX_LENGTH_BYTES {
        return Err(Asn1Error::MalformedLength(format!(
            "width {} outside 1..={}",
            width, MAX_LENGTH_BYTES
        )));
    }
    let needed = MAX_LENGTH_BYTES - (length.leading_zeros() as usize / 8);
    if needed > width {
        return Err(Asn1Error::MalformedLength(format!(
            "length {} does not fit in {} bytes",
            length, width
        )));
    }

    let mut out = Vec::with_capacity(1 + width);
    out.put_u8(0x80 | width as u8);
    out.put_uint(length, width);
    Ok(out)
}
