//! Base-128 arc decoding for OBJECT IDENTIFIER values
//!
//! Each arc is encoded big-endian in 7-bit groups; bit 8 of every byte
//! except the last is set. The first encoded arc carries the first two
//! arcs of the OID jointly (`40 * X + Y`, or `80 + Y` when `X` is 2).

use asn1_core::{Asn1Error, Asn1Result};

/// Decode the raw arcs of an OID value
///
/// The first returned arc is the joint encoding of the first two arcs;
/// pass the result through [`split_first_arc`] before building notation.
///
/// # Arguments
/// * `value` - Payload bytes of the OID node
/// * `length` - Declared payload length; at most `value.len()` bytes are read
///
/// # Errors
/// Returns [`Asn1Error::InvalidOid`] if the final byte still has the
/// continuation bit set or an arc does not fit in `u64`.
pub fn decode_arcs(value: &[u8], length: u64) -> Asn1Result<Vec<u64>> {
    let length = usize::try_from(length).map_or(value.len(), |l| l.min(value.len()));

    let mut arcs = Vec::new();
    let mut pending: u64 = 0;
    let mut in_arc = false;

    for &byte in &value[..length] {
        if pending > (u64::MAX >> 7) {
            return Err(Asn1Error::InvalidOid(format!(
                "arc {} overflows 64 bits",
                arcs.len()
            )));
        }
        pending = (pending << 7) | (byte & 0x7F) as u64;
        in_arc = true;

        if byte & 0x80 == 0 {
            arcs.push(pending);
            pending = 0;
            in_arc = false;
        }
    }

    if in_arc {
        return Err(Asn1Error::InvalidOid(
            "last arc is missing its final byte".to_string(),
        ));
    }

    Ok(arcs)
}

/// Split the joint first arc into the first two OID arcs
///
/// `0..40` maps to `0.x`, `40..80` to `1.(x-40)`, anything larger to
/// `2.(x-80)`. An empty input stays empty.
pub fn split_first_arc(raw: &[u64]) -> Vec<u64> {
    let Some((&first, rest)) = raw.split_first() else {
        return Vec::new();
    };

    let mut arcs = Vec::with_capacity(raw.len() + 1);
    match first {
        0..=39 => arcs.extend([0, first]),
        40..=79 => arcs.extend([1, first - 40]),
        _ => arcs.extend([2, first - 80]),
    }
    arcs.extend_from_slice(rest);
    arcs
}

/// Encode split arcs back into OID payload bytes
///
/// Returns `None` when fewer than two arcs are given or the first two
/// arcs cannot be combined.
pub fn encode_arcs(arcs: &[u64]) -> Option<Vec<u8>> {
    let (&first, &second) = (arcs.first()?, arcs.get(1)?);
    let joint = match first {
        0 | 1 if second < 40 => first * 40 + second,
        2 => second.checked_add(80)?,
        _ => return None,
    };

    let mut buf = Vec::new();
    encode_arc(&mut buf, joint);
    for &arc in &arcs[2..] {
        encode_arc(&mut buf, arc);
    }
    Some(buf)
}

fn encode_arc(buf: &mut Vec<u8>, value: u64) {
    let mut groups = [0u8; 10];
    let mut count = 0;
    let mut remaining = value;
    loop {
        groups[count] = (remaining & 0x7F) as u8;
        count += 1;
        remaining >>= 7;
        if remaining == 0 {
            break;
        }
    }
    for i in (0..count).rev() {
        let continuation = if i > 0 { 0x80 } else { 0x00 };
        buf.push(groups[i] | continuation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_byte_arcs() {
        let arcs = decode_arcs(&[0x2A, 0x03], 2).unwrap();
        assert_eq!(arcs, vec![42, 3]);
    }

    #[test]
    fn test_decode_multi_byte_arc() {
        // 1.2.840.113549
        let value = [0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D];
        let arcs = decode_arcs(&value, value.len() as u64).unwrap();
        assert_eq!(arcs, vec![42, 840, 113549]);
        assert_eq!(split_first_arc(&arcs), vec![1, 2, 840, 113549]);
    }

    #[test]
    fn test_decode_respects_declared_length() {
        let arcs = decode_arcs(&[0x2A, 0x03, 0x04], 2).unwrap();
        assert_eq!(arcs, vec![42, 3]);
    }

    #[test]
    fn test_decode_length_past_payload() {
        assert_eq!(decode_arcs(&[0x2A, 0x03], 10).unwrap(), vec![42, 3]);
    }

    #[test]
    fn test_decode_dangling_continuation() {
        assert!(matches!(
            decode_arcs(&[0x2A, 0x86], 2),
            Err(Asn1Error::InvalidOid(_))
        ));
    }

    #[test]
    fn test_decode_overflow() {
        let mut value = vec![0xFF; 10];
        value.push(0x7F);
        assert!(matches!(
            decode_arcs(&value, value.len() as u64),
            Err(Asn1Error::InvalidOid(_))
        ));
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_arcs(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn test_split_first_arc() {
        assert_eq!(split_first_arc(&[1, 2]), vec![0, 1, 2]);
        assert_eq!(split_first_arc(&[42]), vec![1, 2]);
        assert_eq!(split_first_arc(&[85, 4, 3]), vec![2, 5, 4, 3]);
        assert_eq!(split_first_arc(&[80 + 999]), vec![2, 999]);
        assert!(split_first_arc(&[]).is_empty());
    }

    #[test]
    fn test_encode_arcs() {
        assert_eq!(
            encode_arcs(&[1, 2, 840, 113549]).unwrap(),
            vec![0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D]
        );
        assert_eq!(encode_arcs(&[2, 999]).unwrap(), vec![0x88, 0x37]);
        assert!(encode_arcs(&[1]).is_none());
        assert!(encode_arcs(&[0, 40]).is_none());
        assert!(encode_arcs(&[3, 1]).is_none());
    }
}
