//! Human-readable OID notations
//!
//! All functions take fully split arcs (see [`crate::arcs::split_first_arc`])
//! and return `None` for an empty arc sequence.

use crate::registry::{REGISTRY, RECOMMENDATION_SERIES, Segment};

/// Arc path of the UUID subtree (`2.25`)
const UUID_ARC: [u64; 2] = [2, 25];

/// Arc path of the ITU-T Recommendation subtree (`0.0`)
const RECOMMENDATION_ARC: [u64; 2] = [0, 0];

/// Dot notation, e.g. `1.2.840.113549`
pub fn dot_notation(arcs: &[u64]) -> Option<String> {
    if arcs.is_empty() {
        return None;
    }

    let parts: Vec<String> = arcs.iter().map(|arc| arc.to_string()).collect();
    Some(parts.join("."))
}

/// OID-IRI notation, e.g. `/ISO/Member-Body/US/RSADSI`
///
/// Arcs without a registered name, and all arcs after the first unknown
/// one, are written as numbers.
pub fn oid_iri_notation(arcs: &[u64]) -> Option<String> {
    if arcs.is_empty() {
        return None;
    }

    let mut path = String::new();
    for segment in REGISTRY.resolve(arcs) {
        path.push('/');
        push_segment(&mut path, segment);
    }
    Some(path)
}

/// Modified OID-IRI notation for display
///
/// Same path as [`oid_iri_notation`] except:
/// - a Recommendation series letter and the following number are joined
///   with a dot (`/ITU-T/Recommendation/X.509`)
/// - an arc under `2.25` is written as a hyphenated UUID
///
/// Arcs are `u64`, so only UUIDs whose value fits in 64 bits reach the
/// UUID form; the upper 64 bits always print as zeros. A full 128-bit
/// UUID arc is rejected earlier by [`crate::decode_arcs`].
pub fn modified_oid_iri_notation(arcs: &[u64]) -> Option<String> {
    if arcs.is_empty() {
        return None;
    }

    let segments = REGISTRY.resolve(arcs);
    let mut path = String::new();
    let mut index = 0;

    while index < segments.len() {
        let segment = segments[index];

        let in_series = index == 2
            && arcs.starts_with(&RECOMMENDATION_ARC)
            && RECOMMENDATION_SERIES.contains(&arcs[2]);
        if in_series {
            if let (Segment::Label(letter), Some(&number)) = (segment, arcs.get(3)) {
                path.push('/');
                path.push_str(letter);
                path.push('.');
                path.push_str(&number.to_string());
                index += 2;
                continue;
            }
        }

        path.push('/');
        if index == 2 && arcs.starts_with(&UUID_ARC) {
            path.push_str(&uuid_string(arcs[2]));
        } else {
            push_segment(&mut path, segment);
        }
        index += 1;
    }

    Some(path)
}

/// ASN.1 value notation
///
/// Not generated: always returns `None`.
pub fn asn1_notation(_arcs: &[u64]) -> Option<String> {
    None
}

fn push_segment(path: &mut String, segment: Segment) {
    match segment {
        Segment::Label(label) => path.push_str(label),
        Segment::Number(arc) => path.push_str(&arc.to_string()),
    }
}

/// Render an arc as a UUID in 8-4-4-4-12 form
fn uuid_string(arc: u64) -> String {
    let hex = format!("{:032x}", arc as u128);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
