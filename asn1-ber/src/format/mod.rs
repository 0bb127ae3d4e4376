//! Human-readable rendering of TLV trees
//!
//! Each node renders on one line:
//!
//! ```text
//! Type: SEQUENCE, Length: 6, Value:
//!   Type: BOOLEAN, Length: 1, Value: True
//!   Type: INTEGER, Length: 1, Value: -1
//! ```
//!
//! Children of a constructed node follow on their own lines, one
//! indentation level deeper. Primitive payloads are interpreted according
//! to their universal type; payloads that do not have the expected shape
//! render as `[INVALID DATA TYPE]`, `[NO DATA]` or `[INVALID DATA]`
//! instead of failing.

pub mod text;

use crate::node::{TlvNode, TlvValue};
use asn1_core::{FormatterConfig, Tag, TagClass};
use asn1_oid::{decode_arcs, dot_notation, oid_iri_notation, split_first_arc};
use num_bigint::BigInt;
use std::fmt::{self, Write};

const INVALID_DATA_TYPE: &str = "[INVALID DATA TYPE]";
const NO_DATA: &str = "[NO DATA]";
const INVALID_DATA: &str = "[INVALID DATA]";

/// Formats TLV nodes as indented text
#[derive(Debug, Clone, Default)]
pub struct TlvFormatter {
    config: FormatterConfig,
}

impl TlvFormatter {
    /// Create a formatter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with a custom configuration
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Format a node and its children at the given indentation level
    ///
    /// The result has no trailing newline.
    pub fn format(&self, node: &TlvNode, level: usize) -> String {
        let mut out = String::new();
        self.write_node(&mut out, node, level);
        out
    }

    /// Format sibling nodes, one tree after another
    pub fn format_all(&self, nodes: &[TlvNode], level: usize) -> String {
        let parts: Vec<String> = nodes.iter().map(|node| self.format(node, level)).collect();
        parts.join("\n")
    }

    fn write_node(&self, out: &mut String, node: &TlvNode, level: usize) {
        let tag = node.tag();
        out.push_str(&" ".repeat(level * self.config.indent));
        let _ = write!(out, "Type: {}", tag);

        if tag.is_end_of_contents() {
            return;
        }

        let _ = write!(out, ", Length: {}", node.length());
        if node.length() == 0 {
            return;
        }

        if tag.is_constructed() {
            match node.value() {
                Some(TlvValue::Constructed(children)) => {
                    out.push_str(", Value:");
                    for child in children {
                        out.push('\n');
                        self.write_node(out, child, level + 1);
                    }
                }
                _ => push_value(out, INVALID_DATA_TYPE),
            }
            return;
        }

        let bytes = match node.value() {
            Some(TlvValue::Primitive(bytes)) => bytes,
            _ => return push_value(out, INVALID_DATA_TYPE),
        };
        if bytes.is_empty() {
            return push_value(out, NO_DATA);
        }

        if tag.class() != TagClass::Universal {
            return push_value(out, &text::hex_string(bytes));
        }

        match tag {
            Tag::BOOLEAN => {
                if node.length() != 1 || bytes.len() != 1 {
                    out.push_str(" [Expected length of 1]");
                }
                push_value(out, if bytes[0] != 0 { "True" } else { "False" });
            }
            Tag::INTEGER | Tag::ENUMERATED => {
                push_value(out, &BigInt::from_signed_bytes_be(bytes).to_string());
            }
            Tag::BIT_STRING => {
                let unused = bytes[0];
                if unused == 0 {
                    out.push_str(", Value with 0 unused bits");
                } else {
                    let _ = write!(
                        out,
                        ", Value with {} unused bits: {}",
                        unused,
                        text::hex_string(&bytes[1..])
                    );
                }
            }
            Tag::OBJECT_IDENTIFIER => push_value(out, &format_oid(bytes, node.length())),
            Tag::UTF8_STRING => push_value(out, &text::utf8_string(bytes)),
            Tag::NUMERIC_STRING | Tag::PRINTABLE_STRING | Tag::IA5_STRING | Tag::VISIBLE_STRING => {
                push_value(out, &text::ascii_string(bytes));
            }
            Tag::TELETEX_STRING => push_value(out, &text::latin1_string(bytes)),
            Tag::UTC_TIME => push_value(out, &format_time(bytes, text::parse_utc_time)),
            Tag::GENERALIZED_TIME => {
                push_value(out, &format_time(bytes, text::parse_generalized_time));
            }
            Tag::BMP_STRING => push_value(out, &text::bmp_string(bytes)),
            _ => push_value(out, &text::hex_string(bytes)),
        }
    }
}

/// Format a node with the default configuration
pub fn format_node(node: &TlvNode, level: usize) -> String {
    TlvFormatter::new().format(node, level)
}

/// Format top-level sibling nodes with the default configuration
pub fn format_nodes(nodes: &[TlvNode]) -> String {
    TlvFormatter::new().format_all(nodes, 0)
}

impl fmt::Display for TlvNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_node(self, 0))
    }
}

fn push_value(out: &mut String, value: &str) {
    out.push_str(", Value: ");
    out.push_str(value);
}

fn format_oid(bytes: &[u8], length: u64) -> String {
    let arcs = match decode_arcs(bytes, length) {
        Ok(raw) => split_first_arc(&raw),
        Err(e) => {
            log::debug!("OID payload not renderable: {}", e);
            return INVALID_DATA.to_string();
        }
    };

    match (dot_notation(&arcs), oid_iri_notation(&arcs)) {
        (Some(dot), Some(iri)) => format!("{} ({})", dot, iri),
        _ => INVALID_DATA.to_string(),
    }
}

fn format_time(bytes: &[u8], parse: fn(&str) -> Option<chrono::NaiveDateTime>) -> String {
    let raw = text::ascii_string(bytes);
    match parse(&raw) {
        Some(time) => time.format(text::TIME_FORMAT).to_string(),
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_format_boolean() {
        let node = TlvNode::primitive(Tag::BOOLEAN, vec![0x01]);
        assert_eq!(format_node(&node, 0), "Type: BOOLEAN, Length: 1, Value: True");

        let node = TlvNode::primitive(Tag::BOOLEAN, vec![0x00]);
        assert_eq!(format_node(&node, 0), "Type: BOOLEAN, Length: 1, Value: False");
    }

    #[test]
    fn test_format_boolean_wrong_length() {
        let node = TlvNode::primitive(Tag::BOOLEAN, vec![0x00, 0x01]);
        assert_eq!(
            format_node(&node, 0),
            "Type: BOOLEAN, Length: 2 [Expected length of 1], Value: False"
        );
    }

    #[test]
    fn test_format_end_of_contents() {
        assert_eq!(format_node(&TlvNode::end_of_contents(), 0), "Type: END OF CONTENTS");
    }

    #[test]
    fn test_format_zero_length() {
        let node = TlvNode::primitive(Tag::NULL, vec![]);
        assert_eq!(format_node(&node, 0), "Type: NULL, Length: 0");
    }

    #[test]
    fn test_format_integer() {
        let node = TlvNode::primitive(Tag::INTEGER, vec![0x01, 0x00]);
        assert_eq!(format_node(&node, 0), "Type: INTEGER, Length: 2, Value: 256");

        let node = TlvNode::primitive(Tag::INTEGER, vec![0xFF, 0x7F]);
        assert_eq!(format_node(&node, 0), "Type: INTEGER, Length: 2, Value: -129");

        let mut big = vec![0x01];
        big.extend_from_slice(&[0x00; 16]);
        let node = TlvNode::primitive(Tag::INTEGER, big);
        assert_eq!(
            format_node(&node, 0),
            "Type: INTEGER, Length: 17, Value: 340282366920938463463374607431768211456"
        );
    }

    #[test]
    fn test_format_bit_string() {
        let node = TlvNode::primitive(Tag::BIT_STRING, vec![0x00, 0xFF]);
        assert_eq!(
            format_node(&node, 0),
            "Type: BIT STRING, Length: 2, Value with 0 unused bits"
        );

        let node = TlvNode::primitive(Tag::BIT_STRING, vec![0x03, 0xA0, 0xF8]);
        assert_eq!(
            format_node(&node, 0),
            "Type: BIT STRING, Length: 3, Value with 3 unused bits: A0 F8"
        );
    }

    #[test]
    fn test_format_octet_string() {
        let node = TlvNode::primitive(Tag::OCTET_STRING, vec![0xDE, 0xAD, 0x01]);
        assert_eq!(
            format_node(&node, 0),
            "Type: OCTET STRING, Length: 3, Value: DE AD 01"
        );
    }

    #[test]
    fn test_format_oid() {
        let node = TlvNode::primitive(Tag::OBJECT_IDENTIFIER, vec![0x55, 0x1D, 0x13]);
        assert_eq!(
            format_node(&node, 0),
            "Type: OBJECT IDENTIFIER, Length: 3, Value: 2.5.29.19 \
             (/Joint-ISO-ITU-T/DS/Certificate-Extension/Basic-Constraints)"
        );
    }

    #[test]
    fn test_format_oid_invalid() {
        let node = TlvNode::primitive(Tag::OBJECT_IDENTIFIER, vec![0x55, 0x9D]);
        assert_eq!(
            format_node(&node, 0),
            "Type: OBJECT IDENTIFIER, Length: 2, Value: [INVALID DATA]"
        );
    }

    #[test]
    fn test_format_oid_with_128_bit_uuid_arc() {
        // 2.25.<uuid with the top bit set>, too wide for a u64 arc
        let mut payload = vec![0x69, 0x82];
        payload.extend_from_slice(&[0xFF; 17]);
        payload.push(0x7F);
        let node = TlvNode::primitive(Tag::OBJECT_IDENTIFIER, payload);
        assert_eq!(
            format_node(&node, 0),
            "Type: OBJECT IDENTIFIER, Length: 20, Value: [INVALID DATA]"
        );

        // 2.25.255 fits and renders normally
        let node = TlvNode::primitive(Tag::OBJECT_IDENTIFIER, vec![0x69, 0x81, 0x7F]);
        assert_eq!(
            format_node(&node, 0),
            "Type: OBJECT IDENTIFIER, Length: 3, Value: 2.25.255 (/Joint-ISO-ITU-T/UUID/255)"
        );
    }

    #[test]
    fn test_format_strings() {
        let node = TlvNode::primitive(Tag::UTF8_STRING, "h\u{e9}llo".as_bytes().to_vec());
        assert_eq!(format_node(&node, 0), "Type: UTF8String, Length: 6, Value: h\u{e9}llo");

        let node = TlvNode::primitive(Tag::PRINTABLE_STRING, b"Example CA".to_vec());
        assert_eq!(
            format_node(&node, 0),
            "Type: PrintableString, Length: 10, Value: Example CA"
        );

        let node = TlvNode::primitive(Tag::IA5_STRING, b"a@b.c".to_vec());
        assert_eq!(format_node(&node, 0), "Type: IA5String, Length: 5, Value: a@b.c");

        let node = TlvNode::primitive(Tag::TELETEX_STRING, vec![0x43, 0xE9]);
        assert_eq!(
            format_node(&node, 0),
            "Type: TeletexString, Length: 2, Value: C\u{e9}"
        );

        let node = TlvNode::primitive(Tag::BMP_STRING, vec![0x00, 0x4F, 0x00, 0x4B]);
        assert_eq!(format_node(&node, 0), "Type: BMPString, Length: 4, Value: OK");
    }

    #[test]
    fn test_format_utc_time() {
        let node = TlvNode::primitive(Tag::UTC_TIME, b"240301080000Z".to_vec());
        assert_eq!(
            format_node(&node, 0),
            "Type: UTCTime, Length: 13, Value: 2024-03-01 08:00:00"
        );

        let node = TlvNode::primitive(Tag::UTC_TIME, b"garbage".to_vec());
        assert_eq!(format_node(&node, 0), "Type: UTCTime, Length: 7, Value: garbage");
    }

    #[test]
    fn test_format_other_types_as_hex() {
        let node = TlvNode::primitive(Tag::context_specific(false, 2), vec![0x0A, 0x0B]);
        assert_eq!(format_node(&node, 0), "Type: [CONTEXT 2], Length: 2, Value: 0A 0B");

        let node = TlvNode::primitive(Tag::universal(false, 9), vec![0x80]);
        assert_eq!(format_node(&node, 0), "Type: REAL, Length: 1, Value: 80");
    }

    #[test]
    fn test_format_shape_mismatch() {
        let node = TlvNode::new(Tag::SEQUENCE, 3, Some(TlvValue::Primitive(vec![1, 2, 3])));
        assert_eq!(
            format_node(&node, 0),
            "Type: SEQUENCE, Length: 3, Value: [INVALID DATA TYPE]"
        );

        let node = TlvNode::new(Tag::OCTET_STRING, 2, None);
        assert_eq!(
            format_node(&node, 0),
            "Type: OCTET STRING, Length: 2, Value: [INVALID DATA TYPE]"
        );

        let node = TlvNode::new(Tag::OCTET_STRING, 2, Some(TlvValue::Primitive(vec![])));
        assert_eq!(format_node(&node, 0), "Type: OCTET STRING, Length: 2, Value: [NO DATA]");
    }

    #[test]
    fn test_format_nested_indentation() {
        let data = [0x30, 0x08, 0x01, 0x01, 0xFF, 0x30, 0x03, 0x02, 0x01, 0x07];
        let nodes = parse(&data, 0).unwrap();
        assert_eq!(
            format_node(&nodes[0], 0),
            "Type: SEQUENCE, Length: 8, Value:\n\
             \x20\x20Type: BOOLEAN, Length: 1, Value: True\n\
             \x20\x20Type: SEQUENCE, Length: 3, Value:\n\
             \x20\x20\x20\x20Type: INTEGER, Length: 1, Value: 7"
        );
    }

    #[test]
    fn test_format_level_and_indent_config() {
        let node = TlvNode::primitive(Tag::BOOLEAN, vec![0x01]);
        assert_eq!(format_node(&node, 2), "    Type: BOOLEAN, Length: 1, Value: True");

        let formatter = TlvFormatter::with_config(FormatterConfig { indent: 3 });
        assert_eq!(formatter.format(&node, 1), "   Type: BOOLEAN, Length: 1, Value: True");
    }

    #[test]
    fn test_display_matches_level_zero() {
        let node = TlvNode::primitive(Tag::INTEGER, vec![0x05]);
        assert_eq!(node.to_string(), format_node(&node, 0));
    }

    #[test]
    fn test_format_all() {
        let nodes = vec![
            TlvNode::primitive(Tag::NULL, vec![]),
            TlvNode::end_of_contents(),
        ];
        assert_eq!(
            TlvFormatter::new().format_all(&nodes, 0),
            "Type: NULL, Length: 0\nType: END OF CONTENTS"
        );
    }
}
