//! DER encoder for TLV trees
//!
//! Writes nodes back out with single-byte tags and minimal definite
//! lengths. The declared length of a node is recomputed from its payload.
//!
//! # Usage Example
//!
//! ```rust
//! use asn1_ber::{TlvEncoder, TlvNode};
//! use asn1_core::Tag;
//!
//! let node = TlvNode::primitive(Tag::BOOLEAN, vec![0xFF]);
//! let mut encoder = TlvEncoder::new();
//! encoder.encode_node(&node).unwrap();
//! assert_eq!(encoder.into_bytes(), vec![0x01, 0x01, 0xFF]);
//! ```

use crate::length::encode_length;
use crate::node::{TlvNode, TlvValue};
use asn1_core::{Asn1Error, Asn1Result, Tag};

/// DER encoder for TLV nodes
pub struct TlvEncoder {
    buffer: Vec<u8>,
}

impl TlvEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Create a new encoder with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Encode a TLV triplet from a tag and raw payload
    pub fn encode_tlv(&mut self, tag: Tag, value: &[u8]) -> Asn1Result<()> {
        self.buffer.push(identifier(tag)?);
        self.buffer.extend_from_slice(&encode_length(value.len() as u64));
        self.buffer.extend_from_slice(value);
        Ok(())
    }

    /// Encode a node and, for constructed nodes, all of its children
    pub fn encode_node(&mut self, node: &TlvNode) -> Asn1Result<()> {
        if node.is_end_of_contents() {
            self.buffer.push(0x00);
            return Ok(());
        }

        match node.value() {
            Some(TlvValue::Primitive(bytes)) => self.encode_tlv(node.tag(), bytes),
            Some(TlvValue::Constructed(children)) => {
                let mut inner = TlvEncoder::new();
                for child in children {
                    inner.encode_node(child)?;
                }
                self.encode_tlv(node.tag(), &inner.buffer)
            }
            None => self.encode_tlv(node.tag(), &[]),
        }
    }

    /// Encoded bytes so far
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the encoder and return the encoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl Default for TlvEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a single node to a new buffer
pub fn encode_node(node: &TlvNode) -> Asn1Result<Vec<u8>> {
    let mut encoder = TlvEncoder::with_capacity(node.encoded_len() as usize);
    encoder.encode_node(node)?;
    Ok(encoder.into_bytes())
}

fn identifier(tag: Tag) -> Asn1Result<u8> {
    if !tag.is_single_byte() {
        // Report the escape octet the tag would need
        return Err(Asn1Error::UnsupportedTag(tag.to_byte() | 0x1F));
    }
    Ok(tag.to_byte())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::TlvDecoder;

    #[test]
    fn test_encode_primitive() {
        let node = TlvNode::primitive(Tag::INTEGER, vec![0x30, 0x39]);
        assert_eq!(encode_node(&node).unwrap(), vec![0x02, 0x02, 0x30, 0x39]);
    }

    #[test]
    fn test_encode_constructed() {
        let node = TlvNode::constructed(
            Tag::SEQUENCE,
            vec![
                TlvNode::primitive(Tag::BOOLEAN, vec![0x00]),
                TlvNode::primitive(Tag::NULL, vec![]),
            ],
        );
        assert_eq!(
            encode_node(&node).unwrap(),
            vec![0x30, 0x05, 0x01, 0x01, 0x00, 0x05, 0x00]
        );
    }

    #[test]
    fn test_encode_end_of_contents() {
        assert_eq!(encode_node(&TlvNode::end_of_contents()).unwrap(), vec![0x00]);
    }

    #[test]
    fn test_encode_long_payload_uses_long_form() {
        let node = TlvNode::primitive(Tag::OCTET_STRING, vec![0xAB; 200]);
        let bytes = encode_node(&node).unwrap();
        assert_eq!(&bytes[..3], &[0x04, 0x81, 0xC8]);
        assert_eq!(bytes.len() as u64, node.encoded_len());
    }

    #[test]
    fn test_encode_rejects_high_tag_number() {
        let node = TlvNode::primitive(Tag::context_specific(false, 31), vec![]);
        assert!(matches!(encode_node(&node), Err(Asn1Error::UnsupportedTag(0x9F))));

        let nested = TlvNode::constructed(
            Tag::SEQUENCE,
            vec![TlvNode::primitive(Tag::application(false, 40), vec![0x01])],
        );
        assert!(matches!(encode_node(&nested), Err(Asn1Error::UnsupportedTag(0x5F))));
    }

    #[test]
    fn test_decoded_tree_reencodes_identically() {
        let data = [
            0x30, 0x0D, 0x06, 0x03, 0x55, 0x04, 0x03, 0x0C, 0x06, b'a', b's', b'n', b'.', b'1',
            b'!',
        ];
        let node = TlvDecoder::new(&data).decode_node().unwrap();
        assert_eq!(encode_node(&node).unwrap(), data.to_vec());
    }
}
