//! TLV node model

use crate::length::encode_length;
use asn1_core::{Asn1Result, Tag};
use asn1_oid::Oid;
use serde::{Deserialize, Serialize};

/// Payload of a TLV node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TlvValue {
    /// Raw bytes of a primitive node
    Primitive(#[serde(with = "serde_bytes")] Vec<u8>),
    /// Children of a constructed node
    Constructed(Vec<TlvNode>),
}

/// One decoded Tag-Length-Value node
///
/// Nodes are immutable once built. The decoder guarantees that the value
/// shape matches the tag; nodes built by hand with [`TlvNode::new`] are not
/// checked, and the formatter renders any mismatch in-band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlvNode {
    tag: Tag,
    length: u64,
    value: Option<TlvValue>,
}

impl TlvNode {
    /// Create a node from its parts without validation
    pub fn new(tag: Tag, length: u64, value: Option<TlvValue>) -> Self {
        Self { tag, length, value }
    }

    /// The end-of-contents marker: tag 0, length 0, no value
    pub fn end_of_contents() -> Self {
        Self::new(Tag::END_OF_CONTENTS, 0, None)
    }

    /// Create a primitive node; the length is taken from `bytes`
    pub fn primitive(tag: Tag, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        Self::new(tag, bytes.len() as u64, Some(TlvValue::Primitive(bytes)))
    }

    /// Create a constructed node; the length is the encoded size of `children`
    pub fn constructed(tag: Tag, children: Vec<TlvNode>) -> Self {
        let length = children.iter().map(TlvNode::encoded_len).sum();
        Self::new(tag, length, Some(TlvValue::Constructed(children)))
    }

    /// Tag of the node
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Declared payload length, excluding the tag and length field
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Payload, `None` for end-of-contents
    pub fn value(&self) -> Option<&TlvValue> {
        self.value.as_ref()
    }

    /// Whether the tag marks a constructed encoding
    pub fn is_constructed(&self) -> bool {
        self.tag.is_constructed()
    }

    /// Whether this is the end-of-contents marker
    pub fn is_end_of_contents(&self) -> bool {
        self.tag.is_end_of_contents()
    }

    /// Children of a constructed node
    pub fn children(&self) -> Option<&[TlvNode]> {
        match &self.value {
            Some(TlvValue::Constructed(children)) => Some(children),
            _ => None,
        }
    }

    /// Bytes of a primitive node
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.value {
            Some(TlvValue::Primitive(bytes)) => Some(bytes),
            _ => None,
        }
    }

    /// Size of the full encoding: one tag byte, the minimal length field,
    /// and the payload
    pub fn encoded_len(&self) -> u64 {
        if self.is_end_of_contents() {
            return 1;
        }
        1 + encode_length(self.length).len() as u64 + self.length
    }

    /// Decode the payload of an OBJECT IDENTIFIER node
    ///
    /// Returns `None` if this is not a primitive OBJECT IDENTIFIER node.
    pub fn object_identifier(&self) -> Option<Asn1Result<Oid>> {
        if self.tag != Tag::OBJECT_IDENTIFIER {
            return None;
        }
        self.bytes().map(Oid::from_der)
    }
}
