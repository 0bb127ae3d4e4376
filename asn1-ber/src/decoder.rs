//! TLV decoder
//!
//! Decodes one node at a time from a byte cursor. Constructed nodes are
//! decoded recursively inside a window of exactly `length` bytes, so a
//! child can never read past the end of its parent.
//!
//! # Usage Example
//!
//! ```rust
//! use asn1_ber::TlvDecoder;
//!
//! let data = [0x30, 0x03, 0x01, 0x01, 0xFF];
//! let mut decoder = TlvDecoder::new(&data);
//! let node = decoder.decode_node().unwrap();
//! assert_eq!(node.children().map(|c| c.len()), Some(1));
//! assert!(!decoder.has_remaining());
//! ```

use crate::length::decode_length;
use crate::node::{TlvNode, TlvValue};
use asn1_core::{Asn1Error, Asn1Result, DecoderConfig, Tag};
use bytes::Buf;

/// TLV decoder over a byte slice
///
/// # Position Tracking
///
/// The decoder keeps the unread tail of its buffer and advances it as
/// nodes are decoded, so several sibling nodes can be read in sequence.
///
/// # Error Handling
///
/// Any failure inside a node aborts that node and every ancestor still
/// being decoded; there is no skip or partial-result recovery.
pub struct TlvDecoder<'a> {
    input: &'a [u8],
    total: usize,
    config: DecoderConfig,
}

impl<'a> TlvDecoder<'a> {
    /// Create a decoder with the default configuration
    ///
    /// # Arguments
    /// * `buffer` - Buffer containing DER/BER-encoded data
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_config(buffer, DecoderConfig::default())
    }

    /// Create a decoder with a custom configuration
    pub fn with_config(buffer: &'a [u8], config: DecoderConfig) -> Self {
        Self {
            input: buffer,
            total: buffer.len(),
            config,
        }
    }

    /// Current position in the buffer
    pub fn position(&self) -> usize {
        self.total - self.input.len()
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Check if there is more data to decode
    pub fn has_remaining(&self) -> bool {
        !self.input.is_empty()
    }

    /// Decoder configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode exactly one node, advancing past it
    ///
    /// # Returns
    /// Returns the node with its full subtree. The position advances by the
    /// node's encoded size; on error the position is unspecified.
    ///
    /// # Decoding Process
    /// 1. Decode the identifier octet; `0x00` ends here as end-of-contents
    /// 2. Decode the length field
    /// 3. Take exactly `length` bytes as the payload
    /// 4. For a constructed tag, decode children until the payload is used up
    ///
    /// # Error Handling
    /// - [`Asn1Error::OutOfRange`] if the buffer is already exhausted
    /// - [`Asn1Error::UnsupportedTag`] for a multi-byte tag
    /// - length codec errors ([`crate::length::decode_length`])
    /// - [`Asn1Error::Truncated`] if the payload runs past the available bytes
    /// - [`Asn1Error::LengthTooLarge`] / [`Asn1Error::DepthExceeded`] when a configured limit is hit
    pub fn decode_node(&mut self) -> Asn1Result<TlvNode> {
        let start = self.position();
        decode_node_at(&mut self.input, 0, &self.config).inspect_err(|e| {
            log::debug!("TLV decode failed at offset {}: {}", start, e);
        })
    }

    /// Decode sibling nodes until the buffer is exhausted
    ///
    /// # Error Handling
    /// The first failing node aborts the call; nodes decoded before it are
    /// discarded.
    pub fn decode_all(&mut self) -> Asn1Result<Vec<TlvNode>> {
        let mut nodes = Vec::new();
        while self.has_remaining() {
            nodes.push(self.decode_node()?);
        }
        Ok(nodes)
    }
}

fn decode_node_at(
    cursor: &mut &[u8],
    depth: usize,
    config: &DecoderConfig,
) -> Asn1Result<TlvNode> {
    if !cursor.has_remaining() {
        return Err(Asn1Error::OutOfRange("no bytes left for tag".to_string()));
    }

    let tag = Tag::from_byte(cursor.get_u8())?;
    if tag.is_end_of_contents() {
        log::trace!("decoded {} at depth {}", tag, depth);
        return Ok(TlvNode::end_of_contents());
    }

    let length = decode_length(cursor)?;
    if length > config.max_length {
        return Err(Asn1Error::LengthTooLarge(length));
    }
    let available = cursor.len();
    let size = usize::try_from(length)
        .ok()
        .filter(|&size| size <= available)
        .ok_or(Asn1Error::Truncated {
            needed: length,
            available: available as u64,
        })?;

    let input: &[u8] = *cursor;
    let (content, rest) = input.split_at(size);
    *cursor = rest;
    log::trace!("decoded {} length {} at depth {}", tag, length, depth);

    if !tag.is_constructed() {
        return Ok(TlvNode::new(
            tag,
            length,
            Some(TlvValue::Primitive(content.to_vec())),
        ));
    }

    if depth >= config.max_depth {
        return Err(Asn1Error::DepthExceeded(config.max_depth));
    }

    let mut window = content;
    let mut children = Vec::new();
    while window.has_remaining() {
        children.push(decode_node_at(&mut window, depth + 1, config)?);
    }

    Ok(TlvNode::new(
        tag,
        length,
        Some(TlvValue::Constructed(children)),
    ))
}
