//! Top-level parser
//!
//! Decodes every sibling TLV from a starting offset to the end of the
//! input. Input may be a byte slice or a seekable stream; the structure
//! may be embedded in a larger file, in which case the caller supplies the
//! offset where it begins.

use crate::decoder::TlvDecoder;
use crate::node::TlvNode;
use asn1_core::{Asn1Error, Asn1Result, DecoderConfig};
use std::io::{Read, Seek, SeekFrom};

/// Parse all top-level nodes of `data` starting at `offset`
///
/// # Arguments
/// * `data` - Buffer holding the encoded structure, possibly inside a larger file
/// * `offset` - Position of the first tag byte in `data`
///
/// # Returns
/// Returns the sibling nodes from `offset` to the end of `data`, in order.
///
/// # Error Handling
/// - [`Asn1Error::InvalidInput`] for empty input or `offset >= data.len()`
/// - any decode error of a node; one malformed node fails the whole parse
pub fn parse(data: &[u8], offset: usize) -> Asn1Result<Vec<TlvNode>> {
    Asn1Parser::new().parse(data, offset)
}

/// Parse with a custom decoder configuration
pub fn parse_with_config(
    data: &[u8],
    offset: usize,
    config: &DecoderConfig,
) -> Asn1Result<Vec<TlvNode>> {
    Asn1Parser::with_config(config.clone()).parse(data, offset)
}

/// Parse all top-level nodes of a seekable stream starting at `offset`
///
/// The stream is read from `offset` to its end.
pub fn parse_reader<R: Read + Seek>(reader: &mut R, offset: u64) -> Asn1Result<Vec<TlvNode>> {
    Asn1Parser::new().parse_reader(reader, offset)
}

/// Reusable parser holding a decoder configuration
#[derive(Debug, Clone, Default)]
pub struct Asn1Parser {
    config: DecoderConfig,
}

impl Asn1Parser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Parser configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Parse all top-level nodes of `data` starting at `offset`
    pub fn parse(&self, data: &[u8], offset: usize) -> Asn1Result<Vec<TlvNode>> {
        check_bounds(data.len() as u64, offset as u64)?;

        let mut decoder = TlvDecoder::with_config(&data[offset..], self.config.clone());
        let nodes = decoder.decode_all().inspect_err(|e| {
            log::debug!("parse of {} bytes at offset {} failed: {}", data.len(), offset, e);
        })?;
        log::trace!("parsed {} top-level nodes", nodes.len());
        Ok(nodes)
    }

    /// Parse all top-level nodes of a seekable stream starting at `offset`
    pub fn parse_reader<R: Read + Seek>(&self, reader: &mut R, offset: u64) -> Asn1Result<Vec<TlvNode>> {
        let len = reader.seek(SeekFrom::End(0))?;
        check_bounds(len, offset)?;

        reader.seek(SeekFrom::Start(offset))?;
        let mut data = Vec::with_capacity((len - offset) as usize);
        reader.read_to_end(&mut data)?;
        self.parse(&data, 0)
    }
}

fn check_bounds(len: u64, offset: u64) -> Asn1Result<()> {
    if len == 0 {
        return Err(Asn1Error::InvalidInput("input is empty".to_string()));
    }
    if offset >= len {
        return Err(Asn1Error::InvalidInput(format!(
            "offset {} outside input of {} bytes",
            offset, len
        )));
    }
    Ok(())
}
