//! Core types and utilities for ASN.1 TLV decoding
//!
//! This crate provides the tag model, error handling, and configuration
//! shared by the OID and BER crates of this workspace.

pub mod config;
pub mod error;
pub mod tag;

pub use config::{DecoderConfig, FormatterConfig};
pub use error::{Asn1Error, Asn1Result};
pub use tag::{Tag, TagClass};
