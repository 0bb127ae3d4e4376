//! asn1-tlv - DER/BER TLV decoder with OID notation support
//!
//! Decodes ASN.1 Tag-Length-Value structures (certificates, keys, any DER
//! blob) into a tree, resolves OBJECT IDENTIFIER payloads against a
//! built-in arc registry, and renders the result as indented text.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `asn1-core`: Tag model, error handling, and configuration
//! - `asn1-oid`: OID arc decoding, registry, and notations
//! - `asn1-ber`: Length codec, TLV decoder/encoder, parser, and formatter
//!
//! # Implementation Status
//!
//! ## ✅ 已完成
//! - 标签分解（类别、构造位、编号）
//! - 长度编码/解码（短格式、长格式 1-8 字节）
//! - TLV 递归解码与 DER 编码
//! - OID 解码、点分表示、OID-IRI 与修改版 OID-IRI
//! - 文本格式化输出
//!
//! ## 📋 待实现
//! - ASN.1 值表示法 (`{ iso(1) member-body(2) ... }`)
//! - 多字节标签与不定长长度
//!
//! # Usage
//!
//! ```rust
//! use asn1_tlv::{format_nodes, parse, Tag};
//!
//! let nodes = parse(&[0x06, 0x03, 0x55, 0x04, 0x03], 0).unwrap();
//! assert_eq!(nodes[0].tag(), Tag::OBJECT_IDENTIFIER);
//! println!("{}", format_nodes(&nodes));
//! ```

// Re-export core types
pub use asn1_core::{
    Asn1Error, Asn1Result, DecoderConfig, FormatterConfig, Tag, TagClass,
};

// Re-export OID API
pub use asn1_oid::{
    asn1_notation, decode_arcs, dot_notation, encode_arcs, modified_oid_iri_notation,
    oid_iri_notation, split_first_arc, Oid, REGISTRY,
};

// Re-export TLV API
pub use asn1_ber::{
    decode_length, encode_length, encode_length_with_width, encode_node, format_node,
    format_nodes, parse, parse_reader, parse_with_config, Asn1Parser, TlvDecoder, TlvEncoder,
    TlvFormatter, TlvNode, TlvValue,
};

/// OID registry and notation internals
pub mod oid {
    pub use asn1_oid::*;
}

/// TLV codec and formatter internals
pub mod ber {
    pub use asn1_ber::*;
}
