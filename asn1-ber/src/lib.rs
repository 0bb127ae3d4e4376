//! DER/BER TLV processing
//!
//! This crate decodes Tag-Length-Value structures into a tree of
//! [`TlvNode`]s, writes trees back out in DER form, and renders them as
//! indented human-readable text.
//!
//! - `length`: definite-length field codec (short and long form)
//! - `decoder`: recursive TLV decoder with depth and length limits
//! - `encoder`: DER encoder for decoded or hand-built trees
//! - `parser`: top-level entry points over byte slices and seekable streams
//! - `format`: text rendering of nodes
//!
//! # Usage Example
//!
//! ```rust
//! use asn1_ber::{format_nodes, parse};
//!
//! let nodes = parse(&[0x30, 0x03, 0x01, 0x01, 0xFF], 0).unwrap();
//! assert_eq!(
//!     format_nodes(&nodes),
//!     "Type: SEQUENCE, Length: 3, Value:\n  Type: BOOLEAN, Length: 1, Value: True"
//! );
//! ```
//!
//! # TODO
//!
//! - [x] 单字节标签、定长长度（短格式与 1-8 字节长格式）
//! - [x] 构造类型递归解码，深度与长度限制
//! - [x] DER 重新编码
//! - [ ] 多字节标签号（0x1F 转义）
//! - [ ] BER 不定长长度（0x80）

pub mod decoder;
pub mod encoder;
pub mod format;
pub mod length;
pub mod node;
pub mod parser;

pub use decoder::TlvDecoder;
pub use encoder::{encode_node, TlvEncoder};
pub use format::{format_node, format_nodes, TlvFormatter};
pub use length::{decode_length, encode_length, encode_length_with_width};
pub use node::{TlvNode, TlvValue};
pub use parser::{parse, parse_reader, parse_with_config, Asn1Parser};
