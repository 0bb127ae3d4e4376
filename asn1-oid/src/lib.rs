//! Object identifier processing for ASN.1 TLV decoding
//!
//! This crate turns the payload of an OBJECT IDENTIFIER node into arcs and
//! renders those arcs as dot notation, OID-IRI notation, or the modified
//! OID-IRI notation used for display.
//!
//! # Usage Example
//!
//! ```rust
//! use asn1_oid::{decode_arcs, split_first_arc, oid_iri_notation};
//!
//! let raw = decode_arcs(&[0x55, 0x04, 0x03], 3).unwrap();
//! let arcs = split_first_arc(&raw);
//! assert_eq!(
//!     oid_iri_notation(&arcs).as_deref(),
//!     Some("/Joint-ISO-ITU-T/DS/Attribute-Type/Common-Name")
//! );
//! ```

pub mod arcs;
pub mod notation;
pub mod oid;
pub mod registry;

pub use arcs::{decode_arcs, encode_arcs, split_first_arc};
pub use notation::{asn1_notation, dot_notation, modified_oid_iri_notation, oid_iri_notation};
pub use oid::Oid;
pub use registry::{ArcTrie, Segment, REGISTRY};
