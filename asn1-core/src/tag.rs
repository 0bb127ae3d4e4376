//! Tag model for BER/DER TLV nodes
//!
//! The identifier octet of a TLV is decomposed into its three fields:
//!
//! ```text
//! Bits: 8 7 6 5 4 3 2 1
//!       C C P T T T T T
//! ```
//!
//! - CC = Class (00=Universal, 01=Application, 10=Context, 11=Private)
//! - P = Primitive (0) or Constructed (1)
//! - TTTTT = Tag number (0-30), or 11111 for the multi-byte escape
//!
//! Only single-byte identifiers are accepted. The number is kept as `u32`
//! so the multi-byte form can be added without changing the layout.

use crate::error::{Asn1Error, Asn1Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit marking a constructed encoding
pub const CONSTRUCTED_BIT: u8 = 0x20;

/// Low five bits of the identifier octet
const NUMBER_MASK: u8 = 0x1F;

/// Tag class (bits 8-7 of the identifier octet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagClass {
    /// Universal class (00)
    Universal = 0,
    /// Application class (01)
    Application = 1,
    /// Context-specific class (10)
    ContextSpecific = 2,
    /// Private class (11)
    Private = 3,
}

impl TagClass {
    /// Get tag class from bits 8-7 of an identifier octet
    pub fn from_bits(byte: u8) -> Self {
        match (byte >> 6) & 0x03 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        }
    }

    /// Convert tag class to bits (for encoding)
    pub fn to_bits(self) -> u8 {
        (self as u8) << 6
    }
}

/// Tag of a TLV node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    class: TagClass,
    constructed: bool,
    number: u32,
}

impl Tag {
    pub const END_OF_CONTENTS: Tag = Tag::universal(false, 0);
    pub const BOOLEAN: Tag = Tag::universal(false, 1);
    pub const INTEGER: Tag = Tag::universal(false, 2);
    pub const BIT_STRING: Tag = Tag::universal(false, 3);
    pub const OCTET_STRING: Tag = Tag::universal(false, 4);
    pub const NULL: Tag = Tag::universal(false, 5);
    pub const OBJECT_IDENTIFIER: Tag = Tag::universal(false, 6);
    pub const ENUMERATED: Tag = Tag::universal(false, 10);
    pub const UTF8_STRING: Tag = Tag::universal(false, 12);
    pub const SEQUENCE: Tag = Tag::universal(true, 16);
    pub const SET: Tag = Tag::universal(true, 17);
    pub const NUMERIC_STRING: Tag = Tag::universal(false, 18);
    pub const PRINTABLE_STRING: Tag = Tag::universal(false, 19);
    pub const TELETEX_STRING: Tag = Tag::universal(false, 20);
    pub const IA5_STRING: Tag = Tag::universal(false, 22);
    pub const UTC_TIME: Tag = Tag::universal(false, 23);
    pub const GENERALIZED_TIME: Tag = Tag::universal(false, 24);
    pub const VISIBLE_STRING: Tag = Tag::universal(false, 26);
    pub const BMP_STRING: Tag = Tag::universal(false, 30);

    /// Create a new tag
    pub const fn new(class: TagClass, constructed: bool, number: u32) -> Self {
        Self {
            class,
            constructed,
            number,
        }
    }

    /// Create a Universal class tag
    pub const fn universal(constructed: bool, number: u32) -> Self {
        Self::new(TagClass::Universal, constructed, number)
    }

    /// Create an Application class tag
    pub const fn application(constructed: bool, number: u32) -> Self {
        Self::new(TagClass::Application, constructed, number)
    }

    /// Create a Context-specific class tag
    pub const fn context_specific(constructed: bool, number: u32) -> Self {
        Self::new(TagClass::ContextSpecific, constructed, number)
    }

    /// Create a Private class tag
    pub const fn private(constructed: bool, number: u32) -> Self {
        Self::new(TagClass::Private, constructed, number)
    }

    /// Decode a tag from a single identifier octet
    ///
    /// # Errors
    /// Returns [`Asn1Error::UnsupportedTag`] for the multi-byte escape
    /// (all five number bits set).
    pub fn from_byte(byte: u8) -> Asn1Result<Self> {
        let number = byte & NUMBER_MASK;
        if number == NUMBER_MASK {
            return Err(Asn1Error::UnsupportedTag(byte));
        }
        Ok(Self::new(
            TagClass::from_bits(byte),
            byte & CONSTRUCTED_BIT != 0,
            number as u32,
        ))
    }

    /// Highest tag number that fits the single-octet identifier form
    pub const MAX_SINGLE_BYTE_NUMBER: u32 = 30;

    /// Whether the tag number fits the single-octet identifier form
    ///
    /// Always true for tags produced by [`Tag::from_byte`].
    pub fn is_single_byte(&self) -> bool {
        self.number <= Self::MAX_SINGLE_BYTE_NUMBER
    }

    /// Encode the tag back to its identifier octet
    ///
    /// Only exact when [`Tag::is_single_byte`] holds. Larger numbers keep
    /// just their low five bits, so the result does not decode back to the
    /// same tag; encoders must check first.
    pub fn to_byte(&self) -> u8 {
        let constructed = if self.constructed { CONSTRUCTED_BIT } else { 0 };
        self.class.to_bits() | constructed | (self.number as u8 & NUMBER_MASK)
    }

    /// Get tag class
    pub fn class(&self) -> TagClass {
        self.class
    }

    /// Check if tag is constructed
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Get tag number
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Whether this is the end-of-contents marker (identifier octet 0)
    pub fn is_end_of_contents(&self) -> bool {
        *self == Self::END_OF_CONTENTS
    }

    /// Whether this is a universal tag with the given number, either form
    pub fn is_universal(&self, number: u32) -> bool {
        self.class == TagClass::Universal && self.number == number
    }

    /// Name of the universal type, if this is a known universal tag
    pub fn universal_name(&self) -> Option<&'static str> {
        if self.class != TagClass::Universal {
            return None;
        }
        let name = match self.number {
            0 => "END OF CONTENTS",
            1 => "BOOLEAN",
            2 => "INTEGER",
            3 => "BIT STRING",
            4 => "OCTET STRING",
            5 => "NULL",
            6 => "OBJECT IDENTIFIER",
            7 => "OBJECT DESCRIPTOR",
            8 => "EXTERNAL",
            9 => "REAL",
            10 => "ENUMERATED",
            11 => "EMBEDDED PDV",
            12 => "UTF8String",
            13 => "RELATIVE-OID",
            16 => "SEQUENCE",
            17 => "SET",
            18 => "NumericString",
            19 => "PrintableString",
            20 => "TeletexString",
            21 => "VideotexString",
            22 => "IA5String",
            23 => "UTCTime",
            24 => "GeneralizedTime",
            25 => "GraphicString",
            26 => "VisibleString",
            27 => "GeneralString",
            28 => "UniversalString",
            29 => "CHARACTER STRING",
            30 => "BMPString",
            _ => return None,
        };
        Some(name)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag.to_byte()
    }
}

impl TryFrom<u8> for Tag {
    type Error = Asn1Error;

    fn try_from(byte: u8) -> Asn1Result<Self> {
        Tag::from_byte(byte)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.universal_name() {
            Some(name) => {
                f.write_str(name)?;
                // SEQUENCE and SET are constructed by definition
                if self.constructed && self.number != 16 && self.number != 17 {
                    f.write_str(" (constructed)")?;
                }
                Ok(())
            }
            None => {
                let class = match self.class {
                    TagClass::Universal => "UNIVERSAL",
                    TagClass::Application => "APPLICATION",
                    TagClass::ContextSpecific => "CONTEXT",
                    TagClass::Private => "PRIVATE",
                };
                write!(f, "[{} {}]", class, self.number)?;
                if self.constructed {
                    f.write_str(" (constructed)")?;
                }
                Ok(())
            }
        }
    }
}
