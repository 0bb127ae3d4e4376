//! Object Identifier type

use crate::arcs::{decode_arcs, encode_arcs, split_first_arc};
use crate::notation;
use crate::registry::REGISTRY;
use asn1_core::{Asn1Error, Asn1Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Object Identifier
///
/// Holds fully split arcs: the first arc is the root (0, 1 or 2).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Oid {
    arcs: Vec<u64>,
}

impl Oid {
    /// Create an OID from arc values
    pub fn new(arcs: impl IntoIterator<Item = u64>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arc values
    pub fn from_slice(arcs: &[u64]) -> Self {
        Self {
            arcs: arcs.to_vec(),
        }
    }

    /// Parse an OID from the payload of an OBJECT IDENTIFIER node
    ///
    /// # Errors
    /// Returns [`Asn1Error::InvalidOid`] for an empty payload or a payload
    /// that does not form a complete arc sequence.
    pub fn from_der(value: &[u8]) -> Asn1Result<Self> {
        if value.is_empty() {
            return Err(Asn1Error::InvalidOid("empty encoding".to_string()));
        }
        let raw = decode_arcs(value, value.len() as u64)?;
        Ok(Self {
            arcs: split_first_arc(&raw),
        })
    }

    /// Encode the OID as an OBJECT IDENTIFIER payload
    ///
    /// Returns `None` if the OID has fewer than two arcs or its first two
    /// arcs cannot be combined.
    pub fn to_der(&self) -> Option<Vec<u8>> {
        encode_arcs(&self.arcs)
    }

    /// Arc values
    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }

    /// Number of arcs
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Whether the OID has no arcs
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Registered name of this exact OID, e.g. `Common-Name` for `2.5.4.3`
    pub fn name(&self) -> Option<&'static str> {
        REGISTRY.label(&self.arcs)
    }

    /// Dot notation, `None` when empty
    pub fn to_dot_notation(&self) -> Option<String> {
        notation::dot_notation(&self.arcs)
    }

    /// OID-IRI notation, `None` when empty
    pub fn to_oid_iri(&self) -> Option<String> {
        notation::oid_iri_notation(&self.arcs)
    }

    /// Modified OID-IRI notation, `None` when empty
    pub fn to_modified_oid_iri(&self) -> Option<String> {
        notation::modified_oid_iri_notation(&self.arcs)
    }

    /// ASN.1 notation; not generated, always `None`
    pub fn to_asn1_notation(&self) -> Option<String> {
        notation::asn1_notation(&self.arcs)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.arcs.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", arc)?;
        }
        Ok(())
    }
}

impl FromStr for Oid {
    type Err = Asn1Error;

    /// Parse dot notation such as `1.2.840.113549`
    fn from_str(s: &str) -> Asn1Result<Self> {
        if s.is_empty() {
            return Ok(Self { arcs: Vec::new() });
        }
        let arcs = s
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| Asn1Error::InvalidOid(format!("invalid arc '{}' in '{}'", part, s)))
            })
            .collect::<Asn1Result<Vec<_>>>()?;
        Ok(Self { arcs })
    }
}

impl From<&[u64]> for Oid {
    fn from(arcs: &[u64]) -> Self {
        Self::from_slice(arcs)
    }
}

impl AsRef<[u64]> for Oid {
    fn as_ref(&self) -> &[u64] {
        &self.arcs
    }
}
