//! Static registry of symbolic OID arc names
//!
//! Names are listed as `(arc path, label)` pairs and compiled once into a
//! trie keyed by arc value. Labels follow the Unicode labels of the
//! international OID tree where one is assigned, and the customary
//! identifier otherwise. Coverage is partial by nature: any arc that is
//! not listed resolves to its number.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One resolved path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Arc with a registered name
    Label(&'static str),
    /// Arc without a registered name
    Number(u64),
}

#[derive(Debug, Default)]
struct ArcNode {
    label: Option<&'static str>,
    children: HashMap<u64, ArcNode>,
}

/// Prefix trie over arc sequences
#[derive(Debug, Default)]
pub struct ArcTrie {
    root: ArcNode,
    entries: usize,
}

impl ArcTrie {
    /// Build a trie from `(path, label)` entries
    ///
    /// Missing intermediate arcs are inserted without a label.
    pub fn from_entries(entries: &[(&[u64], &'static str)]) -> Self {
        let mut trie = Self::default();
        for &(path, label) in entries {
            let mut node = &mut trie.root;
            for &arc in path {
                node = node.children.entry(arc).or_default();
            }
            node.label = Some(label);
            trie.entries += 1;
        }
        trie
    }

    /// Number of labelled entries
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Whether the trie has no entries
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Resolve arcs into path segments
    ///
    /// Walks the trie while arcs match; once an arc is unknown, that arc
    /// and every arc after it are emitted as numbers.
    pub fn resolve(&self, arcs: &[u64]) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(arcs.len());
        let mut node = Some(&self.root);

        for &arc in arcs {
            match node.and_then(|n| n.children.get(&arc)) {
                Some(child) => {
                    segments.push(match child.label {
                        Some(label) => Segment::Label(label),
                        None => Segment::Number(arc),
                    });
                    node = Some(child);
                }
                None => {
                    segments.push(Segment::Number(arc));
                    node = None;
                }
            }
        }

        segments
    }

    /// Label registered for exactly this arc path
    pub fn label(&self, arcs: &[u64]) -> Option<&'static str> {
        let mut node = &self.root;
        for arc in arcs {
            node = node.children.get(arc)?;
        }
        node.label
    }
}

/// Shared registry, compiled on first use
pub static REGISTRY: Lazy<ArcTrie> = Lazy::new(|| {
    let trie = ArcTrie::from_entries(ENTRIES);
    log::debug!("OID registry compiled with {} entries", trie.len());
    trie
});

/// ITU-T Recommendation series letters, `0.0.1` (A) to `0.0.26` (Z)
pub const RECOMMENDATION_SERIES: std::ops::RangeInclusive<u64> = 1..=26;

/// Registered arc names
#[rustfmt::skip]
static ENTRIES: &[(&[u64], &str)] = &[
    // ITU-T
    (&[0], "ITU-T"),
    (&[0, 0], "Recommendation"),
    (&[0, 0, 1], "A"),
    (&[0, 0, 2], "B"),
    (&[0, 0, 3], "C"),
    (&[0, 0, 4], "D"),
    (&[0, 0, 5], "E"),
    (&[0, 0, 6], "F"),
    (&[0, 0, 7], "G"),
    (&[0, 0, 8], "H"),
    (&[0, 0, 9], "I"),
    (&[0, 0, 10], "J"),
    (&[0, 0, 11], "K"),
    (&[0, 0, 12], "L"),
    (&[0, 0, 13], "M"),
    (&[0, 0, 14], "N"),
    (&[0, 0, 15], "O"),
    (&[0, 0, 16], "P"),
    (&[0, 0, 17], "Q"),
    (&[0, 0, 18], "R"),
    (&[0, 0, 19], "S"),
    (&[0, 0, 20], "T"),
    (&[0, 0, 21], "U"),
    (&[0, 0, 22], "V"),
    (&[0, 0, 23], "W"),
    (&[0, 0, 24], "X"),
    (&[0, 0, 25], "Y"),
    (&[0, 0, 26], "Z"),
    (&[0, 2], "Administration"),
    (&[0, 3], "Network-Operator"),
    (&[0, 4], "Identified-Organization"),
    (&[0, 4, 0], "ETSI"),
    (&[0, 4, 0, 127], "Reserved"),
    (&[0, 4, 0, 127, 0], "ETSI-Identified-Organization"),
    (&[0, 4, 0, 127, 0, 7], "BSI-de"),
    (&[0, 4, 0, 1862], "QC-Profile"),
    (&[0, 4, 0, 1862, 1], "QCS"),
    (&[0, 4, 0, 1862, 1, 1], "QC-Compliance"),
    (&[0, 4, 0, 1862, 1, 4], "QC-SSCD"),
    (&[0, 4, 0, 1862, 1, 6], "QC-Type"),
    (&[0, 5], "R-Recommendation"),
    (&[0, 9], "Data"),
    (&[0, 9, 2342], "PSS"),
    (&[0, 9, 2342, 19200300], "UCL"),
    (&[0, 9, 2342, 19200300, 100], "Pilot"),
    (&[0, 9, 2342, 19200300, 100, 1], "Pilot-Attribute-Type"),
    (&[0, 9, 2342, 19200300, 100, 1, 1], "UID"),
    (&[0, 9, 2342, 19200300, 100, 1, 3], "Mail"),
    (&[0, 9, 2342, 19200300, 100, 1, 25], "Domain-Component"),
    (&[0, 9, 2342, 19200300, 100, 3], "Pilot-Attribute-Syntax"),
    (&[0, 9, 2342, 19200300, 100, 4], "Pilot-Object-Class"),
    (&[0, 9, 2342, 19200300, 100, 10], "Pilot-Group"),

    // ISO
    (&[1], "ISO"),
    (&[1, 0], "Standard"),
    (&[1, 0, 8571], "FTAM"),
    (&[1, 0, 9796], "Digital-Signature-With-Message-Recovery"),
    (&[1, 0, 10118], "Hash-Functions"),
    (&[1, 0, 14888], "Digital-Signature-With-Appendix"),
    (&[1, 1], "Registration-Authority"),
    (&[1, 2], "Member-Body"),
    (&[1, 2, 36], "AU"),
    (&[1, 2, 40], "AT"),
    (&[1, 2, 56], "BE"),
    (&[1, 2, 124], "CA"),
    (&[1, 2, 156], "CN"),
    (&[1, 2, 203], "CZ"),
    (&[1, 2, 208], "DK"),
    (&[1, 2, 246], "FI"),
    (&[1, 2, 250], "FR"),
    (&[1, 2, 276], "DE"),
    (&[1, 2, 380], "IT"),
    (&[1, 2, 392], "JP"),
    (&[1, 2, 410], "KR"),
    (&[1, 2, 528], "NL"),
    (&[1, 2, 578], "NO"),
    (&[1, 2, 616], "PL"),
    (&[1, 2, 643], "RU"),
    (&[1, 2, 643, 2], "Russian-Federation-Organizations"),
    (&[1, 2, 643, 2, 2], "Cryptocom"),
    (&[1, 2, 724], "ES"),
    (&[1, 2, 752], "SE"),
    (&[1, 2, 756], "CH"),
    (&[1, 2, 826], "GB"),
    (&[1, 2, 840], "US"),
    (&[1, 2, 840, 10008], "DICOM"),
    (&[1, 2, 840, 10040], "X9-57"),
    (&[1, 2, 840, 10040, 2], "Holdinstruction"),
    (&[1, 2, 840, 10040, 4], "X9Algorithm"),
    (&[1, 2, 840, 10040, 4, 1], "DSA"),
    (&[1, 2, 840, 10040, 4, 3], "DSA-With-SHA1"),
    (&[1, 2, 840, 10045], "ANSI-X962"),
    (&[1, 2, 840, 10045, 1], "Field-Type"),
    (&[1, 2, 840, 10045, 1, 1], "Prime-Field"),
    (&[1, 2, 840, 10045, 1, 2], "Characteristic-Two-Field"),
    (&[1, 2, 840, 10045, 2], "Key-Type"),
    (&[1, 2, 840, 10045, 2, 1], "EC-Public-Key"),
    (&[1, 2, 840, 10045, 3], "Curves"),
    (&[1, 2, 840, 10045, 3, 0], "Characteristic-Two"),
    (&[1, 2, 840, 10045, 3, 1], "Prime"),
    (&[1, 2, 840, 10045, 3, 1, 1], "Prime192v1"),
    (&[1, 2, 840, 10045, 3, 1, 7], "Prime256v1"),
    (&[1, 2, 840, 10045, 4], "Signatures"),
    (&[1, 2, 840, 10045, 4, 1], "ECDSA-With-SHA1"),
    (&[1, 2, 840, 10045, 4, 3], "ECDSA-With-SHA2"),
    (&[1, 2, 840, 10045, 4, 3, 1], "ECDSA-With-SHA224"),
    (&[1, 2, 840, 10045, 4, 3, 2], "ECDSA-With-SHA256"),
    (&[1, 2, 840, 10045, 4, 3, 3], "ECDSA-With-SHA384"),
    (&[1, 2, 840, 10045, 4, 3, 4], "ECDSA-With-SHA512"),
    (&[1, 2, 840, 10046], "ANSI-X942"),
    (&[1, 2, 840, 10046, 2], "Number-Type"),
    (&[1, 2, 840, 10046, 2, 1], "DH-Public-Number"),
    (&[1, 2, 840, 113533], "Nortel"),
    (&[1, 2, 840, 113533, 7], "Entrust"),
    (&[1, 2, 840, 113549], "RSADSI"),
    (&[1, 2, 840, 113549, 1], "PKCS"),
    (&[1, 2, 840, 113549, 1, 1], "PKCS-1"),
    (&[1, 2, 840, 113549, 1, 1, 1], "RSA-Encryption"),
    (&[1, 2, 840, 113549, 1, 1, 2], "MD2-With-RSA-Encryption"),
    (&[1, 2, 840, 113549, 1, 1, 4], "MD5-With-RSA-Encryption"),
    (&[1, 2, 840, 113549, 1, 1, 5], "SHA1-With-RSA-Encryption"),
    (&[1, 2, 840, 113549, 1, 1, 7], "RSAES-OAEP"),
    (&[1, 2, 840, 113549, 1, 1, 8], "MGF1"),
    (&[1, 2, 840, 113549, 1, 1, 9], "P-Specified"),
    (&[1, 2, 840, 113549, 1, 1, 10], "RSASSA-PSS"),
    (&[1, 2, 840, 113549, 1, 1, 11], "SHA256-With-RSA-Encryption"),
    (&[1, 2, 840, 113549, 1, 1, 12], "SHA384-With-RSA-Encryption"),
    (&[1, 2, 840, 113549, 1, 1, 13], "SHA512-With-RSA-Encryption"),
    (&[1, 2, 840, 113549, 1, 1, 14], "SHA224-With-RSA-Encryption"),
    (&[1, 2, 840, 113549, 1, 3], "PKCS-3"),
    (&[1, 2, 840, 113549, 1, 3, 1], "DH-Key-Agreement"),
    (&[1, 2, 840, 113549, 1, 5], "PKCS-5"),
    (&[1, 2, 840, 113549, 1, 5, 3], "PBE-With-MD5-And-DES-CBC"),
    (&[1, 2, 840, 113549, 1, 5, 10], "PBE-With-SHA1-And-DES-CBC"),
    (&[1, 2, 840, 113549, 1, 5, 12], "PBKDF2"),
    (&[1, 2, 840, 113549, 1, 5, 13], "PBES2"),
    (&[1, 2, 840, 113549, 1, 5, 14], "PBMAC1"),
    (&[1, 2, 840, 113549, 1, 7], "PKCS-7"),
    (&[1, 2, 840, 113549, 1, 7, 1], "Data"),
    (&[1, 2, 840, 113549, 1, 7, 2], "Signed-Data"),
    (&[1, 2, 840, 113549, 1, 7, 3], "Enveloped-Data"),
    (&[1, 2, 840, 113549, 1, 7, 4], "Signed-And-Enveloped-Data"),
    (&[1, 2, 840, 113549, 1, 7, 5], "Digested-Data"),
    (&[1, 2, 840, 113549, 1, 7, 6], "Encrypted-Data"),
    (&[1, 2, 840, 113549, 1, 9], "PKCS-9"),
    (&[1, 2, 840, 113549, 1, 9, 1], "Email-Address"),
    (&[1, 2, 840, 113549, 1, 9, 2], "Unstructured-Name"),
    (&[1, 2, 840, 113549, 1, 9, 3], "Content-Type"),
    (&[1, 2, 840, 113549, 1, 9, 4], "Message-Digest"),
    (&[1, 2, 840, 113549, 1, 9, 5], "Signing-Time"),
    (&[1, 2, 840, 113549, 1, 9, 6], "Countersignature"),
    (&[1, 2, 840, 113549, 1, 9, 7], "Challenge-Password"),
    (&[1, 2, 840, 113549, 1, 9, 8], "Unstructured-Address"),
    (&[1, 2, 840, 113549, 1, 9, 14], "Extension-Request"),
    (&[1, 2, 840, 113549, 1, 9, 15], "SMIME-Capabilities"),
    (&[1, 2, 840, 113549, 1, 9, 16], "SMIME"),
    (&[1, 2, 840, 113549, 1, 9, 16, 1], "Content-Types"),
    (&[1, 2, 840, 113549, 1, 9, 16, 1, 4], "TST-Info"),
    (&[1, 2, 840, 113549, 1, 9, 16, 2], "Attributes"),
    (&[1, 2, 840, 113549, 1, 9, 16, 2, 12], "Signing-Certificate"),
    (&[1, 2, 840, 113549, 1, 9, 16, 2, 14], "Time-Stamp-Token"),
    (&[1, 2, 840, 113549, 1, 9, 16, 2, 47], "Signing-Certificate-V2"),
    (&[1, 2, 840, 113549, 1, 9, 20], "Friendly-Name"),
    (&[1, 2, 840, 113549, 1, 9, 21], "Local-Key-ID"),
    (&[1, 2, 840, 113549, 1, 9, 22], "Cert-Types"),
    (&[1, 2, 840, 113549, 1, 9, 22, 1], "X509-Certificate"),
    (&[1, 2, 840, 113549, 1, 9, 23], "CRL-Types"),
    (&[1, 2, 840, 113549, 1, 9, 23, 1], "X509-CRL"),
    (&[1, 2, 840, 113549, 1, 12], "PKCS-12"),
    (&[1, 2, 840, 113549, 1, 12, 1], "PBE-IDs"),
    (&[1, 2, 840, 113549, 1, 12, 1, 3], "PBE-With-SHA-And-3-Key-Triple-DES-CBC"),
    (&[1, 2, 840, 113549, 1, 12, 1, 6], "PBE-With-SHA-And-40-Bit-RC2-CBC"),
    (&[1, 2, 840, 113549, 1, 12, 10], "Bag-Types"),
    (&[1, 2, 840, 113549, 1, 12, 10, 1], "Bag-IDs"),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 1], "Key-Bag"),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 2], "PKCS8-Shrouded-Key-Bag"),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 3], "Cert-Bag"),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 4], "CRL-Bag"),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 5], "Secret-Bag"),
    (&[1, 2, 840, 113549, 1, 12, 10, 1, 6], "Safe-Contents-Bag"),
    (&[1, 2, 840, 113549, 2], "Digest-Algorithm"),
    (&[1, 2, 840, 113549, 2, 2], "MD2"),
    (&[1, 2, 840, 113549, 2, 4], "MD4"),
    (&[1, 2, 840, 113549, 2, 5], "MD5"),
    (&[1, 2, 840, 113549, 2, 7], "HMAC-With-SHA1"),
    (&[1, 2, 840, 113549, 2, 8], "HMAC-With-SHA224"),
    (&[1, 2, 840, 113549, 2, 9], "HMAC-With-SHA256"),
    (&[1, 2, 840, 113549, 2, 10], "HMAC-With-SHA384"),
    (&[1, 2, 840, 113549, 2, 11], "HMAC-With-SHA512"),
    (&[1, 2, 840, 113549, 3], "Encryption-Algorithm"),
    (&[1, 2, 840, 113549, 3, 2], "RC2-CBC"),
    (&[1, 2, 840, 113549, 3, 4], "RC4"),
    (&[1, 2, 840, 113549, 3, 7], "DES-EDE3-CBC"),
    (&[1, 2, 840, 113549, 3, 9], "RC5-CBC-Pad"),
    (&[1, 2, 840, 113556], "Microsoft"),
    (&[1, 2, 840, 113556, 1], "Active-Directory"),
    (&[1, 2, 840, 113556, 1, 4], "AD-Attribute"),
    (&[1, 2, 840, 113556, 1, 5], "AD-Class"),
    (&[1, 2, 840, 113635], "Apple"),
    (&[1, 2, 840, 113635, 100], "Apple-Data-Security"),
    (&[1, 3], "Identified-Organization"),
    (&[1, 3, 6], "DoD"),
    (&[1, 3, 6, 1], "Internet"),
    (&[1, 3, 6, 1, 1], "Directory"),
    (&[1, 3, 6, 1, 2], "Mgmt"),
    (&[1, 3, 6, 1, 2, 1], "MIB-2"),
    (&[1, 3, 6, 1, 2, 1, 1], "System"),
    (&[1, 3, 6, 1, 2, 1, 2], "Interfaces"),
    (&[1, 3, 6, 1, 2, 1, 4], "IP"),
    (&[1, 3, 6, 1, 2, 1, 6], "TCP"),
    (&[1, 3, 6, 1, 2, 1, 7], "UDP"),
    (&[1, 3, 6, 1, 2, 1, 11], "SNMP"),
    (&[1, 3, 6, 1, 3], "Experimental"),
    (&[1, 3, 6, 1, 4], "Private"),
    (&[1, 3, 6, 1, 4, 1], "Enterprise"),
    (&[1, 3, 6, 1, 4, 1, 311], "Microsoft"),
    (&[1, 3, 6, 1, 4, 1, 311, 2], "Authenticode"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1], "SPC"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 4], "SPC-Indirect-Data"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 10], "SPC-Agency-Info"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 11], "SPC-Statement-Type"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 12], "SPC-SP-Opus-Info"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 14], "SPC-Cert-Extensions"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 15], "SPC-PE-Image-Data"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 21], "Individual-Code-Signing"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 22], "Commercial-Code-Signing"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 25], "SPC-Link"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 26], "SPC-Minimal-Criteria-Info"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 27], "SPC-Financial-Criteria-Info"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 28], "SPC-Link-Type-2"),
    (&[1, 3, 6, 1, 4, 1, 311, 2, 1, 30], "SPC-Siginfo"),
    (&[1, 3, 6, 1, 4, 1, 311, 3], "Timestamp"),
    (&[1, 3, 6, 1, 4, 1, 311, 3, 2, 1], "Timestamp-Request"),
    (&[1, 3, 6, 1, 4, 1, 311, 3, 3, 1], "RFC3161-Counter-Sign"),
    (&[1, 3, 6, 1, 4, 1, 311, 10], "Crypto-2"),
    (&[1, 3, 6, 1, 4, 1, 311, 10, 1], "CTL"),
    (&[1, 3, 6, 1, 4, 1, 311, 10, 3], "Key-Purpose"),
    (&[1, 3, 6, 1, 4, 1, 311, 10, 3, 1], "Cert-Trust-List-Signing"),
    (&[1, 3, 6, 1, 4, 1, 311, 10, 3, 3], "Server-Gated-Crypto"),
    (&[1, 3, 6, 1, 4, 1, 311, 10, 3, 4], "Encrypted-File-System"),
    (&[1, 3, 6, 1, 4, 1, 311, 10, 3, 6], "NT5-Crypto"),
    (&[1, 3, 6, 1, 4, 1, 311, 10, 3, 13], "Lifetime-Signing"),
    (&[1, 3, 6, 1, 4, 1, 311, 20], "Enrollment-Infrastructure"),
    (&[1, 3, 6, 1, 4, 1, 311, 20, 2], "Certificate-Template-Name"),
    (&[1, 3, 6, 1, 4, 1, 311, 20, 2, 2], "Smart-Card-Logon"),
    (&[1, 3, 6, 1, 4, 1, 311, 21], "Certificate-Services"),
    (&[1, 3, 6, 1, 4, 1, 311, 21, 1], "CA-Version"),
    (&[1, 3, 6, 1, 4, 1, 311, 21, 7], "Certificate-Template"),
    (&[1, 3, 6, 1, 4, 1, 311, 21, 10], "Application-Policies"),
    (&[1, 3, 6, 1, 4, 1, 311, 60], "Certificate-Properties"),
    (&[1, 3, 6, 1, 4, 1, 311, 60, 2, 1, 1], "EV-Jurisdiction-Locality"),
    (&[1, 3, 6, 1, 4, 1, 311, 60, 2, 1, 2], "EV-Jurisdiction-State-Or-Province"),
    (&[1, 3, 6, 1, 4, 1, 311, 60, 2, 1, 3], "EV-Jurisdiction-Country"),
    (&[1, 3, 6, 1, 4, 1, 11129], "Google"),
    (&[1, 3, 6, 1, 4, 1, 11129, 2, 4, 2], "Embedded-SCT-List"),
    (&[1, 3, 6, 1, 5], "Security"),
    (&[1, 3, 6, 1, 5, 5], "Mechanisms"),
    (&[1, 3, 6, 1, 5, 5, 7], "PKIX"),
    (&[1, 3, 6, 1, 5, 5, 7, 1], "PE"),
    (&[1, 3, 6, 1, 5, 5, 7, 1, 1], "Authority-Info-Access"),
    (&[1, 3, 6, 1, 5, 5, 7, 1, 3], "QC-Statements"),
    (&[1, 3, 6, 1, 5, 5, 7, 1, 11], "Subject-Info-Access"),
    (&[1, 3, 6, 1, 5, 5, 7, 2], "QT"),
    (&[1, 3, 6, 1, 5, 5, 7, 2, 1], "CPS"),
    (&[1, 3, 6, 1, 5, 5, 7, 2, 2], "User-Notice"),
    (&[1, 3, 6, 1, 5, 5, 7, 3], "KP"),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 1], "Server-Auth"),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 2], "Client-Auth"),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 3], "Code-Signing"),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 4], "Email-Protection"),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 8], "Time-Stamping"),
    (&[1, 3, 6, 1, 5, 5, 7, 3, 9], "OCSP-Signing"),
    (&[1, 3, 6, 1, 5, 5, 7, 48], "AD"),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 1], "OCSP"),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 1, 1], "OCSP-Basic"),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 1, 2], "OCSP-Nonce"),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 1, 5], "OCSP-No-Check"),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 2], "CA-Issuers"),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 3], "Time-Stamping"),
    (&[1, 3, 6, 1, 5, 5, 7, 48, 5], "CA-Repository"),
    (&[1, 3, 6, 1, 6], "SNMPv2"),
    (&[1, 3, 6, 1, 7], "Mail"),
    (&[1, 3, 14], "OIW"),
    (&[1, 3, 14, 3], "Secsig"),
    (&[1, 3, 14, 3, 2], "Algorithms"),
    (&[1, 3, 14, 3, 2, 3], "MD5-With-RSA"),
    (&[1, 3, 14, 3, 2, 7], "DES-CBC"),
    (&[1, 3, 14, 3, 2, 26], "SHA1"),
    (&[1, 3, 14, 3, 2, 29], "SHA1-With-RSA-Signature"),
    (&[1, 3, 36], "TeleTrust"),
    (&[1, 3, 36, 3], "Algorithm"),
    (&[1, 3, 36, 3, 2], "Hash-Algorithm"),
    (&[1, 3, 36, 3, 2, 1], "RIPEMD-160"),
    (&[1, 3, 36, 3, 3, 2, 8], "EC-Sign"),
    (&[1, 3, 36, 3, 3, 2, 8, 1], "EC-Std-Curves-And-Generation"),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1], "Ellipticcurve"),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 7], "BrainpoolP256r1"),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 11], "BrainpoolP384r1"),
    (&[1, 3, 36, 3, 3, 2, 8, 1, 1, 13], "BrainpoolP512r1"),
    (&[1, 3, 101], "Thawte"),
    (&[1, 3, 101, 110], "X25519"),
    (&[1, 3, 101, 111], "X448"),
    (&[1, 3, 101, 112], "Ed25519"),
    (&[1, 3, 101, 113], "Ed448"),
    (&[1, 3, 132], "Certicom"),
    (&[1, 3, 132, 0], "Curve"),
    (&[1, 3, 132, 0, 10], "Secp256k1"),
    (&[1, 3, 132, 0, 33], "Secp224r1"),
    (&[1, 3, 132, 0, 34], "Secp384r1"),
    (&[1, 3, 132, 0, 35], "Secp521r1"),
    (&[1, 3, 132, 1], "Schemes"),

    // Joint ISO/ITU-T
    (&[2], "Joint-ISO-ITU-T"),
    (&[2, 0], "Presentation"),
    (&[2, 1], "ASN.1"),
    (&[2, 1, 0], "Specification"),
    (&[2, 1, 1], "Basic-Encoding"),
    (&[2, 1, 2], "BER-Derived"),
    (&[2, 1, 2, 0], "Canonical-Encoding"),
    (&[2, 1, 2, 1], "Distinguished-Encoding"),
    (&[2, 1, 3], "Packed-Encoding"),
    (&[2, 1, 4], "Encoding-Control-Notation"),
    (&[2, 1, 5], "XML-Encoding"),
    (&[2, 1, 6], "Octet-Encoding"),
    (&[2, 2], "Association-Control"),
    (&[2, 3], "Reliable-Transfer"),
    (&[2, 4], "Remote-Operations"),
    (&[2, 5], "DS"),
    (&[2, 5, 1], "Module"),
    (&[2, 5, 4], "Attribute-Type"),
    (&[2, 5, 4, 0], "Object-Class"),
    (&[2, 5, 4, 1], "Aliased-Entry-Name"),
    (&[2, 5, 4, 2], "Knowledge-Information"),
    (&[2, 5, 4, 3], "Common-Name"),
    (&[2, 5, 4, 4], "Surname"),
    (&[2, 5, 4, 5], "Serial-Number"),
    (&[2, 5, 4, 6], "Country-Name"),
    (&[2, 5, 4, 7], "Locality-Name"),
    (&[2, 5, 4, 8], "State-Or-Province-Name"),
    (&[2, 5, 4, 9], "Street-Address"),
    (&[2, 5, 4, 10], "Organization-Name"),
    (&[2, 5, 4, 11], "Organizational-Unit-Name"),
    (&[2, 5, 4, 12], "Title"),
    (&[2, 5, 4, 13], "Description"),
    (&[2, 5, 4, 15], "Business-Category"),
    (&[2, 5, 4, 17], "Postal-Code"),
    (&[2, 5, 4, 41], "Name"),
    (&[2, 5, 4, 42], "Given-Name"),
    (&[2, 5, 4, 43], "Initials"),
    (&[2, 5, 4, 44], "Generation-Qualifier"),
    (&[2, 5, 4, 45], "Unique-Identifier"),
    (&[2, 5, 4, 46], "DN-Qualifier"),
    (&[2, 5, 4, 65], "Pseudonym"),
    (&[2, 5, 4, 97], "Organization-Identifier"),
    (&[2, 5, 6], "Object-Class"),
    (&[2, 5, 8], "Algorithm"),
    (&[2, 5, 8, 1], "Encryption-Algorithm"),
    (&[2, 5, 8, 1, 1], "RSA"),
    (&[2, 5, 29], "Certificate-Extension"),
    (&[2, 5, 29, 9], "Subject-Directory-Attributes"),
    (&[2, 5, 29, 14], "Subject-Key-Identifier"),
    (&[2, 5, 29, 15], "Key-Usage"),
    (&[2, 5, 29, 16], "Private-Key-Usage-Period"),
    (&[2, 5, 29, 17], "Subject-Alt-Name"),
    (&[2, 5, 29, 18], "Issuer-Alt-Name"),
    (&[2, 5, 29, 19], "Basic-Constraints"),
    (&[2, 5, 29, 20], "CRL-Number"),
    (&[2, 5, 29, 21], "Reason-Code"),
    (&[2, 5, 29, 24], "Invalidity-Date"),
    (&[2, 5, 29, 27], "Delta-CRL-Indicator"),
    (&[2, 5, 29, 28], "Issuing-Distribution-Point"),
    (&[2, 5, 29, 29], "Certificate-Issuer"),
    (&[2, 5, 29, 30], "Name-Constraints"),
    (&[2, 5, 29, 31], "CRL-Distribution-Points"),
    (&[2, 5, 29, 32], "Certificate-Policies"),
    (&[2, 5, 29, 32, 0], "Any-Policy"),
    (&[2, 5, 29, 33], "Policy-Mappings"),
    (&[2, 5, 29, 35], "Authority-Key-Identifier"),
    (&[2, 5, 29, 36], "Policy-Constraints"),
    (&[2, 5, 29, 37], "Ext-Key-Usage"),
    (&[2, 5, 29, 37, 0], "Any-Extended-Key-Usage"),
    (&[2, 5, 29, 46], "Freshest-CRL"),
    (&[2, 5, 29, 54], "Inhibit-Any-Policy"),
    (&[2, 6], "MHS"),
    (&[2, 7], "CCR"),
    (&[2, 8], "OSI-Management"),
    (&[2, 9], "Transaction-Processing"),
    (&[2, 10], "DOR"),
    (&[2, 11], "Reference-Data-Transfer"),
    (&[2, 12], "Network-Layer"),
    (&[2, 13], "Transport-Layer"),
    (&[2, 14], "Database"),
    (&[2, 15], "MSG-Transfer"),
    (&[2, 16], "Country"),
    (&[2, 16, 124], "CA"),
    (&[2, 16, 156], "CN"),
    (&[2, 16, 276], "DE"),
    (&[2, 16, 392], "JP"),
    (&[2, 16, 826], "GB"),
    (&[2, 16, 840], "US"),
    (&[2, 16, 840, 1], "Organization"),
    (&[2, 16, 840, 1, 101], "Gov"),
    (&[2, 16, 840, 1, 101, 2], "DoD"),
    (&[2, 16, 840, 1, 101, 3], "CSOR"),
    (&[2, 16, 840, 1, 101, 3, 4], "NIST-Algorithm"),
    (&[2, 16, 840, 1, 101, 3, 4, 1], "AES"),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 1], "AES128-ECB"),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 2], "AES128-CBC-Pad"),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 5], "AES128-Wrap"),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 6], "AES128-GCM"),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 22], "AES192-CBC-Pad"),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 26], "AES192-GCM"),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 42], "AES256-CBC-Pad"),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 45], "AES256-Wrap"),
    (&[2, 16, 840, 1, 101, 3, 4, 1, 46], "AES256-GCM"),
    (&[2, 16, 840, 1, 101, 3, 4, 2], "Hash-Algs"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 1], "SHA256"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 2], "SHA384"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 3], "SHA512"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 4], "SHA224"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 5], "SHA512-224"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 6], "SHA512-256"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 7], "SHA3-224"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 8], "SHA3-256"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 9], "SHA3-384"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 10], "SHA3-512"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 11], "SHAKE128"),
    (&[2, 16, 840, 1, 101, 3, 4, 2, 12], "SHAKE256"),
    (&[2, 16, 840, 1, 101, 3, 4, 3], "Sig-Algs"),
    (&[2, 16, 840, 1, 101, 3, 4, 3, 1], "DSA-With-SHA224"),
    (&[2, 16, 840, 1, 101, 3, 4, 3, 2], "DSA-With-SHA256"),
    (&[2, 16, 840, 1, 101, 3, 4, 3, 10], "ECDSA-With-SHA3-256"),
    (&[2, 16, 840, 1, 101, 3, 4, 3, 14], "RSASSA-PKCS1-v1-5-With-SHA3-256"),
    (&[2, 16, 840, 1, 113730], "Netscape"),
    (&[2, 16, 840, 1, 113730, 1], "Cert-Extension"),
    (&[2, 16, 840, 1, 113730, 1, 1], "Cert-Type"),
    (&[2, 16, 840, 1, 113730, 1, 13], "Comment"),
    (&[2, 16, 840, 1, 113730, 2], "Data-Type"),
    (&[2, 16, 840, 1, 113730, 4, 1], "Step-Up"),
    (&[2, 16, 840, 1, 113733], "VeriSign"),
    (&[2, 16, 840, 1, 113733, 1, 7, 23, 3], "VeriSign-Class-3-Policy"),
    (&[2, 16, 840, 1, 113733, 1, 7, 23, 6], "VeriSign-EV-Policy"),
    (&[2, 16, 840, 1, 114412], "DigiCert"),
    (&[2, 16, 840, 1, 114412, 1, 1], "DigiCert-OV-Policy"),
    (&[2, 16, 840, 1, 114412, 2, 1], "DigiCert-EV-Policy"),
    (&[2, 17], "Registration-Procedures"),
    (&[2, 18], "Physical-Layer"),
    (&[2, 19], "Physical-Medium"),
    (&[2, 20], "MHEG"),
    (&[2, 21], "Genericupper-Layers-Security"),
    (&[2, 22], "Transport-Layer-Security-Protocol"),
    (&[2, 23], "International-Organizations"),
    (&[2, 23, 42], "SET"),
    (&[2, 23, 42, 0], "Content-Type"),
    (&[2, 23, 42, 3], "Attribute"),
    (&[2, 23, 42, 7], "Certificate-Extension"),
    (&[2, 23, 133], "TCG"),
    (&[2, 23, 133, 2], "TCG-Attribute"),
    (&[2, 23, 133, 8], "TCG-KP"),
    (&[2, 23, 136], "ICAO"),
    (&[2, 23, 136, 1], "MRTD"),
    (&[2, 23, 136, 1, 1], "Security"),
    (&[2, 23, 136, 1, 1, 1], "LDS-Security-Object"),
    (&[2, 23, 136, 1, 1, 2], "CSCA-Master-List"),
    (&[2, 23, 140], "CA-Browser-Forum"),
    (&[2, 23, 140, 1], "Certificate-Policies"),
    (&[2, 23, 140, 1, 1], "EV-Guidelines"),
    (&[2, 23, 140, 1, 2], "Baseline-Requirements"),
    (&[2, 23, 140, 1, 2, 1], "Domain-Validated"),
    (&[2, 23, 140, 1, 2, 2], "Organization-Validated"),
    (&[2, 23, 140, 1, 2, 3], "Individual-Validated"),
    (&[2, 23, 140, 1, 3], "Extended-Validation-Codesigning"),
    (&[2, 23, 140, 1, 4], "Code-Signing-Requirements"),
    (&[2, 24], "SIOS"),
    (&[2, 25], "UUID"),
    (&[2, 26], "ODP"),
    (&[2, 27], "Tag-Based"),
    (&[2, 28], "ITS"),
    (&[2, 40], "UPU"),
    (&[2, 41], "BIP"),
    (&[2, 42], "Telebiometrics"),
    (&[2, 48], "CyberSecurity"),
    (&[2, 49], "Alerting"),
    (&[2, 50], "OIDResolutionSystem"),
    (&[2, 51], "GS1"),
    (&[2, 52], "UAV"),
    (&[2, 999], "Example"),
];
