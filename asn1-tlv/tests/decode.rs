//! End-to-end decoding and formatting tests

use asn1_tlv::{
    encode_length_with_width, encode_node, format_nodes, parse, Asn1Error, Tag, TagClass,
    TlvDecoder,
};

/// SEQUENCE { OID 1.2.840.113549.1.1.11, NULL }
const ALGORITHM_IDENTIFIER: [u8; 15] = [
    0x30, 0x0D, 0x06, 0x09, 0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0B, 0x05, 0x00,
];

#[test]
fn test_constructed_oid_tag_with_boolean_child() {
    let data = [0x26, 0x81, 0x03, 0x01, 0x01, 0x01];
    let nodes = parse(&data, 0).unwrap();
    assert_eq!(nodes.len(), 1);

    let root = &nodes[0];
    assert_eq!(root.tag().class(), TagClass::Universal);
    assert!(root.tag().is_constructed());
    assert_eq!(root.tag().number(), 6);
    assert_eq!(root.length(), 3);

    let children = root.children().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].tag(), Tag::BOOLEAN);
    assert_eq!(children[0].length(), 1);
    assert_eq!(children[0].bytes(), Some(&[0x01][..]));
}

#[test]
fn test_every_length_width_decodes_the_same() {
    let expected = parse(&[0x26, 0x03, 0x01, 0x01, 0x01], 0).unwrap();

    for width in 1..=8 {
        let mut data = vec![0x26];
        data.extend(encode_length_with_width(3, width).unwrap());
        data.extend_from_slice(&[0x01, 0x01, 0x01]);
        assert_eq!(parse(&data, 0).unwrap(), expected, "width {}", width);
    }
}

#[test]
fn test_algorithm_identifier_text() {
    let nodes = parse(&ALGORITHM_IDENTIFIER, 0).unwrap();
    assert_eq!(
        format_nodes(&nodes),
        "Type: SEQUENCE, Length: 13, Value:\n\
         \x20\x20Type: OBJECT IDENTIFIER, Length: 9, Value: 1.2.840.113549.1.1.11 \
         (/ISO/Member-Body/US/RSADSI/PKCS/PKCS-1/SHA256-With-RSA-Encryption)\n\
         \x20\x20Type: NULL, Length: 0"
    );
}

#[test]
fn test_oid_accessor_on_decoded_tree() {
    let nodes = parse(&ALGORITHM_IDENTIFIER, 0).unwrap();
    let oid = nodes[0].children().unwrap()[0]
        .object_identifier()
        .unwrap()
        .unwrap();
    assert_eq!(oid.to_string(), "1.2.840.113549.1.1.11");
    assert_eq!(oid.name(), Some("SHA256-With-RSA-Encryption"));
}

#[test]
fn test_embedded_structure_at_offset() {
    let mut data = b"header".to_vec();
    data.extend_from_slice(&ALGORITHM_IDENTIFIER);
    let nodes = parse(&data, 6).unwrap();
    assert_eq!(encode_node(&nodes[0]).unwrap(), ALGORITHM_IDENTIFIER.to_vec());
}

#[test]
fn test_truncated_structure_fails() {
    let data = &ALGORITHM_IDENTIFIER[..10];
    assert!(matches!(parse(data, 0), Err(Asn1Error::Truncated { .. })));
}

#[test]
fn test_sibling_stream_with_end_of_contents() {
    let data = [0x02, 0x01, 0x05, 0x00, 0x05, 0x00];
    let mut decoder = TlvDecoder::new(&data);
    let nodes = decoder.decode_all().unwrap();
    assert_eq!(nodes.len(), 3);
    assert!(nodes[1].is_end_of_contents());
    assert_eq!(
        format_nodes(&nodes),
        "Type: INTEGER, Length: 1, Value: 5\nType: END OF CONTENTS\nType: NULL, Length: 0"
    );
}
