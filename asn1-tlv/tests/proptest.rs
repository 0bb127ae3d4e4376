//! Property-based tests for the length codec and TLV decoder

use asn1_tlv::{
    decode_length, encode_length, encode_length_with_width, encode_node, parse, Asn1Error, Tag,
    TagClass, TlvDecoder, TlvNode,
};
use proptest::prelude::*;

fn tag_class() -> impl Strategy<Value = TagClass> {
    prop_oneof![
        Just(TagClass::Universal),
        Just(TagClass::Application),
        Just(TagClass::ContextSpecific),
        Just(TagClass::Private),
    ]
}

fn tlv_tree() -> impl Strategy<Value = TlvNode> {
    // Number 0 is skipped so a primitive never collides with end-of-contents
    let leaf = (tag_class(), 1u32..=30, prop::collection::vec(any::<u8>(), 0..40))
        .prop_map(|(class, number, bytes)| TlvNode::primitive(Tag::new(class, false, number), bytes));

    leaf.prop_recursive(4, 32, 6, |inner| {
        (tag_class(), 0u32..=30, prop::collection::vec(inner, 0..6)).prop_map(
            |(class, number, children)| TlvNode::constructed(Tag::new(class, true, number), children),
        )
    })
}

proptest! {
    #[test]
    fn short_form_is_single_byte(len in 0u8..0x80) {
        let mut cursor = &[len, 0xAA][..];
        prop_assert_eq!(decode_length(&mut cursor).unwrap(), len as u64);
        prop_assert_eq!(cursor.len(), 1);
    }

    #[test]
    fn long_form_any_width_decodes(value: u64, extra in 0usize..8) {
        let minimal = 8 - (value.leading_zeros() as usize / 8);
        let width = (minimal.max(1) + extra).min(8);
        let encoded = encode_length_with_width(value, width).unwrap();
        prop_assert_eq!(encoded.len(), 1 + width);

        let mut cursor = &encoded[..];
        prop_assert_eq!(decode_length(&mut cursor).unwrap(), value);
        prop_assert!(cursor.is_empty());
    }

    #[test]
    fn minimal_length_encoding(value: u64) {
        let encoded = encode_length(value);
        if value < 0x80 {
            prop_assert_eq!(encoded.len(), 1);
        } else {
            prop_assert_ne!(encoded[1], 0x00);
        }
        prop_assert_eq!(decode_length(&mut &encoded[..]).unwrap(), value);
    }

    #[test]
    fn oversized_length_field_rejected(count in 9u8..0x80, tail in prop::collection::vec(any::<u8>(), 0..16)) {
        let mut data = vec![0x80 | count];
        data.extend(tail);
        let result = decode_length(&mut &data[..]);
        prop_assert!(matches!(result, Err(Asn1Error::MalformedLength(_))));
    }

    #[test]
    fn indefinite_length_rejected(tail in prop::collection::vec(any::<u8>(), 0..16)) {
        let mut data = vec![0x80];
        data.extend(tail);
        let result = decode_length(&mut &data[..]);
        prop_assert!(matches!(result, Err(Asn1Error::MalformedLength(_))));
    }

    #[test]
    fn offset_outside_input_rejected(data in prop::collection::vec(any::<u8>(), 0..32), past in 0usize..8) {
        let offset = data.len() + past;
        prop_assert!(matches!(parse(&data, offset), Err(Asn1Error::InvalidInput(_))));
    }

    #[test]
    fn arbitrary_input_never_panics(data in prop::collection::vec(any::<u8>(), 1..256)) {
        let _ = parse(&data, 0);
    }

    #[test]
    fn end_of_contents_consumes_one_byte(tail in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut data = vec![0x00];
        data.extend(tail);
        let mut decoder = TlvDecoder::new(&data);
        let node = decoder.decode_node().unwrap();
        prop_assert!(node.is_end_of_contents());
        prop_assert_eq!(node.length(), 0);
        prop_assert!(node.value().is_none());
        prop_assert_eq!(decoder.position(), 1);
    }

    #[test]
    fn exact_child_length_decodes(payload in prop::collection::vec(1u8..=0xFF, 1..100)) {
        let data = sequence_with_child(&payload, payload.len());
        let nodes = parse(&data, 0).unwrap();
        let children = nodes[0].children().unwrap();
        prop_assert_eq!(children.len(), 1);
        prop_assert_eq!(children[0].bytes(), Some(&payload[..]));
    }

    #[test]
    fn child_length_one_too_small_fails(payload in prop::collection::vec(1u8..=0xFF, 1..100)) {
        let data = sequence_with_child(&payload, payload.len() - 1);
        prop_assert!(parse(&data, 0).is_err());
    }

    #[test]
    fn child_length_one_too_large_fails(payload in prop::collection::vec(1u8..=0xFF, 1..100)) {
        let data = sequence_with_child(&payload, payload.len() + 1);
        let result = parse(&data, 0);
        prop_assert!(
            matches!(result, Err(Asn1Error::Truncated { .. })),
            "expected truncation, got {:?}",
            result
        );
    }

    #[test]
    fn encoded_tree_decodes_to_itself(tree in tlv_tree()) {
        let bytes = encode_node(&tree).unwrap();
        prop_assert_eq!(bytes.len() as u64, tree.encoded_len());
        prop_assert_eq!(parse(&bytes, 0).unwrap(), vec![tree]);
    }
}

/// SEQUENCE wrapping one OCTET STRING whose declared length is `declared`
fn sequence_with_child(payload: &[u8], declared: usize) -> Vec<u8> {
    let mut child = vec![0x04];
    child.extend(encode_length(declared as u64));
    child.extend_from_slice(payload);

    let mut data = vec![0x30];
    data.extend(encode_length(child.len() as u64));
    data.extend(child);
    data
}
