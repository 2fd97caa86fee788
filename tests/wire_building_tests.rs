use pretty_assertions::assert_eq;

use dns_codec::{decode_message, encode_query, DecodeMode, DomainName, EdnsRequest, Question};

#[test]
fn build_plain_query() {
    let question = Question { name: DomainName::encode("rfcs.io").unwrap(), qtype: 0x1234, qclass: 0x0042 };
    let bytes = encode_query(0xceac, true, &question, None);

    let expected = vec![
        0xce, 0xac, // transaction ID
        0x01, 0x00, // flags (standard query, recursion desired)
        0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // counts (1, 0, 0, 0)
        // question:
        0x04, 0x72, 0x66, 0x63, 0x73, 0x02, 0x69, 0x6f, 0x00, // qname "rfcs.io."
        0x12, 0x34, // type
        0x00, 0x42, // class
    ];

    assert_eq!(bytes, expected);
}

#[test]
fn build_query_with_edns() {
    let question = Question { name: DomainName::encode("example.com").unwrap(), qtype: 1, qclass: 1 };
    let edns = EdnsRequest { udp_payload_size: 512, dnssec_ok: false };
    let bytes = encode_query(0xceac, true, &question, Some(edns));

    let expected = vec![
        0xce, 0xac, // transaction ID
        0x01, 0x00, // flags
        0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, // counts (1, 0, 0, 1)
        // question:
        0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0x03, b'c', b'o', b'm', 0x00,
        0x00, 0x01, // type A
        0x00, 0x01, // class IN
        // OPT record:
        0x00, // name (root)
        0x00, 0x29, // type OPT
        0x02, 0x00, // UDP payload size 512
        0x00, 0x00, 0x00, 0x00, // extended rcode, version, flags
        0x00, 0x00, // no sub-options
    ];

    assert_eq!(bytes, expected);
}

#[test]
fn built_query_round_trips_through_decode() {
    let question = Question { name: DomainName::encode("dns.lookup.dog").unwrap(), qtype: 1, qclass: 1 };
    let bytes = encode_query(0x0dcd, true, &question, None);

    let message = decode_message(&bytes, DecodeMode::Strict).unwrap();
    assert_eq!(message.header.id, 0x0dcd);
    assert_eq!(message.questions.len(), 1);
    assert_eq!(message.questions[0].name.to_string(), "dns.lookup.dog.");
    assert_eq!(message.questions[0].qtype, 1);
    assert_eq!(message.questions[0].qclass, 1);
    assert!(message.answers.is_empty());
}
