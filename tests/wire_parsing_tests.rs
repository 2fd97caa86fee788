use std::net::{Ipv4Addr, Ipv6Addr};

use pretty_assertions::assert_eq;

use dns_codec::record::{ARecord, Record};
use dns_codec::{decode_message, DecodeError, DecodeMode};

#[test]
fn parse_nothing() {
    assert!(decode_message(&[], DecodeMode::Strict).is_err());
}

#[test]
fn parse_response_standard() {
    let buf = &[
        0x0d, 0xcd, // transaction ID
        0x81, 0x80, // flags (standard query, response, no error)
        0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // counts (1, 1, 0, 1)
        // the question:
        0x03, 0x64, 0x6e, 0x73, 0x06, 0x6c, 0x6f, 0x6f, 0x6b, 0x75, 0x70, 0x03, 0x64, 0x6f, 0x67,
        0x00, // "dns.lookup.dog."
        0x00, 0x01, // type A
        0x00, 0x01, // class IN
        // the answer:
        0xc0, 0x0c, // backtrack to position 0x0c (12)
        0x00, 0x01, // type A
        0x00, 0x01, // class IN
        0x00, 0x00, 0x03, 0xa5, // TTL (933 seconds)
        0x00, 0x04, // record data length 4
        0x8a, 0x44, 0x75, 0x5e, // record data (138.68.117.94)
        // the additional:
        0x00, // no name
        0x00, 0x29, // type OPT
        0x02, 0x00, // UDP payload size (512)
        0x00, 0x00, // higher bits + version
        0x00, 0x00, // more flags (DO bit unset)
        0x00, 0x00, // data length 0
    ];

    let message = decode_message(buf, DecodeMode::Strict).unwrap();

    assert_eq!(message.header.id, 0x0dcd);
    assert!(message.header.qr());
    assert!(message.header.rd());
    assert!(message.header.ra());
    assert_eq!(message.questions[0].name.to_string(), "dns.lookup.dog.");

    assert_eq!(message.answers.len(), 1);
    assert_eq!(message.answers[0].name.to_string(), "dns.lookup.dog.");
    assert_eq!(message.answers[0].info.ttl, 933);
    assert_eq!(
        message.answers[0].data,
        Record::A(ARecord { address: Ipv4Addr::new(138, 68, 117, 94) })
    );

    assert_eq!(message.additionals.len(), 1);
    match &message.additionals[0].data {
        Record::Opt(opt) => {
            assert_eq!(opt.udp_payload_size(), 512);
            assert!(!opt.dnssec_ok());
            assert!(opt.options.is_empty());
        }
        other => panic!("expected OPT, got {other:?}"),
    }
}

#[test]
fn parse_response_with_compressed_cname() {
    let buf = &[
        0x06, 0x9f, // transaction ID
        0x81, 0x80, // flags (standard query, response, no error)
        0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // counts (1, 1, 0, 0)
        // the question:
        0x0d, 0x63, 0x6e, 0x61, 0x6d, 0x65, 0x2d, 0x65, 0x78, 0x61, 0x6d, 0x70, 0x6c, 0x65, 0x06,
        0x6c, 0x6f, 0x6f, 0x6b, 0x75, 0x70, 0x03, 0x64, 0x6f, 0x67, 0x00, // "cname-example.lookup.dog."
        0x00, 0x05, // type CNAME
        0x00, 0x01, // class IN
        // the answer:
        0xc0, 0x0c, // backtrack to position 0x0c (12)
        0x00, 0x05, // type CNAME
        0x00, 0x01, // class IN
        0x00, 0x00, 0x03, 0x69, // TTL (873 seconds)
        0x00, 0x06, // record data length 6
        0x03, 0x64, 0x6e, 0x73, 0xc0, 0x1a,
        // "dns.lookup.dog.", which is "dns." + backtrack to position 0x1a (28)
    ];

    let message = decode_message(buf, DecodeMode::Strict).unwrap();
    assert_eq!(message.answers[0].name.to_string(), "cname-example.lookup.dog.");
    match &message.answers[0].data {
        Record::Cname(cname) => assert_eq!(cname.domain.to_string(), "dns.lookup.dog."),
        other => panic!("expected CNAME, got {other:?}"),
    }
}

#[test]
fn parse_aaaa_record() {
    let buf = &[
        0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // header: qd=0 an=1
        0x00, // answer name: root
        0x00, 0x1c, // type AAAA
        0x00, 0x01, // class IN
        0x00, 0x00, 0x01, 0x00, // ttl
        0x00, 0x10, // rdlength 16
        0x20, 0x01, 0x0d, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01,
    ];

    let message = decode_message(buf, DecodeMode::Strict).unwrap();
    match &message.answers[0].data {
        Record::Aaaa(aaaa) => {
            assert_eq!(aaaa.address, "2001:db8::1".parse::<Ipv6Addr>().unwrap());
        }
        other => panic!("expected AAAA, got {other:?}"),
    }
}

#[test]
fn parse_truncated_header_fails() {
    let buf = &[0x00, 0x2A, 0x01];
    assert!(matches!(decode_message(buf, DecodeMode::Strict), Err(DecodeError::Truncated { .. })));
}

#[test]
fn parse_unknown_rtype_does_not_break_subsequent_records() {
    let buf = &[
        0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, // header: an=2
        // answer 1: name (root), rtype 65280 (unknown), class, ttl, rdlength 4, rdata
        0x00, 0xff, 0x00, 0x00, 0x99, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0xde, 0xad, 0xbe, 0xef,
        // answer 2: name (root), type A, class IN, ttl, rdlength 4, rdata
        0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x64, 0x00, 0x04, 0x7f, 0x00, 0x00, 0x01,
    ];

    let message = decode_message(buf, DecodeMode::Strict).unwrap();
    assert_eq!(message.answers.len(), 2);
    match &message.answers[0].data {
        Record::Unknown(unknown) => assert_eq!(unknown.raw.0.len(), 4),
        other => panic!("expected Unknown, got {other:?}"),
    }
    assert_eq!(message.answers[1].data, Record::A(ARecord { address: Ipv4Addr::new(127, 0, 0, 1) }));
}

#[test]
fn trailing_bytes_are_ignored() {
    let buf = [0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF];
    let message = decode_message(&buf, DecodeMode::Strict).unwrap();
    assert!(message.answers.is_empty());
}

#[test]
fn rdlength_over_read_fails_in_strict_mode() {
    let buf = &[
        0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // header: an=1
        0x00, // name
        0x00, 0x01, // type A
        0x00, 0x01, // class IN
        0x00, 0x00, 0x00, 0x64, // ttl
        0x00, 0x08, // rdlength claims 8
        0x7f, 0x00, 0x00, 0x01, // but only 4 octets of rdata follow
    ];

    assert!(matches!(
        decode_message(buf, DecodeMode::Strict),
        Err(DecodeError::Truncated { .. } | DecodeError::Malformed { .. })
    ));
}
