//! The top-level message codec: header plus the four sections, and the
//! symmetric outbound query encoder.

use std::fmt;

use crate::error::DecodeError;
use crate::header::{Header, Opcode};
use crate::name::DomainName;
use crate::question::Question;
use crate::reader::DatagramReader;
use crate::record::{OptRecord, ResourceRecord};
use crate::writer::DatagramWriter;

/// Whether [`decode_message`] aborts the whole message on the first
/// record-level decode failure, or downgrades that one record to
/// [`crate::record::Record::Unknown`] and keeps going.
///
/// Either way, a failure while reading the header, a question, or a
/// record's shared preamble (name/type/class/ttl/rdlength) still aborts
/// the message outright — there's no sane substitute value for a
/// preamble that couldn't even be located, so the downgrade only ever
/// applies to a record's RDATA decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// Any decode error anywhere aborts the whole message.
    Strict,
    /// A malformed record's RDATA is downgraded to `Unknown` rather
    /// than failing the whole decode.
    Lenient,
}

/// A fully decoded DNS message: header plus its four sections.
#[derive(Debug, Clone, PartialEq)]
pub struct DnsMessage {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl fmt::Display for DnsMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            ";; id={} opcode={:?} rcode={:?} qr={} aa={} tc={} rd={} ra={}",
            self.header.id,
            self.header.opcode(),
            self.header.rcode(),
            self.header.qr(),
            self.header.aa(),
            self.header.tc(),
            self.header.rd(),
            self.header.ra(),
        )?;

        for question in &self.questions {
            writeln!(f, ";; QUESTION {} TYPE{} CLASS{}", question.name, question.qtype, question.qclass)?;
        }
        for answer in &self.answers {
            writeln!(f, "{answer}")?;
        }
        for authority in &self.authorities {
            writeln!(f, "{authority}")?;
        }
        for additional in &self.additionals {
            writeln!(f, "{additional}")?;
        }
        Ok(())
    }
}

/// Parameters for the optional EDNS0 OPT record an outbound query may
/// carry in its additional section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdnsRequest {
    pub udp_payload_size: u16,
    pub dnssec_ok: bool,
}

/// Decodes a complete DNS message (a response, typically) off the wire.
///
/// Reads the 12-octet header, then `qd_count` questions and
/// `an_count`/`ns_count`/`ar_count` records via [`ResourceRecord::read`].
/// Trailing bytes past the last declared record are ignored but logged,
/// never an error — §4.6 treats them as a diagnostic, not a malformed
/// message.
pub fn decode_message(bytes: &[u8], mode: DecodeMode) -> Result<DnsMessage, DecodeError> {
    let mut reader = DatagramReader::new(bytes);
    let header = Header::read(&mut reader)?;

    let mut questions = Vec::with_capacity(usize::from(header.qd_count));
    for _ in 0..header.qd_count {
        questions.push(Question::read(&mut reader)?);
    }

    let mut answers = Vec::with_capacity(usize::from(header.an_count));
    for _ in 0..header.an_count {
        answers.push(ResourceRecord::read(&mut reader, mode)?);
    }

    let mut authorities = Vec::with_capacity(usize::from(header.ns_count));
    for _ in 0..header.ns_count {
        authorities.push(ResourceRecord::read(&mut reader, mode)?);
    }

    let mut additionals = Vec::with_capacity(usize::from(header.ar_count));
    for _ in 0..header.ar_count {
        additionals.push(ResourceRecord::read(&mut reader, mode)?);
    }

    let trailing = reader.remaining();
    if trailing > 0 {
        log::debug!("{trailing} trailing octets beyond the last declared record, ignoring");
    }

    Ok(DnsMessage { header, questions, answers, authorities, additionals })
}

/// Encodes an outbound query: a header with `qd_count=1` and every other
/// count zero (except `ar_count=1` when `edns` is supplied), the single
/// question, and, if requested, a root-named OPT record carrying the
/// EDNS0 parameters.
///
/// Per the spec's choice to keep the writer side simple, the question's
/// name is always written uncompressed (§4.3); this is conforming but
/// non-optimal, matching the spec's stated Non-goal of not emitting
/// compression pointers on write.
pub fn encode_query(id: u16, recursion_desired: bool, question: &Question, edns: Option<EdnsRequest>) -> Vec<u8> {
    let mut header = Header::query(id, Opcode::Query, recursion_desired);
    header.qd_count = 1;
    if edns.is_some() {
        header.ar_count = 1;
    }

    let mut writer = DatagramWriter::new();
    header.write(&mut writer).expect("writing to a Vec<u8> never fails");
    question.write(&mut writer).expect("writing to a Vec<u8> never fails");

    if let Some(edns) = edns {
        DomainName::root().write_uncompressed(&mut writer).expect("writing to a Vec<u8> never fails");
        let opt = OptRecord::for_request(edns.udp_payload_size, edns.dnssec_ok);
        opt.write(&mut writer).expect("writing to a Vec<u8> never fails");
    }

    writer.finish()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::net::Ipv4Addr;

    use crate::record::Record;

    fn sample_a_response() -> Vec<u8> {
        vec![
            0x00, 0x2A, 0x01, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // header
            0x05, b'q', b'u', b'e', b'r', b'y', 0x00, // name
            0x00, 0x01, // type A
            0x00, 0x01, // class IN
            0x00, 0x00, 0x00, 0x64, // ttl 100
            0x00, 0x04, // rdlength
            0x7B, 0x2D, 0x43, 0x09, // 123.45.67.9
        ]
    }

    #[test]
    fn s1_a_record_response() {
        let message = decode_message(&sample_a_response(), DecodeMode::Strict).unwrap();

        assert_eq!(message.header.id, 42);
        assert_eq!(message.answers.len(), 1);

        let answer = &message.answers[0];
        assert_eq!(answer.name.to_string(), "query.");
        assert_eq!(answer.info.ttl, 100);
        assert_eq!(answer.info.rclass, 1);
        assert_eq!(answer.info.rtype, 1);
        assert_eq!(answer.info.rdlength, 4);
        assert_eq!(answer.data, Record::A(crate::record::ARecord { address: Ipv4Addr::new(123, 45, 67, 9) }));
    }

    #[test]
    fn s2_compressed_cname_chain() {
        let mut buf = vec![
            0x00, 0x00, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // header: qd=1 an=1
            0x03, b'w', b'w', b'w', 0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0x03, b'c', b'o', b'm', 0x00,
            0x00, 0x05, // type CNAME
            0x00, 0x01, // class IN
        ];
        // answer: pointer to offset 0x0C, type CNAME, class IN, ttl, rdlength 2, rdata (root name)
        buf.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x05, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x01, 0x00]);

        let message = decode_message(&buf, DecodeMode::Strict).unwrap();
        assert_eq!(message.answers[0].name.to_string(), "www.example.com.");
    }

    #[test]
    fn s3_truncated_header() {
        let buf = &[0x00, 0x2A, 0x01];
        assert!(matches!(
            decode_message(buf, DecodeMode::Strict),
            Err(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn s4_rdlength_over_read_fails_strict() {
        let mut buf = sample_a_response();
        // claim rdlength 8 but leave only 4 octets of rdata
        let rdlength_index = buf.len() - 6;
        buf[rdlength_index] = 0x00;
        buf[rdlength_index + 1] = 0x08;

        assert!(decode_message(&buf, DecodeMode::Strict).is_err());
    }

    #[test]
    fn s4_rdlength_over_read_downgrades_in_lenient_mode() {
        let mut buf = sample_a_response();
        let rdlength_index = buf.len() - 6;
        buf[rdlength_index] = 0x00;
        buf[rdlength_index + 1] = 0x08;
        buf.extend_from_slice(&[0, 0, 0, 0]); // pad so there's enough to force-advance into

        let message = decode_message(&buf, DecodeMode::Lenient).unwrap();
        assert!(matches!(message.answers[0].data, Record::Unknown(_)));
    }

    #[test]
    fn truncation_monotonicity() {
        let buf = sample_a_response();
        for k in 0..buf.len() {
            assert!(
                decode_message(&buf[..k], DecodeMode::Strict).is_err(),
                "prefix of length {k} should fail to decode"
            );
        }
        assert!(decode_message(&buf, DecodeMode::Strict).is_ok());
    }

    #[test]
    fn encode_query_round_trips_through_decode() {
        let question = Question { name: DomainName::encode("example.com").unwrap(), qtype: 1, qclass: 1 };
        let bytes = encode_query(0xBEEF, true, &question, None);

        let mut reader = DatagramReader::new(&bytes);
        let header = Header::read(&mut reader).unwrap();
        assert_eq!(header.id, 0xBEEF);
        assert_eq!(header.qd_count, 1);
        assert_eq!(header.an_count, 0);
        assert!(header.rd());
        assert!(!header.qr());

        let decoded_question = Question::read(&mut reader).unwrap();
        assert_eq!(decoded_question, question);
    }

    #[test]
    fn encode_query_with_edns_sets_additional_count() {
        let question = Question { name: DomainName::encode("example.com").unwrap(), qtype: 1, qclass: 1 };
        let edns = EdnsRequest { udp_payload_size: 4096, dnssec_ok: true };
        let bytes = encode_query(1, true, &question, Some(edns));

        let mut reader = DatagramReader::new(&bytes);
        let header = Header::read(&mut reader).unwrap();
        assert_eq!(header.ar_count, 1);

        let _ = Question::read(&mut reader).unwrap();
        let name = DomainName::read(&mut reader).unwrap();
        assert_eq!(name, DomainName::root());

        let rtype = reader.read_u16_be().unwrap();
        assert_eq!(rtype, OptRecord::RTYPE);
        let rclass = reader.read_u16_be().unwrap();
        assert_eq!(rclass, 4096);
    }
}
