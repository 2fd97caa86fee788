use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// A **NS** _(name server)_ record, used to delegate a zone to a nameserver.
///
/// # References
///
/// - [RFC 1035 §3.3.11](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct NsRecord {
    pub nameserver: DomainName,
}

impl RecordData for NsRecord {
    const NAME: &'static str = "NS";
    const RTYPE: u16 = 2;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        Ok(Self { nameserver: DomainName::read(reader)? })
    }
}

impl fmt::Display for NsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nameserver)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let buf = &[
            0x01, 0x61, 0x0c, 0x67, 0x74, 0x6c, 0x64, 0x2d, 0x73, 0x65, 0x72, 0x76, 0x65, 0x72,
            0x73, 0x03, 0x6e, 0x65, 0x74, 0x00,
        ];
        let mut reader = DatagramReader::new(buf);
        let record = NsRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.nameserver.to_string(), "a.gtld-servers.net.");
    }
}
