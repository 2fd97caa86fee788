use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// A **PTR** record, which points to a canonical name — most commonly seen
/// in reverse DNS lookups under `in-addr.arpa.`/`ip6.arpa.`.
///
/// # References
///
/// - [RFC 1035 §3.3.12](https://tools.ietf.org/html/rfc1035)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct PtrRecord {
    pub name: DomainName,
}

impl RecordData for PtrRecord {
    const NAME: &'static str = "PTR";
    const RTYPE: u16 = 12;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        Ok(Self { name: DomainName::read(reader)? })
    }
}

impl fmt::Display for PtrRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let buf = &[0x03, 0x64, 0x6e, 0x73, 0x06, 0x67, 0x6f, 0x6f, 0x67, 0x6c, 0x65, 0x00];
        let mut reader = DatagramReader::new(buf);
        let record = PtrRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.name.to_string(), "dns.google.");
    }
}
