use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// An **AFSDB** record, pointing at an AFS cell database server.
///
/// # References
///
/// - [RFC 1183 §1](https://tools.ietf.org/html/rfc1183)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct AfsdbRecord {
    pub subtype: u16,
    pub hostname: DomainName,
}

impl RecordData for AfsdbRecord {
    const NAME: &'static str = "AFSDB";
    const RTYPE: u16 = 18;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        let subtype = reader.read_u16_be()?;
        let hostname = DomainName::read(reader)?;
        Ok(Self { subtype, hostname })
    }
}

impl fmt::Display for AfsdbRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subtype, self.hostname)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let buf = &[0x00, 0x01, 0x05, 0x62, 0x73, 0x61, 0x67, 0x6f, 0x02, 0x6d, 0x65, 0x00];
        let mut reader = DatagramReader::new(buf);
        let record = AfsdbRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.subtype, 1);
        assert_eq!(record.hostname.to_string(), "bsago.me.");
    }
}
