use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// A **SRV** record, locating a service by priority, weight, and port.
///
/// # References
///
/// - [RFC 2782](https://tools.ietf.org/html/rfc2782) — A DNS RR for
///   specifying the location of services (February 2000)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SrvRecord {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: DomainName,
}

impl RecordData for SrvRecord {
    const NAME: &'static str = "SRV";
    const RTYPE: u16 = 33;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        let priority = reader.read_u16_be()?;
        let weight = reader.read_u16_be()?;
        let port = reader.read_u16_be()?;
        let target = DomainName::read(reader)?;
        Ok(Self { priority, weight, port, target })
    }
}

impl fmt::Display for SrvRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.priority, self.weight, self.port, self.target)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let buf = &[
            0x00, 0x01, 0x00, 0x01, 0x92, 0x7c, 0x03, 0x61, 0x74, 0x61, 0x05, 0x6c, 0x6f, 0x63,
            0x61, 0x6c, 0x04, 0x6e, 0x6f, 0x64, 0x65, 0x03, 0x64, 0x63, 0x31, 0x06, 0x63, 0x6f,
            0x6e, 0x73, 0x75, 0x6c, 0x00,
        ];
        let mut reader = DatagramReader::new(buf);
        let record = SrvRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.priority, 1);
        assert_eq!(record.weight, 1);
        assert_eq!(record.port, 37500);
        assert_eq!(record.target.to_string(), "ata.local.node.dc1.consul.");
    }
}
