use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// An **MX** _(mail exchange)_ record.
///
/// # References
///
/// - [RFC 1035 §3.3.9](https://tools.ietf.org/html/rfc1035)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: DomainName,
}

impl RecordData for MxRecord {
    const NAME: &'static str = "MX";
    const RTYPE: u16 = 15;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        let preference = reader.read_u16_be()?;
        let exchange = DomainName::read(reader)?;
        Ok(Self { preference, exchange })
    }
}

impl fmt::Display for MxRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let buf = &[0x00, 0x0A, 0x05, 0x62, 0x73, 0x61, 0x67, 0x6f, 0x02, 0x6d, 0x65, 0x00];
        let mut reader = DatagramReader::new(buf);
        let record = MxRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.preference, 10);
        assert_eq!(record.exchange.to_string(), "bsago.me.");
    }
}
