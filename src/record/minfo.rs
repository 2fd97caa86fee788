use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// A **MINFO** _(mailbox information)_ record.
///
/// # References
///
/// - [RFC 1035 §3.3.7](https://tools.ietf.org/html/rfc1035)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct MinfoRecord {
    pub rmailbx: DomainName,
    pub emailbx: DomainName,
}

impl RecordData for MinfoRecord {
    const NAME: &'static str = "MINFO";
    const RTYPE: u16 = 14;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        let rmailbx = DomainName::read(reader)?;
        let emailbx = DomainName::read(reader)?;
        Ok(Self { rmailbx, emailbx })
    }
}

impl fmt::Display for MinfoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rmailbx, self.emailbx)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&[0x02, b'r', b'm', 0x00]);
        buf.extend_from_slice(&[0x02, b'e', b'm', 0x00]);
        let mut reader = DatagramReader::new(&buf);
        let record = MinfoRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.rmailbx.to_string(), "rm.");
        assert_eq!(record.emailbx.to_string(), "em.");
    }
}
