use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// An **MG** _(mail group member)_ record.
///
/// # References
///
/// - [RFC 1035 §3.3.6](https://tools.ietf.org/html/rfc1035)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct MgRecord {
    pub mgmname: DomainName,
}

impl RecordData for MgRecord {
    const NAME: &'static str = "MG";
    const RTYPE: u16 = 8;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        Ok(Self { mgmname: DomainName::read(reader)? })
    }
}

impl fmt::Display for MgRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mgmname)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let buf = &[0x05, 0x62, 0x73, 0x61, 0x67, 0x6f, 0x02, 0x6d, 0x65, 0x00];
        let mut reader = DatagramReader::new(buf);
        let record = MgRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.mgmname.to_string(), "bsago.me.");
    }
}
