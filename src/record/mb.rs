use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// An **MB** _(mailbox)_ record, an experimental RFC 1035 record naming a
/// host that has the specified mailbox.
///
/// # References
///
/// - [RFC 1035 §3.3.3](https://tools.ietf.org/html/rfc1035)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct MbRecord {
    pub madname: DomainName,
}

impl RecordData for MbRecord {
    const NAME: &'static str = "MB";
    const RTYPE: u16 = 7;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        Ok(Self { madname: DomainName::read(reader)? })
    }
}

impl fmt::Display for MbRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.madname)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let buf = &[0x05, 0x62, 0x73, 0x61, 0x67, 0x6f, 0x02, 0x6d, 0x65, 0x00];
        let mut reader = DatagramReader::new(buf);
        let record = MbRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.madname.to_string(), "bsago.me.");
    }
}
