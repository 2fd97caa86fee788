use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// An **RP** _(responsible person)_ record.
///
/// # References
///
/// - [RFC 1183 §2.2](https://tools.ietf.org/html/rfc1183)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RpRecord {
    /// A mailbox, in the same name-as-email-address convention as SOA's
    /// `rname`.
    pub mbox: DomainName,
    /// A name pointing at a TXT record with further information, or the
    /// root name if there is none.
    pub txt: DomainName,
}

impl RecordData for RpRecord {
    const NAME: &'static str = "RP";
    const RTYPE: u16 = 17;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        let mbox = DomainName::read(reader)?;
        let txt = DomainName::read(reader)?;
        Ok(Self { mbox, txt })
    }
}

impl fmt::Display for RpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mbox, self.txt)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&[0x05, b'a', b'd', b'm', b'i', b'n', 0x00]);
        buf.extend_from_slice(&[0x00]); // root
        let mut reader = DatagramReader::new(&buf);
        let record = RpRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.mbox.to_string(), "admin.");
        assert_eq!(record.txt.to_string(), ".");
    }
}
