use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// A **NAPTR** _(naming authority pointer)_ record, used by the DDDS
/// algorithm (e.g. ENUM, ERP) to rewrite a string into a domain name.
///
/// # References
///
/// - [RFC 3403](https://tools.ietf.org/html/rfc3403)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct NaptrRecord {
    pub order: u16,
    pub preference: u16,
    pub flags: String,
    pub services: String,
    pub regexp: String,
    pub replacement: DomainName,
}

impl RecordData for NaptrRecord {
    const NAME: &'static str = "NAPTR";
    const RTYPE: u16 = 35;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        let order = reader.read_u16_be()?;
        let preference = reader.read_u16_be()?;
        let (_, flags) = reader.read_string_with_length_prefix()?;
        let (_, services) = reader.read_string_with_length_prefix()?;
        let (_, regexp) = reader.read_string_with_length_prefix()?;
        let replacement = DomainName::read(reader)?;

        Ok(Self { order, preference, flags, services, regexp, replacement })
    }
}

impl fmt::Display for NaptrRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\" \"{}\" \"{}\" {}",
            self.order, self.preference, self.flags, self.services, self.regexp, self.replacement
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let mut buf = vec![0x00, 0x01, 0x00, 0x0A];
        buf.push(1);
        buf.extend_from_slice(b"S");
        buf.push(0);
        buf.push(3);
        buf.extend_from_slice(b"sip");
        buf.push(0); // replacement: root
        let mut reader = DatagramReader::new(&buf);
        let record = NaptrRecord::read(&mut reader, buf.len() as u16).unwrap();

        assert_eq!(record.order, 1);
        assert_eq!(record.preference, 10);
        assert_eq!(record.flags, "S");
        assert_eq!(record.services, "");
        assert_eq!(record.regexp, "sip");
        assert_eq!(record.replacement.to_string(), ".");
    }
}
