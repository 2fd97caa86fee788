use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::util::Opaque;

/// A **DNSKEY** record, holding a zone's public key material.
///
/// # References
///
/// - [RFC 4034 §2](https://tools.ietf.org/html/rfc4034)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DnskeyRecord {
    pub flags: u16,
    pub protocol: u8,
    pub algorithm: u8,
    pub public_key: Opaque,
}

impl RecordData for DnskeyRecord {
    const NAME: &'static str = "DNSKEY";
    const RTYPE: u16 = 48;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        if rdlength < 4 {
            return Err(DecodeError::malformed(
                "wrong record length",
                format!("DNSKEY record rdlength {rdlength}, must be at least 4"),
            ));
        }

        let flags = reader.read_u16_be()?;
        let protocol = reader.read_u8()?;
        let algorithm = reader.read_u8()?;
        let public_key = reader.read_bytes(usize::from(rdlength - 4))?.to_vec();

        Ok(Self { flags, protocol, algorithm, public_key: Opaque(public_key) })
    }
}

impl fmt::Display for DnskeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.flags, self.protocol, self.algorithm, self.public_key)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let buf = &[0x01, 0x00, 0x03, 0x08, 0xde, 0xad, 0xbe, 0xef];
        let mut reader = DatagramReader::new(buf);
        let record = DnskeyRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.flags, 256);
        assert_eq!(record.protocol, 3);
        assert_eq!(record.algorithm, 8);
        assert_eq!(record.public_key.0, vec![0xde, 0xad, 0xbe, 0xef]);
    }
}
