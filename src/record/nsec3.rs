use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::util::hex;

/// An **NSEC3** record, the hashed variant of NSEC that resists zone
/// enumeration by walk-the-chain.
///
/// # References
///
/// - [RFC 5155 §3](https://tools.ietf.org/html/rfc5155)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Nsec3Record {
    pub hash_algorithm: u8,
    pub flags: u8,
    pub iterations: u16,
    pub salt: Vec<u8>,
    pub next_hashed_owner_name: Vec<u8>,
    pub type_bitmaps: Vec<u8>,
}

impl RecordData for Nsec3Record {
    const NAME: &'static str = "NSEC3";
    const RTYPE: u16 = 50;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        let start = reader.position();

        let hash_algorithm = reader.read_u8()?;
        let flags = reader.read_u8()?;
        let iterations = reader.read_u16_be()?;

        let salt_len = reader.read_u8()?;
        let salt = reader.read_bytes(usize::from(salt_len))?.to_vec();

        let owner_len = reader.read_u8()?;
        let next_hashed_owner_name = reader.read_bytes(usize::from(owner_len))?.to_vec();

        let consumed = reader.position() - start;
        let type_bitmaps = reader.read_bytes(usize::from(rdlength.saturating_sub(consumed)))?.to_vec();

        Ok(Self { hash_algorithm, flags, iterations, salt, next_hashed_owner_name, type_bitmaps })
    }
}

impl fmt::Display for Nsec3Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.hash_algorithm,
            self.flags,
            self.iterations,
            hex(&self.salt),
            hex(&self.next_hashed_owner_name),
            hex(&self.type_bitmaps)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let buf = &[0x01, 0x00, 0x00, 0x0A, 0x02, 0xAB, 0xCD, 0x04, 0x11, 0x22, 0x33, 0x44, 0x00, 0x01, 0x80];
        let mut reader = DatagramReader::new(buf);
        let record = Nsec3Record::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.hash_algorithm, 1);
        assert_eq!(record.iterations, 10);
        assert_eq!(hex(&record.salt), "abcd");
        assert_eq!(hex(&record.next_hashed_owner_name), "11223344");
        assert_eq!(hex(&record.type_bitmaps), "000180");
    }
}
