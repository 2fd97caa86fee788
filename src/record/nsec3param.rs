use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::util::hex;

/// An **NSEC3PARAM** record, publishing the parameters a zone uses to
/// compute its NSEC3 hash chain.
///
/// # References
///
/// - [RFC 5155 §4](https://tools.ietf.org/html/rfc5155)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Nsec3paramRecord {
    pub hash_algorithm: u8,
    pub flags: u8,
    pub iterations: u16,
    pub salt: Vec<u8>,
}

impl RecordData for Nsec3paramRecord {
    const NAME: &'static str = "NSEC3PARAM";
    const RTYPE: u16 = 51;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        let hash_algorithm = reader.read_u8()?;
        let flags = reader.read_u8()?;
        let iterations = reader.read_u16_be()?;
        let salt_len = reader.read_u8()?;
        let salt = reader.read_bytes(usize::from(salt_len))?.to_vec();

        Ok(Self { hash_algorithm, flags, iterations, salt })
    }
}

impl fmt::Display for Nsec3paramRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.hash_algorithm, self.flags, self.iterations, hex(&self.salt))
    }
}
