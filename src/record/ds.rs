use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::util::hex;

/// A **DS** _(delegation signer)_ record, placed in a parent zone to
/// authenticate a child zone's DNSKEY.
///
/// The digest is parsed but never verified against the child zone's key —
/// DNSSEC cryptographic validation is out of scope for this codec.
///
/// # References
///
/// - [RFC 4034 §5](https://tools.ietf.org/html/rfc4034)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DsRecord {
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,
    pub digest: Vec<u8>,
}

impl RecordData for DsRecord {
    const NAME: &'static str = "DS";
    const RTYPE: u16 = 43;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        let start = reader.position();
        let key_tag = reader.read_u16_be()?;
        let algorithm = reader.read_u8()?;
        let digest_type = reader.read_u8()?;

        let consumed = reader.position() - start;
        let digest = reader.read_bytes(usize::from(rdlength.saturating_sub(consumed)))?.to_vec();

        Ok(Self { key_tag, algorithm, digest_type, digest })
    }
}

impl fmt::Display for DsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.key_tag, self.algorithm, self.digest_type, hex(&self.digest))
    }
}
