use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::util::Opaque;

/// An **RRSIG** record, a DNSSEC signature over an RRset.
///
/// The signature is parsed and exposed but never cryptographically
/// verified — that's resolver policy, not this codec's job.
///
/// # References
///
/// - [RFC 4034 §3](https://tools.ietf.org/html/rfc4034)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RrsigRecord {
    pub type_covered: u16,
    pub algorithm: u8,
    pub labels: u8,
    pub original_ttl: u32,
    pub signature_expiration: u32,
    pub signature_inception: u32,
    pub key_tag: u16,
    pub signer_name: DomainName,
    pub signature: Opaque,
}

impl RecordData for RrsigRecord {
    const NAME: &'static str = "RRSIG";
    const RTYPE: u16 = 46;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        let start = reader.position();

        let type_covered = reader.read_u16_be()?;
        let algorithm = reader.read_u8()?;
        let labels = reader.read_u8()?;
        let original_ttl = reader.read_u32_be()?;
        let signature_expiration = reader.read_u32_be()?;
        let signature_inception = reader.read_u32_be()?;
        let key_tag = reader.read_u16_be()?;
        let signer_name = DomainName::read(reader)?;

        let consumed = reader.position() - start;
        let signature = reader.read_bytes(usize::from(rdlength.saturating_sub(consumed)))?.to_vec();

        Ok(Self {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            signature_expiration,
            signature_inception,
            key_tag,
            signer_name,
            signature: Opaque(signature),
        })
    }
}

impl fmt::Display for RrsigRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {}",
            self.type_covered,
            self.algorithm,
            self.labels,
            self.original_ttl,
            self.signature_expiration,
            self.signature_inception,
            self.key_tag,
            self.signer_name,
            self.signature
        )
    }
}
