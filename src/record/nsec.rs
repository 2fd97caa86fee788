use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::util::hex;

/// An **NSEC** record, authenticating the non-existence of a name by
/// linking to the next name in canonical zone order.
///
/// # References
///
/// - [RFC 4034 §4](https://tools.ietf.org/html/rfc4034)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct NsecRecord {
    pub next_domain_name: DomainName,
    pub type_bitmaps: Vec<u8>,
}

impl RecordData for NsecRecord {
    const NAME: &'static str = "NSEC";
    const RTYPE: u16 = 47;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        let start = reader.position();
        let next_domain_name = DomainName::read(reader)?;

        let consumed = reader.position() - start;
        let type_bitmaps = reader.read_bytes(usize::from(rdlength.saturating_sub(consumed)))?.to_vec();

        Ok(Self { next_domain_name, type_bitmaps })
    }
}

impl fmt::Display for NsecRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.next_domain_name, hex(&self.type_bitmaps))
    }
}
