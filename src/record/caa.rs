use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::string_escape::escape_bytes;

/// A **CAA** _(certification authority authorization)_ record, restricting
/// which CAs may issue certificates for a name.
///
/// # References
///
/// - [RFC 8659](https://tools.ietf.org/html/rfc8659) — obsoletes RFC 6844
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct CaaRecord {
    pub critical: bool,
    pub tag: String,
    pub value: String,
}

impl RecordData for CaaRecord {
    const NAME: &'static str = "CAA";
    const RTYPE: u16 = 257;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        let start = reader.position();
        let flags = reader.read_u8()?;
        let (tag_raw, tag) = reader.read_string_with_length_prefix()?;
        let tag_len = tag_raw.len();

        let consumed = reader.position() - start;
        let value_len = rdlength.saturating_sub(consumed);
        let _ = tag_len;
        let value_bytes = reader.read_bytes(usize::from(value_len))?;

        Ok(Self { critical: flags & 0b1000_0000 != 0, tag, value: escape_bytes(value_bytes) })
    }
}

impl fmt::Display for CaaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", u8::from(self.critical), self.tag, self.value)
    }
}
