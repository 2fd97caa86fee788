use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// A **URI** record, balancing between several URIs by priority and weight.
///
/// # References
///
/// - [RFC 7553](https://tools.ietf.org/html/rfc7553)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct UriRecord {
    pub priority: u16,
    pub weight: u16,
    pub target: String,
}

impl RecordData for UriRecord {
    const NAME: &'static str = "URI";
    const RTYPE: u16 = 256;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        if rdlength < 4 {
            return Err(DecodeError::malformed(
                "wrong record length",
                format!("URI record rdlength {rdlength}, must be at least 4"),
            ));
        }

        let priority = reader.read_u16_be()?;
        let weight = reader.read_u16_be()?;
        let target = reader.read_string(usize::from(rdlength - 4))?;

        Ok(Self { priority, weight, target })
    }
}

impl fmt::Display for UriRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.priority, self.weight, self.target)
    }
}
