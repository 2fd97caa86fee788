use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// A **HINFO** _(host information)_ record, naming a host's CPU and OS.
/// Also used as a minimal-size response to `ANY` queries (RFC 8482).
///
/// # References
///
/// - [RFC 1035 §3.3.2](https://tools.ietf.org/html/rfc1035)
/// - [RFC 8482 §6](https://tools.ietf.org/html/rfc8482#section-6)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct HinfoRecord {
    pub cpu: String,
    pub os: String,
}

impl RecordData for HinfoRecord {
    const NAME: &'static str = "HINFO";
    const RTYPE: u16 = 13;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        let (_, cpu) = reader.read_string_with_length_prefix()?;
        let (_, os) = reader.read_string_with_length_prefix()?;
        Ok(Self { cpu, os })
    }
}

impl fmt::Display for HinfoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" \"{}\"", self.cpu, self.os)
    }
}
