use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::util::hex;

/// A **TLSA** record, associating a TLS certificate (or its hash) with a
/// domain for DANE validation.
///
/// # References
///
/// - [RFC 6698](https://tools.ietf.org/html/rfc6698) — DANE TLSA
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TlsaRecord {
    pub certificate_usage: u8,
    pub selector: u8,
    pub matching_type: u8,
    pub certificate_data: Vec<u8>,
}

impl RecordData for TlsaRecord {
    const NAME: &'static str = "TLSA";
    const RTYPE: u16 = 52;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        if rdlength < 3 {
            return Err(DecodeError::malformed(
                "wrong record length",
                format!("TLSA record rdlength {rdlength}, must be at least 3"),
            ));
        }

        let certificate_usage = reader.read_u8()?;
        let selector = reader.read_u8()?;
        let matching_type = reader.read_u8()?;
        let certificate_data = reader.read_bytes(usize::from(rdlength - 3))?.to_vec();

        Ok(Self { certificate_usage, selector, matching_type, certificate_data })
    }
}

impl fmt::Display for TlsaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.certificate_usage,
            self.selector,
            self.matching_type,
            hex(&self.certificate_data)
        )
    }
}
