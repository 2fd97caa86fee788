use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::util::Opaque;

/// A **CERT** record, storing a certificate or CRL associated with a name.
///
/// # References
///
/// - [RFC 4398](https://tools.ietf.org/html/rfc4398)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct CertRecord {
    pub cert_type: u16,
    pub key_tag: u16,
    pub algorithm: u8,
    pub certificate: Opaque,
}

impl RecordData for CertRecord {
    const NAME: &'static str = "CERT";
    const RTYPE: u16 = 37;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        if rdlength < 5 {
            return Err(DecodeError::malformed(
                "wrong record length",
                format!("CERT record rdlength {rdlength}, must be at least 5"),
            ));
        }

        let cert_type = reader.read_u16_be()?;
        let key_tag = reader.read_u16_be()?;
        let algorithm = reader.read_u8()?;
        let certificate = reader.read_bytes(usize::from(rdlength - 5))?.to_vec();

        Ok(Self { cert_type, key_tag, algorithm, certificate: Opaque(certificate) })
    }
}

impl fmt::Display for CertRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.cert_type, self.key_tag, self.algorithm, self.certificate)
    }
}
