use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::util::hex;

/// A **SSHFP** _(SSH public key fingerprint)_ record.
///
/// # References
///
/// - [RFC 4255](https://tools.ietf.org/html/rfc4255) — Using DNS to Securely
///   Publish Secure Shell (SSH) Key Fingerprints (January 2006)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SshfpRecord {
    pub algorithm: u8,
    pub fingerprint_type: u8,
    pub fingerprint: Vec<u8>,
}

impl RecordData for SshfpRecord {
    const NAME: &'static str = "SSHFP";
    const RTYPE: u16 = 44;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        if rdlength < 2 {
            return Err(DecodeError::malformed(
                "wrong record length",
                format!("SSHFP record rdlength {rdlength}, must be at least 2"),
            ));
        }

        let algorithm = reader.read_u8()?;
        let fingerprint_type = reader.read_u8()?;
        let fingerprint = reader.read_bytes(usize::from(rdlength - 2))?.to_vec();

        Ok(Self { algorithm, fingerprint_type, fingerprint })
    }
}

impl fmt::Display for SshfpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.algorithm, self.fingerprint_type, hex(&self.fingerprint))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let buf = &[0x01, 0x01, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26];
        let mut reader = DatagramReader::new(buf);
        let record = SshfpRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.algorithm, 1);
        assert_eq!(record.fingerprint_type, 1);
        assert_eq!(hex(&record.fingerprint), "212223242526");
    }

    #[test]
    fn record_too_short() {
        let buf = &[0x01];
        let mut reader = DatagramReader::new(buf);
        assert!(SshfpRecord::read(&mut reader, 1).is_err());
    }
}
