use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::util::Opaque;

/// A **NULL** record: anything at all, up to 65535 octets. RFC 1035 leaves
/// its meaning experimental and unspecified.
///
/// # References
///
/// - [RFC 1035 §3.3.10](https://tools.ietf.org/html/rfc1035)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct NullRecord {
    pub data: Opaque,
}

impl RecordData for NullRecord {
    const NAME: &'static str = "NULL";
    const RTYPE: u16 = 10;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        let data = reader.read_bytes(usize::from(rdlength))?.to_vec();
        Ok(Self { data: Opaque(data) })
    }
}

impl fmt::Display for NullRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_arbitrary_bytes() {
        let buf = &[0xDE, 0xAD, 0xBE, 0xEF, 0x00];
        let mut reader = DatagramReader::new(buf);
        let record = NullRecord::read(&mut reader, buf.len() as u16).unwrap();
        assert_eq!(record.data.0, buf.to_vec());
    }

    #[test]
    fn zero_length_is_legal() {
        let mut reader = DatagramReader::new(&[]);
        let record = NullRecord::read(&mut reader, 0).unwrap();
        assert!(record.data.0.is_empty());
    }
}
