use std::fmt;
use std::net::Ipv4Addr;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// An **A** record, which contains an `Ipv4Addr`.
///
/// # References
///
/// - [RFC 1035 §3.4.1](https://tools.ietf.org/html/rfc1035) — Domain Names,
///   Implementation and Specification (November 1987)
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct ARecord {
    pub address: Ipv4Addr,
}

impl RecordData for ARecord {
    const NAME: &'static str = "A";
    const RTYPE: u16 = 1;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        if rdlength != 4 {
            return Err(DecodeError::malformed(
                "wrong record length",
                format!("A record rdlength {rdlength}, must be exactly 4"),
            ));
        }

        Ok(Self { address: reader.read_ipv4()? })
    }
}

impl fmt::Display for ARecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses() {
        let buf = &[0x7F, 0x00, 0x00, 0x01];
        let mut reader = DatagramReader::new(buf);
        assert_eq!(
            ARecord::read(&mut reader, 4).unwrap(),
            ARecord { address: Ipv4Addr::new(127, 0, 0, 1) }
        );
    }

    #[test]
    fn wrong_length_is_rejected() {
        let buf = &[0x7F, 0x00, 0x00, 0x01, 0x02];
        let mut reader = DatagramReader::new(buf);
        assert!(ARecord::read(&mut reader, 5).is_err());
    }

    #[test]
    fn buffer_ends_abruptly() {
        let buf = &[0x7F, 0x00];
        let mut reader = DatagramReader::new(buf);
        assert!(matches!(ARecord::read(&mut reader, 4), Err(DecodeError::Truncated { .. })));
    }
}
