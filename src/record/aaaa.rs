use std::fmt;
use std::net::Ipv6Addr;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// An **AAAA** record, which contains an `Ipv6Addr`.
///
/// # References
///
/// - [RFC 3596](https://tools.ietf.org/html/rfc3596) — DNS Extensions to
///   Support IP Version 6 (October 2003)
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct AaaaRecord {
    pub address: Ipv6Addr,
}

impl RecordData for AaaaRecord {
    const NAME: &'static str = "AAAA";
    const RTYPE: u16 = 28;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        if rdlength != 16 {
            return Err(DecodeError::malformed(
                "wrong record length",
                format!("AAAA record rdlength {rdlength}, must be exactly 16"),
            ));
        }

        Ok(Self { address: reader.read_ipv6()? })
    }
}

impl fmt::Display for AaaaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}
