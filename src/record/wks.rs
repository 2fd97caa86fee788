use std::fmt;
use std::net::Ipv4Addr;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// A **WKS** _(well known services)_ record: a host address plus a bitmap
/// of the ports it serves for a given IANA protocol number.
///
/// # References
///
/// - [RFC 1035 §3.4.2](https://tools.ietf.org/html/rfc1035)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct WksRecord {
    pub address: Ipv4Addr,
    pub protocol: u8,
    pub bitmap: Vec<u8>,
}

impl RecordData for WksRecord {
    const NAME: &'static str = "WKS";
    const RTYPE: u16 = 11;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        let start = reader.position();
        let address = reader.read_ipv4()?;
        let protocol = reader.read_u8()?;

        let consumed = reader.position() - start;
        let bitmap_len = rdlength.saturating_sub(consumed);
        let bitmap = reader.read_bytes(usize::from(bitmap_len))?.to_vec();

        Ok(Self { address, protocol, bitmap })
    }
}

impl fmt::Display for WksRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} octet bitmap)", self.address, self.protocol, self.bitmap.len())
    }
}
