use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// A **SOA** _(start of authority)_ record, which carries administrative
/// information about a zone. Returned in the authority section when a
/// server has no record for a name (negative caching).
///
/// # References
///
/// - [RFC 1035 §3.3.13](https://tools.ietf.org/html/rfc1035)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SoaRecord {
    pub mname: DomainName,
    pub rname: DomainName,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl RecordData for SoaRecord {
    const NAME: &'static str = "SOA";
    const RTYPE: u16 = 6;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        let mname = DomainName::read(reader)?;
        let rname = DomainName::read(reader)?;
        let serial = reader.read_u32_be()?;
        let refresh = reader.read_u32_be()?;
        let retry = reader.read_u32_be()?;
        let expire = reader.read_u32_be()?;
        let minimum = reader.read_u32_be()?;

        Ok(Self { mname, rname, serial, refresh, retry, expire, minimum })
    }
}

impl fmt::Display for SoaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname, self.rname, self.serial, self.refresh, self.retry, self.expire, self.minimum
        )
    }
}
