use std::fmt;

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::record::RecordData;

/// A **CNAME** _(canonical name)_ record, which aliases one domain to
/// another.
///
/// # References
///
/// - [RFC 1035 §3.3.1](https://tools.ietf.org/html/rfc1035)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct CnameRecord {
    pub domain: DomainName,
}

impl RecordData for CnameRecord {
    const NAME: &'static str = "CNAME";
    const RTYPE: u16 = 5;

    fn read(reader: &mut DatagramReader<'_>, _rdlength: u16) -> Result<Self, DecodeError> {
        Ok(Self { domain: DomainName::read(reader)? })
    }
}

impl fmt::Display for CnameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.domain)
    }
}
