use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::txt::{TxtRecord, TxtString};
use crate::record::RecordData;

/// An **SPF** record. Its wire format is identical to TXT's; RFC 7208
/// deprecated the dedicated type in favor of publishing SPF policy as TXT,
/// but type 99 still appears on the wire in older zones.
///
/// # References
///
/// - [RFC 4408 §3.1](https://tools.ietf.org/html/rfc4408) (original)
/// - [RFC 7208 §14.1](https://tools.ietf.org/html/rfc7208#section-14.1)
///   (deprecation)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SpfRecord {
    pub strings: Vec<TxtString>,
}

impl RecordData for SpfRecord {
    const NAME: &'static str = "SPF";
    const RTYPE: u16 = 99;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        Ok(Self { strings: TxtRecord::read_strings(reader, rdlength)? })
    }
}

impl fmt::Display for SpfRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.strings.iter().map(|s| format!("\"{}\"", s.presentation)).collect();
        write!(f, "{}", rendered.join(" "))
    }
}
