use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::record::RecordData;
use crate::string_escape::escape_bytes;

/// One length-prefixed string inside a TXT RDATA.
///
/// `utf8` is `None` when the raw bytes are not valid UTF-8 — TXT content is
/// formally opaque, so a strict decode failure isn't an error, just a
/// missing view; `presentation` (the escaped form) is always available.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TxtString {
    pub raw: Vec<u8>,
    pub presentation: String,
    pub utf8: Option<String>,
}

/// A **TXT** record: one or more opaque, length-prefixed character-strings.
///
/// # Encoding
///
/// TXT content has no specified encoding. This crate keeps the raw bytes,
/// an escaped presentation-format view, and a best-effort (strict, not
/// lossy) UTF-8 view, so callers that know their zone uses plain text don't
/// have to re-derive it from the escaped form.
///
/// # References
///
/// - [RFC 1035 §3.3.14](https://tools.ietf.org/html/rfc1035)
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TxtRecord {
    pub strings: Vec<TxtString>,
}

impl TxtRecord {
    pub(crate) fn read_strings(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Vec<TxtString>, DecodeError> {
        let mut strings = Vec::new();
        let mut consumed = 0_u16;

        while consumed < rdlength {
            let len = reader.read_u8()?;
            let raw = reader.read_bytes(usize::from(len))?.to_vec();
            consumed += 1 + u16::from(len);

            let presentation = escape_bytes(&raw);
            let utf8 = std::str::from_utf8(&raw).ok().map(str::to_owned);
            strings.push(TxtString { raw, presentation, utf8 });
        }

        Ok(strings)
    }
}

impl RecordData for TxtRecord {
    const NAME: &'static str = "TXT";
    const RTYPE: u16 = 16;

    fn read(reader: &mut DatagramReader<'_>, rdlength: u16) -> Result<Self, DecodeError> {
        Ok(Self { strings: Self::read_strings(reader, rdlength)? })
    }
}

impl fmt::Display for TxtRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.strings.iter().map(|s| format!("\"{}\"", s.presentation)).collect();
        write!(f, "{}", rendered.join(" "))
    }
}
