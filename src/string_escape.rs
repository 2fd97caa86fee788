//! The DNS presentation-format escaping convention (RFC 1035 §5.1), used
//! to render opaque RDATA byte strings (TXT, HINFO, NAPTR, CAA, ...) as
//! human-readable text.
//!
//! This only goes one way — bytes to escaped text. Parsing presentation
//! text back into bytes would mean implementing zone-file text parsing,
//! which is an explicit Non-goal; nothing in this crate ever needs to
//! go the other direction.

/// Punctuation that must be backslash-escaped even though it falls in the
/// otherwise-printable ASCII range.
fn needs_backslash_escape(b: u8) -> bool {
    matches!(b, b'"' | b'\\' | b'(' | b')' | b';' | b'@' | b'$')
}

/// Escapes a byte string per the DNS presentation format: printable
/// ASCII (`0x21..=0x7E`) other than the punctuation above is emitted
/// as-is, that punctuation is emitted with a backslash prefix, and
/// everything else is emitted as `\ddd` with three decimal digits.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if needs_backslash_escape(b) {
            out.push('\\');
            out.push(b as char);
        } else if (0x21..=0x7E).contains(&b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("\\{b:03}"));
        }
    }
    out
}
