use std::fmt;

use crate::util::Opaque;

/// A record whose type number this crate doesn't have a dedicated decoder
/// for (or that a lenient-mode decode downgraded after a malformed RDATA).
/// The raw RDATA is kept rather than discarded, since a caller might still
/// want to know it was there.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct UnknownRecord {
    pub rtype: u16,
    pub raw: Opaque,
}

impl fmt::Display for UnknownRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TYPE{} {}", self.rtype, self.raw)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn displays_type_and_base64_rdata() {
        let record = UnknownRecord { rtype: 65280, raw: Opaque(vec![0xde, 0xad, 0xbe, 0xef]) };
        assert_eq!(record.to_string(), format!("TYPE65280 {}", Opaque(vec![0xde, 0xad, 0xbe, 0xef])));
    }
}
