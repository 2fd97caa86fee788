//! Small presentation helpers shared by the DNSSEC and binary-blob record
//! types.

use std::fmt;

/// An opaque piece of binary RDATA (a signature, a public key, a digest)
/// that this crate parses but never interprets, displayed as base64 —
/// the convention zone files use for this kind of variable-length key
/// material.
///
/// # References
///
/// Grounded on `dns/src/record/utils.rs`'s `Opaque` type in the teacher
/// repository, which displays the same way for the same reason: these
/// bytes are meaningful to a DNSSEC validator, not to this codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opaque(pub Vec<u8>);

impl From<Vec<u8>> for Opaque {
    fn from(vec: Vec<u8>) -> Self {
        Self(vec)
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", base64::encode(&self.0))
    }
}

/// A fixed-size fingerprint (SSHFP, TLSA), displayed as lowercase hex —
/// the convention those record types use in zone files, as opposed to
/// the base64 convention for keys and signatures.
pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
