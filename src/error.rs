//! The error taxonomy for decoding DNS messages off the wire.

use std::fmt;
use std::io;

/// Something that went wrong while decoding a DNS message or one of its
/// records.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// A read requested more octets than remained in the buffer.
    Truncated {
        /// How many octets the read needed.
        needed: usize,
        /// How many octets were actually left.
        available: usize,
    },

    /// A structural rule of the wire format was violated: a reserved
    /// label type, a label longer than 63 octets, a name longer than
    /// 255 octets, a compression pointer cycle, or an RDLENGTH that
    /// didn't match what a record's decoder actually consumed.
    Malformed {
        /// A short machine-readable tag for the rule that was broken.
        kind: &'static str,
        /// A human-readable detail string for logging.
        detail: String,
    },
}

impl DecodeError {
    pub(crate) fn truncated(needed: usize, available: usize) -> Self {
        Self::Truncated { needed, available }
    }

    pub(crate) fn malformed(kind: &'static str, detail: impl Into<String>) -> Self {
        Self::Malformed { kind, detail: detail.into() }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { needed, available } => {
                write!(f, "truncated: needed {needed} octets but only {available} remained")
            }
            Self::Malformed { kind, detail } => {
                write!(f, "malformed ({kind}): {detail}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Reading off a `DatagramReader` only ever fails because the buffer ran
/// out; translate that directly into `Truncated` rather than threading
/// explicit lengths through every call site.
impl From<io::Error> for DecodeError {
    fn from(e: io::Error) -> Self {
        log::warn!("I/O error while decoding: {e:?}");
        Self::Truncated { needed: 0, available: 0 }
    }
}
