//! Domain name decoding and encoding, including RFC 1035 §4.1.4 name
//! compression on the decode side.

use std::collections::HashSet;
use std::fmt;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::string_escape::escape_bytes;

/// The maximum number of compression-pointer hops permitted while
/// decoding a single name, after which decoding fails with `Malformed`
/// rather than keep following an attacker-controlled chain.
///
/// Grounded on `dns/src/strings.rs`'s `RECURSION_LIMIT` (8 there); this
/// crate uses the spec's explicit bound of 128 instead.
const MAX_POINTER_HOPS: u32 = 128;

/// The maximum total encoded length of a name, including every length
/// octet and the terminating zero (RFC 1035 §3.1).
const MAX_ENCODED_LEN: usize = 255;

/// The maximum length of a single label (RFC 1035 §3.1).
const MAX_LABEL_LEN: usize = 63;

/// A domain name: an ordered sequence of labels.
///
/// Labels are kept as raw bytes rather than `String`, since a label is
/// only guaranteed to be octets — the presentation form (`Display`)
/// escapes each label independently using the same convention as TXT
/// and other opaque string RDATA.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    /// The root name (zero labels), which renders as `"."`.
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    /// Builds a name from a dotted presentation string, splitting on
    /// `.` and rejecting labels or a total length that exceed the wire
    /// format's limits. Trailing empty segments (a trailing dot, or the
    /// empty string) are treated as the root and produce no labels.
    pub fn encode(input: &str) -> Result<Self, DecodeError> {
        let mut labels = Vec::new();
        let mut total_len = 1_usize; // the terminating zero octet

        for segment in input.split('.') {
            if segment.is_empty() {
                continue;
            }

            let bytes = segment.as_bytes();
            if bytes.len() > MAX_LABEL_LEN {
                return Err(DecodeError::malformed(
                    "label too long",
                    format!("label {segment:?} is {} octets, max is {MAX_LABEL_LEN}", bytes.len()),
                ));
            }

            total_len += 1 + bytes.len();
            if total_len > MAX_ENCODED_LEN {
                return Err(DecodeError::malformed(
                    "name too long",
                    format!("encoded name would be {total_len} octets, max is {MAX_ENCODED_LEN}"),
                ));
            }

            labels.push(bytes.to_vec());
        }

        Ok(Self { labels })
    }

    /// The number of labels in this name (0 for the root).
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// The labels of this name, as raw bytes.
    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    /// Decodes a name starting at the reader's current position,
    /// following compression pointers as needed. On return, the
    /// reader's cursor sits just past the name as it appeared at the
    /// *call site* — i.e. past the two-octet pointer if one was
    /// encountered, never past whatever the pointer redirected into.
    pub fn read(reader: &mut DatagramReader<'_>) -> Result<Self, DecodeError> {
        let mut labels = Vec::new();
        let mut total_len = 1_usize; // the terminating zero octet
        let mut visited = HashSet::new();
        let mut hops = 0_u32;
        let mut return_position = None;

        loop {
            let len_byte = reader.read_u8()?;

            if len_byte == 0 {
                break;
            } else if len_byte & 0xC0 == 0xC0 {
                let lo = reader.read_u8()?;
                let offset = (u16::from(len_byte & 0x3F) << 8) | u16::from(lo);

                if return_position.is_none() {
                    return_position = Some(reader.position());
                }

                if !visited.insert(offset) {
                    log::warn!("compression pointer cycle detected at offset {offset}");
                    return Err(DecodeError::malformed(
                        "pointer cycle",
                        format!("offset {offset} visited twice while decoding a name"),
                    ));
                }

                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    log::warn!("exceeded {MAX_POINTER_HOPS} compression pointer hops");
                    return Err(DecodeError::malformed(
                        "pointer hop budget exceeded",
                        format!("more than {MAX_POINTER_HOPS} hops while decoding a name"),
                    ));
                }

                reader.seek_to(offset);
            } else if len_byte & 0xC0 == 0 {
                let label_len = usize::from(len_byte);
                let bytes = reader.read_bytes(label_len)?;

                total_len += 1 + label_len;
                if total_len > MAX_ENCODED_LEN {
                    return Err(DecodeError::malformed(
                        "name too long",
                        format!("decoded name exceeds {MAX_ENCODED_LEN} octets"),
                    ));
                }

                labels.push(bytes.to_vec());
            } else {
                return Err(DecodeError::malformed(
                    "reserved label type",
                    format!("label prefix {len_byte:#04x} uses a reserved high-bit pattern"),
                ));
            }
        }

        if let Some(pos) = return_position {
            reader.seek_to(pos);
        }

        Ok(Self { labels })
    }

    /// Encodes this name uncompressed: one length-prefixed label per
    /// segment, terminated by a zero octet. Outbound queries never emit
    /// compression pointers (a conforming but non-optimal choice, per
    /// the spec).
    pub fn write_uncompressed(&self, writer: &mut crate::writer::DatagramWriter) -> std::io::Result<()> {
        for label in &self.labels {
            writer.write_u8(label.len() as u8)?;
            writer.write_bytes(label)?;
        }
        writer.write_u8(0)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.labels {
            write!(f, "{}.", escape_bytes(label))?;
        }
        if self.labels.is_empty() {
            write!(f, ".")?;
        }
        Ok(())
    }
}
