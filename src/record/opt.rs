use std::fmt;
use std::io;

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::writer::DatagramWriter;

/// An EDNS0 Extended DNS Error info code (RFC 8914 §4). Unrecognised raw
/// values collapse to `Unknown(-1)` — a raw code outside the registered
/// range of 0..=24 has nothing useful to report for diagnostics beyond
/// "there was one".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdeCode {
    Other,
    UnsupportedDnskeyAlgorithm,
    UnsupportedDsDigestType,
    StaleAnswer,
    ForgedAnswer,
    DnssecIndeterminate,
    DnssecBogus,
    SignatureExpired,
    SignatureNotYetValid,
    DnskeyMissing,
    RrsigsMissing,
    NoZoneKeyBitSet,
    NsecMissing,
    CachedError,
    NotReady,
    Blocked,
    Censored,
    Filtered,
    Prohibited,
    StaleNxdomainAnswer,
    NotAuthoritative,
    NotSupported,
    NoReachableAuthority,
    NetworkError,
    InvalidData,
    Unknown(i32),
}

impl From<u16> for EdeCode {
    fn from(code: u16) -> Self {
        match code {
            0 => Self::Other,
            1 => Self::UnsupportedDnskeyAlgorithm,
            2 => Self::UnsupportedDsDigestType,
            3 => Self::StaleAnswer,
            4 => Self::ForgedAnswer,
            5 => Self::DnssecIndeterminate,
            6 => Self::DnssecBogus,
            7 => Self::SignatureExpired,
            8 => Self::SignatureNotYetValid,
            9 => Self::DnskeyMissing,
            10 => Self::RrsigsMissing,
            11 => Self::NoZoneKeyBitSet,
            12 => Self::NsecMissing,
            13 => Self::CachedError,
            14 => Self::NotReady,
            15 => Self::Blocked,
            16 => Self::Censored,
            17 => Self::Filtered,
            18 => Self::Prohibited,
            19 => Self::StaleNxdomainAnswer,
            20 => Self::NotAuthoritative,
            21 => Self::NotSupported,
            22 => Self::NoReachableAuthority,
            23 => Self::NetworkError,
            24 => Self::InvalidData,
            _ => Self::Unknown(-1),
        }
    }
}

/// EDNS0 option codes this crate recognizes (RFC 6891 §6.1.2 assigns the
/// registry; RFC 5001 §2.3 and RFC 8914 §4 assign NSID and EDE).
const OPTION_CODE_NSID: u16 = 3;
const OPTION_CODE_EDE: u16 = 15;

/// One EDNS0 sub-option, parsed out of an OPT record's RDATA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdnsOption {
    /// Name Server Identifier: an opaque token identifying which server in
    /// an anycast or load-balanced set answered.
    Nsid { data: Vec<u8>, utf8: Option<String> },

    /// Extended DNS Error: a machine-readable reason code plus optional
    /// free text, attached to a response that indicates a problem.
    Ede { raw_info_code: u16, info_code: EdeCode, extra_text: Option<String> },

    /// An option code this crate doesn't special-case. Retained (rather
    /// than silently dropped) so a decoded OPT record's sub-option count
    /// doesn't quietly disagree with what was on the wire.
    Unknown { code: u16, data: Vec<u8> },
}

/// The **OPT** pseudo-record (RFC 6891), carrying EDNS0 extensions.
///
/// Unlike every other record type, OPT repurposes the CLASS and TTL slots
/// of the resource record preamble: CLASS becomes the requestor's UDP
/// payload size, and TTL is split into extended RCODE, version, and a
/// flags word (whose top bit is the DNSSEC OK bit). [`crate::record::Record::decode`]
/// special-cases rtype 41 and dispatches here with those raw values already
/// extracted, rather than asking OPT to reinterpret a `ResourceRecordInfo`
/// built for ordinary records.
///
/// # References
///
/// - [RFC 6891](https://tools.ietf.org/html/rfc6891) — Extension
///   Mechanisms for DNS (EDNS(0)) (April 2013)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptRecord {
    udp_payload_size: u16,
    extended_rcode: u8,
    version: u8,
    flags: u16,
    pub options: Vec<EdnsOption>,
}

impl OptRecord {
    pub const RTYPE: u16 = 41;

    /// Parses an OPT record's RDATA, given the raw CLASS and TTL values
    /// already read from the preamble (see the type-level docs for why
    /// those can't simply be read as if this were any other record).
    pub fn read(reader: &mut DatagramReader<'_>, rdlength: u16, rclass: u16, ttl: u32) -> Result<Self, DecodeError> {
        let udp_payload_size = rclass;
        let extended_rcode = (ttl >> 24) as u8;
        let version = (ttl >> 16) as u8;
        let flags = (ttl & 0xFFFF) as u16;

        let start = reader.position();
        let mut options = Vec::new();

        while reader.position() - start < rdlength {
            let code = reader.read_u16_be()?;
            let length = reader.read_u16_be()?;

            let option = match code {
                OPTION_CODE_NSID => {
                    let data = reader.read_bytes(usize::from(length))?.to_vec();
                    let utf8 = std::str::from_utf8(&data).ok().map(str::to_owned);
                    EdnsOption::Nsid { data, utf8 }
                }
                OPTION_CODE_EDE => {
                    if length < 2 {
                        return Err(DecodeError::malformed(
                            "EDE option too short",
                            format!("EDE sub-option length {length}, must be at least 2"),
                        ));
                    }
                    let raw_info_code = reader.read_u16_be()?;
                    let info_code = EdeCode::from(raw_info_code);
                    let extra_text = if length > 2 {
                        let bytes = reader.read_bytes(usize::from(length - 2))?;
                        std::str::from_utf8(bytes).ok().map(str::to_owned)
                    } else {
                        None
                    };
                    EdnsOption::Ede { raw_info_code, info_code, extra_text }
                }
                _ => {
                    log::debug!("skipping unrecognized EDNS0 option code {code} ({length} octets)");
                    let data = reader.read_bytes(usize::from(length))?.to_vec();
                    EdnsOption::Unknown { code, data }
                }
            };

            options.push(option);
        }

        reader.sanitize(start + rdlength, rdlength)?;

        Ok(Self { udp_payload_size, extended_rcode, version, flags, options })
    }

    /// The requestor's or responder's advertised UDP payload size.
    pub fn udp_payload_size(&self) -> u16 {
        self.udp_payload_size
    }

    /// The upper 8 bits of the 12-bit extended RCODE (combine with the
    /// header's 4-bit RCODE for the full value).
    pub fn extended_rcode(&self) -> u8 {
        self.extended_rcode
    }

    /// The EDNS(0) version number this message was built against.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Whether the DNSSEC OK bit is set.
    pub fn dnssec_ok(&self) -> bool {
        self.flags & 0x8000 != 0
    }

    /// Builds the OPT record an outbound query attaches to advertise its
    /// UDP payload size and, optionally, request DNSSEC records. Queries
    /// never carry sub-options of their own.
    pub fn for_request(udp_payload_size: u16, dnssec_ok: bool) -> Self {
        Self {
            udp_payload_size,
            extended_rcode: 0,
            version: 0,
            flags: if dnssec_ok { 0x8000 } else { 0 },
            options: Vec::new(),
        }
    }

    /// Writes this record's type, overloaded preamble, and RDATA (its
    /// encoded sub-options, if any) to an outbound buffer. The owning
    /// name is written by the caller beforehand, matching how every
    /// other outbound record field is assembled in [`crate::message`].
    pub fn write(&self, writer: &mut DatagramWriter) -> io::Result<()> {
        writer.write_u16_be(Self::RTYPE)?;
        writer.write_u16_be(self.udp_payload_size)?;
        let ttl = (u32::from(self.extended_rcode) << 24) | (u32::from(self.version) << 16) | u32::from(self.flags);
        writer.write_u32_be(ttl)?;
        writer.write_u16_be(0) // rdlength: queries never carry sub-options
    }
}

impl fmt::Display for OptRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "udp={} rcode_hi={} version={} do={} options={}",
            self.udp_payload_size,
            self.extended_rcode,
            self.version,
            self.dnssec_ok(),
            self.options.len()
        )
    }
}
