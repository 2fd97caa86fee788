//! The 12-octet DNS message header.

use crate::error::DecodeError;
use crate::reader::DatagramReader;
use crate::writer::DatagramWriter;

/// The operation a message requests, packed into the low 4 bits of
/// OPCODE within the flags word.
///
/// # References
///
/// The teacher repository's own `dns/src/wire.rs` references
/// `Opcode::Query` in its integration tests without the type actually
/// being defined anywhere in this crate's ancestry — this enum fills
/// that gap the way the rest of the flag accessors here are built,
/// rather than leaving the field as a bare `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Query,
    IQuery,
    Status,
    Notify,
    Update,
    Other(u8),
}

impl Opcode {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Query,
            1 => Self::IQuery,
            2 => Self::Status,
            4 => Self::Notify,
            5 => Self::Update,
            other => Self::Other(other),
        }
    }

    fn to_bits(self) -> u8 {
        match self {
            Self::Query => 0,
            Self::IQuery => 1,
            Self::Status => 2,
            Self::Notify => 4,
            Self::Update => 5,
            Self::Other(bits) => bits,
        }
    }
}

/// The response code packed into the low 4 bits of RCODE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rcode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Other(u8),
}

impl Rcode {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::NoError,
            1 => Self::FormatError,
            2 => Self::ServerFailure,
            3 => Self::NameError,
            4 => Self::NotImplemented,
            5 => Self::Refused,
            other => Self::Other(other),
        }
    }

    fn to_bits(self) -> u8 {
        match self {
            Self::NoError => 0,
            Self::FormatError => 1,
            Self::ServerFailure => 2,
            Self::NameError => 3,
            Self::NotImplemented => 4,
            Self::Refused => 5,
            Self::Other(bits) => bits,
        }
    }
}

/// The fixed 12-octet header present on every DNS message.
///
/// `flags` is kept as the raw wire word; the named accessors below
/// (`qr`, `opcode`, `aa`, `tc`, `rd`, `ra`, `z`, `rcode`) decode it on
/// demand rather than duplicating the bits into separate fields, so
/// there is exactly one representation to keep consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

const QR_BIT: u16 = 0x8000;
const AA_BIT: u16 = 0x0400;
const TC_BIT: u16 = 0x0200;
const RD_BIT: u16 = 0x0100;
const RA_BIT: u16 = 0x0080;

impl Header {
    pub fn read(reader: &mut DatagramReader<'_>) -> Result<Self, DecodeError> {
        let id = reader.read_u16_be()?;
        let flags = reader.read_u16_be()?;
        let qd_count = reader.read_u16_be()?;
        let an_count = reader.read_u16_be()?;
        let ns_count = reader.read_u16_be()?;
        let ar_count = reader.read_u16_be()?;

        log::debug!(
            "header: id={id} flags={flags:#06x} qd={qd_count} an={an_count} ns={ns_count} ar={ar_count}"
        );

        Ok(Self { id, flags, qd_count, an_count, ns_count, ar_count })
    }

    pub fn write(&self, writer: &mut DatagramWriter) -> std::io::Result<()> {
        writer.write_u16_be(self.id)?;
        writer.write_u16_be(self.flags)?;
        writer.write_u16_be(self.qd_count)?;
        writer.write_u16_be(self.an_count)?;
        writer.write_u16_be(self.ns_count)?;
        writer.write_u16_be(self.ar_count)
    }

    /// Whether this message is a response (set) or a query (clear).
    pub fn qr(&self) -> bool {
        self.flags & QR_BIT != 0
    }

    pub fn opcode(&self) -> Opcode {
        Opcode::from_bits(((self.flags >> 11) & 0x0F) as u8)
    }

    /// Authoritative Answer.
    pub fn aa(&self) -> bool {
        self.flags & AA_BIT != 0
    }

    /// TrunCation.
    pub fn tc(&self) -> bool {
        self.flags & TC_BIT != 0
    }

    /// Recursion Desired.
    pub fn rd(&self) -> bool {
        self.flags & RD_BIT != 0
    }

    /// Recursion Available.
    pub fn ra(&self) -> bool {
        self.flags & RA_BIT != 0
    }

    /// The reserved 3-bit Z field.
    pub fn z(&self) -> u8 {
        ((self.flags >> 4) & 0x07) as u8
    }

    pub fn rcode(&self) -> Rcode {
        Rcode::from_bits((self.flags & 0x0F) as u8)
    }

    /// Builds the flags word for an outbound recursive query with a
    /// given id; used by [`crate::message::encode_query`].
    pub fn query(id: u16, opcode: Opcode, rd: bool) -> Self {
        let mut flags = (u16::from(opcode.to_bits()) & 0x0F) << 11;
        if rd {
            flags |= RD_BIT;
        }
        Self { id, flags, qd_count: 0, an_count: 0, ns_count: 0, ar_count: 0 }
    }
}
