//! Reading primitives off of a DNS message buffer.

use std::io::{Cursor, Read};
use std::net::{Ipv4Addr, Ipv6Addr};

use byteorder::{BigEndian, ReadBytesExt};
use log::*;

use crate::error::DecodeError;
use crate::string_escape::escape_bytes;

/// A stateful cursor over an immutable DNS message buffer.
///
/// The reader never mutates the bytes it was given; it only advances an
/// internal offset into them. Name decoding (`read_domain_name`, via
/// [`crate::name`]) needs to be able to jump the cursor backwards to
/// follow a compression pointer and then restore it, which is exactly
/// what [`Cursor::set_position`] gives us.
pub struct DatagramReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> DatagramReader<'a> {
    /// Creates a reader positioned at the start of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { cursor: Cursor::new(buffer) }
    }

    /// The current cursor offset into the buffer.
    pub fn position(&self) -> u16 {
        self.cursor.position() as u16
    }

    /// The total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    /// How many octets remain unread.
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.cursor.position() as usize)
    }

    /// Moves the cursor to an absolute offset, used when following a
    /// compression pointer or restoring the cursor afterwards.
    pub(crate) fn seek_to(&mut self, offset: u16) {
        self.cursor.set_position(u64::from(offset));
    }

    fn require(&self, n: usize) -> Result<(), DecodeError> {
        if self.remaining() < n {
            warn!("truncated read: needed {} octets, {} remained", n, self.remaining());
            return Err(DecodeError::truncated(n, self.remaining()));
        }
        Ok(())
    }

    /// Reads a single octet, advancing the cursor by one.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.require(1)?;
        let v = self.cursor.read_u8()?;
        trace!("read u8 -> {:?}", v);
        Ok(v)
    }

    /// Reads a big-endian 16-bit integer, advancing the cursor by two.
    pub fn read_u16_be(&mut self) -> Result<u16, DecodeError> {
        self.require(2)?;
        let v = self.cursor.read_u16::<BigEndian>()?;
        trace!("read u16 -> {:?}", v);
        Ok(v)
    }

    /// Reads a big-endian 32-bit integer, advancing the cursor by four.
    pub fn read_u32_be(&mut self) -> Result<u32, DecodeError> {
        self.require(4)?;
        let v = self.cursor.read_u32::<BigEndian>()?;
        trace!("read u32 -> {:?}", v);
        Ok(v)
    }

    /// Borrows `n` octets and advances the cursor past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        self.require(n)?;
        let start = self.cursor.position() as usize;
        let slice = &self.cursor.get_ref()[start..start + n];
        self.cursor.set_position((start + n) as u64);
        trace!("read {} bytes -> {:?}", n, slice);
        Ok(slice)
    }

    /// Borrows `n` octets without advancing the cursor.
    pub fn peek_bytes(&self, n: usize) -> Result<&'a [u8], DecodeError> {
        self.require(n)?;
        let start = self.cursor.position() as usize;
        Ok(&self.cursor.get_ref()[start..start + n])
    }

    /// Reads the rest of the buffer, starting at the cursor, without
    /// advancing it. Used by `bytes-to-end` RDATA fields, which compute
    /// their own length from RDLENGTH rather than reading to EOF.
    pub fn remaining_slice(&self) -> &'a [u8] {
        let start = self.cursor.position() as usize;
        &self.cursor.get_ref()[start..]
    }

    /// Reads four octets as an IPv4 address.
    pub fn read_ipv4(&mut self) -> Result<Ipv4Addr, DecodeError> {
        let mut buf = [0_u8; 4];
        self.require(4)?;
        self.cursor.read_exact(&mut buf)?;
        let addr = Ipv4Addr::from(buf);
        trace!("read ipv4 -> {:?}", addr);
        Ok(addr)
    }

    /// Reads sixteen octets as an IPv6 address.
    pub fn read_ipv6(&mut self) -> Result<Ipv6Addr, DecodeError> {
        let mut buf = [0_u8; 16];
        self.require(16)?;
        self.cursor.read_exact(&mut buf)?;
        let addr = Ipv6Addr::from(buf);
        trace!("read ipv6 -> {:?}", addr);
        Ok(addr)
    }

    /// Reads exactly `n` octets and interprets them as a UTF-8 string,
    /// lossily. Used for fields whose length is already fixed by the
    /// caller (e.g. a `bytes-to-end` slice that the caller knows is text).
    pub fn read_string(&mut self, n: usize) -> Result<String, DecodeError> {
        let bytes = self.read_bytes(n)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Reads a one-octet length prefix `L`, then `L` octets, returning
    /// both the raw bytes and their DNS presentation-format escaping
    /// (RFC 1035 §5.1 punctuation and non-printable escaping).
    pub fn read_string_with_length_prefix(&mut self) -> Result<(&'a [u8], String), DecodeError> {
        let len = usize::from(self.read_u8()?);
        let bytes = self.read_bytes(len)?;
        Ok((bytes, escape_bytes(bytes)))
    }

    /// Raises the cursor by `n` octets, failing if that would run past
    /// the end of the buffer.
    pub fn advance(&mut self, n: usize) -> Result<(), DecodeError> {
        self.require(n)?;
        let pos = self.cursor.position();
        self.cursor.set_position(pos + n as u64);
        Ok(())
    }

    /// Asserts that the cursor sits exactly at `expected_index` after a
    /// record's RDATA decoder has run. On a mismatch this either rejects
    /// the record (returning `Malformed`) or, for OPT's sub-option
    /// tolerance, force-advances to the expected index.
    ///
    /// `claimed_rdlength` is carried only for the error message; callers
    /// that already know it reads more naturally than recomputing it
    /// from `expected_index`.
    pub fn sanitize(&mut self, expected_index: u16, claimed_rdlength: u16) -> Result<(), DecodeError> {
        let actual = self.position();
        if actual == expected_index {
            return Ok(());
        }

        warn!(
            "RDLENGTH mismatch: expected cursor at {}, rdlength {}, but was at {}",
            expected_index, claimed_rdlength, actual
        );
        Err(DecodeError::malformed(
            "RDLENGTH mismatch",
            format!("expected cursor at {expected_index} (rdlength {claimed_rdlength}), found {actual}"),
        ))
    }

    /// Force-advances the cursor to `index`, used by the OPT sub-option
    /// tolerance and by lenient-mode record recovery.
    pub(crate) fn force_advance_to(&mut self, index: u16) {
        self.cursor.set_position(u64::from(index));
    }
}
