//! Writing primitives for outbound DNS queries.

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr};

use byteorder::{BigEndian, WriteBytesExt};

/// A growable buffer for building an outbound DNS message.
///
/// Unlike [`crate::reader::DatagramReader`], the writer has no fixed
/// capacity to run out of: `Vec<u8>` grows on demand, so there is no
/// failure mode analogous to `Truncated`. Writes can still fail at the
/// `io::Write` layer (`byteorder`'s trait bound), which we propagate as
/// `io::Result` rather than inventing a writer-specific error type for
/// a mode of failure that never happens against a `Vec<u8>`.
#[derive(Debug, Default)]
pub struct DatagramWriter {
    buffer: Vec<u8>,
}

impl DatagramWriter {
    /// Creates an empty writer with room for a typical query.
    pub fn new() -> Self {
        Self { buffer: Vec::with_capacity(32) }
    }

    /// The number of octets written so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether anything has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Writes a single octet.
    pub fn write_u8(&mut self, v: u8) -> io::Result<()> {
        self.buffer.write_u8(v)
    }

    /// Writes a big-endian 16-bit integer.
    pub fn write_u16_be(&mut self, v: u16) -> io::Result<()> {
        self.buffer.write_u16::<BigEndian>(v)
    }

    /// Writes a big-endian 32-bit integer.
    pub fn write_u32_be(&mut self, v: u32) -> io::Result<()> {
        self.buffer.write_u32::<BigEndian>(v)
    }

    /// Writes raw bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    /// Writes an IPv4 address as four octets.
    pub fn write_ipv4(&mut self, addr: Ipv4Addr) -> io::Result<()> {
        self.write_bytes(&addr.octets())
    }

    /// Writes an IPv6 address as sixteen octets.
    pub fn write_ipv6(&mut self, addr: Ipv6Addr) -> io::Result<()> {
        self.write_bytes(&addr.octets())
    }

    /// Consumes the writer, returning the finished buffer.
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    /// Borrows the buffer built so far, without consuming the writer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}
