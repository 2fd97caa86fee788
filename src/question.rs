//! The question section: what a query is asking for.

use crate::error::DecodeError;
use crate::name::DomainName;
use crate::reader::DatagramReader;
use crate::writer::DatagramWriter;

/// One entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn read(reader: &mut DatagramReader<'_>) -> Result<Self, DecodeError> {
        let name = DomainName::read(reader)?;
        let qtype = reader.read_u16_be()?;
        let qclass = reader.read_u16_be()?;
        log::trace!("question: name={name} qtype={qtype} qclass={qclass}");
        Ok(Self { name, qtype, qclass })
    }

    pub fn write(&self, writer: &mut DatagramWriter) -> std::io::Result<()> {
        self.name.write_uncompressed(writer)?;
        writer.write_u16_be(self.qtype)?;
        writer.write_u16_be(self.qclass)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips_through_bytes() {
        let question = Question { name: DomainName::encode("query").unwrap(), qtype: 1, qclass: 1 };
        let mut writer = DatagramWriter::new();
        question.write(&mut writer).unwrap();
        let bytes = writer.finish();

        let mut reader = DatagramReader::new(&bytes);
        assert_eq!(Question::read(&mut reader).unwrap(), question);
    }
}
