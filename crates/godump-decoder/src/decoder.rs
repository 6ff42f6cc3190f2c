use godump_types::record::Record;
use godump_wire::WireReader;

use crate::error::DecodeError;
use crate::stream::RecordStream;

/// A fully decoded dump: the version header line plus every record in
/// stream order. The explicit EOF marker is consumed but not stored —
/// a dump whose record section is just the end tag has zero records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dump {
    pub header: String,
    pub records: Vec<Record>,
}

/// Whole-buffer convenience decoder.
///
/// Wraps [`RecordStream`] for callers that have the dump in memory and
/// want all records at once (tests, the validate command). Large dumps
/// are better served by driving the stream directly.
pub struct DumpDecoder;

impl DumpDecoder {
    /// Decode a complete dump from a byte slice.
    ///
    /// # Errors
    ///
    /// Propagates the first fatal [`DecodeError`]; no partial record
    /// set is returned.
    pub fn decode(bytes: &[u8]) -> Result<Dump, DecodeError> {
        let mut reader = WireReader::new(bytes);
        let header = reader.read_header_line()?;

        let mut stream = RecordStream::new(reader);
        let mut records = Vec::new();
        while let Some(record) = stream.next_record()? {
            if matches!(record, Record::Eof) {
                break;
            }
            records.push(record);
        }

        Ok(Dump { header, records })
    }
}
