//! Streaming decoder for Go heap dump record streams.
//!
//! The decoder is a single forward pass: a [`RecordStream`] reads one
//! leading tag varint per iteration, dispatches it to the fixed
//! per-kind field decoder, and yields the decoded [`Record`]. Any
//! malformed or truncated input is terminal for the whole pass — there
//! is no resynchronisation and no partial record is ever surfaced.
//!
//! [`Record`]: godump_types::Record

pub mod decoder;
pub mod error;
pub mod field_list;
pub mod records;
pub mod stream;

pub use decoder::{Dump, DumpDecoder};
pub use error::DecodeError;
pub use field_list::read_field_list;
pub use stream::RecordStream;
