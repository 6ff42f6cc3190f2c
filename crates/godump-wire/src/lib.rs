//! Wire-level primitives for the Go heap dump container format.
//!
//! A dump is one ASCII version line followed by a sequence of
//! tag-delimited records built from two primitives: unsigned LEB128
//! varints and length-prefixed byte strings. This crate owns those
//! primitives and nothing else.

pub mod error;
pub mod reader;
pub mod varint;

pub use error::WireError;
pub use reader::WireReader;
