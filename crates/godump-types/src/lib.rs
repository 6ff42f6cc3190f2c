//! Data model for decoded heap dump records.
//!
//! Everything here is transient: records are constructed once during a
//! single decoding pass, never mutated afterwards, and never persisted.
//! The decoding logic lives in `godump-decoder`; this crate only knows
//! the closed tag set and the shape of each record kind.

pub mod memstats;
pub mod record;
pub mod tag;

pub use memstats::MemStatsRecord;
pub use record::{Field, Record};
pub use tag::RecordTag;
