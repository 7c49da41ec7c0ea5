//! Conversion history persistence

pub mod record;
pub mod store;

pub use record::{ConversionRecord, ConversionStats, ConversionStatus};
pub use store::{HistoryStore, DEFAULT_MAX_ENTRIES};
