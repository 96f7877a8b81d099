//! Journal entries and query scoping.
//!
//! - Journal entries and their debit/credit lines
//! - Inclusive date ranges with end-of-day semantics
//! - Explicit entry status filters
//! - The per-query input snapshot

pub mod range;
pub mod snapshot;
pub mod types;

pub use range::DateRange;
pub use snapshot::LedgerSnapshot;
pub use types::{EntryStatus, JournalEntry, JournalLine, StatusFilter};
