//! Period-scoped aggregation of journal lines.
//!
//! Produces flat (not rolled-up) debit/credit totals per account for a date
//! range and an explicit status filter, plus the signed net change derived
//! from each account's normal balance side.

pub mod service;
pub mod types;


pub use service::PeriodAggregator;
pub use types::{AccountTotals, FlatTotals};
