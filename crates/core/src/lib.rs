//! Core aggregation engine for Mizan.
//!
//! This crate contains pure read-side ledger math with ZERO I/O.
//! Every operation takes its accounts, journal entries and budgets as
//! borrowed snapshots and never mutates them.
//!
//! # Modules
//!
//! - `account` - Chart of accounts, normal balance sides, account tree
//! - `journal` - Journal entries, date ranges, status filters, snapshots
//! - `aggregate` - Period-scoped debit/credit totals per account
//! - `rollup` - Hierarchical roll-up and zero-suppression
//! - `ledger` - Ledger detail with derived opening and running balances
//! - `budget` - Budget versus actual variance
//! - `reports` - Trial balance, balance sheet, income statement

pub mod account;
pub mod aggregate;
pub mod budget;
pub mod error;
pub mod journal;
pub mod ledger;
pub mod reports;
pub mod rollup;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ReportError;
