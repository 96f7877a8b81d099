//! Ledger detail for a single account.
//!
//! The historical opening balance is derived from the account's stored
//! current balance by subtracting everything posted from the period start
//! onwards; no historical snapshots are needed. This costs one pass over the
//! account's full history per query, which is fine for one account and is
//! never applied to the whole tree.

pub mod resolver;
pub mod types;


pub use resolver::LedgerDetailResolver;
pub use types::{LedgerDetail, LedgerLine};
