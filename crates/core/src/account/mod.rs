//! Chart of accounts.
//!
//! - Account records and categories
//! - Normal balance side rules (the one place debit/credit signs are decided)
//! - Parent/children index over the account forest

pub mod side;
pub mod tree;
pub mod types;

pub use side::NormalSide;
pub use tree::AccountTree;
pub use types::{Account, AccountCategory};
