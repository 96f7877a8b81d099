//! Normal balance side.
//!
//! Every signed amount in the engine is derived here:
//! - Debit-normal (Asset, Expense): change = debit - credit
//! - Credit-normal (Liability, Equity, Revenue): change = credit - debit

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The side on which an account's balance increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalSide {
    /// Balance increases with debits.
    Debit,
    /// Balance increases with credits.
    Credit,
}

impl NormalSide {
    /// Signed balance change for a debit/credit pair.
    #[must_use]
    pub fn signed(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}
