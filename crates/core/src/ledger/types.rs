//! Ledger detail data types.

use chrono::NaiveDateTime;
use mizan_shared::types::{AccountId, JournalEntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::journal::DateRange;

/// One posting in the ledger detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    /// Entry timestamp.
    pub date: NaiveDateTime,
    /// Journal entry ID.
    pub journal_entry_id: JournalEntryId,
    /// Journal entry number.
    pub entry_number: String,
    /// Journal entry memo.
    pub memo: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Signed change on the account's normal side.
    pub change: Decimal,
    /// Balance after this line.
    pub running_balance: Decimal,
}

/// Ledger detail for one account over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerDetail {
    /// Account ID.
    pub account_id: AccountId,
    /// Requested period.
    pub period: DateRange,
    /// Balance at the start of `period.start`.
    pub opening_balance: Decimal,
    /// Signed change inside the period.
    pub change_in_period: Decimal,
    /// Signed change after the period end.
    pub change_after_period: Decimal,
    /// Balance at the end of `period.end`.
    pub closing_balance: Decimal,
    /// Lines in chronological order.
    pub entries: Vec<LedgerLine>,
}
