//! Period aggregation service.

use chrono::NaiveDateTime;
use mizan_shared::types::AccountId;
use rust_decimal::Decimal;
use tracing::debug;

use crate::account::Account;
use crate::journal::{DateRange, JournalEntry, StatusFilter};

use super::types::{AccountTotals, FlatTotals};

/// Sums journal lines per account over a period.
pub struct PeriodAggregator;

impl PeriodAggregator {
    /// Totals for one account over `range`, restricted to `filter`.
    ///
    /// A malformed range yields zero totals.
    #[must_use]
    pub fn aggregate(
        entries: &[JournalEntry],
        account_id: AccountId,
        range: DateRange,
        filter: StatusFilter,
    ) -> AccountTotals {
        Self::sum_where(entries, account_id, filter, |at| range.contains(at))
    }

    /// Totals for one account from entries dated strictly after `range.end`.
    #[must_use]
    pub fn aggregate_after(
        entries: &[JournalEntry],
        account_id: AccountId,
        range: DateRange,
        filter: StatusFilter,
    ) -> AccountTotals {
        Self::sum_where(entries, account_id, filter, |at| range.is_after(at))
    }

    /// Totals for every account in one pass over the entries.
    #[must_use]
    pub fn aggregate_all(
        entries: &[JournalEntry],
        range: DateRange,
        filter: StatusFilter,
    ) -> FlatTotals {
        let mut flat = FlatTotals::default();
        if range.is_malformed() {
            debug!(start = %range.start, end = %range.end, "malformed date range, empty aggregation");
            return flat;
        }

        let mut matched = 0usize;
        for entry in entries
            .iter()
            .filter(|e| filter.matches(e.status) && range.contains(e.date))
        {
            matched += 1;
            for line in &entry.items {
                flat.add_line(line);
            }
        }

        debug!(
            entries = entries.len(),
            matched,
            accounts = flat.len(),
            "aggregated period totals"
        );
        flat
    }

    /// Signed net change for `account` given its totals.
    ///
    /// Debit-normal: debit - credit. Credit-normal: credit - debit.
    /// For Revenue and Expense this is the "actual" used by budgets and the
    /// income statement.
    #[must_use]
    pub fn net_change(account: &Account, totals: &AccountTotals) -> Decimal {
        totals.signed(account.normal_side())
    }

    fn sum_where<F>(
        entries: &[JournalEntry],
        account_id: AccountId,
        filter: StatusFilter,
        in_scope: F,
    ) -> AccountTotals
    where
        F: Fn(NaiveDateTime) -> bool,
    {
        let mut totals = AccountTotals::default();
        for entry in entries
            .iter()
            .filter(|e| filter.matches(e.status) && in_scope(e.date))
        {
            for line in entry.lines_for(account_id) {
                totals.add_line(line);
            }
        }
        totals
    }
}
