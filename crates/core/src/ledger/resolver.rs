//! Opening-balance inversion and running balances.

use mizan_shared::types::AccountId;
use rust_decimal::Decimal;
use tracing::debug;

use crate::account::Account;
use crate::aggregate::PeriodAggregator;
use crate::error::ReportError;
use crate::journal::{DateRange, JournalEntry, StatusFilter};

use super::types::{LedgerDetail, LedgerLine};

/// Resolves ledger detail for one account.
pub struct LedgerDetailResolver;

impl LedgerDetailResolver {
    /// Looks up `account_id` and resolves its ledger detail.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::AccountNotFound` if the account is not in
    /// `accounts`; no lines and no balance are produced in that case.
    pub fn resolve(
        account_id: AccountId,
        accounts: &[Account],
        entries: &[JournalEntry],
        range: DateRange,
        filter: StatusFilter,
    ) -> Result<LedgerDetail, ReportError> {
        let account = accounts
            .iter()
            .find(|a| a.id == account_id)
            .ok_or(ReportError::AccountNotFound(account_id))?;
        Ok(Self::resolve_account(account, entries, range, filter))
    }

    /// Resolves ledger detail for a known account.
    ///
    /// `balance(now) = opening + change_in_period + change_after_period`,
    /// solved for `opening`. `entries` must be the full, unfiltered-by-date
    /// history so the after-period part is complete.
    #[must_use]
    pub fn resolve_account(
        account: &Account,
        entries: &[JournalEntry],
        range: DateRange,
        filter: StatusFilter,
    ) -> LedgerDetail {
        let side = account.normal_side();

        let in_period = PeriodAggregator::aggregate(entries, account.id, range, filter);
        let after_period = PeriodAggregator::aggregate_after(entries, account.id, range, filter);
        let change_in_period = PeriodAggregator::net_change(account, &in_period);
        let change_after_period = PeriodAggregator::net_change(account, &after_period);
        let opening_balance = account.balance - change_in_period - change_after_period;

        let mut in_range: Vec<&JournalEntry> = entries
            .iter()
            .filter(|e| filter.matches(e.status) && range.contains(e.date))
            .collect();
        // Stable: equal timestamps keep their input order.
        in_range.sort_by_key(|e| e.date);

        let mut running = opening_balance;
        let mut lines = Vec::new();
        for entry in in_range {
            for line in entry.lines_for(account.id) {
                let change = side.signed(line.debit, line.credit);
                running += change;
                lines.push(LedgerLine {
                    date: entry.date,
                    journal_entry_id: entry.id,
                    entry_number: entry.entry_number.clone(),
                    memo: entry.memo.clone(),
                    debit: line.debit,
                    credit: line.credit,
                    change,
                    running_balance: running,
                });
            }
        }

        debug!(
            account_id = %account.id,
            lines = lines.len(),
            %opening_balance,
            "resolved ledger detail"
        );

        LedgerDetail {
            account_id: account.id,
            period: range,
            opening_balance,
            change_in_period,
            change_after_period,
            closing_balance: lines
                .last()
                .map_or(opening_balance + change_in_period, |l| l.running_balance),
            entries: lines,
        }
    }

    /// Balance at the end of `range.end` without building lines.
    #[must_use]
    pub fn balance_at_end(
        account: &Account,
        entries: &[JournalEntry],
        range: DateRange,
        filter: StatusFilter,
    ) -> Decimal {
        let after = PeriodAggregator::aggregate_after(entries, account.id, range, filter);
        account.balance - PeriodAggregator::net_change(account, &after)
    }
}
