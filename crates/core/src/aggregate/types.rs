//! Aggregation result types.

use std::collections::HashMap;
use std::ops::AddAssign;

use mizan_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::{Account, NormalSide};
use crate::journal::JournalLine;

/// Debit and credit totals for one account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTotals {
    /// Total debit amount.
    pub total_debit: Decimal,
    /// Total credit amount.
    pub total_credit: Decimal,
}

impl AccountTotals {
    /// Adds one journal line.
    pub fn add_line(&mut self, line: &JournalLine) {
        self.total_debit += line.debit;
        self.total_credit += line.credit;
    }

    /// Signed change on the given side.
    #[must_use]
    pub fn signed(&self, side: NormalSide) -> Decimal {
        side.signed(self.total_debit, self.total_credit)
    }

    /// Debit minus credit, regardless of category.
    #[must_use]
    pub fn net_debit(&self) -> Decimal {
        self.total_debit - self.total_credit
    }

    /// Returns true if nothing was posted.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.total_debit.is_zero() && self.total_credit.is_zero()
    }
}

impl AddAssign for AccountTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.total_debit += rhs.total_debit;
        self.total_credit += rhs.total_credit;
    }
}

/// Flat totals keyed by account id.
///
/// Accounts without matching lines are simply absent and read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatTotals {
    totals: HashMap<AccountId, AccountTotals>,
}

impl FlatTotals {
    /// Totals for an account (zero if it had no matching lines).
    #[must_use]
    pub fn get(&self, id: AccountId) -> AccountTotals {
        self.totals.get(&id).copied().unwrap_or_default()
    }

    /// Adds one journal line to its account's totals.
    pub fn add_line(&mut self, line: &JournalLine) {
        self.totals.entry(line.account_id).or_default().add_line(line);
    }

    /// Signed net change for every given account, keyed by id.
    ///
    /// This is the flat input the roll-up consumes.
    #[must_use]
    pub fn net_changes<'a, I>(&self, accounts: I) -> HashMap<AccountId, Decimal>
    where
        I: IntoIterator<Item = &'a Account>,
    {
        accounts
            .into_iter()
            .map(|account| (account.id, self.get(account.id).signed(account.normal_side())))
            .collect()
    }

    /// Sum over every account that had matching lines.
    #[must_use]
    pub fn grand_total(&self) -> AccountTotals {
        let mut total = AccountTotals::default();
        for totals in self.totals.values() {
            total += *totals;
        }
        total
    }

    /// Number of accounts with matching lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns true if no line matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
