//! Immutable per-query input bundle.

use mizan_shared::types::{AccountId, BudgetId};
use serde::{Deserialize, Serialize};

use crate::account::{Account, AccountTree};
use crate::budget::Budget;
use crate::error::ReportError;

use super::types::JournalEntry;

/// Accounts, journal entries and budgets as read at query time.
///
/// Nothing in the engine mutates a snapshot; callers needing isolation from
/// concurrent posting take a fresh snapshot per query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Full chart of accounts.
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Every journal entry, drafts included.
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
    /// Budget definitions.
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl LedgerSnapshot {
    /// Parses a snapshot from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error on malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Builds the account tree for this snapshot.
    #[must_use]
    pub fn tree(&self) -> AccountTree<'_> {
        AccountTree::build(&self.accounts)
    }

    /// Looks up an account by id.
    #[must_use]
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Looks up an account by its account number.
    #[must_use]
    pub fn account_by_number(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.account_number == number)
    }

    /// Looks up a budget by id.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::BudgetNotFound` if no budget has that id.
    pub fn budget(&self, id: BudgetId) -> Result<&Budget, ReportError> {
        self.budgets
            .iter()
            .find(|b| b.id == id)
            .ok_or(ReportError::BudgetNotFound(id))
    }
}
