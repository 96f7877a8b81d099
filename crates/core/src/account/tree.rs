//! Parent/children index over the chart of accounts.
//!
//! Accounts live in a flat arena keyed by id; children are referenced by id,
//! never by pointer. Each sibling group is sorted by account number.

use std::collections::HashMap;

use mizan_shared::types::AccountId;
use tracing::warn;

use super::types::Account;

/// Children index of the account forest.
#[derive(Debug, Clone, Default)]
pub struct AccountTree<'a> {
    by_id: HashMap<AccountId, &'a Account>,
    children: HashMap<Option<AccountId>, Vec<&'a Account>>,
}

impl<'a> AccountTree<'a> {
    /// Builds the index in O(n log n).
    ///
    /// The first account wins when an id appears twice.
    #[must_use]
    pub fn build(accounts: &'a [Account]) -> Self {
        let mut by_id = HashMap::with_capacity(accounts.len());
        let mut children: HashMap<Option<AccountId>, Vec<&'a Account>> = HashMap::new();

        for account in accounts {
            if by_id.contains_key(&account.id) {
                warn!(account_id = %account.id, "duplicate account id ignored");
                continue;
            }
            by_id.insert(account.id, account);
            children.entry(account.parent_id).or_default().push(account);
        }

        for group in children.values_mut() {
            group.sort_by(|a, b| a.account_number.cmp(&b.account_number));
        }

        Self { by_id, children }
    }

    /// Looks up an account by id.
    #[must_use]
    pub fn get(&self, id: AccountId) -> Option<&'a Account> {
        self.by_id.get(&id).copied()
    }

    /// Direct children of `parent` (`None` = root group), sorted by number.
    #[must_use]
    pub fn children(&self, parent: Option<AccountId>) -> &[&'a Account] {
        self.children.get(&parent).map_or(&[][..], Vec::as_slice)
    }

    /// Direct children of an account.
    #[must_use]
    pub fn children_of(&self, id: AccountId) -> &[&'a Account] {
        self.children(Some(id))
    }

    /// Accounts without a parent, sorted by number.
    #[must_use]
    pub fn roots(&self) -> &[&'a Account] {
        self.children(None)
    }

    /// Accounts whose parent id is not in the chart, sorted by number.
    #[must_use]
    pub fn orphans(&self) -> Vec<&'a Account> {
        let mut orphans: Vec<&'a Account> = self
            .children
            .iter()
            .filter(|(parent, _)| parent.is_some_and(|id| !self.by_id.contains_key(&id)))
            .flat_map(|(_, group)| group.iter().copied())
            .collect();
        orphans.sort_by(|a, b| a.account_number.cmp(&b.account_number));
        orphans
    }

    /// Roots plus orphans: every account a report starts a hierarchy from.
    #[must_use]
    pub fn top_level(&self) -> Vec<&'a Account> {
        let mut top: Vec<&'a Account> = self.roots().to_vec();
        top.extend(self.orphans());
        top.sort_by(|a, b| a.account_number.cmp(&b.account_number));
        top
    }

    /// All indexed accounts, sorted by number.
    #[must_use]
    pub fn accounts(&self) -> Vec<&'a Account> {
        let mut all: Vec<&'a Account> = self.by_id.values().copied().collect();
        all.sort_by(|a, b| a.account_number.cmp(&b.account_number));
        all
    }

    /// Number of indexed accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the tree has no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
