//! Roll-up calculation and zero-suppression.

use std::collections::{HashMap, HashSet};

use mizan_shared::types::AccountId;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::account::AccountTree;

/// Default display threshold: 0.01 currency units.
pub const ZERO_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Rolled-up values for every account of one query.
#[derive(Debug, Clone, Default)]
pub struct Rollup {
    totals: HashMap<AccountId, Decimal>,
    post_order: Vec<AccountId>,
}

impl Rollup {
    /// Rolled-up value of an account (zero if unknown).
    #[must_use]
    pub fn get(&self, id: AccountId) -> Decimal {
        self.totals.get(&id).copied().unwrap_or_default()
    }

    /// Accounts in the order they were completed (children before parents).
    #[must_use]
    pub fn post_order(&self) -> &[AccountId] {
        &self.post_order
    }

    /// Returns true if the subtree under `id` may be hidden.
    ///
    /// Conjunctive test: the account's own rolled-up magnitude is below
    /// `epsilon` and every child subtree is independently empty. A zero parent
    /// with a non-zero descendant is therefore never empty.
    #[must_use]
    pub fn is_empty_subtree(&self, id: AccountId, tree: &AccountTree<'_>, epsilon: Decimal) -> bool {
        let mut seen = HashSet::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            if self.get(current).abs() >= epsilon {
                return false;
            }
            stack.extend(tree.children_of(current).iter().map(|child| child.id));
        }
        true
    }

    /// Every account whose subtree is empty, computed in one post-order pass.
    #[must_use]
    pub fn empty_subtrees(&self, tree: &AccountTree<'_>, epsilon: Decimal) -> HashSet<AccountId> {
        let mut empty = HashSet::new();
        for &id in &self.post_order {
            let own_empty = self.get(id).abs() < epsilon;
            if own_empty
                && tree
                    .children_of(id)
                    .iter()
                    .all(|child| empty.contains(&child.id))
            {
                empty.insert(id);
            }
        }
        empty
    }
}

/// Computes hierarchical roll-ups over an `AccountTree`.
pub struct RollupCalculator;

impl RollupCalculator {
    /// Rolled-up value for a single account.
    ///
    /// `flat` holds each account's own signed change; missing ids read as zero.
    #[must_use]
    pub fn rollup(
        account_id: AccountId,
        flat: &HashMap<AccountId, Decimal>,
        tree: &AccountTree<'_>,
    ) -> Decimal {
        let mut memo = HashMap::new();
        let mut order = Vec::new();
        Self::accumulate(account_id, flat, tree, &mut memo, &mut order)
    }

    /// Rolled-up values for every account in the tree, sharing one memo.
    #[must_use]
    pub fn rollup_all(flat: &HashMap<AccountId, Decimal>, tree: &AccountTree<'_>) -> Rollup {
        let mut memo = HashMap::with_capacity(tree.len());
        let mut order = Vec::with_capacity(tree.len());

        // Top-level first keeps the natural order; the full sweep catches
        // anything unreachable from a root (only possible with a cycle).
        for account in tree.top_level().into_iter().chain(tree.accounts()) {
            Self::accumulate(account.id, flat, tree, &mut memo, &mut order);
        }

        debug!(accounts = memo.len(), "rolled up account tree");
        Rollup {
            totals: memo,
            post_order: order,
        }
    }

    /// Post-order traversal with an explicit stack.
    ///
    /// A node met again while still open closes a cycle; that edge
    /// contributes zero.
    fn accumulate(
        root: AccountId,
        flat: &HashMap<AccountId, Decimal>,
        tree: &AccountTree<'_>,
        memo: &mut HashMap<AccountId, Decimal>,
        order: &mut Vec<AccountId>,
    ) -> Decimal {
        if let Some(total) = memo.get(&root) {
            return *total;
        }

        let mut open: HashSet<AccountId> = HashSet::new();
        let mut stack: Vec<(AccountId, bool)> = vec![(root, false)];

        while let Some((id, expanded)) = stack.pop() {
            if memo.contains_key(&id) {
                continue;
            }

            if expanded {
                let own = flat.get(&id).copied().unwrap_or_default();
                let descendants: Decimal = tree
                    .children_of(id)
                    .iter()
                    .map(|child| memo.get(&child.id).copied().unwrap_or_default())
                    .sum();
                memo.insert(id, own + descendants);
                open.remove(&id);
                order.push(id);
                continue;
            }

            if !open.insert(id) {
                continue;
            }
            stack.push((id, true));
            for child in tree.children_of(id).iter().rev() {
                if open.contains(&child.id) {
                    warn!(parent = %id, child = %child.id, "account hierarchy cycle, edge ignored");
                } else if !memo.contains_key(&child.id) {
                    stack.push((child.id, false));
                }
            }
        }

        memo.get(&root).copied().unwrap_or_default()
    }
}
