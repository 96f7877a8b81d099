//! Tests for hierarchical roll-up.

use std::collections::HashMap;

use mizan_shared::types::AccountId;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calculator::{RollupCalculator, ZERO_EPSILON};
use crate::account::{Account, AccountCategory, AccountTree};
use crate::test_support::{account, child};

struct Fixture {
    accounts: Vec<Account>,
    varliklar: AccountId,
    kasa: AccountId,
    banka: AccountId,
    banka_usd: AccountId,
}

/// Varlıklar ─┬─ Kasa (+500)
///            └─ Banka (+300) ── Banka-USD (+50)
fn fixture() -> (Fixture, HashMap<AccountId, Decimal>) {
    let varliklar = account("100", "Varlıklar", AccountCategory::Asset);
    let kasa = child("100.01", "Kasa", &varliklar);
    let banka = child("100.02", "Banka", &varliklar);
    let banka_usd = child("100.02.01", "Banka-USD", &banka);

    let flat = HashMap::from([
        (varliklar.id, dec!(0)),
        (kasa.id, dec!(500)),
        (banka.id, dec!(300)),
        (banka_usd.id, dec!(50)),
    ]);

    let fixture = Fixture {
        varliklar: varliklar.id,
        kasa: kasa.id,
        banka: banka.id,
        banka_usd: banka_usd.id,
        accounts: vec![varliklar, kasa, banka, banka_usd],
    };
    (fixture, flat)
}

#[test]
fn test_rollup_example() {
    let (f, flat) = fixture();
    let tree = AccountTree::build(&f.accounts);

    assert_eq!(RollupCalculator::rollup(f.banka, &flat, &tree), dec!(350));
    assert_eq!(RollupCalculator::rollup(f.varliklar, &flat, &tree), dec!(850));
    assert_eq!(RollupCalculator::rollup(f.kasa, &flat, &tree), dec!(500));
    assert_eq!(RollupCalculator::rollup(f.banka_usd, &flat, &tree), dec!(50));
}

#[test]
fn test_rollup_all_matches_single_rollups() {
    let (f, flat) = fixture();
    let tree = AccountTree::build(&f.accounts);

    let rollup = RollupCalculator::rollup_all(&flat, &tree);

    for account in &f.accounts {
        assert_eq!(
            rollup.get(account.id),
            RollupCalculator::rollup(account.id, &flat, &tree),
            "{}",
            account.name
        );
    }
    assert_eq!(rollup.post_order().len(), 4);
}

#[test]
fn test_post_order_lists_children_first() {
    let (f, flat) = fixture();
    let tree = AccountTree::build(&f.accounts);

    let rollup = RollupCalculator::rollup_all(&flat, &tree);
    let position = |id: AccountId| rollup.post_order().iter().position(|x| *x == id).unwrap();

    assert!(position(f.banka_usd) < position(f.banka));
    assert!(position(f.banka) < position(f.varliklar));
    assert!(position(f.kasa) < position(f.varliklar));
}

#[test]
fn test_missing_flat_values_read_as_zero() {
    let (f, _) = fixture();
    let tree = AccountTree::build(&f.accounts);
    let flat = HashMap::from([(f.banka_usd, dec!(12.5))]);

    assert_eq!(RollupCalculator::rollup(f.varliklar, &flat, &tree), dec!(12.5));
}

#[test]
fn test_zero_parent_with_nonzero_child_is_not_empty() {
    let (f, _) = fixture();
    let tree = AccountTree::build(&f.accounts);
    let flat = HashMap::from([(f.banka_usd, dec!(50)), (f.banka, dec!(-50))]);

    let rollup = RollupCalculator::rollup_all(&flat, &tree);

    // Banka nets to zero but its child does not.
    assert_eq!(rollup.get(f.banka), dec!(0));
    assert!(!rollup.is_empty_subtree(f.banka, &tree, ZERO_EPSILON));
    assert!(!rollup.is_empty_subtree(f.varliklar, &tree, ZERO_EPSILON));
    assert!(rollup.is_empty_subtree(f.kasa, &tree, ZERO_EPSILON));

    let empty = rollup.empty_subtrees(&tree, ZERO_EPSILON);
    assert!(!empty.contains(&f.banka));
    assert!(!empty.contains(&f.varliklar));
    assert!(empty.contains(&f.kasa));
}

#[test]
fn test_all_zero_subtree_is_empty() {
    let (f, _) = fixture();
    let tree = AccountTree::build(&f.accounts);
    let flat = HashMap::from([(f.kasa, dec!(0.004))]);

    let rollup = RollupCalculator::rollup_all(&flat, &tree);
    let empty = rollup.empty_subtrees(&tree, ZERO_EPSILON);

    assert_eq!(empty.len(), 4);
    assert!(rollup.is_empty_subtree(f.varliklar, &tree, ZERO_EPSILON));
}

#[test]
fn test_epsilon_boundary() {
    let (f, _) = fixture();
    let tree = AccountTree::build(&f.accounts);
    let flat = HashMap::from([(f.kasa, dec!(-0.01))]);

    let rollup = RollupCalculator::rollup_all(&flat, &tree);

    assert!(!rollup.is_empty_subtree(f.kasa, &tree, ZERO_EPSILON));
    assert!(rollup.is_empty_subtree(f.kasa, &tree, dec!(0.02)));
}

#[test]
fn test_cycle_terminates() {
    let mut a = account("1", "A", AccountCategory::Asset);
    let mut b = account("2", "B", AccountCategory::Asset);
    a.parent_id = Some(b.id);
    b.parent_id = Some(a.id);
    let flat = HashMap::from([(a.id, dec!(1)), (b.id, dec!(2))]);
    let accounts = vec![a.clone(), b.clone()];
    let tree = AccountTree::build(&accounts);

    let rollup = RollupCalculator::rollup_all(&flat, &tree);

    // Each account is still counted exactly once along the broken edge.
    assert!(rollup.get(a.id) == dec!(3) || rollup.get(b.id) == dec!(3));
    assert_eq!(rollup.post_order().len(), 2);
}

#[test]
fn test_deep_chain_does_not_overflow_stack() {
    let mut accounts = vec![account("0", "Kök", AccountCategory::Asset)];
    for depth in 1..50_000 {
        let parent = &accounts[depth - 1];
        let next = child(&format!("{depth:06}"), "Alt", parent);
        accounts.push(next);
    }
    let flat: HashMap<AccountId, Decimal> =
        accounts.iter().map(|a| (a.id, Decimal::ONE)).collect();
    let tree = AccountTree::build(&accounts);

    let root = accounts[0].id;
    assert_eq!(RollupCalculator::rollup(root, &flat, &tree), Decimal::from(50_000));
}

// ============================================================================
// Property: roll-up additivity
// ============================================================================

/// Random forest: account `i` may hang under any earlier account.
fn forest() -> impl Strategy<Value = (Vec<Account>, HashMap<AccountId, Decimal>)> {
    prop::collection::vec((any::<Option<prop::sample::Index>>(), -100_000i64..100_000), 1..40)
        .prop_map(|raw| {
            let mut accounts: Vec<Account> = Vec::with_capacity(raw.len());
            let mut flat = HashMap::new();
            for (i, (parent, cents)) in raw.into_iter().enumerate() {
                let mut next = account(&format!("{i:03}"), "Hesap", AccountCategory::Asset);
                if i > 0 {
                    next.parent_id = parent.map(|p| accounts[p.index(i)].id);
                }
                flat.insert(next.id, Decimal::new(cents, 2));
                accounts.push(next);
            }
            (accounts, flat)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// rollup(parent) == flat(parent) + Σ rollup(child), at every node.
    #[test]
    fn prop_rollup_is_additive((accounts, flat) in forest()) {
        let tree = AccountTree::build(&accounts);
        let rollup = RollupCalculator::rollup_all(&flat, &tree);

        for account in &accounts {
            let children: Decimal = tree
                .children_of(account.id)
                .iter()
                .map(|c| rollup.get(c.id))
                .sum();
            prop_assert_eq!(rollup.get(account.id), flat[&account.id] + children);
        }
    }

    /// Roots together hold the sum of every flat value.
    #[test]
    fn prop_roots_sum_to_grand_total((accounts, flat) in forest()) {
        let tree = AccountTree::build(&accounts);
        let rollup = RollupCalculator::rollup_all(&flat, &tree);

        let roots: Decimal = tree.roots().iter().map(|r| rollup.get(r.id)).sum();
        let everything: Decimal = flat.values().copied().sum();
        prop_assert_eq!(roots, everything);
    }

    /// The memoized sweep and the one-off computation agree.
    #[test]
    fn prop_single_rollup_matches_sweep((accounts, flat) in forest()) {
        let tree = AccountTree::build(&accounts);
        let rollup = RollupCalculator::rollup_all(&flat, &tree);

        for account in &accounts {
            prop_assert_eq!(
                RollupCalculator::rollup(account.id, &flat, &tree),
                rollup.get(account.id)
            );
        }
    }

    /// The one-pass suppression set agrees with the per-node predicate.
    #[test]
    fn prop_empty_set_matches_predicate((accounts, flat) in forest()) {
        let tree = AccountTree::build(&accounts);
        let rollup = RollupCalculator::rollup_all(&flat, &tree);
        let epsilon = Decimal::new(500, 2);
        let empty = rollup.empty_subtrees(&tree, epsilon);

        for account in &accounts {
            prop_assert_eq!(
                empty.contains(&account.id),
                rollup.is_empty_subtree(account.id, &tree, epsilon)
            );
        }
    }
}
