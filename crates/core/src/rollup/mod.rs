//! Hierarchical roll-up through the account tree.
//!
//! `rollup(a) = flat(a) + Σ rollup(child)`, evaluated post-order with an
//! explicit stack and a per-query memo so each account is summed once.

pub mod calculator;

#[cfg(test)]
mod tests;

pub use calculator::{Rollup, RollupCalculator, ZERO_EPSILON};
