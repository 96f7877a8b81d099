//! Budget variance calculation.

use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::account::{Account, AccountCategory};
use crate::aggregate::PeriodAggregator;
use crate::journal::{JournalEntry, StatusFilter};

use super::types::{Budget, BudgetVarianceReport, VarianceLine, VarianceStatus};

/// Name shown for budget items whose account no longer exists.
pub const DELETED_ACCOUNT_NAME: &str = "(deleted account)";

/// Compares budgeted amounts to actuals.
pub struct BudgetVarianceCalculator;

impl BudgetVarianceCalculator {
    /// One variance line per budget item.
    ///
    /// Actuals are flat per account over `[start_date, end_date]`. An item
    /// pointing at a missing account reports `actual = 0` instead of failing
    /// the whole budget.
    #[must_use]
    pub fn variance(
        budget: &Budget,
        accounts: &[Account],
        entries: &[JournalEntry],
        filter: StatusFilter,
    ) -> Vec<VarianceLine> {
        let by_id: HashMap<_, _> = accounts.iter().map(|a| (a.id, a)).collect();
        let flat = PeriodAggregator::aggregate_all(entries, budget.period(), filter);

        budget
            .items
            .iter()
            .map(|item| {
                let account = by_id.get(&item.account_id).copied();
                let actual = account.map_or(Decimal::ZERO, |a| {
                    PeriodAggregator::net_change(a, &flat.get(a.id))
                });
                if account.is_none() {
                    warn!(
                        budget_id = %budget.id,
                        account_id = %item.account_id,
                        "budget item references a missing account"
                    );
                }
                let category = account.map(|a| a.category);
                let difference = actual - item.amount;

                VarianceLine {
                    account_id: item.account_id,
                    account_number: account.map(|a| a.account_number.clone()),
                    account_name: account
                        .map_or_else(|| DELETED_ACCOUNT_NAME.to_string(), |a| a.name.clone()),
                    category,
                    budgeted: item.amount,
                    actual,
                    difference,
                    utilization_percent: Self::utilization_percent(item.amount, actual),
                    status: Self::classify(category, difference),
                }
            })
            .collect()
    }

    /// Variance lines plus totals.
    #[must_use]
    pub fn report(
        budget: &Budget,
        accounts: &[Account],
        entries: &[JournalEntry],
        filter: StatusFilter,
    ) -> BudgetVarianceReport {
        let lines = Self::variance(budget, accounts, entries, filter);
        let total_budgeted: Decimal = lines.iter().map(|l| l.budgeted).sum();
        let total_actual: Decimal = lines.iter().map(|l| l.actual).sum();

        BudgetVarianceReport {
            budget_id: budget.id,
            budget_name: budget.name.clone(),
            period: budget.period(),
            lines,
            total_budgeted,
            total_actual,
            total_difference: total_actual - total_budgeted,
        }
    }

    /// Status from the sign of `actual - budgeted`.
    ///
    /// Spending above an expense budget is unfavorable; for every other
    /// category exceeding the target is favorable.
    #[must_use]
    pub fn classify(category: Option<AccountCategory>, difference: Decimal) -> VarianceStatus {
        let favorable_when_above = !matches!(category, Some(AccountCategory::Expense));
        match (difference.cmp(&Decimal::ZERO), favorable_when_above) {
            (Ordering::Equal, _) => VarianceStatus::OnBudget,
            (Ordering::Greater, true) | (Ordering::Less, false) => VarianceStatus::Favorable,
            (Ordering::Greater, false) | (Ordering::Less, true) => VarianceStatus::Unfavorable,
        }
    }

    /// Zero when budgeted is zero or the ratio does not fit a `Decimal`.
    fn utilization_percent(budgeted: Decimal, actual: Decimal) -> Decimal {
        actual
            .checked_div(budgeted)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(Decimal::ZERO, |percent| percent.round_dp(2))
    }
}
