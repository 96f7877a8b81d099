//! Budget data types.

use chrono::NaiveDate;
use mizan_shared::types::{AccountId, BudgetId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::AccountCategory;
use crate::journal::DateRange;

/// A budget record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Budget name.
    pub name: String,
    /// First day of the budget period.
    pub start_date: NaiveDate,
    /// Last day of the budget period (inclusive).
    pub end_date: NaiveDate,
    /// Budget lines.
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

impl Budget {
    /// The budget's period as a date range.
    #[must_use]
    pub const fn period(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// A target amount for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Account ID (a leaf account; no roll-up is applied).
    pub account_id: AccountId,
    /// Budgeted amount.
    pub amount: Decimal,
}

/// Variance status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Favorable variance (under budget for expenses, over target otherwise).
    Favorable,
    /// Unfavorable variance (over budget for expenses, under target otherwise).
    Unfavorable,
    /// On budget (no variance).
    OnBudget,
}

/// Budget line with its actual amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarianceLine {
    /// Account ID.
    pub account_id: AccountId,
    /// Account number, if the account still exists.
    pub account_number: Option<String>,
    /// Account name, or a placeholder for a deleted account.
    pub account_name: String,
    /// Account category, if the account still exists.
    pub category: Option<AccountCategory>,
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Actual signed change over the budget period.
    pub actual: Decimal,
    /// actual - budgeted.
    pub difference: Decimal,
    /// actual / budgeted * 100, rounded to 2dp (0 when budgeted is 0).
    pub utilization_percent: Decimal,
    /// Variance status.
    pub status: VarianceStatus,
}

/// Budget vs actual report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetVarianceReport {
    /// Budget ID.
    pub budget_id: BudgetId,
    /// Budget name.
    pub budget_name: String,
    /// Budget period.
    pub period: DateRange,
    /// One line per budget item, in item order.
    pub lines: Vec<VarianceLine>,
    /// Total budgeted amount.
    pub total_budgeted: Decimal,
    /// Total actual amount.
    pub total_actual: Decimal,
    /// Total difference.
    pub total_difference: Decimal,
}
