//! Report data types.

use chrono::NaiveDate;
use mizan_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::AccountCategory;
use crate::journal::{DateRange, StatusFilter};

/// One account row of the trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account ID.
    pub account_id: AccountId,
    /// Account number.
    pub account_number: String,
    /// Account name.
    pub name: String,
    /// Account category.
    pub category: AccountCategory,
    /// Total debit amount in the period.
    pub total_debit: Decimal,
    /// Total credit amount in the period.
    pub total_credit: Decimal,
    /// max(debit - credit, 0).
    pub debit_balance: Decimal,
    /// max(credit - debit, 0).
    pub credit_balance: Decimal,
}

/// Trial balance totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Sum of debit balances.
    pub total_debit: Decimal,
    /// Sum of credit balances.
    pub total_credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Reporting period.
    pub period: DateRange,
    /// Entries included.
    pub status: StatusFilter,
    /// One row per account, ordered by account number.
    pub rows: Vec<TrialBalanceRow>,
    /// Totals.
    pub totals: TrialBalanceTotals,
}

/// An account with its rolled-up amount and visible children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportNode {
    /// Account ID.
    pub account_id: AccountId,
    /// Account number.
    pub account_number: String,
    /// Account name.
    pub name: String,
    /// Rolled-up signed amount.
    pub amount: Decimal,
    /// Non-empty child subtrees, ordered by account number.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ReportNode>,
}

/// A statement section for one account category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Category of the section.
    pub category: AccountCategory,
    /// Sum of the rolled-up amounts of the category's top-level accounts.
    pub total: Decimal,
    /// Visible top-level accounts.
    pub accounts: Vec<ReportNode>,
}

impl ReportSection {
    /// An empty section.
    #[must_use]
    pub const fn empty(category: AccountCategory) -> Self {
        Self {
            category,
            total: Decimal::ZERO,
            accounts: Vec::new(),
        }
    }
}

/// Balance sheet report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// As of date (inclusive).
    pub as_of: NaiveDate,
    /// Entries included.
    pub status: StatusFilter,
    /// Assets section.
    pub assets: ReportSection,
    /// Liabilities section.
    pub liabilities: ReportSection,
    /// Equity section.
    pub equity: ReportSection,
    /// Revenue minus expense through `as_of`, not yet closed to equity.
    pub current_earnings: Decimal,
    /// Liabilities plus equity plus current earnings.
    pub liabilities_and_equity: Decimal,
    /// Whether assets equal liabilities plus equity.
    pub is_balanced: bool,
}

/// Income statement report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    /// Reporting period.
    pub period: DateRange,
    /// Entries included.
    pub status: StatusFilter,
    /// Revenue section.
    pub revenue: ReportSection,
    /// Expense section.
    pub expenses: ReportSection,
    /// Revenue minus expenses.
    pub net_income: Decimal,
}
