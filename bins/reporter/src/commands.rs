//! Report dispatch.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, info};

use mizan_core::budget::{Budget, BudgetVarianceCalculator};
use mizan_core::journal::{DateRange, LedgerSnapshot, StatusFilter};
use mizan_core::ledger::LedgerDetailResolver;
use mizan_core::reports::ReportService;
use mizan_shared::config::{AppConfig, StatusSetting};
use mizan_shared::types::{AccountId, BudgetId};
use mizan_shared::{AppError, AppResult};

use crate::cli::{Period, Report};

/// Effective report settings after applying CLI overrides to config.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Filter for the trial balance.
    pub trial_balance_status: StatusFilter,
    /// Filter for statements, ledger detail and budgets.
    pub statement_status: StatusFilter,
    /// Zero-suppression threshold.
    pub epsilon: Decimal,
}

impl Settings {
    /// Config defaults, with `--status` applied to every report and
    /// `--epsilon` to the statements.
    pub fn resolve(config: &AppConfig, status: Option<StatusSetting>, epsilon: Option<Decimal>) -> Self {
        Self {
            trial_balance_status: status.unwrap_or(config.report.trial_balance_status).into(),
            statement_status: status.unwrap_or(config.report.statement_status).into(),
            epsilon: epsilon.unwrap_or(config.report.zero_epsilon),
        }
    }
}

/// Builds the requested report as JSON.
pub fn run(report: &Report, snapshot: &LedgerSnapshot, settings: Settings) -> AppResult<Value> {
    if settings.epsilon.is_sign_negative() {
        return Err(AppError::Validation(format!(
            "zero threshold must not be negative: {}",
            settings.epsilon
        )));
    }

    match report {
        Report::TrialBalance { period } => {
            let range = range(period)?;
            info!(start = %range.start, end = %range.end, "trial balance");
            to_json(&ReportService::trial_balance(
                &snapshot.accounts,
                &snapshot.entries,
                range,
                settings.trial_balance_status,
            ))
        }
        Report::BalanceSheet { as_of } => {
            info!(%as_of, "balance sheet");
            to_json(&ReportService::balance_sheet(
                &snapshot.accounts,
                &snapshot.entries,
                *as_of,
                settings.statement_status,
                settings.epsilon,
            ))
        }
        Report::IncomeStatement { period } => {
            let range = range(period)?;
            info!(start = %range.start, end = %range.end, "income statement");
            to_json(&ReportService::income_statement(
                &snapshot.accounts,
                &snapshot.entries,
                range,
                settings.statement_status,
                settings.epsilon,
            ))
        }
        Report::Ledger { account, period } => {
            let range = range(period)?;
            let account_id = find_account(snapshot, account)?;
            info!(%account_id, start = %range.start, end = %range.end, "ledger detail");
            to_json(&LedgerDetailResolver::resolve(
                account_id,
                &snapshot.accounts,
                &snapshot.entries,
                range,
                settings.statement_status,
            )?)
        }
        Report::Budget { budget } => {
            let budget = find_budget(snapshot, budget)?;
            budget.period().validate()?;
            info!(budget_id = %budget.id, "budget variance");
            to_json(&BudgetVarianceCalculator::report(
                budget,
                &snapshot.accounts,
                &snapshot.entries,
                settings.statement_status,
            ))
        }
    }
}

/// Date range from `--from`/`--to`, rejecting a backwards range.
fn range(period: &Period) -> AppResult<DateRange> {
    let range = DateRange::new(period.from.unwrap_or(NaiveDate::MIN), period.to);
    range.validate()?;
    Ok(range)
}

/// Resolves an account by number first, then by id.
fn find_account(snapshot: &LedgerSnapshot, key: &str) -> AppResult<AccountId> {
    if let Some(account) = snapshot.account_by_number(key) {
        return Ok(account.id);
    }
    let id = AccountId::from_str(key)
        .map_err(|_| AppError::NotFound(format!("Account {key}")))?;
    debug!(%id, "account selected by id");
    Ok(id)
}

/// Resolves a budget by id first, then by name.
fn find_budget<'s>(snapshot: &'s LedgerSnapshot, key: &str) -> AppResult<&'s Budget> {
    if let Ok(id) = BudgetId::from_str(key) {
        return Ok(snapshot.budget(id)?);
    }
    snapshot
        .budgets
        .iter()
        .find(|b| b.name == key)
        .ok_or_else(|| AppError::NotFound(format!("Budget {key}")))
}

fn to_json<T: serde::Serialize>(report: &T) -> AppResult<Value> {
    serde_json::to_value(report).map_err(|e| AppError::Internal(e.to_string()))
}
