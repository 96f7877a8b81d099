//! Integration tests over the JSON snapshot format.
//!
//! Parses a small chart, journal and budget and runs every report against it.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use mizan_core::ReportError;
use mizan_core::account::AccountCategory;
use mizan_core::budget::{BudgetVarianceCalculator, VarianceStatus};
use mizan_core::journal::{DateRange, EntryStatus, LedgerSnapshot, StatusFilter};
use mizan_core::ledger::LedgerDetailResolver;
use mizan_core::reports::ReportService;
use mizan_core::rollup::ZERO_EPSILON;
use mizan_shared::types::BudgetId;

const SNAPSHOT: &str = r#"{
  "accounts": [
    { "id": "0190a000-0000-7000-8000-000000000001", "account_number": "100", "name": "Varlıklar", "category": "asset" },
    { "id": "0190a000-0000-7000-8000-000000000002", "account_number": "100.01", "name": "Kasa", "category": "asset",
      "parent_id": "0190a000-0000-7000-8000-000000000001", "balance": "8500" },
    { "id": "0190a000-0000-7000-8000-000000000003", "account_number": "500", "name": "Sermaye", "category": "equity",
      "balance": "10000" },
    { "id": "0190a000-0000-7000-8000-000000000004", "account_number": "770", "name": "Kira Gideri", "category": "expense",
      "balance": "1500" }
  ],
  "entries": [
    { "id": "0190a000-0000-7000-8000-0000000000a1", "entry_number": "YV-1", "date": "2024-01-02T09:00:00",
      "memo": "Sermaye girişi", "status": "posted",
      "items": [
        { "account_id": "0190a000-0000-7000-8000-000000000002", "debit": "10000" },
        { "account_id": "0190a000-0000-7000-8000-000000000003", "credit": "10000" }
      ] },
    { "id": "0190a000-0000-7000-8000-0000000000a2", "entry_number": "YV-2", "date": "2024-02-01T23:59:59",
      "memo": "Ocak kirası", "status": "posted",
      "items": [
        { "account_id": "0190a000-0000-7000-8000-000000000004", "debit": "1500" },
        { "account_id": "0190a000-0000-7000-8000-000000000002", "credit": "1500" }
      ] },
    { "id": "0190a000-0000-7000-8000-0000000000a3", "entry_number": "YV-3", "date": "2024-02-05T10:00:00",
      "status": "draft",
      "items": [
        { "account_id": "0190a000-0000-7000-8000-000000000004", "debit": "200" },
        { "account_id": "0190a000-0000-7000-8000-000000000002", "credit": "200" }
      ] }
  ],
  "budgets": [
    { "id": "0190a000-0000-7000-8000-0000000000b1", "name": "2024 Şubat", "start_date": "2024-02-01",
      "end_date": "2024-02-29",
      "items": [ { "account_id": "0190a000-0000-7000-8000-000000000004", "amount": "1000" } ] }
  ]
}"#;

fn snapshot() -> LedgerSnapshot {
    LedgerSnapshot::from_json(SNAPSHOT).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_snapshot_parses_with_defaults() {
    let snap = snapshot();

    assert_eq!(snap.accounts.len(), 4);
    assert_eq!(snap.entries.len(), 3);
    assert_eq!(snap.budgets.len(), 1);

    let varliklar = snap.account_by_number("100").unwrap();
    assert_eq!(varliklar.balance, dec!(0));
    assert!(varliklar.is_root());
    assert_eq!(snap.account_by_number("770").unwrap().category, AccountCategory::Expense);

    let draft = &snap.entries[2];
    assert_eq!(draft.status, EntryStatus::Draft);
    assert!(draft.memo.is_empty());
    assert_eq!(draft.items[0].credit, dec!(0));
    assert!(snap.entries.iter().all(|e| e.is_balanced()));

    let tree = snap.tree();
    assert_eq!(tree.roots().len(), 3);
    assert_eq!(tree.children_of(varliklar.id).len(), 1);
}

#[test]
fn test_unknown_budget_is_reported() {
    let snap = snapshot();
    let missing = BudgetId::new();

    assert_eq!(snap.budget(missing).unwrap_err(), ReportError::BudgetNotFound(missing));
}

#[test]
fn test_ledger_detail_from_snapshot() {
    let snap = snapshot();
    let kasa = snap.account_by_number("100.01").unwrap();
    let february = DateRange::new(day(2024, 2, 1), day(2024, 2, 29));

    let detail = LedgerDetailResolver::resolve(
        kasa.id,
        &snap.accounts,
        &snap.entries,
        february,
        StatusFilter::POSTED,
    )
    .unwrap();

    assert_eq!(detail.opening_balance, dec!(10000));
    assert_eq!(detail.entries.len(), 1);
    assert_eq!(detail.entries[0].running_balance, dec!(8500));
    assert_eq!(detail.closing_balance, kasa.balance);
}

#[test]
fn test_statements_from_snapshot() {
    let snap = snapshot();

    let sheet = ReportService::balance_sheet(
        &snap.accounts,
        &snap.entries,
        day(2024, 2, 29),
        StatusFilter::POSTED,
        ZERO_EPSILON,
    );
    assert_eq!(sheet.assets.total, dec!(8500));
    assert_eq!(sheet.current_earnings, dec!(-1500));
    assert!(sheet.is_balanced);

    let trial = ReportService::trial_balance(
        &snap.accounts,
        &snap.entries,
        DateRange::through(day(2024, 2, 29)),
        StatusFilter::Any,
    );
    assert_eq!(trial.totals.total_debit, dec!(10000));
    assert!(trial.totals.is_balanced);
}

#[test]
fn test_budget_from_snapshot() {
    let snap = snapshot();
    let budget = snap.budgets[0].clone();

    let report = BudgetVarianceCalculator::report(&budget, &snap.accounts, &snap.entries, StatusFilter::POSTED);

    assert_eq!(report.lines[0].actual, dec!(1500));
    assert_eq!(report.lines[0].difference, dec!(500));
    assert_eq!(report.lines[0].status, VarianceStatus::Unfavorable);
    assert_eq!(report.lines[0].utilization_percent, dec!(150.00));
}

#[test]
fn test_day_only_entry_dates() {
    let json = SNAPSHOT.replace("2024-02-01T23:59:59", "2024-01-31");
    let snap = LedgerSnapshot::from_json(&json).unwrap();
    let kasa = snap.account_by_number("100.01").unwrap();
    let january = DateRange::new(day(2024, 1, 1), day(2024, 1, 31));

    assert_eq!(snap.entries[1].date, day(2024, 1, 31).and_hms_opt(0, 0, 0).unwrap());

    let detail =
        LedgerDetailResolver::resolve(kasa.id, &snap.accounts, &snap.entries, january, StatusFilter::POSTED)
            .unwrap();
    assert_eq!(detail.entries.len(), 2);
    assert_eq!(detail.closing_balance, dec!(8500));
}
