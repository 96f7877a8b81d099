//! Report generation service.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use mizan_shared::types::AccountId;
use rust_decimal::Decimal;
use tracing::debug;

use crate::account::{Account, AccountCategory, AccountTree};
use crate::aggregate::{FlatTotals, PeriodAggregator};
use crate::journal::{DateRange, JournalEntry, StatusFilter};
use crate::rollup::{Rollup, RollupCalculator};

use super::types::{
    BalanceSheetReport, IncomeStatementReport, ReportNode, ReportSection, TrialBalanceReport,
    TrialBalanceRow, TrialBalanceTotals,
};

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Generates a trial balance over `range`.
    ///
    /// Amounts are flat per account. With balanced entries the debit and
    /// credit columns always agree.
    #[must_use]
    pub fn trial_balance(
        accounts: &[Account],
        entries: &[JournalEntry],
        range: DateRange,
        filter: StatusFilter,
    ) -> TrialBalanceReport {
        let tree = AccountTree::build(accounts);
        let flat = PeriodAggregator::aggregate_all(entries, range, filter);

        let rows: Vec<TrialBalanceRow> = tree
            .accounts()
            .into_iter()
            .map(|account| {
                let totals = flat.get(account.id);
                let net = totals.net_debit();
                TrialBalanceRow {
                    account_id: account.id,
                    account_number: account.account_number.clone(),
                    name: account.name.clone(),
                    category: account.category,
                    total_debit: totals.total_debit,
                    total_credit: totals.total_credit,
                    debit_balance: net.max(Decimal::ZERO),
                    credit_balance: (-net).max(Decimal::ZERO),
                }
            })
            .collect();

        let total_debit: Decimal = rows.iter().map(|r| r.debit_balance).sum();
        let total_credit: Decimal = rows.iter().map(|r| r.credit_balance).sum();

        TrialBalanceReport {
            period: range,
            status: filter,
            rows,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                is_balanced: total_debit == total_credit,
            },
        }
    }

    /// Generates a balance sheet as of a date.
    ///
    /// Revenue and expense not yet closed to equity are reported as
    /// `current_earnings` so that Assets = Liabilities + Equity holds.
    #[must_use]
    pub fn balance_sheet(
        accounts: &[Account],
        entries: &[JournalEntry],
        as_of: NaiveDate,
        filter: StatusFilter,
        epsilon: Decimal,
    ) -> BalanceSheetReport {
        let tree = AccountTree::build(accounts);
        let flat = PeriodAggregator::aggregate_all(entries, DateRange::through(as_of), filter);
        let mut statement = Statement::build(&tree, &flat, epsilon);

        let assets = statement.section(AccountCategory::Asset);
        let liabilities = statement.section(AccountCategory::Liability);
        let equity = statement.section(AccountCategory::Equity);
        let current_earnings = Self::earnings(&tree, &flat);
        let liabilities_and_equity = liabilities.total + equity.total + current_earnings;

        BalanceSheetReport {
            as_of,
            status: filter,
            is_balanced: assets.total == liabilities_and_equity,
            assets,
            liabilities,
            equity,
            current_earnings,
            liabilities_and_equity,
        }
    }

    /// Generates an income statement over `range`.
    #[must_use]
    pub fn income_statement(
        accounts: &[Account],
        entries: &[JournalEntry],
        range: DateRange,
        filter: StatusFilter,
        epsilon: Decimal,
    ) -> IncomeStatementReport {
        let tree = AccountTree::build(accounts);
        let flat = PeriodAggregator::aggregate_all(entries, range, filter);
        let mut statement = Statement::build(&tree, &flat, epsilon);

        let revenue = statement.section(AccountCategory::Revenue);
        let expenses = statement.section(AccountCategory::Expense);

        IncomeStatementReport {
            period: range,
            status: filter,
            net_income: revenue.total - expenses.total,
            revenue,
            expenses,
        }
    }

    /// Flat revenue minus flat expense over every account.
    fn earnings(tree: &AccountTree<'_>, flat: &FlatTotals) -> Decimal {
        tree.accounts()
            .into_iter()
            .map(|account| {
                let change = PeriodAggregator::net_change(account, &flat.get(account.id));
                match account.category {
                    AccountCategory::Revenue => change,
                    AccountCategory::Expense => -change,
                    _ => Decimal::ZERO,
                }
            })
            .sum()
    }
}

/// Rolled-up values and visible nodes for one statement.
struct Statement<'t, 'a> {
    tree: &'t AccountTree<'a>,
    rollup: Rollup,
    nodes: HashMap<AccountId, ReportNode>,
}

impl<'t, 'a> Statement<'t, 'a> {
    /// Rolls up `flat` and builds a node for every non-empty subtree.
    ///
    /// Nodes are assembled in post-order, so children always exist before
    /// their parent takes them. A child on a cycle edge is never built and
    /// is simply left out.
    fn build(tree: &'t AccountTree<'a>, flat: &FlatTotals, epsilon: Decimal) -> Self {
        let net = flat.net_changes(tree.accounts());
        let rollup = RollupCalculator::rollup_all(&net, tree);
        let empty: HashSet<AccountId> = rollup.empty_subtrees(tree, epsilon);

        let mut nodes: HashMap<AccountId, ReportNode> = HashMap::new();
        for &id in rollup.post_order() {
            if empty.contains(&id) {
                continue;
            }
            let Some(account) = tree.get(id) else {
                continue;
            };
            let children = tree
                .children_of(id)
                .iter()
                .filter_map(|child| nodes.remove(&child.id))
                .collect();
            nodes.insert(
                id,
                ReportNode {
                    account_id: id,
                    account_number: account.account_number.clone(),
                    name: account.name.clone(),
                    amount: rollup.get(id),
                    children,
                },
            );
        }

        debug!(
            accounts = tree.len(),
            hidden = empty.len(),
            "built statement nodes"
        );
        Self { tree, rollup, nodes }
    }

    /// Section for `category`, taken from its top-level accounts.
    fn section(&mut self, category: AccountCategory) -> ReportSection {
        let mut section = ReportSection::empty(category);
        for account in self
            .tree
            .top_level()
            .into_iter()
            .filter(|a| a.category == category)
        {
            section.total += self.rollup.get(account.id);
            if let Some(node) = self.nodes.remove(&account.id) {
                section.accounts.push(node);
            }
        }
        section
    }
}
