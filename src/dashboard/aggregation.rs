//! Aggregation of the transaction list into the figures, groups, and series
//! the dashboard renders.
//!
//! Everything here is a pure function over a transaction slice. Inputs are
//! never mutated; all amounts stay in USD, conversion to the display currency
//! happens at render time.

use std::collections::BTreeMap;

use crate::{
    Month, RateTable, SavingsPlan, month_range,
    transaction::{Transaction, TransactionKind},
};

/// The headline totals across all transactions, in USD.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// Net balance, the signed sum of every amount.
    pub balance: f64,
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense magnitudes, as a positive number.
    pub expense: f64,
}

/// Compute the headline totals for the figure cards.
pub fn totals(transactions: &[Transaction]) -> Totals {
    transactions.iter().fold(Totals::default(), |mut totals, transaction| {
        totals.balance += transaction.amount;

        if transaction.amount >= 0.0 {
            totals.income += transaction.amount;
        } else {
            totals.expense += -transaction.amount;
        }

        totals
    })
}

/// The transactions of one kind within a month, for the sidebar tree.
#[derive(Debug, Clone, PartialEq)]
pub struct KindGroup {
    /// Income or expense.
    pub kind: TransactionKind,
    /// The transactions of this kind, in the order they were listed.
    pub transactions: Vec<Transaction>,
}

/// One month's transactions grouped by kind, for the sidebar tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    /// The month the group covers.
    pub month: Month,
    /// The non-empty kind groups, income first.
    pub kinds: Vec<KindGroup>,
}

/// Group transactions by month, then by kind, for the sidebar tree.
///
/// Months are sorted ascending. Within a month, income comes before expenses
/// and kinds with no transactions are omitted. Months without transactions do
/// not appear; gaps are only filled for the chart.
pub fn group_by_month(transactions: &[Transaction]) -> Vec<MonthGroup> {
    let mut by_month: BTreeMap<Month, Vec<Transaction>> = BTreeMap::new();

    for transaction in transactions {
        by_month
            .entry(transaction.month)
            .or_default()
            .push(transaction.clone());
    }

    by_month
        .into_iter()
        .map(|(month, transactions)| {
            let kinds = [TransactionKind::Income, TransactionKind::Expense]
                .into_iter()
                .filter_map(|kind| {
                    let of_kind: Vec<Transaction> = transactions
                        .iter()
                        .filter(|transaction| transaction.kind == kind)
                        .cloned()
                        .collect();

                    (!of_kind.is_empty()).then_some(KindGroup {
                        kind,
                        transactions: of_kind,
                    })
                })
                .collect();

            MonthGroup { month, kinds }
        })
        .collect()
}

/// One month's money flow: income earned and expenses spent, both as
/// positive USD numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyFlow {
    /// The total income in the month.
    pub income: f64,
    /// The total spent in the month, as a positive number.
    pub expense: f64,
}

/// Sum income and expenses per month that has transactions.
pub fn flows_by_month(transactions: &[Transaction]) -> BTreeMap<Month, MonthlyFlow> {
    let mut flows: BTreeMap<Month, MonthlyFlow> = BTreeMap::new();

    for transaction in transactions {
        let flow = flows.entry(transaction.month).or_default();

        if transaction.amount >= 0.0 {
            flow.income += transaction.amount;
        } else {
            flow.expense += -transaction.amount;
        }
    }

    flows
}

/// Every month from the earliest to the latest transaction, inclusive, so
/// the chart's x-axis has no gaps.
pub fn contiguous_months(flows: &BTreeMap<Month, MonthlyFlow>) -> Vec<Month> {
    let (Some(first), Some(last)) = (
        flows.keys().next().copied(),
        flows.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    month_range(first, last)
}

/// The running balance at the end of each month, in USD.
///
/// Months missing from `flows` contribute nothing but still produce a point,
/// so the series stays flat across gaps.
pub fn cumulative_balance(months: &[Month], flows: &BTreeMap<Month, MonthlyFlow>) -> Vec<f64> {
    let mut running = 0.0;

    months
        .iter()
        .map(|month| {
            let flow = flows.get(month).copied().unwrap_or_default();
            running += flow.income - flow.expense;
            running
        })
        .collect()
}

/// The cumulative savings target at the end of each month, in USD.
///
/// A fixed plan contributes its (converted) value every month including
/// gap months; a percentage plan contributes a share of that month's income,
/// so income-less months add nothing.
pub fn savings_projection(
    months: &[Month],
    flows: &BTreeMap<Month, MonthlyFlow>,
    plan: SavingsPlan,
    rates: &RateTable,
) -> Vec<f64> {
    let mut running = 0.0;

    months
        .iter()
        .map(|month| {
            let income = flows.get(month).map(|flow| flow.income).unwrap_or(0.0);
            running += plan.monthly_target_usd(income, rates);
            running
        })
        .collect()
}
