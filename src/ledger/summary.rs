//! Pure aggregations over ledger collections.
//!
//! Every function here recomputes from the slices it is given; nothing is
//! cached. Grouping keeps the order in which a category is first seen, and all
//! sorts are stable, so ties stay in that order.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{budget::Budget, category::Category, month::Month, transaction::Transaction};

/// Number of categories reported in the all-time summary.
pub const TOP_CATEGORY_LIMIT: usize = 5;
/// Number of categories reported in a single month's summary.
pub const MONTH_TOP_CATEGORY_LIMIT: usize = 3;

pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";
pub const UNKNOWN_CATEGORY_COLOR: &str = "#cccccc";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmount {
    pub category_id: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category_id: String,
    pub amount: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    pub category_id: String,
    pub budgeted: Decimal,
    pub actual: Decimal,
}

/// All-time totals derived from every transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_savings: Decimal,
    pub top_categories: Vec<CategoryShare>,
}

/// Totals restricted to one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub month: Month,
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
    pub savings_rate: Decimal,
    pub top_categories: Vec<CategoryShare>,
}

/// Percentage change of a month against the one before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthComparison {
    pub month: Month,
    pub income_change: Decimal,
    pub expense_change: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    OnTrack,
    GettingClose,
    NearLimit,
    OverBudget,
}

impl BudgetStatus {
    pub fn from_usage(usage: Decimal) -> Self {
        if usage < Decimal::from(50) {
            BudgetStatus::OnTrack
        } else if usage < Decimal::from(80) {
            BudgetStatus::GettingClose
        } else if usage < Decimal::ONE_HUNDRED {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::OverBudget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "On Track",
            BudgetStatus::GettingClose => "Getting Close",
            BudgetStatus::NearLimit => "Near Limit",
            BudgetStatus::OverBudget => "Over Budget",
        }
    }
}

/// A budget-vs-actual row enriched for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    pub category_id: String,
    pub budgeted: Decimal,
    pub actual: Decimal,
    pub remaining: Decimal,
    /// Share of the budget spent, capped at 100.
    pub usage: Decimal,
    pub status: BudgetStatus,
}

/// Monthly expense for one category, joined with its display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub category_id: String,
    pub name: String,
    pub color: String,
    pub amount: Decimal,
}

/// `part / whole * 100`, or zero when `whole` is zero.
///
/// Ratios outside the `Decimal` range saturate to `Decimal::MAX` or `Decimal::MIN`.
pub fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| {
            if part.is_sign_negative() == whole.is_sign_negative() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
}

/// Relative change from `previous` to `current`, in percent.
pub fn percentage_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        if current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    } else {
        percentage_of(current.saturating_sub(previous), previous)
    }
}

pub fn total_income<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Decimal {
    transactions
        .into_iter()
        .filter(|txn| txn.is_income())
        .fold(Decimal::ZERO, |total, txn| total.saturating_add(txn.amount))
}

pub fn total_expenses<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Decimal {
    transactions
        .into_iter()
        .filter(|txn| txn.is_expense())
        .fold(Decimal::ZERO, |total, txn| total.saturating_add(txn.abs_amount()))
}

/// Sums absolute expense amounts per category, in first-seen order.
pub fn group_expenses<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<CategoryAmount> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut grouped: Vec<CategoryAmount> = Vec::new();
    for txn in transactions.into_iter().filter(|txn| txn.is_expense()) {
        match index.get(txn.category_id.as_str()) {
            Some(&slot) => {
                let entry = &mut grouped[slot];
                entry.amount = entry.amount.saturating_add(txn.abs_amount());
            }
            None => {
                index.insert(txn.category_id.as_str(), grouped.len());
                grouped.push(CategoryAmount {
                    category_id: txn.category_id.clone(),
                    amount: txn.abs_amount(),
                });
            }
        }
    }
    grouped
}

pub fn transactions_in_month(transactions: &[Transaction], month: Month) -> Vec<&Transaction> {
    transactions.iter().filter(|txn| txn.in_month(month)).collect()
}

pub fn expenses_by_category(transactions: &[Transaction], month: Month) -> Vec<CategoryAmount> {
    group_expenses(transactions.iter().filter(|txn| txn.in_month(month)))
}

pub fn budget_vs_actual(
    budgets: &[Budget],
    transactions: &[Transaction],
    month: Month,
) -> Vec<BudgetComparison> {
    let actuals: HashMap<String, Decimal> = expenses_by_category(transactions, month)
        .into_iter()
        .map(|entry| (entry.category_id, entry.amount))
        .collect();
    budgets
        .iter()
        .filter(|budget| budget.month == month)
        .map(|budget| BudgetComparison {
            category_id: budget.category_id.clone(),
            budgeted: budget.amount,
            actual: actuals
                .get(&budget.category_id)
                .copied()
                .unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Ranks grouped expenses by amount, descending, and keeps the first `limit`.
pub fn top_categories(
    mut expenses: Vec<CategoryAmount>,
    total: Decimal,
    limit: usize,
) -> Vec<CategoryShare> {
    expenses.sort_by(|a, b| b.amount.cmp(&a.amount));
    expenses
        .into_iter()
        .take(limit)
        .map(|entry| CategoryShare {
            percentage: percentage_of(entry.amount, total),
            category_id: entry.category_id,
            amount: entry.amount,
        })
        .collect()
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let total_income = total_income(transactions);
    let total_expenses = total_expenses(transactions);
    Summary {
        total_income,
        total_expenses,
        net_savings: total_income.saturating_sub(total_expenses),
        top_categories: top_categories(
            group_expenses(transactions),
            total_expenses,
            TOP_CATEGORY_LIMIT,
        ),
    }
}

pub fn summarize_month(transactions: &[Transaction], month: Month) -> MonthSummary {
    let in_month = transactions_in_month(transactions, month);
    let income = total_income(in_month.iter().copied());
    let expenses = total_expenses(in_month.iter().copied());
    let savings = income.saturating_sub(expenses);
    let savings_rate = if income > Decimal::ZERO {
        percentage_of(savings, income)
    } else {
        Decimal::ZERO
    };
    MonthSummary {
        month,
        income,
        expenses,
        savings,
        savings_rate,
        top_categories: top_categories(
            group_expenses(in_month.iter().copied()),
            expenses,
            MONTH_TOP_CATEGORY_LIMIT,
        ),
    }
}

pub fn compare_with_previous(transactions: &[Transaction], month: Month) -> MonthComparison {
    let previous = month.previous();
    let current_income = total_income(transactions.iter().filter(|t| t.in_month(month)));
    let current_expenses = total_expenses(transactions.iter().filter(|t| t.in_month(month)));
    let previous_income = total_income(transactions.iter().filter(|t| t.in_month(previous)));
    let previous_expenses = total_expenses(transactions.iter().filter(|t| t.in_month(previous)));
    MonthComparison {
        month,
        income_change: percentage_change(current_income, previous_income),
        expense_change: percentage_change(current_expenses, previous_expenses),
    }
}

/// Budget rows with remaining amount and status, most consumed first.
pub fn budget_progress(rows: Vec<BudgetComparison>) -> Vec<BudgetProgress> {
    let mut ranked: Vec<(Decimal, BudgetComparison)> = rows
        .into_iter()
        .map(|row| (percentage_of(row.actual, row.budgeted), row))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked
        .into_iter()
        .map(|(usage, row)| BudgetProgress {
            remaining: row.budgeted.saturating_sub(row.actual),
            usage: usage.min(Decimal::ONE_HUNDRED),
            status: BudgetStatus::from_usage(usage),
            category_id: row.category_id,
            budgeted: row.budgeted,
            actual: row.actual,
        })
        .collect()
}

/// Joins grouped expenses with category names and colours, largest first.
pub fn category_breakdown(
    categories: &[Category],
    expenses: Vec<CategoryAmount>,
) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = expenses
        .into_iter()
        .filter(|entry| entry.amount > Decimal::ZERO)
        .map(|entry| {
            let category = categories.iter().find(|cat| cat.id == entry.category_id);
            CategorySlice {
                name: category
                    .map(|cat| cat.name.clone())
                    .unwrap_or_else(|| UNKNOWN_CATEGORY_NAME.to_string()),
                color: category
                    .map(|cat| cat.color.clone())
                    .unwrap_or_else(|| UNKNOWN_CATEGORY_COLOR.to_string()),
                category_id: entry.category_id,
                amount: entry.amount,
            }
        })
        .collect();
    slices.sort_by(|a, b| b.amount.cmp(&a.amount));
    slices
}
