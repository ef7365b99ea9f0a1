use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{EntityKind, LedgerError};

use super::{
    budget::{Budget, NewBudget},
    category::{Category, Flow, NewCategory},
    month::Month,
    notice::Notice,
    summary::{
        self, BudgetComparison, BudgetProgress, CategoryAmount, CategorySlice, MonthComparison,
        MonthSummary, Summary,
    },
    transaction::{NewTransaction, Transaction},
};

/// In-memory store of categories, transactions and budgets.
///
/// Mutations replace whole records by id. Every mutation attempt leaves a
/// [`Notice`] behind for the presentation layer and bumps [`Ledger::revision`]
/// when it changed state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    budgets: Vec<Budget>,
    #[serde(skip)]
    revision: u64,
    #[serde(skip)]
    notices: Vec<Notice>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from existing collections without emitting notices.
    pub fn from_parts(
        categories: Vec<Category>,
        transactions: Vec<Transaction>,
        budgets: Vec<Budget>,
    ) -> Self {
        Self {
            categories,
            transactions,
            budgets,
            revision: 0,
            notices: Vec::new(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Counter bumped by every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drains the notices recorded since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn pending_notices(&self) -> &[Notice] {
        &self.notices
    }

    fn touch(&mut self, message: &str) {
        self.revision += 1;
        self.notices.push(Notice::success(message));
    }

    fn refuse(&mut self, error: LedgerError, message: &str) -> LedgerError {
        warn!(%error, "ledger mutation refused");
        self.notices.push(Notice::error(message));
        error
    }

    // Transactions

    pub fn add_transaction(&mut self, data: NewTransaction) -> String {
        let transaction = data.into_transaction();
        let id = transaction.id.clone();
        info!(transaction_id = %id, amount = %transaction.amount, "transaction added");
        self.transactions.push(transaction);
        self.touch("Transaction added successfully");
        id
    }

    pub fn update_transaction(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        let Some(index) = self.transactions.iter().position(|t| t.id == transaction.id) else {
            let error = LedgerError::not_found(EntityKind::Transaction, &transaction.id);
            return Err(self.refuse(error, "Transaction not found"));
        };
        info!(transaction_id = %transaction.id, "transaction updated");
        self.transactions[index] = transaction;
        self.touch("Transaction updated successfully");
        Ok(())
    }

    /// Removes the transaction if present. Removing an unknown id is a no-op.
    pub fn delete_transaction(&mut self, id: &str) -> Option<Transaction> {
        let removed = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .map(|index| self.transactions.remove(index));
        if removed.is_some() {
            info!(transaction_id = %id, "transaction deleted");
            self.touch("Transaction deleted successfully");
        } else {
            debug!(transaction_id = %id, "delete of unknown transaction ignored");
            self.notices
                .push(Notice::success("Transaction deleted successfully"));
        }
        removed
    }

    // Categories

    pub fn add_category(&mut self, data: NewCategory) -> String {
        let category = data.into_category();
        let id = category.id.clone();
        info!(category_id = %id, name = %category.name, "category added");
        self.categories.push(category);
        self.touch("Category added successfully");
        id
    }

    pub fn update_category(&mut self, category: Category) -> Result<(), LedgerError> {
        let Some(index) = self.categories.iter().position(|c| c.id == category.id) else {
            let error = LedgerError::not_found(EntityKind::Category, &category.id);
            return Err(self.refuse(error, "Category not found"));
        };
        info!(category_id = %category.id, "category updated");
        self.categories[index] = category;
        self.touch("Category updated successfully");
        Ok(())
    }

    /// Deletes a category and every budget that references it.
    ///
    /// Refused with [`LedgerError::CategoryInUse`] while any transaction still
    /// points at the category; nothing is removed in that case.
    pub fn delete_category(&mut self, id: &str) -> Result<Option<Category>, LedgerError> {
        let in_use = self
            .transactions
            .iter()
            .filter(|t| t.category_id == id)
            .count();
        if in_use > 0 {
            let error = LedgerError::CategoryInUse {
                id: id.to_string(),
                transactions: in_use,
            };
            return Err(self.refuse(
                error,
                "Cannot delete category that is in use by transactions",
            ));
        }
        let removed = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .map(|index| self.categories.remove(index));
        let budgets_before = self.budgets.len();
        self.budgets.retain(|b| b.category_id != id);
        let budgets_removed = budgets_before - self.budgets.len();
        if removed.is_none() && budgets_removed == 0 {
            debug!(category_id = %id, "delete of unknown category ignored");
            self.notices
                .push(Notice::success("Category deleted successfully"));
            return Ok(None);
        }
        info!(category_id = %id, budgets_removed, "category deleted");
        self.touch("Category deleted successfully");
        Ok(removed)
    }

    // Budgets

    pub fn add_budget(&mut self, data: NewBudget) -> Result<String, LedgerError> {
        if self.budget_for(&data.category_id, data.month).is_some() {
            let error = LedgerError::DuplicateBudget {
                category_id: data.category_id,
                month: data.month.to_string(),
            };
            return Err(self.refuse(
                error,
                "Budget already exists for this category and month",
            ));
        }
        let budget = data.into_budget();
        let id = budget.id.clone();
        info!(budget_id = %id, category_id = %budget.category_id, month = %budget.month, "budget added");
        self.budgets.push(budget);
        self.touch("Budget added successfully");
        Ok(id)
    }

    /// Replaces a budget by id. The (category, month) pair is only checked on creation.
    pub fn update_budget(&mut self, budget: Budget) -> Result<(), LedgerError> {
        let Some(index) = self.budgets.iter().position(|b| b.id == budget.id) else {
            let error = LedgerError::not_found(EntityKind::Budget, &budget.id);
            return Err(self.refuse(error, "Budget not found"));
        };
        info!(budget_id = %budget.id, "budget updated");
        self.budgets[index] = budget;
        self.touch("Budget updated successfully");
        Ok(())
    }

    pub fn delete_budget(&mut self, id: &str) -> Option<Budget> {
        let removed = self
            .budgets
            .iter()
            .position(|b| b.id == id)
            .map(|index| self.budgets.remove(index));
        if removed.is_some() {
            info!(budget_id = %id, "budget deleted");
            self.touch("Budget deleted successfully");
        } else {
            debug!(budget_id = %id, "delete of unknown budget ignored");
            self.notices.push(Notice::success("Budget deleted successfully"));
        }
        removed
    }

    // Lookups

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn budget(&self, id: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn budget_for(&self, category_id: &str, month: Month) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.covers(category_id, month))
    }

    /// Categories offered for a given direction of money.
    pub fn categories_for(&self, flow: Flow) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| match flow {
                Flow::Income => c.is_income(),
                Flow::Expense => !c.is_income(),
            })
            .collect()
    }

    // Derivations

    pub fn transactions_in_month(&self, month: Month) -> Vec<&Transaction> {
        summary::transactions_in_month(&self.transactions, month)
    }

    pub fn expenses_by_category(&self, month: Month) -> Vec<CategoryAmount> {
        debug!(%month, "computing expenses by category");
        summary::expenses_by_category(&self.transactions, month)
    }

    pub fn budget_vs_actual(&self, month: Month) -> Vec<BudgetComparison> {
        debug!(%month, "computing budget vs actual");
        summary::budget_vs_actual(&self.budgets, &self.transactions, month)
    }

    /// All-time totals over every transaction.
    pub fn summary(&self) -> Summary {
        summary::summarize(&self.transactions)
    }

    pub fn month_summary(&self, month: Month) -> MonthSummary {
        summary::summarize_month(&self.transactions, month)
    }

    pub fn month_over_month(&self, month: Month) -> MonthComparison {
        summary::compare_with_previous(&self.transactions, month)
    }

    pub fn budget_progress(&self, month: Month) -> Vec<BudgetProgress> {
        summary::budget_progress(self.budget_vs_actual(month))
    }

    pub fn category_breakdown(&self, month: Month) -> Vec<CategorySlice> {
        summary::category_breakdown(&self.categories, self.expenses_by_category(month))
    }

    /// Newest transactions first; equal dates keep insertion order.
    pub fn recent_transactions(&self, limit: usize) -> Vec<&Transaction> {
        let mut recent: Vec<&Transaction> = self.transactions.iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(limit);
        recent
    }

    pub fn query_transactions(&self, query: &TransactionQuery) -> Vec<&Transaction> {
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        let mut matches: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| query.month.map_or(true, |m| t.in_month(m)))
            .filter(|t| {
                query
                    .category_id
                    .as_deref()
                    .map_or(true, |id| t.category_id == id)
            })
            .filter(|t| query.date.map_or(true, |d| t.date == d))
            .filter(|t| {
                needle.as_deref().map_or(true, |needle| {
                    t.description.to_lowercase().contains(needle)
                        || t.amount.to_string().contains(needle)
                        || format!("{:.2}", t.amount).contains(needle)
                })
            })
            .collect();
        matches.sort_by(|a, b| {
            let ordering = self.compare_by(query.sort_key, a, b);
            match query.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        matches
    }

    fn compare_by(&self, key: SortKey, a: &Transaction, b: &Transaction) -> Ordering {
        match key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.cmp(&b.amount),
            SortKey::Description => a.description.cmp(&b.description),
            SortKey::Category => {
                let name = |t: &Transaction| {
                    self.category(&t.category_id)
                        .map(|c| c.name.as_str())
                        .unwrap_or("")
                };
                name(a).cmp(name(b))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Description,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Filters and ordering for transaction listings. Defaults to newest first.
///
/// `search` matches descriptions case-insensitively, or the signed amount as a
/// plain number (`-800`, `-800.00`). Currency symbols and digit grouping are
/// not part of the matched text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionQuery {
    pub month: Option<Month>,
    pub category_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub search: Option<String>,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl TransactionQuery {
    pub fn in_month(month: Month) -> Self {
        Self {
            month: Some(month),
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, sort_key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = sort_key;
        self.direction = direction;
        self
    }
}
