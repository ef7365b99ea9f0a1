//! Fixed data set loaded at start-up. State is not persisted between runs.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{budget::Budget, category::Category, ledger::Ledger, month::Month, transaction::Transaction};

const CATEGORIES: [(&str, &str, &str); 8] = [
    ("cat-1", "Housing", "#6E59A5"),
    ("cat-2", "Food", "#9b87f5"),
    ("cat-3", "Transportation", "#4CAF50"),
    ("cat-4", "Entertainment", "#FFC107"),
    ("cat-5", "Shopping", "#F44336"),
    ("cat-6", "Utilities", "#2196F3"),
    ("cat-7", "Healthcare", "#E91E63"),
    ("cat-8", "Income", "#4CAF50"),
];

const TRANSACTIONS: [(&str, i64, &str, (i32, u32, u32), &str); 12] = [
    ("txn-1", -800, "Monthly Rent", (2025, 3, 1), "cat-1"),
    ("txn-2", -120, "Grocery Shopping", (2025, 3, 5), "cat-2"),
    ("txn-3", -50, "Gas", (2025, 3, 10), "cat-3"),
    ("txn-4", -30, "Movie Tickets", (2025, 3, 15), "cat-4"),
    ("txn-5", -75, "New Clothes", (2025, 3, 18), "cat-5"),
    ("txn-6", -100, "Electric Bill", (2025, 3, 20), "cat-6"),
    ("txn-7", -200, "Doctor's Appointment", (2025, 3, 22), "cat-7"),
    ("txn-8", 2500, "Salary", (2025, 3, 25), "cat-8"),
    ("txn-9", -60, "Dinner Out", (2025, 4, 2), "cat-2"),
    ("txn-10", -40, "Gas", (2025, 4, 5), "cat-3"),
    ("txn-11", -800, "Monthly Rent", (2025, 4, 1), "cat-1"),
    ("txn-12", 2500, "Salary", (2025, 4, 25), "cat-8"),
];

const BUDGETS: [(&str, &str, i64); 7] = [
    ("budget-1", "cat-1", 1000),
    ("budget-2", "cat-2", 300),
    ("budget-3", "cat-3", 150),
    ("budget-4", "cat-4", 100),
    ("budget-5", "cat-5", 200),
    ("budget-6", "cat-6", 150),
    ("budget-7", "cat-7", 100),
];

const BUDGET_MONTH: (i32, u32) = (2025, 4);

pub fn demo_categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(id, name, color)| Category::with_id(*id, *name, *color))
        .collect()
}

pub fn demo_transactions() -> Vec<Transaction> {
    TRANSACTIONS
        .iter()
        .filter_map(|(id, amount, description, (y, m, d), category)| {
            let date = NaiveDate::from_ymd_opt(*y, *m, *d)?;
            Some(Transaction::with_id(
                *id,
                Decimal::from(*amount),
                *description,
                date,
                *category,
            ))
        })
        .collect()
}

pub fn demo_budgets() -> Vec<Budget> {
    let Some(month) = Month::new(BUDGET_MONTH.0, BUDGET_MONTH.1) else {
        return Vec::new();
    };
    BUDGETS
        .iter()
        .map(|(id, category, amount)| Budget::with_id(*id, *category, Decimal::from(*amount), month))
        .collect()
}

impl Ledger {
    /// A ledger pre-filled with the demo categories, transactions and budgets.
    pub fn seeded() -> Self {
        Ledger::from_parts(demo_categories(), demo_transactions(), demo_budgets())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_data_is_complete() {
        let ledger = Ledger::seeded();
        assert_eq!(ledger.categories().len(), 8);
        assert_eq!(ledger.transactions().len(), 12);
        assert_eq!(ledger.budgets().len(), 7);
        assert!(ledger.pending_notices().is_empty());
        assert_eq!(ledger.revision(), 0);
    }

    #[test]
    fn every_seeded_reference_resolves() {
        let ledger = Ledger::seeded();
        for txn in ledger.transactions() {
            assert!(ledger.category(&txn.category_id).is_some(), "{}", txn.id);
        }
        for budget in ledger.budgets() {
            assert!(ledger.category(&budget.category_id).is_some(), "{}", budget.id);
        }
    }
}
