use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::month::Month;

/// A single signed monetary event. Positive amounts are income, negative are expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: String,
}

impl Transaction {
    pub fn new(
        amount: Decimal,
        description: impl Into<String>,
        date: NaiveDate,
        category_id: impl Into<String>,
    ) -> Self {
        Self::with_id(
            format!("txn-{}", Uuid::new_v4().simple()),
            amount,
            description,
            date,
            category_id,
        )
    }

    pub fn with_id(
        id: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
        date: NaiveDate,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            description: description.into(),
            date,
            category_id: category_id.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    pub fn in_month(&self, month: Month) -> bool {
        month.contains(self.date)
    }
}

/// Creation shape for a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: String,
}

impl NewTransaction {
    pub fn new(
        amount: Decimal,
        description: impl Into<String>,
        date: NaiveDate,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            date,
            category_id: category_id.into(),
        }
    }

    pub(crate) fn into_transaction(self) -> Transaction {
        Transaction::new(self.amount, self.description, self.date, self.category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sign_decides_flow() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let rent = Transaction::new(dec!(-800), "Rent", date, "cat-1");
        assert!(rent.is_expense());
        assert!(!rent.is_income());
        assert_eq!(rent.abs_amount(), dec!(800));
        assert!(rent.id.starts_with("txn-"));
    }

    #[test]
    fn serializes_with_iso_date_and_camel_case() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 25).unwrap();
        let salary = Transaction::with_id("txn-8", dec!(2500), "Salary", date, "cat-8");
        let json = serde_json::to_value(&salary).unwrap();
        assert_eq!(json["date"], "2025-03-25");
        assert_eq!(json["categoryId"], "cat-8");
    }
}
