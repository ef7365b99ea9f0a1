use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::month::Month;

/// A spending cap for one category in one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category_id: String,
    pub amount: Decimal,
    pub month: Month,
}

impl Budget {
    pub fn new(category_id: impl Into<String>, amount: Decimal, month: Month) -> Self {
        Self::with_id(
            format!("budget-{}", Uuid::new_v4().simple()),
            category_id,
            amount,
            month,
        )
    }

    pub fn with_id(
        id: impl Into<String>,
        category_id: impl Into<String>,
        amount: Decimal,
        month: Month,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            amount,
            month,
        }
    }

    pub fn covers(&self, category_id: &str, month: Month) -> bool {
        self.category_id == category_id && self.month == month
    }
}

/// Creation shape for a budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category_id: String,
    pub amount: Decimal,
    pub month: Month,
}

impl NewBudget {
    pub fn new(category_id: impl Into<String>, amount: Decimal, month: Month) -> Self {
        Self {
            category_id: category_id.into(),
            amount,
            month,
        }
    }

    pub(crate) fn into_budget(self) -> Budget {
        Budget::new(self.category_id, self.amount, self.month)
    }
}
