use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categories whose name is this label hold income transactions.
pub const INCOME_CATEGORY_NAME: &str = "Income";

/// Classifies transactions for budgeting and reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self::with_id(format!("cat-{}", Uuid::new_v4().simple()), name, color)
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.name == INCOME_CATEGORY_NAME
    }
}

/// Creation shape for a category; the ledger assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    pub(crate) fn into_category(self) -> Category {
        Category::new(self.name, self.color)
    }
}

/// Direction of money used to pick eligible categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flow {
    Income,
    Expense,
}
