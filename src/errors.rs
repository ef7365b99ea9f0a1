use std::fmt;

use thiserror::Error;

/// Entity kinds addressed by ledger operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Transaction,
    Category,
    Budget,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Transaction => "Transaction",
            EntityKind::Category => "Category",
            EntityKind::Budget => "Budget",
        };
        f.write_str(label)
    }
}

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Category `{id}` is in use by {transactions} transaction(s)")]
    CategoryInUse { id: String, transactions: usize },
    #[error("Budget already exists for category `{category_id}` in {month}")]
    DuplicateBudget { category_id: String, month: String },
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },
    #[error("Invalid month `{0}`, expected YYYY-MM")]
    InvalidMonth(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl LedgerError {
    pub(crate) fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
