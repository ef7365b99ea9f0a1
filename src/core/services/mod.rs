//! Validating entry points used by presentation code.
//!
//! The store trusts its input; these services check field rules first and
//! then delegate.

pub mod budget_service;
pub mod category_service;
pub mod summary_service;
pub mod transaction_service;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use summary_service::{Dashboard, SummaryService};
pub use transaction_service::TransactionService;

use crate::errors::LedgerError;
use crate::ledger::Ledger;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}

pub(crate) fn ensure_category_exists(ledger: &Ledger, category_id: &str) -> ServiceResult<()> {
    if category_id.trim().is_empty() {
        return Err(ServiceError::Invalid("Category is required".into()));
    }
    if ledger.category(category_id).is_none() {
        return Err(ServiceError::Invalid(format!(
            "Category `{}` does not exist",
            category_id
        )));
    }
    Ok(())
}

/// Trims `value` and checks it holds between 1 and `max` characters.
pub(crate) fn bounded_text(value: &str, field: &str, max: usize) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid(format!("{field} is required")));
    }
    if trimmed.chars().count() > max {
        return Err(ServiceError::Invalid(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(trimmed.to_string())
}
