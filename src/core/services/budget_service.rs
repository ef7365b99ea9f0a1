use rust_decimal::Decimal;

use crate::ledger::{Budget, Ledger, Month, NewBudget};

use super::{ensure_category_exists, ServiceError, ServiceResult};

pub struct BudgetService;

impl BudgetService {
    /// Creates a budget; a second budget for the same category and month is refused.
    pub fn add(ledger: &mut Ledger, data: NewBudget) -> ServiceResult<String> {
        Self::validate(ledger, data.amount, &data.category_id)?;
        Ok(ledger.add_budget(data)?)
    }

    pub fn update(ledger: &mut Ledger, budget: Budget) -> ServiceResult<()> {
        Self::validate(ledger, budget.amount, &budget.category_id)?;
        ledger.update_budget(budget)?;
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, id: &str) -> Option<Budget> {
        ledger.delete_budget(id)
    }

    pub fn for_month(ledger: &Ledger, month: Month) -> Vec<&Budget> {
        ledger
            .budgets()
            .iter()
            .filter(|budget| budget.month == month)
            .collect()
    }

    fn validate(ledger: &Ledger, amount: Decimal, category_id: &str) -> ServiceResult<()> {
        if amount <= Decimal::ZERO {
            return Err(ServiceError::Invalid("Amount must be positive".into()));
        }
        ensure_category_exists(ledger, category_id)
    }
}
