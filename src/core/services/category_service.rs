use crate::ledger::{Category, Flow, Ledger, NewCategory};

use super::{bounded_text, ServiceError, ServiceResult};

pub const NAME_MAX_CHARS: usize = 30;

pub struct CategoryService;

impl CategoryService {
    pub fn add(ledger: &mut Ledger, mut data: NewCategory) -> ServiceResult<String> {
        data.name = Self::validate(&data.name, &data.color)?;
        Ok(ledger.add_category(data))
    }

    pub fn update(ledger: &mut Ledger, mut category: Category) -> ServiceResult<()> {
        category.name = Self::validate(&category.name, &category.color)?;
        ledger.update_category(category)?;
        Ok(())
    }

    /// Deletes an unused category together with its budgets.
    pub fn remove(ledger: &mut Ledger, id: &str) -> ServiceResult<Option<Category>> {
        Ok(ledger.delete_category(id)?)
    }

    pub fn list(ledger: &Ledger) -> Vec<&Category> {
        ledger.categories().iter().collect()
    }

    pub fn choices(ledger: &Ledger, flow: Flow) -> Vec<&Category> {
        ledger.categories_for(flow)
    }

    fn validate(name: &str, color: &str) -> ServiceResult<String> {
        let name = bounded_text(name, "Name", NAME_MAX_CHARS)?;
        if color.trim().is_empty() {
            return Err(ServiceError::Invalid("Color is required".into()));
        }
        Ok(name)
    }
}
