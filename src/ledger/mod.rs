//! Ledger records, the in-memory store and its derived views.

pub mod budget;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod month;
pub mod notice;
pub mod seed;
pub mod summary;
pub mod transaction;

pub use budget::{Budget, NewBudget};
pub use category::{Category, Flow, NewCategory, INCOME_CATEGORY_NAME};
pub use ledger::{Ledger, SortDirection, SortKey, TransactionQuery};
pub use month::Month;
pub use notice::{Notice, NoticeLevel};
pub use summary::{
    BudgetComparison, BudgetProgress, BudgetStatus, CategoryAmount, CategoryShare,
    CategorySlice, MonthComparison, MonthSummary, Summary,
};
pub use transaction::{NewTransaction, Transaction};
