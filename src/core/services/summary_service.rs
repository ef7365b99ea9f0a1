use serde::Serialize;

use crate::ledger::{
    BudgetProgress, CategorySlice, Ledger, Month, MonthComparison, MonthSummary, Summary,
    Transaction,
};

/// Everything the dashboard shows for one month.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub month: Month,
    pub summary: Summary,
    pub month_summary: MonthSummary,
    pub comparison: MonthComparison,
    pub budgets: Vec<BudgetProgress>,
    pub breakdown: Vec<CategorySlice>,
    pub recent: Vec<Transaction>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn dashboard(ledger: &Ledger, month: Month, recent_limit: usize) -> Dashboard {
        Dashboard {
            month,
            summary: ledger.summary(),
            month_summary: ledger.month_summary(month),
            comparison: ledger.month_over_month(month),
            budgets: ledger.budget_progress(month),
            breakdown: ledger.category_breakdown(month),
            recent: ledger
                .recent_transactions(recent_limit)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
