//! Turns a [`Dashboard`] into printable lines.

use crate::config::Config;
use crate::core::services::Dashboard;
use crate::currency::{format_currency, format_date, format_month, format_percentage};
use crate::ledger::{BudgetStatus, Ledger};

use super::output::MessageKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: MessageKind,
    pub text: String,
}

impl Line {
    fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

fn status_kind(status: BudgetStatus) -> MessageKind {
    match status {
        BudgetStatus::OnTrack => MessageKind::Success,
        BudgetStatus::GettingClose | BudgetStatus::NearLimit => MessageKind::Warning,
        BudgetStatus::OverBudget => MessageKind::Error,
    }
}

pub fn dashboard_lines(ledger: &Ledger, dashboard: &Dashboard, config: &Config) -> Vec<Line> {
    let code = config.currency_code();
    let locale = config.locale_config();
    let money = |amount| format_currency(amount, &code, &locale);
    let name_of = |id: &str| {
        ledger
            .category(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    };
    let mut lines = Vec::new();

    lines.push(Line::new(
        MessageKind::Section,
        format!("Overview - {}", format_month(dashboard.month)),
    ));
    let month = &dashboard.month_summary;
    lines.push(Line::new(
        MessageKind::Info,
        format!(
            "Income {} ({} from last month)",
            money(month.income),
            format_percentage(dashboard.comparison.income_change)
        ),
    ));
    lines.push(Line::new(
        MessageKind::Info,
        format!(
            "Expenses {} ({} from last month)",
            money(month.expenses),
            format_percentage(dashboard.comparison.expense_change)
        ),
    ));
    lines.push(Line::new(
        MessageKind::Info,
        format!(
            "Savings {} ({} of income)",
            money(month.savings),
            format_percentage(month.savings_rate)
        ),
    ));

    lines.push(Line::new(MessageKind::Section, "All time"));
    let totals = &dashboard.summary;
    lines.push(Line::new(
        MessageKind::Info,
        format!(
            "Income {} | Expenses {} | Net {}",
            money(totals.total_income),
            money(totals.total_expenses),
            money(totals.net_savings)
        ),
    ));
    for share in &totals.top_categories {
        lines.push(Line::new(
            MessageKind::Info,
            format!(
                "  {} {} ({})",
                name_of(&share.category_id),
                money(share.amount),
                format_percentage(share.percentage)
            ),
        ));
    }

    lines.push(Line::new(MessageKind::Section, "Budgets"));
    if dashboard.budgets.is_empty() {
        lines.push(Line::new(
            MessageKind::Info,
            format!("No budgets set for {}", format_month(dashboard.month)),
        ));
    }
    for row in &dashboard.budgets {
        lines.push(Line::new(
            status_kind(row.status),
            format!(
                "{}: {} of {} ({}, {} left) {}",
                name_of(&row.category_id),
                money(row.actual),
                money(row.budgeted),
                format_percentage(row.usage),
                money(row.remaining),
                row.status.label()
            ),
        ));
    }

    lines.push(Line::new(MessageKind::Section, "Spending by category"));
    if dashboard.breakdown.is_empty() {
        lines.push(Line::new(
            MessageKind::Info,
            format!("No expense data available for {}", format_month(dashboard.month)),
        ));
    }
    for slice in &dashboard.breakdown {
        lines.push(Line::new(
            MessageKind::Info,
            format!("{} {}", slice.name, money(slice.amount)),
        ));
    }

    lines.push(Line::new(MessageKind::Section, "Recent transactions"));
    if dashboard.recent.is_empty() {
        lines.push(Line::new(MessageKind::Info, "No recent transactions"));
    }
    for txn in &dashboard.recent {
        lines.push(Line::new(
            MessageKind::Info,
            format!(
                "{} {} [{}] {}",
                format_date(txn.date),
                txn.description,
                name_of(&txn.category_id),
                money(txn.amount)
            ),
        ));
    }
    lines
}
