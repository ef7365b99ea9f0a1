mod common;

use common::{date, ledger_with_category, month, record};
use finance_ledger::{
    ledger::{CategoryAmount, Ledger, NewBudget, NewCategory, NoticeLevel},
    EntityKind, LedgerError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn net_savings_matches_income_minus_expenses() {
    let (mut ledger, cat) = ledger_with_category("Mixed");
    for (i, amount) in [dec!(19.99), dec!(-3.33), dec!(-0.01), dec!(1200), dec!(-7.5)]
        .into_iter()
        .enumerate()
    {
        record(&mut ledger, amount, date(2025, 1, i as u32 + 1), &cat);
    }
    let summary = ledger.summary();
    assert_eq!(
        summary.total_income - summary.total_expenses,
        summary.net_savings
    );
    assert_eq!(summary.net_savings, dec!(1209.15));
}

#[test]
fn monthly_expenses_are_non_negative_and_sum_to_total() {
    let mut ledger = Ledger::seeded();
    // Keep all activity inside one month so the month covers every transaction.
    let ids: Vec<String> = ledger
        .transactions()
        .iter()
        .filter(|t| !t.in_month(month("2025-03")))
        .map(|t| t.id.clone())
        .collect();
    for id in ids {
        ledger.delete_transaction(&id);
    }
    let expenses = ledger.expenses_by_category(month("2025-03"));
    assert!(expenses.iter().all(|e| e.amount >= Decimal::ZERO));
    let sum: Decimal = expenses.iter().map(|e| e.amount).sum();
    assert_eq!(sum, ledger.summary().total_expenses);
    assert_eq!(sum, dec!(1375));
}

#[test]
fn seeded_rent_scenario() {
    let (mut ledger, _) = ledger_with_category("Other");
    let housing = ledger.add_category(NewCategory::new("Housing", "#6E59A5"));
    record(&mut ledger, dec!(-800), date(2025, 3, 1), &housing);
    assert_eq!(
        ledger.expenses_by_category(month("2025-03")),
        vec![CategoryAmount {
            category_id: housing,
            amount: dec!(800),
        }]
    );
}

#[test]
fn seeded_ledger_reports_expected_categories() {
    let ledger = Ledger::seeded();
    let march = ledger.expenses_by_category(month("2025-03"));
    assert_eq!(march.len(), 7);
    assert_eq!(march[0].category_id, "cat-1");
    assert_eq!(march[0].amount, dec!(800));

    let summary = ledger.summary();
    assert_eq!(summary.total_income, dec!(5000));
    assert_eq!(summary.total_expenses, dec!(2275));
    assert_eq!(summary.net_savings, dec!(2725));
    let top: Vec<&str> = summary
        .top_categories
        .iter()
        .map(|c| c.category_id.as_str())
        .collect();
    assert_eq!(top, vec!["cat-1", "cat-7", "cat-2", "cat-6", "cat-3"]);
    assert_eq!(summary.top_categories[2].amount, dec!(180));
}

#[test]
fn unused_category_deletes_and_used_one_is_kept() {
    let mut ledger = Ledger::seeded();
    let spare = ledger.add_category(NewCategory::new("Pets", "#795548"));
    assert!(ledger.delete_category(&spare).unwrap().is_some());

    let budgets_before = ledger.budgets().to_vec();
    let err = ledger.delete_category("cat-1").unwrap_err();
    assert!(matches!(err, LedgerError::CategoryInUse { ref id, transactions: 2 } if id == "cat-1"));
    assert!(ledger.category("cat-1").is_some());
    assert_eq!(ledger.budgets(), budgets_before.as_slice());

    let notices = ledger.take_notices();
    assert_eq!(notices.last().map(|n| n.level), Some(NoticeLevel::Error));
}

#[test]
fn second_budget_for_same_pair_is_refused() {
    let (mut ledger, cat) = ledger_with_category("Housing");
    let april = month("2025-04");
    ledger
        .add_budget(NewBudget::new(cat.clone(), dec!(1000), april))
        .unwrap();
    let before = ledger.budgets().len();
    let err = ledger
        .add_budget(NewBudget::new(cat.clone(), dec!(500), april))
        .unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateBudget { .. }));
    assert_eq!(ledger.budgets().len(), before);
    assert_eq!(
        ledger
            .budgets()
            .iter()
            .filter(|b| b.covers(&cat, april))
            .count(),
        1
    );
}

#[test]
fn budget_vs_actual_stays_in_month() {
    let ledger = Ledger::seeded();
    let march = ledger.budget_vs_actual(month("2025-03"));
    assert!(march.is_empty());

    let april = ledger.budget_vs_actual(month("2025-04"));
    assert_eq!(april.len(), 7);
    let fun = april.iter().find(|row| row.category_id == "cat-4").unwrap();
    assert_eq!(fun.actual, Decimal::ZERO);
    assert_eq!(fun.budgeted, dec!(100));
    let rent = april.iter().find(|row| row.category_id == "cat-1").unwrap();
    assert_eq!(rent.actual, dec!(800));
}

#[test]
fn no_expenses_means_no_nan_percentages() {
    let (mut ledger, income) = ledger_with_category("Income");
    record(&mut ledger, dec!(2500), date(2025, 3, 25), &income);
    let summary = ledger.summary();
    assert_eq!(summary.total_expenses, Decimal::ZERO);
    assert!(summary
        .top_categories
        .iter()
        .all(|c| c.percentage == Decimal::ZERO));
    assert_eq!(ledger.month_summary(month("2025-03")).savings_rate, dec!(100));
}

#[test]
fn updates_by_unknown_id_are_explicit() {
    let mut ledger = Ledger::seeded();
    let mut ghost = ledger.category("cat-2").unwrap().clone();
    ghost.id = "cat-404".into();
    let err = ledger.update_category(ghost).unwrap_err();
    assert!(matches!(
        err,
        LedgerError::NotFound {
            kind: EntityKind::Category,
            ..
        }
    ));
    assert_eq!(err.to_string(), "Category not found: cat-404");
}

#[test]
fn month_over_month_against_seeded_march() {
    let ledger = Ledger::seeded();
    let comparison = ledger.month_over_month(month("2025-04"));
    assert_eq!(comparison.income_change, Decimal::ZERO);
    assert!(comparison.expense_change < Decimal::ZERO);

    let first = ledger.month_over_month(month("2025-03"));
    assert_eq!(first.income_change, dec!(100));
    assert_eq!(first.expense_change, dec!(100));
}
