mod common;

use common::{date, month};
use finance_ledger::{
    core::services::{
        BudgetService, CategoryService, ServiceError, SummaryService, TransactionService,
    },
    ledger::{Flow, Ledger, NewBudget, NewCategory, NewTransaction, SortDirection, SortKey, TransactionQuery},
    LedgerError,
};
use rust_decimal_macros::dec;

fn prepared_ledger() -> (Ledger, String, String) {
    let mut ledger = Ledger::new();
    let income = CategoryService::add(&mut ledger, NewCategory::new("Income", "#4CAF50")).unwrap();
    let bills = CategoryService::add(&mut ledger, NewCategory::new("Bills", "#2196F3")).unwrap();
    TransactionService::add(
        &mut ledger,
        NewTransaction::new(dec!(-250), "Electric Bill", date(2024, 2, 10), bills.clone()),
    )
    .unwrap();
    TransactionService::add(
        &mut ledger,
        NewTransaction::new(dec!(3000), "Salary", date(2024, 2, 25), income.clone()),
    )
    .unwrap();
    BudgetService::add(&mut ledger, NewBudget::new(bills.clone(), dec!(200), month("2024-02")))
        .unwrap();
    (ledger, income, bills)
}

#[test]
fn services_produce_dashboard() {
    let (ledger, _, bills) = prepared_ledger();
    let dashboard = SummaryService::dashboard(&ledger, month("2024-02"), 5);
    assert_eq!(dashboard.month_summary.income, dec!(3000));
    assert_eq!(dashboard.month_summary.expenses, dec!(250));
    assert_eq!(dashboard.budgets.len(), 1);
    assert_eq!(dashboard.budgets[0].category_id, bills);
    assert_eq!(dashboard.budgets[0].remaining, dec!(-50));
    assert_eq!(dashboard.recent.len(), 2);

    let json = serde_json::to_value(&dashboard).unwrap();
    assert_eq!(json["month"], "2024-02");
    assert_eq!(json["budgets"][0]["status"], "OverBudget");
}

#[test]
fn every_successful_mutation_leaves_a_notice() {
    let (mut ledger, _, _) = prepared_ledger();
    let notices = ledger.take_notices();
    assert_eq!(notices.len(), 5);
    assert_eq!(notices[0].message, "Category added successfully");
    assert_eq!(notices[4].message, "Budget added successfully");
}

#[test]
fn validation_failures_do_not_reach_the_ledger() {
    let (mut ledger, _, bills) = prepared_ledger();
    let revision = ledger.revision();
    let err = TransactionService::add(
        &mut ledger,
        NewTransaction::new(dec!(0), "Nothing", date(2024, 2, 11), bills),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Amount cannot be zero");
    assert_eq!(ledger.revision(), revision);
}

#[test]
fn category_removal_cascades_only_when_unused() {
    let (mut ledger, _, bills) = prepared_ledger();
    let err = CategoryService::remove(&mut ledger, &bills).unwrap_err();
    assert!(matches!(err, ServiceError::Ledger(LedgerError::CategoryInUse { .. })));

    let txn_id = ledger.transactions()[0].id.clone();
    TransactionService::remove(&mut ledger, &txn_id).unwrap();
    CategoryService::remove(&mut ledger, &bills).unwrap();
    assert!(ledger.budgets().is_empty());
}

#[test]
fn category_choices_follow_flow() {
    let (ledger, income, bills) = prepared_ledger();
    let incoming: Vec<&str> = CategoryService::choices(&ledger, Flow::Income)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(incoming, vec![income.as_str()]);
    let outgoing: Vec<&str> = CategoryService::choices(&ledger, Flow::Expense)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(outgoing, vec![bills.as_str()]);
}

#[test]
fn search_by_description_sorted_by_amount() {
    let (ledger, _, _) = prepared_ledger();
    let query = TransactionQuery {
        month: Some(month("2024-02")),
        ..TransactionQuery::default()
    }
    .sorted_by(SortKey::Amount, SortDirection::Descending);
    let found = TransactionService::search(&ledger, &query);
    assert_eq!(found[0].description, "Salary");
    assert_eq!(found[1].description, "Electric Bill");
}
