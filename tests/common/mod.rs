#![allow(dead_code)]

use chrono::NaiveDate;
use finance_ledger::ledger::{Ledger, Month, NewCategory, NewTransaction};
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn month(raw: &str) -> Month {
    Month::parse(raw).expect("valid month")
}

/// Empty ledger with one category; returns the category id.
pub fn ledger_with_category(name: &str) -> (Ledger, String) {
    let mut ledger = Ledger::new();
    let id = ledger.add_category(NewCategory::new(name, "#6E59A5"));
    ledger.take_notices();
    (ledger, id)
}

pub fn record(ledger: &mut Ledger, amount: Decimal, on: NaiveDate, category_id: &str) -> String {
    ledger.add_transaction(NewTransaction::new(amount, "fixture", on, category_id))
}
