#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::sample::sample_budgets;
use super::*;

// ── BudgetRecord ──────────────────────────────────────────────

#[test]
fn test_month_name_january() {
    let rec = BudgetRecord::new(0, 2021, dec!(100), dec!(50));
    assert_eq!(rec.month_name(), Some("January"));
}

#[test]
fn test_month_name_december() {
    let rec = BudgetRecord::new(11, 2021, dec!(100), dec!(50));
    assert_eq!(rec.month_name(), Some("December"));
}

#[test]
fn test_month_name_out_of_range() {
    let rec = BudgetRecord::new(12, 2021, dec!(100), dec!(50));
    assert_eq!(rec.month_name(), None);
}

#[test]
fn test_label() {
    let rec = BudgetRecord::new(9, 2021, dec!(82.74), dec!(13.78));
    assert_eq!(rec.label(), "October 2021");
}

#[test]
fn test_label_out_of_range_month() {
    let rec = BudgetRecord::new(42, 2021, dec!(1), dec!(0));
    assert_eq!(rec.label(), "Unknown 2021");
}

#[test]
fn test_remaining() {
    let rec = BudgetRecord::new(11, 2021, dec!(200.27), dec!(100.99));
    assert_eq!(rec.remaining(), dec!(99.28));
}

#[test]
fn test_remaining_negative_when_overspent() {
    let rec = BudgetRecord::new(8, 2021, dec!(98.23), dec!(387.92));
    assert_eq!(rec.remaining(), dec!(-289.69));
    assert!(rec.is_overspent());
}

#[test]
fn test_not_overspent_at_limit() {
    let rec = BudgetRecord::new(3, 2021, dec!(100), dec!(100));
    assert!(!rec.is_overspent());
}

// ── totals ────────────────────────────────────────────────────

#[test]
fn test_totals_empty() {
    let t = totals(&[]);
    assert_eq!(t.value, dec!(0));
    assert_eq!(t.spent, dec!(0));
    assert_eq!(t.remaining(), dec!(0));
}

#[test]
fn test_totals_single() {
    let t = totals(&[BudgetRecord::new(0, 2021, dec!(10.50), dec!(2.25))]);
    assert_eq!(t.value, dec!(10.50));
    assert_eq!(t.spent, dec!(2.25));
    assert_eq!(t.remaining(), dec!(8.25));
}

#[test]
fn test_totals_over_sample_set() {
    let t = totals(&sample_budgets());
    assert_eq!(t.value, dec!(2671.65));
    assert_eq!(t.spent, dec!(1988.47));
    assert_eq!(t.remaining(), dec!(683.18));
}

// ── sample data ───────────────────────────────────────────────

#[test]
fn test_sample_has_ten_records() {
    assert_eq!(sample_budgets().len(), 10);
}

#[test]
fn test_sample_order_is_preserved() {
    // The capture app shipped this list unsorted; the viewer must not
    // reorder it.
    let months: Vec<u32> = sample_budgets().iter().map(|r| r.month).collect();
    assert_eq!(months, vec![11, 9, 8, 7, 6, 5, 4, 3, 2, 0]);
}

#[test]
fn test_sample_first_record() {
    let budgets = sample_budgets();
    assert_eq!(budgets[0].label(), "December 2021");
    assert_eq!(budgets[0].value, dec!(200.27));
    assert_eq!(budgets[0].spent, dec!(100.99));
}

#[test]
fn test_sample_all_in_2021() {
    assert!(sample_budgets().iter().all(|r| r.year == 2021));
}

#[test]
fn test_sample_september_is_overspent() {
    let budgets = sample_budgets();
    let september = budgets.iter().find(|r| r.month == 8).unwrap();
    assert!(september.is_overspent());
    assert_eq!(september.spent, dec!(387.92));
}
