use rust_decimal::Decimal;

use super::BudgetRecord;

/// Demo data shipped with the viewer, preserved exactly as captured from
/// the companion capture app: unsorted, December first, with the inflated
/// January figures intact. Display order is list order.
pub(crate) fn sample_budgets() -> Vec<BudgetRecord> {
    vec![
        BudgetRecord::new(11, 2021, Decimal::new(200_27, 2), Decimal::new(100_99, 2)),
        BudgetRecord::new(9, 2021, Decimal::new(82_74, 2), Decimal::new(13_78, 2)),
        BudgetRecord::new(8, 2021, Decimal::new(98_23, 2), Decimal::new(387_92, 2)),
        BudgetRecord::new(7, 2021, Decimal::new(198_63, 2), Decimal::new(96_54, 2)),
        BudgetRecord::new(6, 2021, Decimal::new(198_63, 2), Decimal::new(96_54, 2)),
        BudgetRecord::new(5, 2021, Decimal::new(198_63, 2), Decimal::new(96_54, 2)),
        BudgetRecord::new(4, 2021, Decimal::new(198_63, 2), Decimal::new(96_54, 2)),
        BudgetRecord::new(3, 2021, Decimal::new(198_63, 2), Decimal::new(96_54, 2)),
        BudgetRecord::new(2, 2021, Decimal::new(198_63, 2), Decimal::new(96_54, 2)),
        BudgetRecord::new(0, 2021, Decimal::new(1098_63, 2), Decimal::new(906_54, 2)),
    ]
}
