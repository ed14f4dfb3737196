//! Cost calculator.

use rust_decimal::Decimal;

use super::types::{BreakdownRow, Category, CostBreakdown, ExpenseInput, StipendRates};
use crate::currency::{apply_margin, convert_amount};

/// Computes the full breakdown for an input.
///
/// The function is total: degenerate exchange rates or durations (zero,
/// negative, huge) produce degenerate amounts, never a panic.
#[must_use]
pub fn compute(input: &ExpenseInput, rates: &StipendRates) -> CostBreakdown {
    let months = Decimal::from(input.duration_months);

    let applicant_base = rates.applicant_monthly.saturating_mul(months);
    let spouse_base = if input.spouse_present {
        rates.spouse_monthly.saturating_mul(months)
    } else {
        Decimal::ZERO
    };
    let children_base = Decimal::from(input.child_count)
        .saturating_mul(rates.child_monthly)
        .saturating_mul(months);

    let row = |category: Category, base: Decimal| {
        let converted = convert_amount(base, input.exchange_rate);
        BreakdownRow {
            category,
            base,
            converted,
            with_margin: apply_margin(converted, input.margin_percent),
        }
    };

    let applicant = row(Category::Applicant, applicant_base);
    let spouse = row(Category::Spouse, spouse_base);
    let children = row(Category::Children, children_base);

    // Total is the column-wise sum of the rows, never a product of its own.
    let sum = |column: fn(&BreakdownRow) -> Decimal| {
        column(&applicant)
            .saturating_add(column(&spouse))
            .saturating_add(column(&children))
    };
    let total = BreakdownRow {
        category: Category::Total,
        base: sum(|r| r.base),
        converted: sum(|r| r.converted),
        with_margin: sum(|r| r.with_margin),
    };

    CostBreakdown {
        input: *input,
        applicant,
        spouse,
        children,
        total,
    }
}

/// Converted total inflated by a fixed benchmark margin, independent of the
/// user's own margin selection.
#[must_use]
pub fn benchmark_total(breakdown: &CostBreakdown, benchmark_percent: u8) -> Decimal {
    apply_margin(breakdown.total.converted, benchmark_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_scenario() {
        let breakdown = compute(&ExpenseInput::default(), &StipendRates::default());

        assert_eq!(breakdown.applicant.base, dec!(137592));
        assert_eq!(breakdown.spouse.base, dec!(57330));
        assert_eq!(breakdown.children.base, Decimal::ZERO);
        assert_eq!(breakdown.total.base, dec!(194922));
        assert_eq!(breakdown.total.converted, dec!(5847660));
        assert_eq!(breakdown.total.with_margin, dec!(7601958));
    }

    #[test]
    fn test_total_matches_rows_at_full_precision_rate() {
        let input = ExpenseInput::default()
            .with_children(3)
            .with_exchange_rate(dec!(0.1234567890123456789012345678))
            .with_margin(35);
        let b = compute(&input, &StipendRates::default());

        assert_eq!(b.total.base, b.applicant.base + b.spouse.base + b.children.base);
        assert_eq!(
            b.total.converted,
            b.applicant.converted + b.spouse.converted + b.children.converted
        );
        assert_eq!(
            b.total.with_margin,
            b.applicant.with_margin + b.spouse.with_margin + b.children.with_margin
        );
    }

    #[test]
    fn test_benchmark_uses_its_own_margin() {
        let input = ExpenseInput::default().with_margin(50);
        let breakdown = compute(&input, &StipendRates::default());

        assert_eq!(benchmark_total(&breakdown, 30), dec!(7601958));
        assert_eq!(breakdown.total.with_margin, dec!(8771490));
    }

    #[test]
    fn test_zero_duration_gives_zero_costs() {
        let input = ExpenseInput::default().with_duration_months(0);
        let breakdown = compute(&input, &StipendRates::default());
        for row in breakdown.rows() {
            assert_eq!(row.base, Decimal::ZERO);
            assert_eq!(row.with_margin, Decimal::ZERO);
        }
    }

    #[test]
    fn test_negative_inputs_do_not_panic() {
        let input = ExpenseInput::default()
            .with_duration_months(-2)
            .with_exchange_rate(dec!(-0.5));
        let breakdown = compute(&input, &StipendRates::default());
        assert_eq!(breakdown.applicant.base, dec!(-21168));
        assert_eq!(breakdown.applicant.converted, dec!(10584));
    }

    #[test]
    fn test_huge_inputs_saturate() {
        let input = ExpenseInput::default()
            .with_duration_months(i64::MAX)
            .with_exchange_rate(Decimal::MAX);
        let breakdown = compute(&input, &StipendRates::default());
        assert_eq!(breakdown.total.converted, Decimal::MAX);
        assert_eq!(breakdown.total.with_margin, Decimal::MAX);
    }

    #[test]
    fn test_custom_rates() {
        let rates = StipendRates::new(dec!(1000), dec!(500), dec!(250));
        let input = ExpenseInput::default()
            .with_duration_months(2)
            .with_children(1)
            .with_exchange_rate(dec!(1));
        let breakdown = compute(&input, &rates);
        assert_eq!(breakdown.total.base, dec!(3500));
    }

    #[test]
    fn test_rows_are_in_table_order() {
        let breakdown = compute(&ExpenseInput::default(), &StipendRates::default());
        let categories: Vec<Category> = breakdown.rows().iter().map(|r| r.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert_eq!(breakdown.row(Category::Spouse), breakdown.spouse);
    }
}
