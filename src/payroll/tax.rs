use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{entity::sea_orm_active_enums::PeriodType, payroll::ProviderError};

/// A withholding tax table. The payroll pipeline only sees
/// `(taxable income, cycle) -> tax`; bracket contents stay behind this seam.
pub trait TaxProvider: Send + Sync {
    /// Tax withheld on one period's taxable income. Zero or negative income
    /// yields zero tax, never an error.
    fn compute(&self, taxable_income: Decimal, period_type: &PeriodType) -> Result<Decimal, ProviderError>;
}

/// Progressive monthly withholding brackets as `(floor, base tax, rate on
/// the excess over the floor)`, ordered ascending
const MONTHLY_BRACKETS: [(Decimal, Decimal, Decimal); 6] = [
    (dec!(0), dec!(0), dec!(0)),
    (dec!(20_833), dec!(0), dec!(0.15)),
    (dec!(33_333), dec!(1_875), dec!(0.20)),
    (dec!(66_667), dec!(8_541.80), dec!(0.25)),
    (dec!(166_667), dec!(33_541.80), dec!(0.30)),
    (dec!(666_667), dec!(183_541.80), dec!(0.35)),
];

/// Bracket table keyed on the monthly equivalent of the period's taxable
/// income; the result is scaled back to the period by the cycle divisor
pub struct WithholdingTaxTable;

impl TaxProvider for WithholdingTaxTable {
    fn compute(&self, taxable_income: Decimal, period_type: &PeriodType) -> Result<Decimal, ProviderError> {
        if taxable_income <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let divisor = period_type.cycle_divisor();
        let monthly_income = taxable_income * divisor;

        let (floor, base, rate) = MONTHLY_BRACKETS
            .iter()
            .rev()
            .find(|(floor, _, _)| monthly_income >= *floor)
            .ok_or(ProviderError::BracketNotFound {
                provider: "withholding tax",
                amount: monthly_income,
            })?;

        let monthly_tax = base + (monthly_income - floor) * rate;

        Ok((monthly_tax / divisor).round_dp(2))
    }
}
