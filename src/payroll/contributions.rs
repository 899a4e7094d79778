use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::payroll::ProviderError;

/// A statutory contribution table. Opaque to the payroll pipeline; the
/// bracket contents live entirely behind this seam.
pub trait ContributionProvider: Send + Sync {
    /// Contribution owed on one period's basic salary. Zero or negative
    /// salary yields a zero contribution, never an error.
    fn compute(&self, basic_salary: Decimal) -> Result<Decimal, ProviderError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionBreakdown {
    pub sss: Decimal,
    pub pagibig: Decimal,
    pub philhealth: Decimal,
    pub total: Decimal,
}

pub fn compute_contributions(
    sss: &dyn ContributionProvider,
    pagibig: &dyn ContributionProvider,
    philhealth: &dyn ContributionProvider,
    basic_salary: Decimal,
) -> Result<ContributionBreakdown, ProviderError> {
    let sss = sss.compute(basic_salary)?;
    let pagibig = pagibig.compute(basic_salary)?;
    let philhealth = philhealth.compute(basic_salary)?;

    Ok(ContributionBreakdown {
        sss,
        pagibig,
        philhealth,
        total: sss + pagibig + philhealth,
    })
}

/// SSS employee share: 4.5% of the salary credit, which is the salary
/// clamped into the 4,000..=30,000 bracket range
pub struct Sss;

impl ContributionProvider for Sss {
    fn compute(&self, basic_salary: Decimal) -> Result<Decimal, ProviderError> {
        if basic_salary <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let salary_credit = basic_salary.clamp(dec!(4_000), dec!(30_000));

        Ok((salary_credit * dec!(0.045)).round_dp(2))
    }
}

/// Pag-IBIG employee share: 1% under the 1,500 threshold, 2% above it,
/// on a fund salary capped at 5,000
pub struct PagIbig;

impl ContributionProvider for PagIbig {
    fn compute(&self, basic_salary: Decimal) -> Result<Decimal, ProviderError> {
        if basic_salary <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let fund_salary = basic_salary.min(dec!(5_000));
        let rate = if basic_salary <= dec!(1_500) { dec!(0.01) } else { dec!(0.02) };

        Ok((fund_salary * rate).round_dp(2))
    }
}

/// PhilHealth employee share: half of the 5% premium, on a salary clamped
/// into the 10,000..=100,000 bracket range
pub struct PhilHealth;

impl ContributionProvider for PhilHealth {
    fn compute(&self, basic_salary: Decimal) -> Result<Decimal, ProviderError> {
        if basic_salary <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        let premium_salary = basic_salary.clamp(dec!(10_000), dec!(100_000));

        Ok((premium_salary * dec!(0.025)).round_dp(2))
    }
}
