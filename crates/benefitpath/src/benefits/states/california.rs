//! California unemployment-insurance calculator.
//!
//! Weekly benefit is the highest base-period quarter divided by 26, clamped
//! to $40-$450, payable for 26 weeks. Source: California EDD, 2026 rates.

use crate::benefits::formula::{BenefitFormula, DurationRule, StateConstants};
use crate::benefits::result::CalculationResult;
use crate::benefits::BenefitError;

/// California constants (2026).
pub static CALIFORNIA: StateConstants = StateConstants {
    max_weekly_benefit: 450.0,
    min_weekly_benefit: 40.0,
    formula: BenefitFormula::HighQuarterDivisor { divisor: 26.0 },
    duration: DurationRule::Fixed { weeks: 26 },
    formula_description: "Highest quarter wages divided by 26",
};

/// Calculate California benefits from at least four quarters of earnings.
pub fn calculate(quarterly_earnings: &[f64]) -> Result<CalculationResult, BenefitError> {
    CALIFORNIA.calculate(quarterly_earnings)
}
