//! Washington unemployment-insurance calculator: highest quarter divided by
//! 25, clamped to $201-$999 (among the highest caps in the nation), 26 weeks.
//! Source: Washington ESD, 2026 rates.

use crate::benefits::formula::{BenefitFormula, DurationRule, StateConstants};
use crate::benefits::result::CalculationResult;
use crate::benefits::BenefitError;

/// Washington constants (2026).
pub static WASHINGTON: StateConstants = StateConstants {
    max_weekly_benefit: 999.0,
    min_weekly_benefit: 201.0,
    formula: BenefitFormula::HighQuarterDivisor { divisor: 25.0 },
    duration: DurationRule::Fixed { weeks: 26 },
    formula_description: "Highest quarter wages divided by 25",
};

pub fn calculate(quarterly_earnings: &[f64]) -> Result<CalculationResult, BenefitError> {
    WASHINGTON.calculate(quarterly_earnings)
}
