//! Florida unemployment-insurance calculator.
//!
//! Weekly benefit is the highest base-period quarter divided by 26, clamped
//! to $32-$275 (one of the lowest caps in the country). Duration runs 12-23
//! weeks; the real rule keys off the state unemployment rate, which this
//! service never sees, so duration is stepped on base-period wages instead.
//! Source: Florida DEO, 2026 rates.

use crate::benefits::formula::{BenefitFormula, DurationRule, StateConstants};
use crate::benefits::result::CalculationResult;
use crate::benefits::BenefitError;

/// Florida constants (2026).
pub static FLORIDA: StateConstants = StateConstants {
    max_weekly_benefit: 275.0,
    min_weekly_benefit: 32.0,
    formula: BenefitFormula::HighQuarterDivisor { divisor: 26.0 },
    duration: DurationRule::WageBanded {
        high_threshold: 50_000.0,
        high_weeks: 23,
        mid_threshold: 30_000.0,
        mid_weeks: 19,
        floor_weeks: 12,
    },
    formula_description: "Highest quarter wages divided by 26, 12-23 weeks based on state rate",
};

pub fn calculate(quarterly_earnings: &[f64]) -> Result<CalculationResult, BenefitError> {
    FLORIDA.calculate(quarterly_earnings)
}
