//! Wyoming unemployment-insurance calculator.
//!
//! Unlike the divisor states, Wyoming pays 4% of total base-period wages,
//! clamped to $41-$560, for 26 weeks. Source: Wyoming DWS, 2026 rates.

use crate::benefits::formula::{BenefitFormula, DurationRule, StateConstants};
use crate::benefits::result::CalculationResult;
use crate::benefits::BenefitError;

/// Wyoming constants (2026).
pub static WYOMING: StateConstants = StateConstants {
    max_weekly_benefit: 560.0,
    min_weekly_benefit: 41.0,
    formula: BenefitFormula::BasePeriodPercentage { rate: 0.04 },
    duration: DurationRule::Fixed { weeks: 26 },
    formula_description: "4% of base period wages, up to $560/week",
};

pub fn calculate(quarterly_earnings: &[f64]) -> Result<CalculationResult, BenefitError> {
    WYOMING.calculate(quarterly_earnings)
}
