//! Texas unemployment-insurance calculator: highest quarter divided by 25,
//! clamped to $72-$577, 26 weeks. Source: Texas Workforce Commission, 2026.

use crate::benefits::formula::{BenefitFormula, DurationRule, StateConstants};
use crate::benefits::result::CalculationResult;
use crate::benefits::BenefitError;

/// Texas constants (2026).
pub static TEXAS: StateConstants = StateConstants {
    max_weekly_benefit: 577.0,
    min_weekly_benefit: 72.0,
    formula: BenefitFormula::HighQuarterDivisor { divisor: 25.0 },
    duration: DurationRule::Fixed { weeks: 26 },
    formula_description: "Highest quarter wages divided by 25",
};

pub fn calculate(quarterly_earnings: &[f64]) -> Result<CalculationResult, BenefitError> {
    TEXAS.calculate(quarterly_earnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_the_high_quarter_by_25() {
        // 14000 / 25 = 560.
        let result = calculate(&[14_000.0, 14_000.0, 14_000.0, 14_000.0]).unwrap();
        assert_eq!(result.weekly_benefit_amount, 560.0);
        assert_eq!(result.max_duration_weeks, 26);
    }

    #[test]
    fn caps_at_the_maximum() {
        // 20000 / 25 = 800, capped at 577.
        let result = calculate(&[20_000.0, 20_000.0, 20_000.0, 20_000.0]).unwrap();
        assert_eq!(result.weekly_benefit_amount, 577.0);
        assert_eq!(result.calculation_details["cap_applied"], true);
    }

    #[test]
    fn rejects_short_histories() {
        assert!(calculate(&[14_000.0, 14_000.0, 14_000.0]).is_err());
    }
}
