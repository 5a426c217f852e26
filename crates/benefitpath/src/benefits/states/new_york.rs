//! New York unemployment-insurance calculator.
//!
//! New York phrases its formula as half the average weekly wage in the high
//! quarter; over a 13-week quarter that is the high quarter divided by 26.
//! Clamped to $104-$504, 26 weeks. Source: New York DOL, 2026 rates.

use crate::benefits::formula::{BenefitFormula, DurationRule, StateConstants};
use crate::benefits::result::CalculationResult;
use crate::benefits::BenefitError;

/// New York constants (2026).
pub static NEW_YORK: StateConstants = StateConstants {
    max_weekly_benefit: 504.0,
    min_weekly_benefit: 104.0,
    formula: BenefitFormula::HighQuarterDivisor { divisor: 26.0 },
    duration: DurationRule::Fixed { weeks: 26 },
    formula_description: "Average weekly wage times 0.5, max $504",
};

pub fn calculate(quarterly_earnings: &[f64]) -> Result<CalculationResult, BenefitError> {
    NEW_YORK.calculate(quarterly_earnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_the_high_quarter_by_26() {
        // 12000 / 26 = 461.54.
        let result = calculate(&[12_000.0, 12_000.0, 12_000.0, 12_000.0]).unwrap();
        assert_eq!(result.weekly_benefit_amount, 461.54);
        assert_eq!(result.max_duration_weeks, 26);
    }

    #[test]
    fn caps_at_the_maximum() {
        // 20000 / 26 = 769.23, capped at 504.
        let result = calculate(&[20_000.0, 20_000.0, 20_000.0, 20_000.0]).unwrap();
        assert_eq!(result.weekly_benefit_amount, 504.0);
    }

    #[test]
    fn rejects_short_histories() {
        assert!(calculate(&[12_000.0]).is_err());
    }
}
