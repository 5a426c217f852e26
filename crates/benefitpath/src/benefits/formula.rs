use serde_json::{json, Map};

use super::result::{build_result, format_usd, round_to_cents, CalculationResult};
use super::BenefitError;

/// How a state turns base-period earnings into a raw weekly amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BenefitFormula {
    /// WBA = highest base-period quarter / divisor.
    HighQuarterDivisor { divisor: f64 },
    /// WBA = sum of the base period * rate.
    BasePeriodPercentage { rate: f64 },
}

/// How many weeks the weekly amount is payable.
///
/// The wage-banded variant is a simplified stand-in for duration rules that
/// actually key off the state unemployment rate; no such input reaches this
/// service, so duration is stepped on base-period wages instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationRule {
    Fixed {
        weeks: u32,
    },
    WageBanded {
        high_threshold: f64,
        high_weeks: u32,
        mid_threshold: f64,
        mid_weeks: u32,
        floor_weeks: u32,
    },
}

impl DurationRule {
    fn weeks_for(&self, base_period_wages: f64) -> u32 {
        match *self {
            DurationRule::Fixed { weeks } => weeks,
            DurationRule::WageBanded {
                high_threshold,
                high_weeks,
                mid_threshold,
                mid_weeks,
                floor_weeks,
            } => {
                if base_period_wages >= high_threshold {
                    high_weeks
                } else if base_period_wages >= mid_threshold {
                    mid_weeks
                } else {
                    floor_weeks
                }
            }
        }
    }

    /// The week count advertised by the rules lookup: the fixed duration, or
    /// the lowest band when duration varies.
    pub fn standard_weeks(&self) -> u32 {
        match *self {
            DurationRule::Fixed { weeks } => weeks,
            DurationRule::WageBanded { floor_weeks, .. } => floor_weeks,
        }
    }
}

/// A state's statutory parameters for the current fiscal year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateConstants {
    pub max_weekly_benefit: f64,
    pub min_weekly_benefit: f64,
    pub formula: BenefitFormula,
    pub duration: DurationRule,
    /// Human-readable formula text served by the rules lookup.
    pub formula_description: &'static str,
}

impl StateConstants {
    /// Run the state's formula over the first four quarters of `quarterly_earnings`.
    ///
    /// Entries beyond the base period are accepted and ignored. Negative
    /// entries are the dispatcher's problem; the only check made here is the
    /// four-quarter minimum.
    pub fn calculate(
        &self,
        quarterly_earnings: &[f64],
    ) -> Result<CalculationResult, BenefitError> {
        let base_period =
            quarterly_earnings
                .get(..4)
                .ok_or(BenefitError::InsufficientQuarters {
                    provided: quarterly_earnings.len(),
                })?;
        let base_period_wages: f64 = base_period.iter().sum();

        let mut details = Map::new();
        let raw_weekly = match self.formula {
            BenefitFormula::HighQuarterDivisor { divisor } => {
                let high_quarter = base_period.iter().copied().fold(0.0_f64, f64::max);
                details.insert("high_quarter".to_string(), json!(high_quarter));
                if matches!(self.duration, DurationRule::WageBanded { .. }) {
                    details.insert("base_period_wages".to_string(), json!(base_period_wages));
                }
                details.insert(
                    "formula".to_string(),
                    json!(format!("{} / {}", format_usd(high_quarter), divisor)),
                );
                high_quarter / divisor
            }
            BenefitFormula::BasePeriodPercentage { rate } => {
                details.insert("base_period_wages".to_string(), json!(base_period_wages));
                details.insert(
                    "formula".to_string(),
                    json!(format!(
                        "{} × {}%",
                        format_usd(base_period_wages),
                        rate * 100.0
                    )),
                );
                base_period_wages * rate
            }
        };

        let weekly = clamp_weekly(raw_weekly, self.min_weekly_benefit, self.max_weekly_benefit);
        details.insert("pre_cap_weekly".to_string(), json!(round_to_cents(raw_weekly)));
        // Value equality against the bounds, not a "clamp fired" flag: an
        // uncapped result landing exactly on a bound still reads as capped.
        details.insert(
            "cap_applied".to_string(),
            json!(weekly == self.max_weekly_benefit || weekly == self.min_weekly_benefit),
        );

        let weeks = self.duration.weeks_for(base_period_wages);
        if matches!(self.duration, DurationRule::WageBanded { .. }) {
            details.insert(
                "weeks_note".to_string(),
                json!("Duration varies by state unemployment rate"),
            );
        }

        Ok(build_result(weekly, weeks, details))
    }
}

fn clamp_weekly(raw: f64, floor: f64, cap: f64) -> f64 {
    debug_assert!(floor <= cap, "statutory floor exceeds cap");
    raw.min(cap).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_STATE: StateConstants = StateConstants {
        max_weekly_benefit: 450.0,
        min_weekly_benefit: 40.0,
        formula: BenefitFormula::HighQuarterDivisor { divisor: 26.0 },
        duration: DurationRule::Fixed { weeks: 26 },
        formula_description: "test",
    };

    #[test]
    fn fails_on_short_histories() {
        let err = TEST_STATE.calculate(&[1000.0, 1000.0, 1000.0]).unwrap_err();
        assert!(matches!(
            err,
            BenefitError::InsufficientQuarters { provided: 3 }
        ));
    }

    #[test]
    fn ignores_quarters_beyond_the_base_period() {
        let base_only = TEST_STATE
            .calculate(&[10_000.0, 9000.0, 8000.0, 7000.0])
            .unwrap();
        let with_extra = TEST_STATE
            .calculate(&[10_000.0, 9000.0, 8000.0, 7000.0, 99_999.0])
            .unwrap();
        assert_eq!(base_only, with_extra);
    }

    #[test]
    fn clamps_to_floor_and_cap() {
        let floored = TEST_STATE.calculate(&[500.0, 500.0, 500.0, 500.0]).unwrap();
        assert_eq!(floored.weekly_benefit_amount, 40.0);

        let capped = TEST_STATE
            .calculate(&[25_000.0, 0.0, 0.0, 0.0])
            .unwrap();
        assert_eq!(capped.weekly_benefit_amount, 450.0);
    }

    #[test]
    fn cap_flag_uses_value_equality() {
        // 11700 / 26 lands exactly on the cap without being clamped; the
        // flag still reports capped.
        let result = TEST_STATE
            .calculate(&[11_700.0, 1000.0, 1000.0, 1000.0])
            .unwrap();
        assert_eq!(result.weekly_benefit_amount, 450.0);
        assert_eq!(result.calculation_details["cap_applied"], true);

        let uncapped = TEST_STATE
            .calculate(&[10_000.0, 1000.0, 1000.0, 1000.0])
            .unwrap();
        assert_eq!(uncapped.calculation_details["cap_applied"], false);
    }

    #[test]
    fn reports_pre_cap_weekly_rounded() {
        let result = TEST_STATE
            .calculate(&[25_000.0, 0.0, 0.0, 0.0])
            .unwrap();
        // 25000 / 26 = 961.538...
        assert_eq!(result.calculation_details["pre_cap_weekly"], 961.54);
    }

    #[test]
    fn banded_duration_steps_on_base_period_wages() {
        let banded = DurationRule::WageBanded {
            high_threshold: 50_000.0,
            high_weeks: 23,
            mid_threshold: 30_000.0,
            mid_weeks: 19,
            floor_weeks: 12,
        };
        assert_eq!(banded.weeks_for(80_000.0), 23);
        assert_eq!(banded.weeks_for(50_000.0), 23);
        assert_eq!(banded.weeks_for(49_999.99), 19);
        assert_eq!(banded.weeks_for(30_000.0), 19);
        assert_eq!(banded.weeks_for(29_999.99), 12);
        assert_eq!(banded.weeks_for(0.0), 12);
        assert_eq!(banded.standard_weeks(), 12);
    }

    #[test]
    fn formula_strings_carry_dollar_formatting() {
        let result = TEST_STATE
            .calculate(&[15_000.0, 15_000.0, 15_000.0, 15_000.0])
            .unwrap();
        assert_eq!(
            result.calculation_details["formula"],
            "$15,000.00 / 26"
        );
    }
}
