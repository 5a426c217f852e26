//! Read-only per-state rules metadata for the lookup endpoint.
//!
//! Derived from each calculator's compiled-in constants rather than kept as a
//! second hand-maintained table, so the lookup can never drift from what the
//! calculators actually pay.

use serde::Serialize;

use super::registry::{self, StateCode};

/// Static benefit rules for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRule {
    pub state_code: &'static str,
    pub max_benefit: f64,
    pub min_benefit: f64,
    pub standard_weeks: u32,
    pub formula_description: &'static str,
}

/// Rules view for a supported state.
pub fn state_rule(code: StateCode) -> StateRule {
    let constants = registry::constants_for(code);
    StateRule {
        state_code: code.as_str(),
        max_benefit: constants.max_weekly_benefit,
        min_benefit: constants.min_weekly_benefit,
        standard_weeks: constants.duration.standard_weeks(),
        formula_description: constants.formula_description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn california_rule_matches_its_constants() {
        let rule = state_rule(StateCode::Ca);
        assert_eq!(rule.state_code, "CA");
        assert_eq!(rule.max_benefit, 450.0);
        assert_eq!(rule.min_benefit, 40.0);
        assert_eq!(rule.standard_weeks, 26);
        assert_eq!(rule.formula_description, "Highest quarter wages divided by 26");
    }

    #[test]
    fn banded_duration_advertises_the_floor_weeks() {
        let rule = state_rule(StateCode::Fl);
        assert_eq!(rule.standard_weeks, 12);
    }

    #[test]
    fn new_york_keeps_its_average_wage_phrasing() {
        let rule = state_rule(StateCode::Ny);
        assert_eq!(
            rule.formula_description,
            "Average weekly wage times 0.5, max $504"
        );
    }

    #[test]
    fn every_rule_is_internally_consistent() {
        for code in StateCode::ALL {
            let rule = state_rule(code);
            assert!(rule.min_benefit <= rule.max_benefit, "{code} floor above cap");
            assert!(rule.standard_weeks > 0, "{code} has zero duration");
            assert!(!rule.formula_description.is_empty());
        }
    }
}
