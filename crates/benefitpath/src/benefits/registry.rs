//! State-code dispatch to the compiled-in calculators.
//!
//! The registry is static for the life of the process: an enum-keyed match
//! over the six supported states, with no dynamic registration.

use std::fmt;

use super::formula::StateConstants;
use super::result::CalculationResult;
use super::states;
use super::BenefitError;

/// Two-letter code of a supported state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateCode {
    Ca,
    Tx,
    Ny,
    Fl,
    Wa,
    Wy,
}

impl StateCode {
    /// Every supported state, in registry definition order.
    pub const ALL: [StateCode; 6] = [
        StateCode::Ca,
        StateCode::Tx,
        StateCode::Ny,
        StateCode::Fl,
        StateCode::Wa,
        StateCode::Wy,
    ];

    /// Parse a normalized (uppercase, trimmed) two-letter code. Normalization
    /// is the caller's job; anything but an exact uppercase match is `None`.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "CA" => Some(StateCode::Ca),
            "TX" => Some(StateCode::Tx),
            "NY" => Some(StateCode::Ny),
            "FL" => Some(StateCode::Fl),
            "WA" => Some(StateCode::Wa),
            "WY" => Some(StateCode::Wy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StateCode::Ca => "CA",
            StateCode::Tx => "TX",
            StateCode::Ny => "NY",
            StateCode::Fl => "FL",
            StateCode::Wa => "WA",
            StateCode::Wy => "WY",
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The statutory constants backing a state's calculator.
pub fn constants_for(code: StateCode) -> &'static StateConstants {
    match code {
        StateCode::Ca => &states::california::CALIFORNIA,
        StateCode::Tx => &states::texas::TEXAS,
        StateCode::Ny => &states::new_york::NEW_YORK,
        StateCode::Fl => &states::florida::FLORIDA,
        StateCode::Wa => &states::washington::WASHINGTON,
        StateCode::Wy => &states::wyoming::WYOMING,
    }
}

/// Run a state's calculator against an earnings history.
pub fn calculate(
    code: StateCode,
    quarterly_earnings: &[f64],
) -> Result<CalculationResult, BenefitError> {
    match code {
        StateCode::Ca => states::california::calculate(quarterly_earnings),
        StateCode::Tx => states::texas::calculate(quarterly_earnings),
        StateCode::Ny => states::new_york::calculate(quarterly_earnings),
        StateCode::Fl => states::florida::calculate(quarterly_earnings),
        StateCode::Wa => states::washington::calculate(quarterly_earnings),
        StateCode::Wy => states::wyoming::calculate(quarterly_earnings),
    }
}

/// Supported codes in registry definition order.
pub fn supported_states() -> Vec<&'static str> {
    StateCode::ALL.iter().map(StateCode::as_str).collect()
}
