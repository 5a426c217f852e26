//! Unemployment-insurance benefit calculations.
//!
//! Each supported state compiles in its statutory constants for the current
//! fiscal year; a shared engine applies the state's formula (highest quarter
//! divided by a divisor, or a percentage of base-period wages), clamps the
//! result to the statutory floor and cap, and determines the payable
//! duration. Every calculation is a pure function of the earnings slice.

pub mod formula;
pub mod registry;
pub mod result;
pub mod router;
pub mod rules;
pub mod states;

pub use formula::{BenefitFormula, DurationRule, StateConstants};
pub use registry::StateCode;
pub use result::CalculationResult;
pub use rules::StateRule;

/// Errors surfaced by the calculation boundary.
///
/// `InsufficientQuarters` is raised by every calculator itself; the other
/// variants are rejected at the dispatch layer before any calculator runs.
#[derive(Debug, thiserror::Error)]
pub enum BenefitError {
    #[error("at least 4 quarters of earnings are required (got {provided})")]
    InsufficientQuarters { provided: usize },
    #[error("earnings cannot be negative")]
    NegativeEarnings,
    #[error("state {code} is not supported")]
    UnknownState { code: String },
}

/// Calculate benefits for a raw state code and earnings history.
///
/// This is the dispatcher contract: the code is trimmed and uppercased, the
/// earnings are validated (length and sign), and the request is routed to the
/// state's calculator. Checks run in the same order the service has always
/// applied them: unknown state, then short input, then negative input.
pub fn calculate(
    state_code: &str,
    quarterly_earnings: &[f64],
) -> Result<CalculationResult, BenefitError> {
    let normalized = state_code.trim().to_ascii_uppercase();
    let code = StateCode::parse(&normalized)
        .ok_or(BenefitError::UnknownState { code: normalized })?;

    if quarterly_earnings.len() < 4 {
        return Err(BenefitError::InsufficientQuarters {
            provided: quarterly_earnings.len(),
        });
    }
    if quarterly_earnings.iter().any(|amount| *amount < 0.0) {
        return Err(BenefitError::NegativeEarnings);
    }

    registry::calculate(code, quarterly_earnings)
}
