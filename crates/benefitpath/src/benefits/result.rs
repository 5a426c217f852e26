use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Standard result shape shared by every state calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub weekly_benefit_amount: f64,
    pub max_duration_weeks: u32,
    pub total_potential: f64,
    pub calculation_details: Map<String, Value>,
}

/// Round a monetary amount to whole cents, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Assemble a standardized result from a weekly amount and week count.
///
/// The weekly figure is rounded to cents first; the total is derived from the
/// rounded value, not the raw one. Callers guarantee `weekly >= 0` and
/// `weeks > 0`.
pub(crate) fn build_result(
    weekly: f64,
    weeks: u32,
    details: Map<String, Value>,
) -> CalculationResult {
    let weekly = round_to_cents(weekly);
    CalculationResult {
        weekly_benefit_amount: weekly,
        max_duration_weeks: weeks,
        total_potential: round_to_cents(weekly * weeks as f64),
        calculation_details: details,
    }
}

/// Format a dollar amount with thousands separators and cents, e.g.
/// `$15,000.00`. Used for the human-readable formula strings in the
/// calculation details.
pub(crate) fn format_usd(amount: f64) -> String {
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}
