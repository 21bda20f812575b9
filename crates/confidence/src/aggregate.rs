//! Dashboard aggregation of stored confidences.

use pulse_core::GoalSnapshot;

/// Arithmetic mean of the goals' stored confidence levels, rounded.
///
/// Trusts the previously stored `confidence_level` on each goal rather than
/// recomputing; keeping those fresh is the caller's job. Missing values
/// count as 0, and an empty slice averages to 0.
pub fn average_confidence(goals: &[GoalSnapshot]) -> u8 {
    if goals.is_empty() {
        return 0;
    }

    let total: u32 = goals
        .iter()
        .map(|goal| u32::from(goal.confidence_level.unwrap_or(0)))
        .sum();

    (total as f64 / goals.len() as f64).round() as u8
}
