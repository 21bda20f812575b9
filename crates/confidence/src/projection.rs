//! Confidence projection from goal pace.

use pulse_core::{GoalSnapshot, Time};

/// Days from `from` to `to`, rounded up. Negative when `to` precedes `from`.
fn days_between_ceil(from: Time, to: Time) -> i64 {
    let millis = (to - from).num_milliseconds();
    (millis as f64 / 86_400_000.0).ceil() as i64
}

/// Project how likely a goal is to reach its target by its deadline.
///
/// Ordered rule evaluation; the first applicable rule wins:
///
/// 1. Non-positive target: the goal definition is invalid, confidence 0.
/// 2. Target already reached: 100, regardless of date math.
/// 3. Deadline passed without completion: 0.
/// 4. Degenerate window (created on or after its own deadline): 0.
/// 5. Zero progress gets a grace period: 95 within the first day, 85 while
///    less than 15% of the window has elapsed, then 5. The floor is 5
///    rather than 0 so measurement lag does not read as a dead goal.
/// 6. Otherwise extrapolate the observed daily pace across the whole
///    window, compare against the target, clamp to [0, 100] and round.
///
/// Total over every input, including degenerate dates; it never panics.
pub fn confidence_percentage(now: Time, goal: &GoalSnapshot) -> u8 {
    if goal.target_value <= 0.0 {
        return 0;
    }

    if goal.current_progress >= goal.target_value {
        return 100;
    }

    let total_duration_days = days_between_ceil(goal.created_at, goal.deadline);
    let days_remaining = days_between_ceil(now, goal.deadline);

    if days_remaining <= 0 {
        return 0;
    }

    if total_duration_days <= 0 {
        return 0;
    }

    let days_elapsed = days_between_ceil(goal.created_at, now);

    if goal.current_progress == 0.0 {
        if days_elapsed <= 1 {
            return 95;
        }

        let time_elapsed_ratio = days_elapsed as f64 / total_duration_days as f64;
        if time_elapsed_ratio < 0.15 {
            return 85;
        }

        return 5;
    }

    // Mirrors the just-started case above; avoids dividing by zero elapsed
    // time when evaluation happens before the creation instant.
    if days_elapsed <= 0 {
        return 95;
    }

    let daily_pace = goal.current_progress / days_elapsed as f64;
    let projected_total = daily_pace * total_duration_days as f64;
    let raw_confidence = projected_total / goal.target_value * 100.0;

    raw_confidence.clamp(0.0, 100.0).round() as u8
}
