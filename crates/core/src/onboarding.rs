//! Onboarding record - per-user completion flags and finished steps.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only onboarding record for one user.
///
/// A missing record is the same thing as `Default`: nothing completed, no
/// steps finished. Engines accept `Option<&OnboardingRecord>` and treat
/// `None` as "not started", never as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingRecord {
    /// Core setup module finished
    #[serde(default)]
    pub onboarding_completed: bool,

    /// AI agents module finished
    #[serde(default)]
    pub agent_onboarding_completed: bool,

    /// Call center module finished
    #[serde(default)]
    pub call_center_onboarding_completed: bool,

    /// Ids of individually completed steps, across all modules.
    ///
    /// Membership is all that matters; order and duplicates are meaningless.
    #[serde(default)]
    pub completed_steps: HashSet<String>,
}

impl OnboardingRecord {
    /// Whether a step id has been completed.
    pub fn step_done(&self, step_id: &str) -> bool {
        self.completed_steps.contains(step_id)
    }
}
