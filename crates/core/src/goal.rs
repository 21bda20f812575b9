//! Goal snapshot - trajectory inputs for confidence projection.

use crate::Time;
use serde::{Deserialize, Serialize};

/// Read-only snapshot of a goal's time and progress trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSnapshot {
    /// Target value; must be positive for the goal to be well-formed
    pub target_value: f64,

    /// Measured progress toward the target
    #[serde(default)]
    pub current_progress: f64,

    /// When the goal was created
    pub created_at: Time,

    /// Deadline for reaching the target
    pub deadline: Time,

    /// Last stored confidence projection, written back by the persistence
    /// layer. Only read for aggregation; never updated here.
    #[serde(default)]
    pub confidence_level: Option<u8>,
}
