//! Computed journey results.
//!
//! Value objects produced by the progression engine. All of these are
//! recomputed on every call and never stored by the engine itself.

use crate::catalog::ModuleKey;
use serde::{Deserialize, Serialize};

/// Sticky per-module completion flags, copied from the onboarding record.
///
/// Flags are reported even for modules that are not currently active, so a
/// tier downgrade never regresses what the user already finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionStatus {
    /// Core setup finished
    pub core_complete: bool,
    /// Agents setup finished
    pub agents_complete: bool,
    /// Call center setup finished
    pub call_center_complete: bool,
}

/// Capabilities unlocked by completed modules.
///
/// Unlocks follow the stored completion flags, not the active module list:
/// tier gates visibility of a module, completion gates the capability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedFeatures {
    /// AI agents become available once core setup is done
    pub ai_agents: bool,
    /// Call center becomes available once agents setup is done
    pub call_center: bool,
}

/// The module a user should resume in, or `Complete` when the whole
/// journey is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyPhase {
    /// Resume in core setup
    Core,
    /// Resume in agents setup
    Agents,
    /// Resume in call center setup
    CallCenter,
    /// Every active module is finished
    Complete,
}

impl JourneyPhase {
    /// The module this phase resumes in, if any.
    pub fn module(&self) -> Option<ModuleKey> {
        match self {
            JourneyPhase::Core => Some(ModuleKey::Core),
            JourneyPhase::Agents => Some(ModuleKey::Agents),
            JourneyPhase::CallCenter => Some(ModuleKey::CallCenter),
            JourneyPhase::Complete => None,
        }
    }
}

/// Display-ready reminder banner payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderStatus {
    /// Whether the mandatory core module is still unfinished
    pub onboarding_required: bool,

    /// Completed step ids belonging to the core module, in catalog order.
    /// Steps from other modules are filtered out.
    pub completed_steps: Vec<String>,
}

/// A catalog step annotated with its unlock state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedStep {
    /// Stable step identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Whether the step is still locked
    pub locked: bool,
}

/// Annotated step lists for every module in the catalog, active or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupGroups {
    /// Core module steps
    pub core: Vec<LockedStep>,
    /// Agents module steps
    pub agents: Vec<LockedStep>,
    /// Call center module steps
    pub callcenter: Vec<LockedStep>,
}

impl SetupGroups {
    /// Annotated steps of one module.
    pub fn steps(&self, module: ModuleKey) -> &[LockedStep] {
        match module {
            ModuleKey::Core => &self.core,
            ModuleKey::Agents => &self.agents,
            ModuleKey::CallCenter => &self.callcenter,
        }
    }
}

/// Single display label for where the journey stands next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStatus {
    /// Core setup outstanding
    NeedsCore,
    /// Agents setup outstanding
    NeedsAgents,
    /// Call center setup outstanding
    NeedsCallcenter,
    /// Every active module finished
    FullyComplete,
}

impl NextStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NextStatus::NeedsCore => "needs_core",
            NextStatus::NeedsAgents => "needs_agents",
            NextStatus::NeedsCallcenter => "needs_callcenter",
            NextStatus::FullyComplete => "fully_complete",
        }
    }
}

/// Completion summary for banners and redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    /// Label for the next outstanding module
    pub next_status: NextStatus,
    /// Whether every active module is finished
    pub all_complete: bool,
}

/// Full journey state for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyState {
    /// Modules reachable under the user's entitlements, in journey order
    pub active_modules: Vec<ModuleKey>,

    /// Where the user should resume
    pub initial_phase: JourneyPhase,

    /// Sticky completion flags
    pub completion: CompletionStatus,

    /// Capability unlocks derived from completion
    pub unlocked: UnlockedFeatures,

    /// Reminder banner payload
    pub reminder: ReminderStatus,

    /// Per-module step lists with lock state
    pub setup_groups: SetupGroups,
}
