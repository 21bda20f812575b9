//! Journey state derivation.
//!
//! The engine is a thin service struct around an injected [`StepCatalog`].
//! Every method is a pure transform over the user and onboarding snapshots;
//! the engine holds no per-user state and performs no I/O.

use pulse_core::{
    CompletionStatus, CompletionSummary, JourneyPhase, JourneyState, LockedStep, ModuleKey,
    NextStatus, OnboardingRecord, ReminderStatus, SetupGroups, StepCatalog, UnlockedFeatures,
    UserSnapshot,
};
use std::collections::HashSet;
use tracing::debug;

use crate::modules::active_modules;

/// Progression engine over an injected step catalog.
pub struct JourneyEngine {
    catalog: StepCatalog,
}

impl JourneyEngine {
    /// Create an engine with a custom step catalog.
    pub fn new(catalog: StepCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this engine was built with.
    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    /// Derive the full journey state for one user.
    ///
    /// A missing onboarding record is the "not started" state. Completion
    /// flags are copied verbatim even for inactive modules, and feature
    /// unlocks follow those sticky flags rather than current entitlements.
    pub fn journey_state(
        &self,
        user: &UserSnapshot,
        onboarding: Option<&OnboardingRecord>,
    ) -> JourneyState {
        let default_record = OnboardingRecord::default();
        let record = onboarding.unwrap_or(&default_record);

        let active = active_modules(user);

        let completion = CompletionStatus {
            core_complete: record.onboarding_completed,
            agents_complete: record.agent_onboarding_completed,
            call_center_complete: record.call_center_onboarding_completed,
        };

        let unlocked = UnlockedFeatures {
            ai_agents: completion.core_complete,
            call_center: completion.agents_complete,
        };

        let initial_phase = resolve_phase(&completion, &active);
        debug!(user = %user.id, phase = ?initial_phase, "resolved journey phase");

        let reminder = self.reminder_status(&completion, &record.completed_steps);
        let setup_groups = self.setup_groups(record);

        JourneyState {
            active_modules: active,
            initial_phase,
            completion,
            unlocked,
            reminder,
            setup_groups,
        }
    }

    /// Build the reminder banner payload.
    ///
    /// Reminders fire only while the mandatory core module is unfinished;
    /// incomplete optional modules never trigger one. The reported steps
    /// are restricted to core-catalog ids, emitted in catalog order.
    pub fn reminder_status(
        &self,
        completion: &CompletionStatus,
        completed_steps: &HashSet<String>,
    ) -> ReminderStatus {
        let core_steps = self
            .catalog
            .steps(ModuleKey::Core)
            .iter()
            .filter(|step| completed_steps.contains(&step.id))
            .map(|step| step.id.clone())
            .collect();

        ReminderStatus {
            onboarding_required: !completion.core_complete,
            completed_steps: core_steps,
        }
    }

    /// Annotate the full catalog with per-step lock state.
    ///
    /// All modules are returned, active or not, so callers can preview
    /// locked ones. The first step of a module is gated on the previous
    /// module's completion flag; later steps unlock sequentially within
    /// the module.
    pub fn setup_groups(&self, onboarding: &OnboardingRecord) -> SetupGroups {
        SetupGroups {
            core: self.annotate_module(ModuleKey::Core, onboarding),
            agents: self.annotate_module(ModuleKey::Agents, onboarding),
            callcenter: self.annotate_module(ModuleKey::CallCenter, onboarding),
        }
    }

    fn annotate_module(&self, module: ModuleKey, onboarding: &OnboardingRecord) -> Vec<LockedStep> {
        // Entry gate: the whole previous module must be flagged complete.
        let entry_open = match module {
            ModuleKey::Core => true,
            ModuleKey::Agents => onboarding.onboarding_completed,
            ModuleKey::CallCenter => onboarding.agent_onboarding_completed,
        };
        let module_complete = match module {
            ModuleKey::Core => onboarding.onboarding_completed,
            ModuleKey::Agents => onboarding.agent_onboarding_completed,
            ModuleKey::CallCenter => onboarding.call_center_onboarding_completed,
        };

        let steps = self.catalog.steps(module);
        steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let locked = if index == 0 {
                    !entry_open
                } else {
                    !(module_complete || onboarding.step_done(&steps[index - 1].id))
                };
                LockedStep {
                    id: step.id.clone(),
                    title: step.title.clone(),
                    locked,
                }
            })
            .collect()
    }

    /// Collapse a journey state into a single display label.
    ///
    /// `next_status` follows the same rule order as `initial_phase`, so the
    /// banner and the resume target can never disagree.
    pub fn summarize(&self, state: &JourneyState) -> CompletionSummary {
        let next_status = match resolve_phase(&state.completion, &state.active_modules) {
            JourneyPhase::Core => NextStatus::NeedsCore,
            JourneyPhase::Agents => NextStatus::NeedsAgents,
            JourneyPhase::CallCenter => NextStatus::NeedsCallcenter,
            JourneyPhase::Complete => NextStatus::FullyComplete,
        };

        CompletionSummary {
            next_status,
            all_complete: next_status == NextStatus::FullyComplete,
        }
    }
}

impl Default for JourneyEngine {
    fn default() -> Self {
        Self::new(StepCatalog::default())
    }
}

/// Priority-ordered phase rules; first rule that holds wins.
///
/// Kept as an explicit table so the precedence is visible and testable as
/// data rather than buried in control flow.
fn phase_rules(completion: &CompletionStatus, active: &[ModuleKey]) -> [(JourneyPhase, bool); 3] {
    let agents_active = active.contains(&ModuleKey::Agents);
    let call_center_active = active.contains(&ModuleKey::CallCenter);

    [
        (JourneyPhase::Core, !completion.core_complete),
        (
            JourneyPhase::Agents,
            agents_active && !completion.agents_complete,
        ),
        (
            JourneyPhase::CallCenter,
            call_center_active && !completion.call_center_complete,
        ),
    ]
}

fn resolve_phase(completion: &CompletionStatus, active: &[ModuleKey]) -> JourneyPhase {
    phase_rules(completion, active)
        .iter()
        .find(|(_, applies)| *applies)
        .map(|(phase, _)| *phase)
        .unwrap_or(JourneyPhase::Complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::SubscriptionTier;

    fn user(tier: SubscriptionTier, addon: bool) -> UserSnapshot {
        UserSnapshot {
            id: "user-123".to_string(),
            subscription_tier: tier,
            has_call_center_addon: addon,
        }
    }

    fn record(core: bool, agents: bool, call_center: bool, steps: &[&str]) -> OnboardingRecord {
        OnboardingRecord {
            onboarding_completed: core,
            agent_onboarding_completed: agents,
            call_center_onboarding_completed: call_center,
            completed_steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn first_login_starts_in_core() {
        let engine = JourneyEngine::default();
        let state = engine.journey_state(&user(SubscriptionTier::Free, false), None);

        assert_eq!(state.active_modules, vec![ModuleKey::Core]);
        assert_eq!(state.initial_phase, JourneyPhase::Core);
        assert!(!state.completion.core_complete);
        assert!(!state.unlocked.ai_agents);
        assert!(!state.unlocked.call_center);
        assert!(state.reminder.onboarding_required);
    }

    #[test]
    fn subscriber_resumes_in_agents_after_core() {
        let engine = JourneyEngine::default();
        let onboarding = record(
            true,
            false,
            false,
            &["welcome", "market", "preferences", "core-confirm"],
        );
        let state = engine.journey_state(
            &user(SubscriptionTier::Subscriber, false),
            Some(&onboarding),
        );

        assert_eq!(state.active_modules, vec![ModuleKey::Core, ModuleKey::Agents]);
        assert_eq!(state.initial_phase, JourneyPhase::Agents);
        assert!(state.completion.core_complete);
        assert!(!state.completion.agents_complete);
        assert!(state.unlocked.ai_agents);
        assert!(!state.unlocked.call_center);
    }

    #[test]
    fn addon_user_resumes_in_call_center_after_agents() {
        let engine = JourneyEngine::default();
        let onboarding = record(true, true, false, &["welcome", "ai-team-intro"]);
        let state =
            engine.journey_state(&user(SubscriptionTier::Subscriber, true), Some(&onboarding));

        assert_eq!(
            state.active_modules,
            vec![ModuleKey::Core, ModuleKey::Agents, ModuleKey::CallCenter]
        );
        assert_eq!(state.initial_phase, JourneyPhase::CallCenter);
        assert!(state.unlocked.ai_agents);
        assert!(!state.unlocked.call_center);
    }

    #[test]
    fn fully_complete_journey_resolves_to_complete() {
        let engine = JourneyEngine::default();
        let onboarding = record(true, true, true, &[]);
        let state =
            engine.journey_state(&user(SubscriptionTier::Subscriber, true), Some(&onboarding));

        assert_eq!(state.initial_phase, JourneyPhase::Complete);
        let summary = engine.summarize(&state);
        assert!(summary.all_complete);
        assert_eq!(summary.next_status, NextStatus::FullyComplete);
    }

    #[test]
    fn incomplete_optional_modules_are_skipped_when_inactive() {
        // Free user finished core; agents/callcenter flags false but the
        // modules are not active, so the journey is complete.
        let engine = JourneyEngine::default();
        let onboarding = record(true, false, false, &[]);
        let state = engine.journey_state(&user(SubscriptionTier::Free, false), Some(&onboarding));

        assert_eq!(state.initial_phase, JourneyPhase::Complete);
        assert!(engine.summarize(&state).all_complete);
    }

    #[test]
    fn unlocks_are_sticky_across_downgrades() {
        // Downgraded user: agents module no longer active, but stored
        // completion flags keep both capabilities unlocked.
        let engine = JourneyEngine::default();
        let onboarding = record(true, true, false, &[]);
        let state = engine.journey_state(&user(SubscriptionTier::Free, false), Some(&onboarding));

        assert_eq!(state.active_modules, vec![ModuleKey::Core]);
        assert!(state.unlocked.ai_agents);
        assert!(state.unlocked.call_center);
        assert!(state.completion.agents_complete);
    }

    #[test]
    fn reminder_reports_core_steps_only() {
        let engine = JourneyEngine::default();
        let onboarding = record(false, false, false, &["welcome", "market", "ai-team-intro"]);
        let state = engine.journey_state(&user(SubscriptionTier::Free, false), Some(&onboarding));

        assert!(state.reminder.onboarding_required);
        assert_eq!(
            state.reminder.completed_steps,
            vec!["welcome".to_string(), "market".to_string()]
        );
    }

    #[test]
    fn reminder_clears_once_core_is_complete() {
        let engine = JourneyEngine::default();
        let onboarding = record(true, false, false, &["welcome"]);
        let state = engine.journey_state(&user(SubscriptionTier::Free, false), Some(&onboarding));

        assert!(!state.reminder.onboarding_required);
    }

    #[test]
    fn reminder_steps_follow_catalog_order() {
        let engine = JourneyEngine::default();
        // Insertion order into the set is irrelevant; output follows the
        // catalog's unlock order.
        let onboarding = record(false, false, false, &["preferences", "welcome", "market"]);
        let state = engine.journey_state(&user(SubscriptionTier::Free, false), Some(&onboarding));

        assert_eq!(
            state.reminder.completed_steps,
            vec![
                "welcome".to_string(),
                "market".to_string(),
                "preferences".to_string()
            ]
        );
    }

    #[test]
    fn setup_groups_cover_the_full_catalog() {
        let engine = JourneyEngine::default();
        let groups = engine.setup_groups(&OnboardingRecord::default());

        assert_eq!(groups.core.len(), 5);
        assert_eq!(groups.agents.len(), 4);
        assert_eq!(groups.callcenter.len(), 5);
    }

    #[test]
    fn first_agents_step_locked_until_core_flag_set() {
        let engine = JourneyEngine::default();
        // Every core step done individually, but the module flag is false:
        // the agents entry stays locked.
        let onboarding = record(
            false,
            false,
            false,
            &["welcome", "market", "preferences", "core-confirm", "survey"],
        );
        let groups = engine.setup_groups(&onboarding);

        assert!(groups.agents[0].locked);
        assert!(!groups.core[0].locked);
    }

    #[test]
    fn module_entry_gates_follow_previous_module_flags() {
        let engine = JourneyEngine::default();
        let onboarding = record(true, false, false, &["welcome", "market"]);
        let groups = engine.setup_groups(&onboarding);

        assert!(!groups.agents[0].locked);
        assert!(groups.callcenter[0].locked);
    }

    #[test]
    fn steps_unlock_sequentially_within_a_module() {
        let engine = JourneyEngine::default();
        let onboarding = record(false, false, false, &["welcome"]);
        let groups = engine.setup_groups(&onboarding);

        assert!(!groups.core[0].locked);
        assert!(!groups.core[1].locked); // welcome done, market unlocks
        assert!(groups.core[2].locked); // market not done
        assert!(groups.core[3].locked);
    }

    #[test]
    fn completed_module_flag_unlocks_all_its_steps() {
        let engine = JourneyEngine::default();
        let onboarding = record(true, false, false, &[]);
        let groups = engine.setup_groups(&onboarding);

        assert!(groups.core.iter().all(|step| !step.locked));
    }

    #[test]
    fn phase_and_summary_agree_for_every_combination() {
        let engine = JourneyEngine::default();
        let activity = [
            (SubscriptionTier::Free, false),
            (SubscriptionTier::Subscriber, false),
            (SubscriptionTier::Subscriber, true),
        ];

        for (tier, addon) in activity {
            for bits in 0..8u8 {
                let onboarding = record(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, &[]);
                let snapshot = user(tier, addon);
                let state = engine.journey_state(&snapshot, Some(&onboarding));
                let summary = engine.summarize(&state);

                let expected = match state.initial_phase {
                    JourneyPhase::Core => NextStatus::NeedsCore,
                    JourneyPhase::Agents => NextStatus::NeedsAgents,
                    JourneyPhase::CallCenter => NextStatus::NeedsCallcenter,
                    JourneyPhase::Complete => NextStatus::FullyComplete,
                };
                assert_eq!(
                    summary.next_status, expected,
                    "disagreement for tier {:?}, addon {}, flags {:03b}",
                    tier, addon, bits
                );
                assert_eq!(
                    summary.all_complete,
                    state.initial_phase == JourneyPhase::Complete
                );
            }
        }
    }

    #[test]
    fn custom_catalog_drives_reminder_and_groups() {
        use pulse_core::SetupStep;

        let catalog = StepCatalog {
            core: vec![SetupStep::new("a", "A"), SetupStep::new("b", "B")],
            agents: vec![SetupStep::new("c", "C")],
            callcenter: vec![SetupStep::new("d", "D")],
        };
        assert!(catalog.validate().is_ok());

        let engine = JourneyEngine::new(catalog);
        let onboarding = record(false, false, false, &["a", "c"]);
        let state = engine.journey_state(&user(SubscriptionTier::Free, false), Some(&onboarding));

        assert_eq!(state.reminder.completed_steps, vec!["a".to_string()]);
        assert_eq!(state.setup_groups.core.len(), 2);
        assert!(!state.setup_groups.core[1].locked);
    }
}
