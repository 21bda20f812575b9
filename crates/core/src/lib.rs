//! Pulse core data models.
//!
//! This crate defines the read-only input snapshots and computed result
//! types shared by the progression and confidence engines.

#![warn(missing_docs)]

// Input snapshots
mod user;
mod onboarding;
mod goal;

// Setup step catalog (injectable configuration)
mod catalog;

// Computed journey results
mod journey;

// Re-exports
pub use user::{SubscriptionTier, UserSnapshot};
pub use onboarding::OnboardingRecord;
pub use goal::GoalSnapshot;
pub use catalog::{CatalogError, ModuleKey, SetupStep, StepCatalog};
pub use journey::{
    CompletionStatus, CompletionSummary, JourneyPhase, JourneyState, LockedStep, NextStatus,
    ReminderStatus, SetupGroups, UnlockedFeatures,
};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
