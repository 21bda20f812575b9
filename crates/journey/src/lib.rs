//! Progression engine.
//!
//! Derives journey state from a user snapshot and an onboarding record:
//! which modules apply, where the user resumes, which features are unlocked,
//! the reminder banner payload, and per-step lock state. Everything here is
//! a pure function of its inputs; nothing is cached or persisted.

#![warn(missing_docs)]

pub mod engine;
pub mod modules;

pub use engine::JourneyEngine;
pub use modules::active_modules;
