//! Setup step catalog - ordered steps per journey module.
//!
//! The catalog is configuration owned by the presentation layer and injected
//! into the journey engine, so tests and alternate wizards can swap it out.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A named phase of the setup journey.
///
/// Order is fixed: `Core`, then `Agents`, then `CallCenter`. Callers rely on
/// index order to mean "earlier in the journey".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKey {
    /// Mandatory core setup
    Core,
    /// AI agents setup (paid tiers)
    Agents,
    /// Call center setup (paid tiers with the add-on)
    CallCenter,
}

impl ModuleKey {
    /// All modules in journey order.
    pub const ALL: [ModuleKey; 3] = [ModuleKey::Core, ModuleKey::Agents, ModuleKey::CallCenter];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKey::Core => "core",
            ModuleKey::Agents => "agents",
            ModuleKey::CallCenter => "callcenter",
        }
    }
}

impl std::fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An individually completable unit of work within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupStep {
    /// Stable step identifier
    pub id: String,

    /// Display title
    pub title: String,
}

impl SetupStep {
    /// Create a step from string literals.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Catalog validation error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A module has no steps
    #[error("module '{0}' has no steps")]
    EmptyModule(ModuleKey),

    /// The same step id appears more than once
    #[error("duplicate step id '{0}'")]
    DuplicateStepId(String),
}

/// Ordered step lists for every journey module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepCatalog {
    /// Core module steps
    pub core: Vec<SetupStep>,

    /// Agents module steps
    pub agents: Vec<SetupStep>,

    /// Call center module steps
    pub callcenter: Vec<SetupStep>,
}

impl StepCatalog {
    /// Steps of one module, in unlock order.
    pub fn steps(&self, module: ModuleKey) -> &[SetupStep] {
        match module {
            ModuleKey::Core => &self.core,
            ModuleKey::Agents => &self.agents,
            ModuleKey::CallCenter => &self.callcenter,
        }
    }

    /// Check the catalog is usable: no empty modules, no duplicate step ids.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for module in ModuleKey::ALL {
            let steps = self.steps(module);
            if steps.is_empty() {
                return Err(CatalogError::EmptyModule(module));
            }
            for step in steps {
                if !seen.insert(step.id.as_str()) {
                    return Err(CatalogError::DuplicateStepId(step.id.clone()));
                }
            }
        }
        Ok(())
    }
}

impl Default for StepCatalog {
    /// The reference catalog from the setup wizard.
    fn default() -> Self {
        Self {
            core: vec![
                SetupStep::new("welcome", "Welcome"),
                SetupStep::new("market", "Business & Market"),
                SetupStep::new("preferences", "Preferences"),
                SetupStep::new("core-confirm", "Review"),
                SetupStep::new("survey", "Intelligence Survey"),
            ],
            agents: vec![
                SetupStep::new("ai-team-intro", "Meet Your Team"),
                SetupStep::new("integrations", "Connect Services"),
                SetupStep::new("customization", "Customize"),
                SetupStep::new("test", "Test Mode"),
            ],
            callcenter: vec![
                SetupStep::new("phone", "Phone Number"),
                SetupStep::new("voice", "Voice Selection"),
                SetupStep::new("identity", "Caller Identity"),
                SetupStep::new("workspace", "Google Workspace"),
                SetupStep::new("call-confirm", "Launch"),
            ],
        }
    }
}
