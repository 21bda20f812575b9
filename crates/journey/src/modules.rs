//! Active module derivation from entitlements.

use pulse_core::{ModuleKey, UserSnapshot};

/// Modules reachable under a user's plan, in journey order.
///
/// `Core` is always first. `Agents` is appended for paid tiers, and
/// `CallCenter` only on top of `Agents` when the add-on is on the account.
/// Unknown tiers count as not paid, so a malformed tier string degrades to
/// the core-only journey instead of failing.
pub fn active_modules(user: &UserSnapshot) -> Vec<ModuleKey> {
    let mut modules = vec![ModuleKey::Core];

    if user.subscription_tier.is_paid() {
        modules.push(ModuleKey::Agents);

        if user.has_call_center_addon {
            modules.push(ModuleKey::CallCenter);
        }
    }

    modules
}
