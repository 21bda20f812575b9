//! User snapshot - plan tier and add-on entitlements.

use serde::{Deserialize, Serialize};

/// Subscription tier of a user account.
///
/// Tier strings come from an external account system; anything this crate
/// does not recognize deserializes to [`SubscriptionTier::Unknown`] and is
/// treated as not entitled rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionTier {
    /// Free plan
    Free,
    /// Paid subscriber plan
    Subscriber,
    /// Administrator account
    Admin,
    /// Unrecognized tier string
    #[serde(other)]
    Unknown,
}

impl SubscriptionTier {
    /// Whether this tier grants access to the paid modules.
    pub fn is_paid(&self) -> bool {
        matches!(self, SubscriptionTier::Subscriber | SubscriptionTier::Admin)
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "Free",
            SubscriptionTier::Subscriber => "Subscriber",
            SubscriptionTier::Admin => "Admin",
            SubscriptionTier::Unknown => "Unknown",
        }
    }
}

impl Default for SubscriptionTier {
    fn default() -> Self {
        SubscriptionTier::Free
    }
}

/// Read-only snapshot of a user's entitlements.
///
/// Lifecycle is owned by the external account system; the engines never
/// mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    /// Externally issued user identifier
    pub id: String,

    /// Plan tier
    #[serde(default)]
    pub subscription_tier: SubscriptionTier,

    /// Whether the call-center add-on is on the account
    #[serde(default)]
    pub has_call_center_addon: bool,
}
