//! Account entity and its event kinds.

use beacon_events::EventKind;
use serde::{Deserialize, Serialize};

/// Plan level of a newly registered account.
pub const FREE_PLAN: u8 = 1;

/// Plan level after an upgrade.
pub const PREMIUM_PLAN: u8 = 2;

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Plan level, starting at [`FREE_PLAN`].
    pub plan: u8,
}

impl Account {
    /// Create an account on the free plan.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            plan: FREE_PLAN,
        }
    }

    /// Check if the account has been upgraded.
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.plan >= PREMIUM_PLAN
    }
}

/// Notification channels of the account workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountEvent {
    /// An account was registered.
    Register,
    /// An account moved to the premium plan.
    Upgrade,
}

impl EventKind for AccountEvent {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Upgrade => "upgrade",
        }
    }
}
