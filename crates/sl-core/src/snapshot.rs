//! Point-in-time views of the two asynchronous stores.

use serde::{Deserialize, Serialize};

/// Authentication state as published by the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    pub has_session: bool,
    pub loading: bool,
}

impl AuthSnapshot {
    pub fn loading() -> Self {
        Self {
            has_session: false,
            loading: true,
        }
    }

    pub fn signed_in() -> Self {
        Self {
            has_session: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            has_session: false,
            loading: false,
        }
    }
}

impl Default for AuthSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

/// Entitlement state as published by the subscription store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSnapshot {
    pub is_subscribed: bool,
    pub loading: bool,
}

impl SubscriptionSnapshot {
    pub fn loading() -> Self {
        Self {
            is_subscribed: false,
            loading: true,
        }
    }

    pub fn subscribed() -> Self {
        Self {
            is_subscribed: true,
            loading: false,
        }
    }

    pub fn unsubscribed() -> Self {
        Self {
            is_subscribed: false,
            loading: false,
        }
    }
}

impl Default for SubscriptionSnapshot {
    fn default() -> Self {
        Self::loading()
    }
}
