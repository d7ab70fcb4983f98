//! Cold-start decision table.
//!
//! Evaluated top to bottom, first match wins. `None` means at least one store
//! is still loading and the caller should wait for the next change.

use crate::routing::Destination;
use crate::snapshot::{AuthSnapshot, SubscriptionSnapshot};

pub fn resolve(
    auth: AuthSnapshot,
    subscription: SubscriptionSnapshot,
    onboarding_completed: bool,
) -> Option<Destination> {
    if auth.loading || subscription.loading {
        return None;
    }
    if auth.has_session && subscription.is_subscribed {
        return Some(Destination::home());
    }
    if !onboarding_completed {
        return Some(Destination::onboarding());
    }
    if !auth.has_session {
        return Some(Destination::login());
    }
    // Signed in, not subscribed. The paywall only auto-presents when it sees
    // `fromOnboarding`, so the resolver always sets it here.
    Some(Destination::paywall_from_onboarding())
}
