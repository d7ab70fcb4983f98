//! Route guard decision table for the authenticated screen group.
//!
//! The guard never sends a signed-in but unsubscribed user to the paywall.
//! Only the cold-start resolver (or an explicit in-app action) does that, so a
//! user who dismissed the paywall is not pushed back into it on every render.

use crate::routing::{Destination, Segment};
use crate::snapshot::{AuthSnapshot, SubscriptionSnapshot};

/// Inputs for one guard pass, read from a single consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardInput {
    pub auth: AuthSnapshot,
    pub subscription: SubscriptionSnapshot,
    pub segment: Segment,
    pub just_subscribed: bool,
}

/// Outcome of the synchronous part of a guard pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// A store is still loading.
    Wait,
    /// Current segment is acceptable.
    Allow,
    /// Move to this destination.
    Redirect(Destination),
    /// Unauthenticated user on a foreign segment; the onboarding flag decides
    /// between login and onboarding (see [`unauthenticated_destination`]).
    NeedsOnboardingFlag,
}

pub fn decide(input: &GuardInput) -> GuardDecision {
    if input.auth.loading || input.subscription.loading {
        return GuardDecision::Wait;
    }
    // The paywall controller owns this segment exclusively.
    if input.segment.is_paywall() {
        return GuardDecision::Allow;
    }
    if input.auth.has_session && input.subscription.is_subscribed {
        return GuardDecision::Redirect(Destination::home());
    }
    if input.just_subscribed && !input.segment.is_login() {
        return GuardDecision::Redirect(Destination::login());
    }
    if input.segment.is_onboarding() || input.segment.is_login() {
        return GuardDecision::Allow;
    }
    GuardDecision::NeedsOnboardingFlag
}

pub fn unauthenticated_destination(onboarding_completed: bool) -> Destination {
    if onboarding_completed {
        Destination::login()
    } else {
        Destination::onboarding()
    }
}
