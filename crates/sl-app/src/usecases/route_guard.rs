//! Use case guarding the authenticated screen group.

use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use sl_core::gate::route_guard::{self, GuardDecision, GuardInput};
use sl_core::ports::{NavigatorPort, SessionPort, SubscriptionPort};
use sl_core::routing::Destination;

use crate::error::GateError;
use crate::flags::GateFlags;

/// Result of one guard pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// A store is still loading; nothing was issued.
    Waiting,
    /// The current segment is acceptable (or already the target).
    Stayed,
    /// A replace command was issued.
    Redirected(Destination),
}

/// Re-derives the correct destination for the authenticated screen group.
///
/// Idempotent: once the user sits on the target segment, further passes with
/// unchanged inputs issue no commands.
pub struct RouteGuard {
    session: Arc<dyn SessionPort>,
    subscription: Arc<dyn SubscriptionPort>,
    flags: Arc<GateFlags>,
    navigator: Arc<dyn NavigatorPort>,
}

impl RouteGuard {
    pub fn new(
        session: Arc<dyn SessionPort>,
        subscription: Arc<dyn SubscriptionPort>,
        flags: Arc<GateFlags>,
        navigator: Arc<dyn NavigatorPort>,
    ) -> Self {
        Self {
            session,
            subscription,
            flags,
            navigator,
        }
    }

    pub async fn evaluate(&self) -> GuardOutcome {
        let auth = self.session.snapshot();
        let subscription = self.subscription.snapshot();
        let segment = self.navigator.current_segment();
        let span = info_span!("usecase.route_guard.evaluate", segment = %segment);

        async {
            if auth.loading || subscription.loading {
                debug!(?auth, ?subscription, "route guard waiting for stores");
                return GuardOutcome::Waiting;
            }

            let input = GuardInput {
                auth,
                subscription,
                just_subscribed: self.flags.just_subscribed().await,
                segment: segment.clone(),
            };

            let destination = match route_guard::decide(&input) {
                GuardDecision::Wait => return GuardOutcome::Waiting,
                GuardDecision::Allow => return GuardOutcome::Stayed,
                GuardDecision::Redirect(destination) => destination,
                GuardDecision::NeedsOnboardingFlag => route_guard::unauthenticated_destination(
                    self.flags.onboarding_completed().await,
                ),
            };

            if destination.route.segment() == segment {
                debug!(href = %destination.href(), "route guard already on target");
                return GuardOutcome::Stayed;
            }

            info!(
                from = %segment,
                href = %destination.href(),
                has_session = auth.has_session,
                is_subscribed = subscription.is_subscribed,
                just_subscribed = input.just_subscribed,
                "route guard redirect"
            );
            self.navigator.replace(&destination);
            GuardOutcome::Redirected(destination)
        }
        .instrument(span)
        .await
    }

    /// Re-evaluate whenever the session, subscription, or segment changes.
    ///
    /// Returns `Ok(())` once the router goes away (the group unmounted).
    pub async fn run(&self) -> Result<(), GateError> {
        let mut auth_rx = self.session.subscribe();
        let mut subscription_rx = self.subscription.subscribe();
        let mut segment_rx = self.navigator.subscribe_segment();

        loop {
            auth_rx.borrow_and_update();
            subscription_rx.borrow_and_update();
            segment_rx.borrow_and_update();

            self.evaluate().await;

            tokio::select! {
                changed = auth_rx.changed() => {
                    changed.map_err(|_| GateError::SessionStoreClosed)?;
                }
                changed = subscription_rx.changed() => {
                    changed.map_err(|_| GateError::SubscriptionStoreClosed)?;
                }
                changed = segment_rx.changed() => {
                    if changed.is_err() {
                        debug!("router closed, route guard stopping");
                        return Ok(());
                    }
                }
            }
        }
    }
}
