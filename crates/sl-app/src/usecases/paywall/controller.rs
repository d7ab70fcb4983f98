//! Paywall controller.
//!
//! This module coordinates the paywall state machine and its side effects for
//! a single screen mount. Build a new controller every time the paywall
//! screen mounts.

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use sl_core::paywall::{
    PaywallAction, PaywallButtonLabel, PaywallEvent, PaywallState, PaywallStateMachine,
};
use sl_core::ports::{NavigatorPort, PaywallPresenterPort, SubscriptionPort};
use sl_core::routing::{Destination, RouteParams};

use crate::error::GateError;
use crate::flags::GateFlags;
use crate::usecases::paywall::context::PaywallContext;

/// Helper for constructing the controller with explicit dependency fields.
pub struct PaywallControllerDeps {
    pub subscription: Arc<dyn SubscriptionPort>,
    pub presenter: Arc<dyn PaywallPresenterPort>,
    pub flags: Arc<GateFlags>,
    pub navigator: Arc<dyn NavigatorPort>,
}

/// Controller that drives one paywall mount.
pub struct PaywallController {
    context: Arc<PaywallContext>,
    params: RouteParams,
    feature_id: String,

    subscription: Arc<dyn SubscriptionPort>,
    presenter: Arc<dyn PaywallPresenterPort>,
    flags: Arc<GateFlags>,
    navigator: Arc<dyn NavigatorPort>,
}

impl PaywallController {
    pub fn mount(
        deps: PaywallControllerDeps,
        params: RouteParams,
        feature_id: impl Into<String>,
    ) -> Self {
        let PaywallControllerDeps {
            subscription,
            presenter,
            flags,
            navigator,
        } = deps;

        Self {
            context: PaywallContext::default().arc(),
            params,
            feature_id: feature_id.into(),
            subscription,
            presenter,
            flags,
            navigator,
        }
    }

    /// Re-evaluate against the latest subscription snapshot. Call on mount and
    /// on every store change.
    pub async fn on_store_changed(&self) -> PaywallState {
        let event = PaywallEvent::StoreChanged {
            subscription: self.subscription.snapshot(),
            from_onboarding: self.params.from_onboarding,
        };
        self.dispatch(event).await
    }

    /// Manual "Continue to Login". Sets the bridge flag even without a
    /// confirmed purchase.
    pub async fn continue_to_login(&self) -> PaywallState {
        self.dispatch(PaywallEvent::ContinuePressed).await
    }

    pub async fn state(&self) -> PaywallState {
        self.context.get_state().await
    }

    pub async fn button_label(&self) -> PaywallButtonLabel {
        self.context.get_state().await.button_label()
    }

    /// Drive the mount from subscription changes until the screen resolves.
    pub async fn run(&self) -> Result<PaywallState, GateError> {
        let mut subscription_rx = self.subscription.subscribe();

        loop {
            subscription_rx.borrow_and_update();

            let state = self.on_store_changed().await;
            if state.is_resolved() {
                return Ok(state);
            }

            subscription_rx
                .changed()
                .await
                .map_err(|_| GateError::SubscriptionStoreClosed)?;
        }
    }

    async fn dispatch(&self, event: PaywallEvent) -> PaywallState {
        // Serializes dispatches; updates that arrive while the purchase UI is
        // up wait here until it settles.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!(
            "usecase.paywall_controller.dispatch",
            event = ?event,
            from_onboarding = self.params.from_onboarding
        );
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let event_name = format!("{:?}", event);
                let (next, actions) = PaywallStateMachine::transition(current, event);
                if from != next {
                    info!(from = ?from, to = ?next, event = %event_name, "paywall state transition");
                }
                // Published before running actions so the label reads
                // "processing" for the whole presentation.
                self.context.set_state(next.clone()).await;
                current = next;
                pending_events.extend(self.execute_actions(actions).await);
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<PaywallAction>) -> Vec<PaywallEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "paywall executing action");
            match action {
                PaywallAction::PresentPurchaseUi => {
                    follow_up_events.push(self.present_purchase_ui().await);
                }
                PaywallAction::MarkJustSubscribed => {
                    if let Err(err) = self.flags.mark_just_subscribed().await {
                        warn!(error = %err, "failed to persist just-subscribed flag");
                    }
                }
                PaywallAction::Navigate(destination) => {
                    self.navigate(&destination);
                }
            }
        }
        follow_up_events
    }

    async fn present_purchase_ui(&self) -> PaywallEvent {
        match self.presenter.present(&self.feature_id).await {
            Ok(outcome) => {
                // Entitlement may land after the sheet closes; re-read both
                // sources instead of trusting the outcome alone.
                let is_subscribed = self.subscription.snapshot().is_subscribed;
                let just_subscribed = !is_subscribed && self.flags.just_subscribed().await;
                info!(
                    ?outcome,
                    is_subscribed,
                    just_subscribed,
                    "purchase UI settled"
                );
                PaywallEvent::PresentationSettled {
                    outcome,
                    is_subscribed,
                    just_subscribed,
                }
            }
            Err(err) => {
                warn!(
                    error = %err,
                    feature_id = %self.feature_id,
                    "purchase UI presentation failed"
                );
                PaywallEvent::PresentationFailed
            }
        }
    }

    fn navigate(&self, destination: &Destination) {
        info!(href = %destination.href(), "paywall navigating");
        self.navigator.replace(destination);
    }
}
