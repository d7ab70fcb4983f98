//! Paywall state machine.
//!
//! Defines a pure state transition function for one paywall screen mount.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::routing::{Destination, Route};
use crate::snapshot::SubscriptionSnapshot;

/// Paywall screen state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaywallState {
    /// Waiting for store data, or showing the manual continue affordance.
    ///
    /// `presented` records whether this mount already auto-presented the
    /// purchase UI.
    Idle { presented: bool },
    /// Purchase UI is on screen.
    Presenting,
    /// Screen is about to be replaced by `route`.
    Resolved { route: Route },
}

impl PaywallState {
    pub fn initial() -> Self {
        PaywallState::Idle { presented: false }
    }

    pub fn button_label(&self) -> PaywallButtonLabel {
        match self {
            PaywallState::Presenting => PaywallButtonLabel::Processing,
            _ => PaywallButtonLabel::Default,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, PaywallState::Resolved { .. })
    }

}

impl Default for PaywallState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Label of the paywall's primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaywallButtonLabel {
    Default,
    Processing,
}

impl PaywallButtonLabel {
    pub fn text(&self) -> &'static str {
        match self {
            PaywallButtonLabel::Default => "Continue to Login",
            PaywallButtonLabel::Processing => "Processing...",
        }
    }
}

/// What the purchase UI reported when it closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaywallOutcome {
    Purchased,
    Cancelled,
    /// The purchase UI showed an error and closed normally.
    Error,
}

/// Events that drive the paywall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaywallEvent {
    /// Mount or store update.
    StoreChanged {
        subscription: SubscriptionSnapshot,
        from_onboarding: bool,
    },
    /// Purchase UI closed. Carries freshly re-read state.
    PresentationSettled {
        outcome: PaywallOutcome,
        is_subscribed: bool,
        just_subscribed: bool,
    },
    /// Presenting the purchase UI failed outright.
    PresentationFailed,
    /// User pressed "Continue to Login".
    ContinuePressed,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaywallAction {
    /// Present the external purchase UI.
    PresentPurchaseUi,
    /// Persist the just-subscribed bridge flag.
    MarkJustSubscribed,
    /// Replace the current route.
    Navigate(Destination),
}

/// Pure paywall state machine.
pub struct PaywallStateMachine;

impl PaywallStateMachine {
    pub fn transition(state: PaywallState, event: PaywallEvent) -> (PaywallState, Vec<PaywallAction>) {
        match (state, event) {
            (
                PaywallState::Idle { presented },
                PaywallEvent::StoreChanged {
                    subscription,
                    from_onboarding,
                },
            ) => {
                if subscription.is_subscribed {
                    return Self::hand_off_to_login(true);
                }
                if subscription.loading {
                    return (PaywallState::Idle { presented }, Vec::new());
                }
                if !from_onboarding {
                    return (
                        PaywallState::Resolved {
                            route: Route::Onboarding,
                        },
                        vec![PaywallAction::Navigate(Destination::onboarding())],
                    );
                }
                if presented {
                    return (PaywallState::Idle { presented }, Vec::new());
                }
                (
                    PaywallState::Presenting,
                    vec![PaywallAction::PresentPurchaseUi],
                )
            }
            (
                PaywallState::Presenting,
                PaywallEvent::PresentationSettled {
                    outcome,
                    is_subscribed,
                    just_subscribed,
                },
            ) => {
                if is_subscribed || outcome == PaywallOutcome::Purchased {
                    return Self::hand_off_to_login(true);
                }
                if just_subscribed {
                    return Self::hand_off_to_login(false);
                }
                (PaywallState::Idle { presented: true }, Vec::new())
            }
            (PaywallState::Presenting, PaywallEvent::PresentationFailed) => {
                (PaywallState::Idle { presented: true }, Vec::new())
            }
            (PaywallState::Idle { .. }, PaywallEvent::ContinuePressed) => {
                Self::hand_off_to_login(true)
            }
            (state, event) => {
                debug!(?state, ?event, "paywall event ignored");
                (state, Vec::new())
            }
        }
    }

    fn hand_off_to_login(mark: bool) -> (PaywallState, Vec<PaywallAction>) {
        let mut actions = Vec::with_capacity(2);
        if mark {
            actions.push(PaywallAction::MarkJustSubscribed);
        }
        actions.push(PaywallAction::Navigate(Destination::login()));
        (
            PaywallState::Resolved {
                route: Route::Login,
            },
            actions,
        )
    }
}
