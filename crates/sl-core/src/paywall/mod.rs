//! Paywall domain module.
//!
//! This module defines the paywall screen state machine types.

pub mod state_machine;

pub use state_machine::{
    PaywallAction, PaywallButtonLabel, PaywallEvent, PaywallOutcome, PaywallState,
    PaywallStateMachine,
};
