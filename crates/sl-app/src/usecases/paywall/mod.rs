//! Paywall use cases.
//!
//! This module exposes the per-mount paywall controller.

mod context;
pub mod controller;

pub use controller::{PaywallController, PaywallControllerDeps};
