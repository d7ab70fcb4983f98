//! StrikeLab Access Orchestration Layer
//!
//! This crate contains the gatekeeping use cases: cold-start routing, the
//! authenticated-group guard, the paywall controller and onboarding
//! completion.

pub mod deps;
pub mod error;
pub mod flags;
pub mod gatekeeper;
pub mod usecases;

pub use deps::GatekeeperDeps;
pub use error::GateError;
pub use flags::GateFlags;
pub use gatekeeper::Gatekeeper;
pub use usecases::{
    CompleteOnboarding, GuardOutcome, PaywallController, PaywallControllerDeps, ResolveColdStart,
    RouteGuard,
};
