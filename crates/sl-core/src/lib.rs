//! # sl-core
//!
//! Core domain models and access-gate logic for StrikeLab.
//!
//! This crate contains pure decision logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod flags;
pub mod gate;
pub mod paywall;
pub mod ports;
pub mod routing;
pub mod snapshot;

// Re-export commonly used types at the crate root
pub use config::GatekeeperConfig;
pub use flags::FlagKey;
pub use paywall::{PaywallOutcome, PaywallState};
pub use routing::{Destination, Route, RouteParams, Segment};
pub use snapshot::{AuthSnapshot, SubscriptionSnapshot};
