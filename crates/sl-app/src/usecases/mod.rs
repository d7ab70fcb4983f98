//! Access-control use cases.
//!
//! Each use case owns the ports it needs and is built per screen mount (or
//! once per launch for the cold-start resolver).

pub mod cold_start;
pub mod onboarding;
pub mod paywall;
pub mod route_guard;

pub use cold_start::ResolveColdStart;
pub use onboarding::CompleteOnboarding;
pub use paywall::{PaywallController, PaywallControllerDeps};
pub use route_guard::{GuardOutcome, RouteGuard};
