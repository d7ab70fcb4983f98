//! Onboarding use cases
//!
//! This module contains the use case that finishes the intro slides and
//! hands the user to the paywall.

pub mod complete;

pub use complete::CompleteOnboarding;
