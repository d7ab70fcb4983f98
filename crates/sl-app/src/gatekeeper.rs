//! Entry point that hands out wired use cases.

use std::sync::Arc;

use sl_core::routing::RouteParams;

use crate::deps::GatekeeperDeps;
use crate::flags::GateFlags;
use crate::usecases::{
    CompleteOnboarding, PaywallController, PaywallControllerDeps, ResolveColdStart, RouteGuard,
};

/// Owns the ports and builds use cases on demand.
///
/// Use cases hold no state across mounts, so a fresh one is returned on every
/// call.
pub struct Gatekeeper {
    deps: GatekeeperDeps,
    flags: Arc<GateFlags>,
    feature_id: String,
}

impl Gatekeeper {
    pub fn from_deps(deps: GatekeeperDeps, feature_id: impl Into<String>) -> Self {
        let flags = Arc::new(GateFlags::new(deps.flag_store.clone()));
        Self {
            deps,
            flags,
            feature_id: feature_id.into(),
        }
    }

    pub fn cold_start(&self) -> ResolveColdStart {
        ResolveColdStart::new(
            self.deps.session.clone(),
            self.deps.subscription.clone(),
            self.flags.clone(),
            self.deps.navigator.clone(),
        )
    }

    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(
            self.deps.session.clone(),
            self.deps.subscription.clone(),
            self.flags.clone(),
            self.deps.navigator.clone(),
        )
    }

    /// Build the controller for a fresh paywall mount.
    pub fn mount_paywall(&self, params: RouteParams) -> PaywallController {
        PaywallController::mount(
            PaywallControllerDeps {
                subscription: self.deps.subscription.clone(),
                presenter: self.deps.presenter.clone(),
                flags: self.flags.clone(),
                navigator: self.deps.navigator.clone(),
            },
            params,
            self.feature_id.clone(),
        )
    }

    pub fn complete_onboarding(&self) -> CompleteOnboarding {
        CompleteOnboarding::new(self.flags.clone(), self.deps.navigator.clone())
    }

    pub fn flags(&self) -> Arc<GateFlags> {
        self.flags.clone()
    }

    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }
}
