//! Dependency wiring for the headless shell.
//!
//! Builds concrete infra adapters from `GatekeeperConfig` and hands them to
//! the gatekeeper as port trait objects.

use std::sync::Arc;

use sl_app::{Gatekeeper, GatekeeperDeps};
use sl_core::config::GatekeeperConfig;
use sl_core::paywall::PaywallOutcome;
use sl_infra::{
    FileFlagStore, InMemoryNavigator, ScriptedPaywallPresenter, WatchSessionStore,
    WatchSubscriptionStore,
};
use tracing::{info, warn};

/// Wired gatekeeper plus the concrete adapters the shell drives directly.
pub struct Wired {
    pub gatekeeper: Gatekeeper,
    pub session: Arc<WatchSessionStore>,
    pub subscription: Arc<WatchSubscriptionStore>,
    pub navigator: Arc<InMemoryNavigator>,
}

/// Wire the gatekeeper. Both stores start out loading; the caller publishes
/// the simulated state once the observers are running.
pub fn wire_gatekeeper(config: &GatekeeperConfig) -> Wired {
    let session = Arc::new(WatchSessionStore::default());
    let subscription = Arc::new(WatchSubscriptionStore::default());
    let navigator = Arc::new(InMemoryNavigator::at_root());
    let flag_store = Arc::new(FileFlagStore::new(config.flag_store_path.clone()));
    let presenter = Arc::new(build_presenter(
        &config.simulation.purchase_outcome,
        subscription.clone(),
    ));

    info!(
        flag_store = %config.flag_store_path.display(),
        feature_id = %config.paywall_feature_id,
        "gatekeeper wired"
    );

    let gatekeeper = Gatekeeper::from_deps(
        GatekeeperDeps {
            session: session.clone(),
            subscription: subscription.clone(),
            presenter,
            flag_store,
            navigator: navigator.clone(),
        },
        config.paywall_feature_id.clone(),
    );

    Wired {
        gatekeeper,
        session,
        subscription,
        navigator,
    }
}

fn build_presenter(
    outcome: &str,
    subscription: Arc<WatchSubscriptionStore>,
) -> ScriptedPaywallPresenter {
    match outcome.trim().to_ascii_lowercase().as_str() {
        "purchased" => ScriptedPaywallPresenter::new(PaywallOutcome::Purchased).granting(subscription),
        "error" => ScriptedPaywallPresenter::new(PaywallOutcome::Error),
        "failed" => ScriptedPaywallPresenter::failing("purchase UI unavailable"),
        "" | "cancelled" => ScriptedPaywallPresenter::new(PaywallOutcome::Cancelled),
        other => {
            warn!(outcome = other, "unknown simulated purchase outcome, using cancelled");
            ScriptedPaywallPresenter::new(PaywallOutcome::Cancelled)
        }
    }
}
