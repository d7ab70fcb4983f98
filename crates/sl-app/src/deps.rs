//! # Gatekeeper Dependencies
//!
//! Groups the ports the gatekeeper needs. This is NOT a Builder pattern:
//! every field is required and there is no hidden logic.

use std::sync::Arc;

use sl_core::ports::*;

/// Gatekeeper dependency grouping (non-Builder, just parameter grouping).
pub struct GatekeeperDeps {
    // Store dependencies
    pub session: Arc<dyn SessionPort>,
    pub subscription: Arc<dyn SubscriptionPort>,

    // Purchase dependencies
    pub presenter: Arc<dyn PaywallPresenterPort>,

    // Persistence dependencies
    pub flag_store: Arc<dyn FlagStorePort>,

    // Routing dependencies
    pub navigator: Arc<dyn NavigatorPort>,
}
