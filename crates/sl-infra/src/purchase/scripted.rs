//! Scripted purchase UI.
//!
//! Stands in for the store SDK's paywall sheet in headless runs and tests.
//! The presenter reports a fixed outcome and can optionally grant the
//! entitlement on purchase, hold the sheet open until released, or fail.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;
use tracing::info;

use sl_core::paywall::PaywallOutcome;
use sl_core::ports::PaywallPresenterPort;

use crate::stores::WatchSubscriptionStore;

pub struct ScriptedPaywallPresenter {
    outcome: Result<PaywallOutcome, String>,
    entitlement: Option<Arc<WatchSubscriptionStore>>,
    hold: Option<Arc<Notify>>,
    presentations: AtomicUsize,
}

impl ScriptedPaywallPresenter {
    pub fn new(outcome: PaywallOutcome) -> Self {
        Self {
            outcome: Ok(outcome),
            entitlement: None,
            hold: None,
            presentations: AtomicUsize::new(0),
        }
    }

    /// Presenter whose sheet cannot be shown.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            ..Self::new(PaywallOutcome::Cancelled)
        }
    }

    /// Flip `store` to subscribed when the outcome is `Purchased`.
    pub fn granting(mut self, store: Arc<WatchSubscriptionStore>) -> Self {
        self.entitlement = Some(store);
        self
    }

    /// Keep the sheet open until the returned handle is notified.
    pub fn held(mut self) -> (Self, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        self.hold = Some(release.clone());
        (self, release)
    }

    pub fn presentation_count(&self) -> usize {
        self.presentations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaywallPresenterPort for ScriptedPaywallPresenter {
    async fn present(&self, feature_id: &str) -> anyhow::Result<PaywallOutcome> {
        let count = self.presentations.fetch_add(1, Ordering::SeqCst) + 1;
        info!(feature_id, count, "presenting purchase sheet");

        if let Some(release) = &self.hold {
            release.notified().await;
        }

        let outcome = self.outcome.clone().map_err(|msg| anyhow::anyhow!(msg))?;
        if outcome == PaywallOutcome::Purchased {
            if let Some(store) = &self.entitlement {
                store.set_subscribed(true);
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::ports::SubscriptionPort;
    use sl_core::snapshot::SubscriptionSnapshot;

    #[tokio::test]
    async fn purchase_grants_entitlement() {
        let store = Arc::new(WatchSubscriptionStore::new(SubscriptionSnapshot::unsubscribed()));
        let presenter =
            ScriptedPaywallPresenter::new(PaywallOutcome::Purchased).granting(store.clone());

        let outcome = presenter.present("pro").await.unwrap();

        assert_eq!(outcome, PaywallOutcome::Purchased);
        assert!(store.snapshot().is_subscribed);
        assert_eq!(presenter.presentation_count(), 1);
    }

    #[tokio::test]
    async fn cancel_leaves_entitlement_untouched() {
        let store = Arc::new(WatchSubscriptionStore::new(SubscriptionSnapshot::unsubscribed()));
        let presenter =
            ScriptedPaywallPresenter::new(PaywallOutcome::Cancelled).granting(store.clone());

        presenter.present("pro").await.unwrap();

        assert!(!store.snapshot().is_subscribed);
    }

    #[tokio::test]
    async fn failing_presenter_returns_error() {
        let presenter = ScriptedPaywallPresenter::failing("sdk not configured");

        let err = presenter.present("pro").await.unwrap_err();

        assert!(err.to_string().contains("sdk not configured"));
    }
}
