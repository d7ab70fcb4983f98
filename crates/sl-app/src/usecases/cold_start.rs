//! Use case for resolving the initial route on cold start.

use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use sl_core::gate::cold_start;
use sl_core::ports::{NavigatorPort, SessionPort, SubscriptionPort};
use sl_core::routing::Destination;

use crate::error::GateError;
use crate::flags::GateFlags;

/// Runs once when the app has no established route.
///
/// ## Behavior
/// - Waits while either store is loading
/// - Issues exactly one replace command once a destination is known
/// - A flag read failure sends the user to onboarding
pub struct ResolveColdStart {
    session: Arc<dyn SessionPort>,
    subscription: Arc<dyn SubscriptionPort>,
    flags: Arc<GateFlags>,
    navigator: Arc<dyn NavigatorPort>,
}

impl ResolveColdStart {
    pub fn new(
        session: Arc<dyn SessionPort>,
        subscription: Arc<dyn SubscriptionPort>,
        flags: Arc<GateFlags>,
        navigator: Arc<dyn NavigatorPort>,
    ) -> Self {
        Self {
            session,
            subscription,
            flags,
            navigator,
        }
    }

    /// Evaluate once against the current snapshots.
    ///
    /// Returns the destination navigated to, or `None` while loading.
    pub async fn execute(&self) -> Option<Destination> {
        let span = info_span!("usecase.cold_start.execute");

        async {
            let auth = self.session.snapshot();
            let subscription = self.subscription.snapshot();
            if auth.loading || subscription.loading {
                debug!(?auth, ?subscription, "cold start waiting for stores");
                return None;
            }

            let onboarding_completed = self.flags.onboarding_completed().await;
            let destination = cold_start::resolve(auth, subscription, onboarding_completed)?;

            info!(
                href = %destination.href(),
                has_session = auth.has_session,
                is_subscribed = subscription.is_subscribed,
                onboarding_completed,
                "cold start resolved"
            );
            self.navigator.replace(&destination);
            Some(destination)
        }
        .instrument(span)
        .await
    }

    /// Re-evaluate on every store change until a destination is reached.
    pub async fn run_until_resolved(&self) -> Result<Destination, GateError> {
        let mut auth_rx = self.session.subscribe();
        let mut subscription_rx = self.subscription.subscribe();

        loop {
            auth_rx.borrow_and_update();
            subscription_rx.borrow_and_update();

            if let Some(destination) = self.execute().await {
                return Ok(destination);
            }

            tokio::select! {
                changed = auth_rx.changed() => {
                    changed.map_err(|_| GateError::SessionStoreClosed)?;
                }
                changed = subscription_rx.changed() => {
                    changed.map_err(|_| GateError::SubscriptionStoreClosed)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::ports::FlagStorePort;
    use sl_core::routing::{Route, Segment};
    use sl_core::snapshot::{AuthSnapshot, SubscriptionSnapshot};
    use sl_infra::{InMemoryFlagStore, InMemoryNavigator, WatchSessionStore, WatchSubscriptionStore};

    struct Fixture {
        session: Arc<WatchSessionStore>,
        subscription: Arc<WatchSubscriptionStore>,
        flag_store: Arc<InMemoryFlagStore>,
        navigator: Arc<InMemoryNavigator>,
        use_case: ResolveColdStart,
    }

    fn fixture(
        auth: AuthSnapshot,
        subscription: SubscriptionSnapshot,
        flag_store: InMemoryFlagStore,
    ) -> Fixture {
        let session = Arc::new(WatchSessionStore::new(auth));
        let subscription = Arc::new(WatchSubscriptionStore::new(subscription));
        let flag_store = Arc::new(flag_store);
        let navigator = Arc::new(InMemoryNavigator::at_root());
        let use_case = ResolveColdStart::new(
            session.clone(),
            subscription.clone(),
            Arc::new(GateFlags::new(flag_store.clone())),
            navigator.clone(),
        );
        Fixture {
            session,
            subscription,
            flag_store,
            navigator,
            use_case,
        }
    }

    fn onboarded() -> InMemoryFlagStore {
        InMemoryFlagStore::with_flags([("strikelab_onboarding_completed", "true")])
    }

    #[tokio::test]
    async fn loading_issues_no_navigation() {
        let f = fixture(
            AuthSnapshot::loading(),
            SubscriptionSnapshot::unsubscribed(),
            onboarded(),
        );

        assert_eq!(f.use_case.execute().await, None);
        assert_eq!(f.navigator.replace_count(), 0);
    }

    #[tokio::test]
    async fn fresh_install_goes_to_onboarding() {
        let f = fixture(
            AuthSnapshot::signed_out(),
            SubscriptionSnapshot::unsubscribed(),
            InMemoryFlagStore::new(),
        );

        let dest = f.use_case.execute().await;

        assert_eq!(dest, Some(Destination::onboarding()));
        assert_eq!(f.navigator.current_segment(), Segment::Onboarding);
    }

    #[tokio::test]
    async fn onboarded_device_without_session_goes_to_login() {
        let f = fixture(
            AuthSnapshot::signed_out(),
            SubscriptionSnapshot::unsubscribed(),
            onboarded(),
        );

        assert_eq!(f.use_case.execute().await, Some(Destination::login()));
    }

    #[tokio::test]
    async fn signed_in_unsubscribed_goes_to_paywall_from_onboarding() {
        let f = fixture(
            AuthSnapshot::signed_in(),
            SubscriptionSnapshot::unsubscribed(),
            onboarded(),
        );

        let dest = f.use_case.execute().await.expect("destination");

        assert_eq!(dest.route, Route::Paywall);
        assert_eq!(dest.href(), "/(auth)/paywall?fromOnboarding=true");
    }

    #[tokio::test]
    async fn flag_read_failure_falls_back_to_onboarding() {
        let store = onboarded();
        store.fail_reads(true);
        let f = fixture(
            AuthSnapshot::signed_out(),
            SubscriptionSnapshot::unsubscribed(),
            store,
        );

        assert_eq!(f.use_case.execute().await, Some(Destination::onboarding()));
    }

    #[tokio::test]
    async fn cold_start_never_writes_flags() {
        let f = fixture(
            AuthSnapshot::signed_in(),
            SubscriptionSnapshot::subscribed(),
            onboarded(),
        );

        f.use_case.execute().await;

        assert_eq!(f.flag_store.write_count(), 0);
        assert_eq!(f.flag_store.remove_count(), 0);
        assert_eq!(
            f.flag_store
                .read_flag("strikelab_onboarding_completed")
                .await
                .unwrap()
                .as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn run_until_resolved_waits_for_both_stores() {
        let f = fixture(
            AuthSnapshot::loading(),
            SubscriptionSnapshot::loading(),
            onboarded(),
        );
        let Fixture {
            session,
            subscription,
            navigator,
            use_case,
            ..
        } = f;

        let task = tokio::spawn(async move { use_case.run_until_resolved().await });

        session.sign_in();
        tokio::task::yield_now().await;
        assert_eq!(navigator.replace_count(), 0);

        subscription.set_subscribed(true);
        let dest = task.await.unwrap().unwrap();

        assert_eq!(dest, Destination::home());
        assert_eq!(navigator.history(), vec![Destination::home()]);
    }
}
