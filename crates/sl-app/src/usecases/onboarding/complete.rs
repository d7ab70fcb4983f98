use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use sl_core::ports::NavigatorPort;
use sl_core::routing::Destination;

use crate::flags::GateFlags;

/// Use case for completing onboarding.
///
/// Persists the onboarding marker, then replaces the route with the paywall
/// flagged as coming from onboarding.
pub struct CompleteOnboarding {
    flags: Arc<GateFlags>,
    navigator: Arc<dyn NavigatorPort>,
}

impl CompleteOnboarding {
    pub fn new(flags: Arc<GateFlags>, navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { flags, navigator }
    }

    /// Mark onboarding as complete and move on to the paywall.
    ///
    /// A failed write is logged; the user still reaches the paywall.
    pub async fn execute(&self) -> Destination {
        let span = info_span!("usecase.complete_onboarding.execute");

        async {
            if let Err(err) = self.flags.mark_onboarding_completed().await {
                warn!(error = %err, "failed to persist onboarding flag");
            }

            let destination = Destination::paywall_from_onboarding();
            info!(href = %destination.href(), "onboarding completed");
            self.navigator.replace(&destination);
            destination
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::ports::FlagStorePort;
    use sl_core::routing::Segment;
    use sl_infra::{InMemoryFlagStore, InMemoryNavigator};

    mockall::mock! {
        FlagStore {}

        #[async_trait::async_trait]
        impl FlagStorePort for FlagStore {
            async fn read_flag(&self, key: &str) -> anyhow::Result<Option<String>>;
            async fn write_flag(&self, key: &str, value: &str) -> anyhow::Result<()>;
            async fn remove_flag(&self, key: &str) -> anyhow::Result<()>;
        }
    }

    fn use_case(store: Arc<InMemoryFlagStore>, navigator: Arc<InMemoryNavigator>) -> CompleteOnboarding {
        CompleteOnboarding::new(Arc::new(GateFlags::new(store)), navigator)
    }

    #[tokio::test]
    async fn test_execute_marks_flag_and_opens_paywall() {
        let store = Arc::new(InMemoryFlagStore::new());
        let navigator = Arc::new(InMemoryNavigator::new(Segment::Onboarding));

        let dest = use_case(store.clone(), navigator.clone()).execute().await;

        assert_eq!(dest, Destination::paywall_from_onboarding());
        assert_eq!(
            store.get("strikelab_onboarding_completed").as_deref(),
            Some("true")
        );
        assert_eq!(navigator.history(), vec![Destination::paywall_from_onboarding()]);
        assert_eq!(navigator.current_segment(), Segment::Paywall);
    }

    #[tokio::test]
    async fn test_execute_when_already_completed() {
        let store = Arc::new(InMemoryFlagStore::with_flags([(
            "strikelab_onboarding_completed",
            "true",
        )]));
        let navigator = Arc::new(InMemoryNavigator::new(Segment::Onboarding));
        let use_case = use_case(store.clone(), navigator);

        use_case.execute().await;
        use_case.execute().await;

        assert_eq!(
            store
                .read_flag("strikelab_onboarding_completed")
                .await
                .unwrap()
                .as_deref(),
            Some("true")
        );
        assert_eq!(store.remove_count(), 0);
    }

    #[tokio::test]
    async fn test_execute_navigates_even_when_write_fails() {
        let mut mock = MockFlagStore::new();
        mock.expect_write_flag()
            .returning(|_, _| Err(anyhow::anyhow!("read-only filesystem")));
        let navigator = Arc::new(InMemoryNavigator::new(Segment::Onboarding));
        let use_case = CompleteOnboarding::new(
            Arc::new(GateFlags::new(Arc::new(mock))),
            navigator.clone(),
        );

        assert_eq!(use_case.execute().await, Destination::paywall_from_onboarding());
        assert_eq!(navigator.replace_count(), 1);
    }
}
