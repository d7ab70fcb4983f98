//! Typed accessors over the persisted flag store.
//!
//! Read failures never escape: a flag that cannot be read counts as unset,
//! which biases every decision toward the onboarding-first flow.

use std::sync::Arc;

use tracing::warn;

use sl_core::flags::{self, FlagKey, FLAG_TRUE};
use sl_core::ports::FlagStorePort;

pub struct GateFlags {
    store: Arc<dyn FlagStorePort>,
}

impl GateFlags {
    pub fn new(store: Arc<dyn FlagStorePort>) -> Self {
        Self { store }
    }

    pub async fn onboarding_completed(&self) -> bool {
        self.read(FlagKey::OnboardingCompleted).await
    }

    pub async fn just_subscribed(&self) -> bool {
        self.read(FlagKey::JustSubscribed).await
    }

    /// Persist the onboarding marker. Never cleared.
    pub async fn mark_onboarding_completed(&self) -> anyhow::Result<()> {
        self.write(FlagKey::OnboardingCompleted).await
    }

    pub async fn mark_just_subscribed(&self) -> anyhow::Result<()> {
        self.write(FlagKey::JustSubscribed).await
    }

    async fn read(&self, key: FlagKey) -> bool {
        match self.store.read_flag(key.as_str()).await {
            Ok(value) => flags::is_set(value.as_deref()),
            Err(err) => {
                warn!(key = %key, error = %err, "flag read failed, treating as unset");
                false
            }
        }
    }

    async fn write(&self, key: FlagKey) -> anyhow::Result<()> {
        self.store.write_flag(key.as_str(), FLAG_TRUE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        FlagStore {}

        #[async_trait]
        impl FlagStorePort for FlagStore {
            async fn read_flag(&self, key: &str) -> anyhow::Result<Option<String>>;
            async fn write_flag(&self, key: &str, value: &str) -> anyhow::Result<()>;
            async fn remove_flag(&self, key: &str) -> anyhow::Result<()>;
        }
    }

    #[tokio::test]
    async fn read_failure_counts_as_unset() {
        let mut store = MockFlagStore::new();
        store
            .expect_read_flag()
            .returning(|_| Err(anyhow::anyhow!("disk unavailable")));
        let flags = GateFlags::new(Arc::new(store));

        assert!(!flags.onboarding_completed().await);
        assert!(!flags.just_subscribed().await);
    }

    #[tokio::test]
    async fn reads_use_fixed_keys() {
        let mut store = MockFlagStore::new();
        store
            .expect_read_flag()
            .with(eq("strikelab_onboarding_completed"))
            .returning(|_| Ok(Some("true".to_string())));
        store
            .expect_read_flag()
            .with(eq("strikelab_just_subscribed"))
            .returning(|_| Ok(Some("false".to_string())));
        let flags = GateFlags::new(Arc::new(store));

        assert!(flags.onboarding_completed().await);
        assert!(!flags.just_subscribed().await);
    }

    #[tokio::test]
    async fn marks_write_literal_true_and_never_remove() {
        let mut store = MockFlagStore::new();
        store
            .expect_write_flag()
            .with(eq("strikelab_onboarding_completed"), eq("true"))
            .times(1)
            .returning(|_, _| Ok(()));
        store
            .expect_write_flag()
            .with(eq("strikelab_just_subscribed"), eq("true"))
            .times(1)
            .returning(|_, _| Ok(()));
        store.expect_remove_flag().never();
        let flags = GateFlags::new(Arc::new(store));

        flags.mark_onboarding_completed().await.unwrap();
        flags.mark_just_subscribed().await.unwrap();
    }
}
