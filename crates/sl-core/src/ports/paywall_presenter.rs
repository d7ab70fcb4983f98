use async_trait::async_trait;

use crate::paywall::PaywallOutcome;

/// External purchase UI.
///
/// `present` may suspend for as long as the user keeps the sheet open. An
/// `Err` means the sheet could not be shown at all.
#[async_trait]
pub trait PaywallPresenterPort: Send + Sync {
    async fn present(&self, feature_id: &str) -> anyhow::Result<PaywallOutcome>;
}
