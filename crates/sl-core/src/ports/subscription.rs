//! Subscription / entitlement port

use tokio::sync::watch;

use crate::snapshot::SubscriptionSnapshot;

pub trait SubscriptionPort: Send + Sync {
    /// Current snapshot.
    fn snapshot(&self) -> SubscriptionSnapshot;

    /// Receiver notified after purchase, restore, or re-entitlement checks.
    fn subscribe(&self) -> watch::Receiver<SubscriptionSnapshot>;
}
