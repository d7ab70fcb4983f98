use tokio::sync::watch;
use tracing::debug;

use sl_core::ports::SubscriptionPort;
use sl_core::snapshot::SubscriptionSnapshot;

pub struct WatchSubscriptionStore {
    tx: watch::Sender<SubscriptionSnapshot>,
}

impl WatchSubscriptionStore {
    pub fn new(initial: SubscriptionSnapshot) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Publish a new snapshot. Unchanged values do not wake subscribers.
    pub fn publish(&self, snapshot: SubscriptionSnapshot) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        });
        if changed {
            debug!(?snapshot, "subscription snapshot published");
        }
    }

    pub fn set_subscribed(&self, is_subscribed: bool) {
        self.publish(SubscriptionSnapshot {
            is_subscribed,
            loading: false,
        });
    }
}

impl Default for WatchSubscriptionStore {
    fn default() -> Self {
        Self::new(SubscriptionSnapshot::loading())
    }
}

impl SubscriptionPort for WatchSubscriptionStore {
    fn snapshot(&self) -> SubscriptionSnapshot {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<SubscriptionSnapshot> {
        self.tx.subscribe()
    }
}
