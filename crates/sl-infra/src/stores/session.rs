use tokio::sync::watch;
use tracing::debug;

use sl_core::ports::SessionPort;
use sl_core::snapshot::AuthSnapshot;

pub struct WatchSessionStore {
    tx: watch::Sender<AuthSnapshot>,
}

impl WatchSessionStore {
    pub fn new(initial: AuthSnapshot) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Publish a new snapshot. Unchanged values do not wake subscribers.
    pub fn publish(&self, snapshot: AuthSnapshot) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == snapshot {
                return false;
            }
            *current = snapshot;
            true
        });
        if changed {
            debug!(?snapshot, "session snapshot published");
        }
    }

    pub fn sign_in(&self) {
        self.publish(AuthSnapshot::signed_in());
    }

    pub fn sign_out(&self) {
        self.publish(AuthSnapshot::signed_out());
    }
}

impl Default for WatchSessionStore {
    fn default() -> Self {
        Self::new(AuthSnapshot::loading())
    }
}

impl SessionPort for WatchSessionStore {
    fn snapshot(&self) -> AuthSnapshot {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.tx.subscribe()
    }
}
