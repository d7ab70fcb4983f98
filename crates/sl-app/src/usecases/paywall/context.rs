use std::sync::Arc;

use tokio::sync::Mutex;
use sl_core::paywall::PaywallState;

/// Per-mount paywall context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: Held for a whole dispatch, including a pending
///   purchase-UI presentation. Store updates queue behind it.
/// - `state`: Short-lived; readable while a dispatch is in flight so the
///   screen can render the "processing" label.
pub struct PaywallContext {
    state: Mutex<PaywallState>,
    dispatch_lock: Mutex<()>,
}

impl PaywallContext {
    pub fn new(initial_state: PaywallState) -> Self {
        Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Lightweight read; does NOT acquire `dispatch_lock`.
    pub async fn get_state(&self) -> PaywallState {
        self.state.lock().await.clone()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Should only be called while holding `dispatch_lock`.
    pub async fn set_state(&self, state: PaywallState) {
        *self.state.lock().await = state;
    }
}

impl Default for PaywallContext {
    fn default() -> Self {
        Self::new(PaywallState::initial())
    }
}
