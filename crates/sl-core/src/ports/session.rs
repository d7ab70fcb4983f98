//! Authentication session port
//!
//! The session provider is external. The gate only needs to know whether a
//! session exists and whether the provider is still restoring it.

use tokio::sync::watch;

use crate::snapshot::AuthSnapshot;

pub trait SessionPort: Send + Sync {
    /// Current snapshot.
    fn snapshot(&self) -> AuthSnapshot;

    /// Receiver notified on sign-in, sign-out, and token refresh.
    fn subscribe(&self) -> watch::Receiver<AuthSnapshot>;
}
