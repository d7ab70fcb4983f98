//! Navigation primitive port

use tokio::sync::watch;

use crate::routing::{Destination, Segment};

pub trait NavigatorPort: Send + Sync {
    /// Replace the current route. Fire-and-forget; replacing with the
    /// current destination again is harmless.
    ///
    /// Must update [`NavigatorPort::current_segment`] before returning.
    fn replace(&self, destination: &Destination);

    /// Segment currently active in the authenticated screen group.
    fn current_segment(&self) -> Segment;

    /// Receiver notified whenever the active segment changes.
    fn subscribe_segment(&self) -> watch::Receiver<Segment>;
}
