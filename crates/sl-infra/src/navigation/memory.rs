//! In-memory router.
//!
//! Records every replace command and keeps the active segment in a `watch`
//! channel so route guards can react to it.

use std::sync::Mutex;

use tokio::sync::watch;
use tracing::info;

use sl_core::ports::NavigatorPort;
use sl_core::routing::{Destination, Segment};

pub struct InMemoryNavigator {
    history: Mutex<Vec<Destination>>,
    segment: watch::Sender<Segment>,
}

impl InMemoryNavigator {
    pub fn new(initial: Segment) -> Self {
        let (segment, _rx) = watch::channel(initial);
        Self {
            history: Mutex::new(Vec::new()),
            segment,
        }
    }

    /// Navigator on the group's index route, before any replace.
    pub fn at_root() -> Self {
        Self::new(Segment::Other(String::new()))
    }

    /// User-driven navigation (tab press, back, deep link). Not recorded as a
    /// replace command.
    pub fn visit(&self, segment: Segment) {
        self.segment.send_replace(segment);
    }

    /// Every destination passed to `replace`, oldest first.
    pub fn history(&self) -> Vec<Destination> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn replace_count(&self) -> usize {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn last(&self) -> Option<Destination> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl NavigatorPort for InMemoryNavigator {
    fn replace(&self, destination: &Destination) {
        info!(href = %destination.href(), "navigate replace");
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(destination.clone());
        self.segment.send_replace(destination.route.segment());
    }

    fn current_segment(&self) -> Segment {
        self.segment.borrow().clone()
    }

    fn subscribe_segment(&self) -> watch::Receiver<Segment> {
        self.segment.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_updates_segment_synchronously() {
        let navigator = InMemoryNavigator::at_root();

        navigator.replace(&Destination::login());

        assert_eq!(navigator.current_segment(), Segment::Login);
        assert_eq!(navigator.history(), vec![Destination::login()]);
    }

    #[test]
    fn visit_changes_segment_without_recording() {
        let navigator = InMemoryNavigator::at_root();

        navigator.visit(Segment::Other("history".to_string()));

        assert_eq!(
            navigator.current_segment(),
            Segment::Other("history".to_string())
        );
        assert_eq!(navigator.replace_count(), 0);
    }
}
