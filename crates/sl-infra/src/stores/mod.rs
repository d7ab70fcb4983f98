//! `watch`-backed session and subscription stores.
//!
//! Each store is the single source of truth for its snapshot; every consumer
//! subscribes to the same channel.

mod session;
mod subscription;

pub use session::WatchSessionStore;
pub use subscription::WatchSubscriptionStore;
