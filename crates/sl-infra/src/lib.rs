pub mod flag_store;
pub mod navigation;
pub mod purchase;
pub mod stores;

pub use flag_store::{FileFlagStore, FlagStoreError, InMemoryFlagStore};
pub use navigation::InMemoryNavigator;
pub use purchase::ScriptedPaywallPresenter;
pub use stores::{WatchSessionStore, WatchSubscriptionStore};
