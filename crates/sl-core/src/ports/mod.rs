//! Port interfaces for the application layer
//!
//! Ports define the contract between the gate use cases and the external
//! collaborators (session provider, purchase SDK, key-value storage, router).
//! This follows Hexagonal Architecture principles, allowing the decision
//! logic to remain independent of any UI framework.

pub mod flag_store;
pub mod navigator;
pub mod paywall_presenter;
pub mod session;
pub mod subscription;

pub use flag_store::FlagStorePort;
pub use navigator::NavigatorPort;
pub use paywall_presenter::PaywallPresenterPort;
pub use session::SessionPort;
pub use subscription::SubscriptionPort;
