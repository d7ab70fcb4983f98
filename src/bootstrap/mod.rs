//! Bootstrap module - application initialization and wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config, DEFAULT_FEATURE_ID};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_gatekeeper, Wired};
