//! StrikeLab headless shell.
//!
//! Loads configuration, initialises tracing and wires the gatekeeper to
//! concrete adapters.

pub mod bootstrap;

pub use bootstrap::{init_tracing_subscriber, load_config, resolve_config, wire_gatekeeper, Wired};
