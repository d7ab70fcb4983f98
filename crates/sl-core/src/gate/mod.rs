//! Access gate decision tables.
//!
//! Pure functions over store snapshots. The use-case layer reads the ports,
//! calls these, and issues the resulting navigation command.

pub mod cold_start;
pub mod route_guard;

pub use route_guard::{GuardDecision, GuardInput};
