//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation beyond "empty"
//!
//! > **This module contains data only, no policy, no validation.**

use std::path::PathBuf;

/// Gatekeeper configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq)]
pub struct GatekeeperConfig {
    /// Feature id handed to the purchase UI (may be empty - the shell picks a default)
    pub paywall_feature_id: String,

    /// Flag store file path (path info only, no existence check)
    pub flag_store_path: PathBuf,

    /// Log level directive (may be empty)
    pub log_level: String,

    /// Collaborator state used by the headless shell
    pub simulation: SimulationConfig,
}

/// Collaborator state for headless runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationConfig {
    pub has_session: bool,
    pub is_subscribed: bool,
    /// Raw outcome name reported by the simulated purchase UI (may be empty)
    pub purchase_outcome: String,
}

impl GatekeeperConfig {
    /// Create GatekeeperConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let bool_at = |section: &str, key: &str| -> bool {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
        };

        Ok(Self {
            paywall_feature_id: str_at("paywall", "feature_id"),
            flag_store_path: PathBuf::from(str_at("storage", "flag_store_path")),
            log_level: str_at("logging", "level"),
            simulation: SimulationConfig {
                has_session: bool_at("simulation", "has_session"),
                is_subscribed: bool_at("simulation", "is_subscribed"),
                purchase_outcome: str_at("simulation", "purchase_outcome"),
            },
        })
    }

    /// Create empty GatekeeperConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            paywall_feature_id: String::new(),
            flag_store_path: PathBuf::new(),
            log_level: String::new(),
            simulation: SimulationConfig::default(),
        }
    }

    /// Create GatekeeperConfig with paths under a caller-provided data directory.
    ///
    /// The base directory should be computed by the caller using platform-specific
    /// logic (e.g., `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            flag_store_path: data_dir.join("flags.json"),
            ..Self::empty()
        }
    }
}
