//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read TOML configuration files
//! - Parse TOML into the `GatekeeperConfig` DTO
//! - Report I/O and parsing errors with context
//! - Fill shell-level defaults for values the file leaves empty
//!
//! `load_config` itself accepts whatever is in the file; defaults are applied
//! afterwards by `resolve_config`.

use anyhow::Context;
use std::path::PathBuf;
use sl_core::config::GatekeeperConfig;
use tracing::info;

/// Purchase UI feature id used when the config leaves it empty.
pub const DEFAULT_FEATURE_ID: &str = "strikelab_pro";

const APP_DIR_NAME: &str = "strikelab";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<GatekeeperConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    GatekeeperConfig::from_toml(&toml_value)
}

/// Load the config at `config_path` if given, otherwise start from system
/// defaults, then fill every empty value.
pub fn resolve_config(config_path: Option<PathBuf>) -> anyhow::Result<GatekeeperConfig> {
    let data_dir = default_data_dir()?;
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => {
            info!("no config file given, using system defaults");
            GatekeeperConfig::with_system_defaults(data_dir.clone())
        }
    };
    Ok(apply_defaults(config, data_dir))
}

fn apply_defaults(mut config: GatekeeperConfig, data_dir: PathBuf) -> GatekeeperConfig {
    if config.paywall_feature_id.is_empty() {
        config.paywall_feature_id = DEFAULT_FEATURE_ID.to_string();
    }
    if config.flag_store_path.as_os_str().is_empty() {
        config.flag_store_path = GatekeeperConfig::with_system_defaults(data_dir).flag_store_path;
    }
    config
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("Failed to locate the local data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [paywall]
            feature_id = "strikelab_annual"

            [storage]
            flag_store_path = "/var/lib/strikelab/flags.json"

            [logging]
            level = "debug"

            [simulation]
            has_session = true
            purchase_outcome = "purchased"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.paywall_feature_id, "strikelab_annual");
        assert_eq!(
            config.flag_store_path,
            PathBuf::from("/var/lib/strikelab/flags.json")
        );
        assert_eq!(config.log_level, "debug");
        assert!(config.simulation.has_session);
        assert!(!config.simulation.is_subscribed);
        assert_eq!(config.simulation.purchase_outcome, "purchased");
    }

    #[test]
    fn test_load_config_keeps_empty_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[paywall]\n").unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config, GatekeeperConfig::empty());
    }

    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[paywall\nfeature_id = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_returns_error_on_missing_file() {
        let err = load_config(PathBuf::from("/nonexistent/strikelab.toml")).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_apply_defaults_fills_only_empty_values() {
        let data_dir = PathBuf::from("/data/strikelab");

        let filled = apply_defaults(GatekeeperConfig::empty(), data_dir.clone());
        assert_eq!(filled.paywall_feature_id, DEFAULT_FEATURE_ID);
        assert_eq!(filled.flag_store_path, data_dir.join("flags.json"));

        let mut explicit = GatekeeperConfig::empty();
        explicit.paywall_feature_id = "custom".to_string();
        explicit.flag_store_path = PathBuf::from("/tmp/flags.json");
        let kept = apply_defaults(explicit.clone(), data_dir);
        assert_eq!(kept, explicit);
    }
}
