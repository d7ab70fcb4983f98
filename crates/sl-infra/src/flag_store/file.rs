//! File-based flag store
//!
//! This module provides a file-based implementation of the FlagStorePort,
//! persisting all flags as one JSON object in the application data directory.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use sl_core::ports::FlagStorePort;

pub const DEFAULT_FLAG_STORE_FILE: &str = ".strikelab_flags.json";

#[derive(Debug, thiserror::Error)]
pub enum FlagStoreError {
    #[error("Failed to parse flag file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub struct FileFlagStore {
    file_path: PathBuf,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileFlagStore {
    /// Create store with custom file path
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            write_lock: Mutex::new(()),
        }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_FLAG_STORE_FILE))
    }

    async fn load(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("read flag file failed: {}", self.file_path.display())
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| {
            FlagStoreError::Corrupt {
                path: self.file_path.clone(),
                source,
            }
            .into()
        })
    }

    /// Load for a read-modify-write cycle. A corrupt file is discarded so the
    /// next write can replace it.
    async fn load_for_write(&self) -> anyhow::Result<BTreeMap<String, String>> {
        match self.load().await {
            Ok(flags) => Ok(flags),
            Err(err) if err.downcast_ref::<FlagStoreError>().is_some() => {
                warn!(
                    error = %err,
                    path = %self.file_path.display(),
                    "flag file corrupt, starting from empty flags"
                );
                Ok(BTreeMap::new())
            }
            Err(err) => Err(err),
        }
    }

    async fn persist(&self, flags: &BTreeMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create flag dir failed: {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(flags).context("serialize flags failed")?;
        let tmp_path = self.file_path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .await
            .with_context(|| format!("write temp flag file failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.file_path).await.with_context(|| {
            format!(
                "rename temp flag file failed: {} -> {}",
                tmp_path.display(),
                self.file_path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl FlagStorePort for FileFlagStore {
    async fn read_flag(&self, key: &str) -> anyhow::Result<Option<String>> {
        let flags = self.load().await?;
        Ok(flags.get(key).cloned())
    }

    async fn write_flag(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut flags = self.load_for_write().await?;
        flags.insert(key.to_string(), value.to_string());
        self.persist(&flags).await?;
        debug!(key, path = %self.file_path.display(), "flag written");
        Ok(())
    }

    async fn remove_flag(&self, key: &str) -> anyhow::Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut flags = self.load_for_write().await?;
        if flags.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&flags).await?;
        debug!(key, path = %self.file_path.display(), "flag removed");
        Ok(())
    }
}
