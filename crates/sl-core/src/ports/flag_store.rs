//! Persisted flag store port
//!
//! Durable string key-value store that survives process restarts.
//! Implementations are provided by the infrastructure layer (e.g., file-based storage).

use async_trait::async_trait;

#[async_trait]
pub trait FlagStorePort: Send + Sync {
    /// Read a raw value. `Ok(None)` when the key was never written.
    async fn read_flag(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write a raw value.
    async fn write_flag(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove a key. Removing a missing key is not an error.
    async fn remove_flag(&self, key: &str) -> anyhow::Result<()>;
}
