//! In-memory flag store for tests and headless runs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use sl_core::ports::FlagStorePort;

#[derive(Default)]
pub struct InMemoryFlagStore {
    flags: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    writes: AtomicUsize,
    removals: AtomicUsize,
}

impl InMemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `key = value` pairs.
    pub fn with_flags<'a, I>(flags: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let store = Self::new();
        {
            let mut map = store.flags.lock().unwrap_or_else(|e| e.into_inner());
            for (key, value) in flags {
                map.insert(key.to_string(), value.to_string());
            }
        }
        store
    }

    /// Make every subsequent read fail.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.flags
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn remove_count(&self) -> usize {
        self.removals.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlagStorePort for InMemoryFlagStore {
    async fn read_flag(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            anyhow::bail!("flag store unavailable");
        }
        Ok(self.get(key))
    }

    async fn write_flag(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.flags
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_flag(&self, key: &str) -> anyhow::Result<()> {
        self.removals.fetch_add(1, Ordering::SeqCst);
        self.flags
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        Ok(())
    }
}
