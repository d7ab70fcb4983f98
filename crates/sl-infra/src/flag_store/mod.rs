mod file;
mod memory;

pub use file::{FileFlagStore, FlagStoreError, DEFAULT_FLAG_STORE_FILE};
pub use memory::InMemoryFlagStore;
