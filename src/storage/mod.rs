pub mod json_backend;

use tracing::warn;

use crate::{domain::Entry, errors::LedgerError};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing entry sequences
/// under named slots.
pub trait StorageBackend: Send + Sync {
    fn save(&self, entries: &[Entry], slot: &str) -> Result<()>;
    fn load(&self, slot: &str) -> Result<Vec<Entry>>;

    /// Startup path: an absent or unreadable slot means no prior data, not an
    /// error.
    fn load_or_default(&self, slot: &str) -> Vec<Entry> {
        match self.load(slot) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(slot, error = %err, "slot unreadable, starting empty");
                Vec::new()
            }
        }
    }
}

pub use json_backend::JsonStore;
