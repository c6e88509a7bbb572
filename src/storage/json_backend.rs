use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::domain::Entry;

use super::{Result, StorageBackend};

const SLOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// File-per-slot JSON backend rooted at a local data directory.
///
/// Each slot is one pretty-printed JSON array of entry records. Writes stage
/// to a `.tmp` sibling and rename, so a failed write never corrupts the
/// previous contents.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Opens a store at `root`, or at the platform data directory when none
    /// is given. Creates the directory if needed.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_root);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(slot), SLOT_EXTENSION))
    }
}

impl StorageBackend for JsonStore {
    fn save(&self, entries: &[Entry], slot: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        write_atomic(&self.slot_path(slot), &json)?;
        debug!(slot, count = entries.len(), "entries persisted");
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Vec<Entry>> {
        let data = fs::read_to_string(self.slot_path(slot))?;
        Ok(serde_json::from_str(&data)?)
    }
}

fn default_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("budget_ledger")
}

pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Stages to a temporary sibling and renames over the target.
pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp = tmp_path(path);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn canonical_name(slot: &str) -> String {
    let mapped: String = slot
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let name = mapped.trim_end_matches('-');
    if name.is_empty() {
        "entries".to_string()
    } else {
        name.to_string()
    }
}
