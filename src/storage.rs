use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Well-known keys in the durable client store.
pub mod keys {
    /// Active locale code, stored as plain text (e.g. "pt-BR").
    pub const LANGUAGE: &str = "language";

    /// Most recently issued bearer token. The session gate is the only
    /// writer (written on grant, removed on deny); other code paths may
    /// read it synchronously before the gate's async check completes and
    /// can observe a stale or absent value. Writes are last-write-wins.
    pub const AUTH_TOKEN: &str = "authToken";
}

/// Durable client-side key-value store.
///
/// A single JSON object on disk, flushed synchronously on every mutation.
/// The file is replaced via a temporary sibling and a rename, so a crash
/// mid-write never leaves a truncated store behind.
#[derive(Clone)]
pub struct Storage {
    inner: Arc<StorageInner>,
}

struct StorageInner {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl Storage {
    /// Open the store at `path`, loading existing entries.
    ///
    /// A missing file starts an empty store. An unreadable or unparsable
    /// one is discarded with a warning rather than failing the caller.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Discarding unparsable client store {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!("Discarding unreadable client store {}: {}", path.display(), e);
                HashMap::new()
            }
        };

        Ok(Self {
            inner: Arc::new(StorageInner {
                path,
                entries: Mutex::new(entries),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.entries.lock().unwrap().get(key).cloned()
    }

    /// Set `key` and flush the whole store to disk before returning.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.inner.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    /// Remove `key` if present and flush. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.inner.entries.lock().unwrap();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&entries)
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(entries).context("Failed to encode store")?;

        let tmp = self.inner.path.with_extension("tmp");
        std::fs::write(&tmp, json)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.inner.path)
            .with_context(|| format!("Failed to replace {}", self.inner.path.display()))?;
        Ok(())
    }
}
