//! Storage backends for the lead ledger.
//!
//! A backend persists the whole record sequence at once; the ledger
//! rewrites it on every mutation. Read and parse failures are reported
//! as [`Error::Storage`](leadline_core::Error::Storage) and downgraded
//! to an empty ledger by the caller.

use leadline_core::{Error, LeadRecord, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistence contract for the lead ledger.
pub trait LedgerStore {
    /// Loads the full record sequence.
    ///
    /// A missing backing store is a fresh ledger and loads as an empty
    /// sequence; unreadable or malformed data is a storage error.
    fn load(&self) -> Result<Vec<LeadRecord>>;

    /// Persists the full record sequence, replacing what was there.
    fn save(&self, records: &[LeadRecord]) -> Result<()>;
}

/// File-backed store: one JSON array under a single path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is created on first save; a missing file reads as an
    /// empty ledger.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for FileStore {
    fn load(&self) -> Result<Vec<LeadRecord>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(Error::storage(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )))
            }
        };
        serde_json::from_str(&raw).map_err(|err| {
            Error::storage(format!(
                "malformed ledger data in {}: {err}",
                self.path.display()
            ))
        })
    }

    fn save(&self, records: &[LeadRecord]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        std::fs::write(&self.path, json).map_err(|err| {
            Error::storage(format!(
                "failed to write {}: {err}",
                self.path.display()
            ))
        })
    }
}

/// In-memory store for tests.
///
/// Holds the serialized payload behind a mutex so tests can also
/// simulate storage failures and corrupt data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<Option<String>>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose writes always fail (quota-exceeded analog).
    pub fn failing() -> Self {
        Self {
            data: Mutex::new(None),
            fail_writes: true,
        }
    }

    /// Replaces the stored payload with arbitrary raw text.
    pub fn set_raw<S: Into<String>>(&self, raw: S) {
        if let Ok(mut guard) = self.data.lock() {
            *guard = Some(raw.into());
        }
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Vec<LeadRecord>> {
        let guard = self
            .data
            .lock()
            .map_err(|_| Error::storage("memory store poisoned"))?;
        match guard.as_deref() {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(raw)
                .map_err(|err| Error::storage(format!("malformed ledger data: {err}"))),
        }
    }

    fn save(&self, records: &[LeadRecord]) -> Result<()> {
        if self.fail_writes {
            return Err(Error::storage("simulated write failure"));
        }
        let json = serde_json::to_string(records)?;
        let mut guard = self
            .data
            .lock()
            .map_err(|_| Error::storage("memory store poisoned"))?;
        *guard = Some(json);
        Ok(())
    }
}
