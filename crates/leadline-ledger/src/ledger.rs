//! The lead ledger: an insertion-ordered sequence with best-effort
//! persistence.

use crate::store::LedgerStore;
use chrono::{DateTime, Duration, Utc};
use leadline_core::{LeadRecord, Stats};
use tracing::{debug, warn};

/// Ordered collection of lead records over a storage backend.
///
/// Every mutation rewrites the full persisted sequence. Storage
/// failures never propagate to callers: reads degrade to an empty
/// sequence and writes degrade to a logged no-op, since the ledger is
/// a best-effort local cache rather than a source of truth.
#[derive(Debug)]
pub struct Ledger<S: LedgerStore> {
    store: S,
}

impl<S: LedgerStore> Ledger<S> {
    /// Creates a ledger over the given storage backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Appends a record to the end of the stored sequence.
    ///
    /// Fails silently: if the backend cannot be read or written the
    /// failure is logged and the call still returns. Callers proceed
    /// regardless of the outcome.
    pub fn append(&self, record: LeadRecord) {
        let mut records = self.snapshot();
        let id = record.id.clone();
        records.push(record);
        match self.store.save(&records) {
            Ok(()) => debug!(%id, "lead appended to ledger"),
            Err(err) => warn!(%id, %err, "ledger append failed; continuing"),
        }
    }

    /// Returns a snapshot copy of all records, insertion order preserved.
    ///
    /// An empty or unreadable backend yields an empty sequence; corrupt
    /// stored data is treated as empty, not as an error.
    pub fn list_all(&self) -> Vec<LeadRecord> {
        self.snapshot()
    }

    /// Removes all records strictly older than `max_age_days` days.
    ///
    /// The cutoff is exclusive: a record aged exactly `max_age_days`
    /// days survives the sweep. Returns the number of records removed.
    pub fn purge_older_than(&self, max_age_days: i64) -> usize {
        self.purge_older_than_at(max_age_days, Utc::now())
    }

    /// Retention sweep against an explicit clock, for tests.
    pub fn purge_older_than_at(&self, max_age_days: i64, now: DateTime<Utc>) -> usize {
        let cutoff = now - Duration::days(max_age_days);
        let records = self.snapshot();
        let kept: Vec<LeadRecord> = records
            .iter()
            .filter(|r| r.timestamp >= cutoff)
            .cloned()
            .collect();
        let removed = records.len() - kept.len();
        if let Err(err) = self.store.save(&kept) {
            warn!(%err, "ledger rewrite after purge failed");
            return 0;
        }
        debug!(removed, max_age_days, "retention sweep complete");
        removed
    }

    /// Removes every record.
    pub fn clear(&self) {
        if let Err(err) = self.store.save(&[]) {
            warn!(%err, "ledger clear failed");
        }
    }

    /// Derives aggregate statistics from the current contents.
    ///
    /// A pure function of the ledger: no side effects, no caching.
    pub fn compute_stats(&self) -> Stats {
        Stats::compute(&self.snapshot(), Utc::now())
    }

    fn snapshot(&self) -> Vec<LeadRecord> {
        match self.store.load() {
            Ok(records) => records,
            Err(err) => {
                warn!(%err, "ledger unreadable; treating as empty");
                Vec::new()
            }
        }
    }
}
