//! The admin report: refreshable view state over the ledger.

use crate::export::{csv_string, export_filename};
use chrono::SecondsFormat;
use leadline_core::{LeadRecord, Result, Stats};
use leadline_ledger::{Ledger, LedgerStore};
use leadline_remote::{MirrorClient, MirrorDocument};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

/// Refreshable report over the local ledger.
///
/// Holds a read-only snapshot of the records plus derived stats;
/// [`refresh`](AdminReport::refresh) re-reads both and is idempotent.
#[derive(Debug)]
pub struct AdminReport<S: LedgerStore> {
    ledger: Ledger<S>,
    records: Vec<LeadRecord>,
    stats: Stats,
}

impl<S: LedgerStore> AdminReport<S> {
    /// Creates a report over the ledger and loads the initial snapshot.
    pub fn new(ledger: Ledger<S>) -> Self {
        let mut report = Self {
            ledger,
            records: Vec::new(),
            stats: Stats::default(),
        };
        report.refresh();
        report
    }

    /// Re-reads the ledger and recomputes stats.
    ///
    /// Side effects are limited to this view's in-memory state.
    pub fn refresh(&mut self) {
        self.records = self.ledger.list_all();
        self.stats = self.ledger.compute_stats();
    }

    /// The current snapshot, insertion order.
    pub fn records(&self) -> &[LeadRecord] {
        &self.records
    }

    /// The stats computed at the last refresh.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Exports the snapshot as a CSV file under `dir`.
    ///
    /// Returns the written path, or `Ok(None)` without touching the
    /// filesystem when the ledger is empty.
    pub fn export_csv(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(csv) = csv_string(&self.records)? else {
            return Ok(None);
        };
        let path = dir.join(export_filename());
        std::fs::write(&path, csv)?;
        info!(path = %path.display(), rows = self.records.len(), "ledger exported");
        Ok(Some(path))
    }

    /// Runs the retention sweep, then refreshes. Returns removed count.
    pub fn purge(&mut self, max_age_days: i64) -> usize {
        let removed = self.ledger.purge_older_than(max_age_days);
        self.refresh();
        removed
    }

    /// Explicit admin read of the remote mirror.
    ///
    /// A failure here is surfaced to the caller for inline display; it
    /// is never fatal to the report itself.
    pub async fn fetch_mirror(&self, client: &MirrorClient) -> Result<Vec<MirrorDocument>> {
        client.list_all().await
    }

    /// Renders the stats block and a most-recent-first listing.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let stats = &self.stats;
        let _ = writeln!(out, "Leads: {} total", stats.total);
        let _ = writeln!(
            out,
            "  today: {}   this week: {}",
            stats.count_today, stats.count_this_week
        );
        if !stats.top_conditions.is_empty() {
            let _ = writeln!(out, "Top conditions:");
            for entry in &stats.top_conditions {
                let _ = writeln!(out, "  {:>4}  {}", entry.count, entry.condition);
            }
        }
        if self.records.is_empty() {
            let _ = writeln!(out, "(ledger is empty)");
            return out;
        }
        let _ = writeln!(out);
        for record in self.records.iter().rev() {
            let _ = writeln!(
                out,
                "{}  {}  {} <{}> {}  {}",
                record.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
                record.id,
                record.name,
                record.email,
                record.phone,
                record.condition_label(),
            );
        }
        out
    }
}
