//! Aggregate statistics derived from the ledger contents.

use super::lead::LeadRecord;
use serde::{Deserialize, Serialize};

/// Frequency of one condition label across the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionCount {
    /// Condition label, or the unspecified fallback
    pub condition: String,
    /// Number of leads carrying this label
    pub count: usize,
}

/// Aggregate view of the ledger, recomputed on demand.
///
/// A pure function of the ledger contents; see
/// [`compute`](Stats::compute). An empty ledger yields all-zero counts,
/// an empty condition list, and no most-recent record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Total number of leads
    pub total: usize,
    /// Leads created on today's UTC calendar date
    pub count_today: usize,
    /// Leads created within the trailing seven days
    pub count_this_week: usize,
    /// Top 5 condition labels by frequency; ties keep first-seen order
    pub top_conditions: Vec<ConditionCount>,
    /// The most recently appended lead, if any
    pub most_recent: Option<LeadRecord>,
}

impl Stats {
    /// Derives statistics from a snapshot of the ledger.
    ///
    /// `now` is passed in so callers (and tests) control the clock.
    pub fn compute(records: &[LeadRecord], now: chrono::DateTime<chrono::Utc>) -> Self {
        let today = now.date_naive();
        let week_ago = now - chrono::Duration::days(7);

        let count_today = records
            .iter()
            .filter(|r| r.timestamp.date_naive() == today)
            .count();
        let count_this_week = records.iter().filter(|r| r.timestamp > week_ago).count();

        Self {
            total: records.len(),
            count_today,
            count_this_week,
            top_conditions: top_conditions(records),
            most_recent: records.last().cloned(),
        }
    }
}

/// Top 5 condition labels by frequency.
///
/// Counting iterates the ledger in insertion order and the sort is
/// stable, so labels with equal counts keep first-seen order.
fn top_conditions(records: &[LeadRecord]) -> Vec<ConditionCount> {
    let mut counts: Vec<ConditionCount> = Vec::new();
    for record in records {
        let label = record.condition_label();
        match counts.iter_mut().find(|c| c.condition == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(ConditionCount {
                condition: label.to_string(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(5);
    counts
}
