//! Core types for the Leadline lead ledger.

mod ids;
mod lead;
mod stats;

pub use ids::LeadId;
pub use lead::{Condition, FormPayload, LeadRecord};
pub use stats::{ConditionCount, Stats};
