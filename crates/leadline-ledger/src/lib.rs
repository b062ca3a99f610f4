#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Local lead ledger: append-only storage, retention sweep, and stats.

pub mod ledger;
pub mod store;

pub use ledger::Ledger;
pub use store::{FileStore, LedgerStore, MemoryStore};
