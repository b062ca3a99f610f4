#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Admin reporting: refresh, export, purge, and the access gate.

pub mod export;
pub mod gate;
pub mod report;

pub use export::{csv_string, export_filename};
pub use gate::AccessGate;
pub use report::AdminReport;
