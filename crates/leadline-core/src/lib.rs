#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Leadline Core Library
//!
//! Core types, errors, and configuration for the Leadline lead-capture
//! and admin reporting system.

pub mod config;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use config::{AdminConfig, RemoteMirrorConfig};
pub use error::{Error, Result};
pub use types::{Condition, ConditionCount, FormPayload, LeadId, LeadRecord, Stats};
