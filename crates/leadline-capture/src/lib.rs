#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Lead capture: validation through hand-off.

pub mod flow;
pub mod message;
pub mod validate;

pub use flow::{CaptureFlow, CaptureOutcome};
pub use message::format_handoff_message;
