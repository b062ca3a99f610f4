#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Messaging hand-off: deep-link building, canned templates, and the
//! fire-and-forget opener.

pub mod link;
pub mod templates;

pub use link::{build_link, Handoff};
pub use templates::TemplateKey;
