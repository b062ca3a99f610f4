#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Remote mirror: document-collection API client.

pub mod client;

pub use client::{MirrorClient, MirrorDocument, MirrorEntry};
