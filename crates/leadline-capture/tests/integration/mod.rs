//! Integration test modules.

mod capture_flow;
mod degraded_paths;
