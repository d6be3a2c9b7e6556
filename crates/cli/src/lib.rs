//! ScamGuard CLI - command orchestration
//!
//! This crate provides the `scamguard` binary and the commands behind it.

pub mod commands;
pub mod context;

pub use commands::{ScanRequest, ScanSummary};
pub use context::AppContext;
