#![forbid(unsafe_code)]

//! Core parsing and analysis for the Decklens card list tools.
//!
//! This crate provides:
//! - The raw card record model and field layout
//! - Keyword abilities and their letter codes
//! - Card list parsing from delimited text
//! - Cost sorting and ability filtering
//! - Report rendering (list notation and JSON)
//! - Aggregate card list statistics

pub mod types;
pub mod error;
pub mod parse;
pub mod analysis;
pub mod report;
pub mod summary;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use parse::read_records;
pub use analysis::{ability_pairs, sort_by_cost};
pub use report::AbilityReport;
pub use summary::{summarize, CardListSummary};
pub use config::Config;
