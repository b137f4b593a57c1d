//! Error types for the decklens_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for decklens_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Record reader error
    #[error("record error: {0}")]
    Record(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record is too short for a field the analysis needs
    #[error("line {line}: record has {found} fields, field {index} is required")]
    MissingField {
        line: u64,
        index: usize,
        found: usize,
    },

    /// The cost field could not be parsed as an integer
    #[error("line {line}: cost {value:?} is not an integer")]
    InvalidCost { line: u64, value: String },

    /// An ability name or letter code was not recognized
    #[error("unknown ability {0:?} (expected a letter B/C/D/G/L/W or a name like \"guard\")")]
    UnknownAbility(String),
}
