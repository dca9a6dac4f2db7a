//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown time range: {0} (expected weekly, monthly, or yearly)")]
    InvalidRange(String),

    #[error("Unknown granularity: {0}")]
    InvalidGranularity(String),

    #[error("Unknown transaction kind: {0}")]
    InvalidKind(String),

    #[error("Unknown insight type: {0}")]
    InvalidInsightType(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Insight rule '{rule}' failed: {message}")]
    Rule {
        rule: &'static str,
        message: String,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
