// ABOUTME: Error types for the display extender
// ABOUTME: Only raised at the edges (parsing names, loading records); core operations never fail

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtenderError {
    #[error("Unknown section: {0}. Must be one of: subtitle, move_result, suppress_headers")]
    UnknownSection(String),

    #[error("Invalid submitted values: {0}")]
    InvalidValues(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtenderError>;
