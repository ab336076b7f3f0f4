//! Error types for fuzzy-stress

use thiserror::Error;

/// Errors that can occur at the serving boundary.
///
/// The core pipeline itself has no error path: membership functions are total
/// and an empty active-rule set defuzzifies to the documented neutral score.
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
