//! Submission error types

use crate::state::FieldErrors;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a submission sink
#[derive(Debug, Error)]
pub enum SinkError {
    #[cfg(test)]
    #[error("sink rejected the submission: {0}")]
    Rejected(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot encode submission: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("attachment upload failed for {name}: {source}")]
    AttachmentUpload {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why a submit action did not produce a receipt
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("the request has validation errors: {0}")]
    NotSubmittable(FieldErrors),

    #[error("a submission is already in progress")]
    InProgress,

    #[error("submission failed: {0}")]
    Failed(#[from] SinkError),

    #[error("submission timed out after {}s", .0.as_secs())]
    TimedOut(Duration),

    #[error("submission task ended without a result")]
    Interrupted,
}

impl SubmitError {
    /// Whether the sink was reached and the user may retry with the same draft
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Failed(_) | Self::TimedOut(_) | Self::Interrupted)
    }
}
