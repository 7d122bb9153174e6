//! Trait abstraction for submission sinks to enable mocking in tests

use super::error::SinkError;
use super::payload::{Receipt, SubmissionPayload};
use async_trait::async_trait;

/// Destination for finalized interview requests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Short human-readable description for the status bar
    fn describe(&self) -> String;

    /// Deliver one payload; called exactly once per submit action
    async fn submit(&self, payload: &SubmissionPayload) -> Result<Receipt, SinkError>;
}
