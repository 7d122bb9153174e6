//! Submission of interview requests to an external sink

mod error;
mod orchestrator;
mod payload;
mod sink;
mod traits;

pub use error::SubmitError;
pub use orchestrator::Submitter;
pub use payload::SubmissionPayload;
pub use sink::{LogSink, OutboxSink};
pub use traits::SubmissionSink;

#[cfg(test)]
pub use error::SinkError;
#[cfg(test)]
pub use payload::Receipt;
#[cfg(test)]
pub use traits::MockSubmissionSink;
