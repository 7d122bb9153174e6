//! Built-in submission sinks
//!
//! The real transport for interview requests is owned by the recruiting
//! backend. These sinks stand in for it: [`LogSink`] only logs the request
//! after a simulated round trip, [`OutboxSink`] drops it into a directory as
//! JSON so another process can pick it up.

use super::error::SinkError;
use super::payload::{Receipt, SubmissionPayload};
use super::traits::SubmissionSink;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Logs each request after an artificial delay
pub struct LogSink {
    latency: Duration,
}

impl LogSink {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    fn describe(&self) -> String {
        "log".to_string()
    }

    async fn submit(&self, payload: &SubmissionPayload) -> Result<Receipt, SinkError> {
        tokio::time::sleep(self.latency).await;

        let body = serde_json::to_string(payload)?;
        info!(submission_id = %payload.id, "Interview request received: {body}");
        if let Some(attachment) = &payload.attachment {
            info!(
                submission_id = %payload.id,
                "Attachment: {} ({} bytes, {})",
                attachment.name, attachment.size, attachment.mime_type
            );
        }

        Ok(Receipt::accepted(payload.id))
    }
}

/// Writes each request as `<id>.json` into a directory, with the résumé
/// copied next to it as `<id>-<file name>`
pub struct OutboxSink {
    dir: PathBuf,
}

impl OutboxSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn payload_path(&self, payload: &SubmissionPayload) -> PathBuf {
        self.dir.join(format!("{}.json", payload.id))
    }

    fn attachment_path(&self, payload: &SubmissionPayload, name: &str) -> PathBuf {
        self.dir.join(format!("{}-{}", payload.id, name))
    }
}

#[async_trait]
impl SubmissionSink for OutboxSink {
    fn describe(&self) -> String {
        format!("outbox: {}", self.dir().display())
    }

    async fn submit(&self, payload: &SubmissionPayload) -> Result<Receipt, SinkError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        // Dropped before `commit` (error or cancelled future): staged files go away
        let mut staging = Staging::default();

        let mut staged_attachment = None;
        if let Some(attachment) = &payload.attachment {
            if let Some(source) = &attachment.path {
                let target = self.attachment_path(payload, &attachment.name);
                let part = part_path(&target);
                staging.track(part.clone());
                if let Err(source_err) = tokio::fs::copy(source, &part).await {
                    warn!(
                        submission_id = %payload.id,
                        "Attachment copy failed, withdrawing submission: {source_err}"
                    );
                    return Err(SinkError::AttachmentUpload {
                        name: attachment.name.clone(),
                        source: source_err,
                    });
                }
                staged_attachment = Some((part, target));
            }
        }

        let payload_path = self.payload_path(payload);
        let payload_part = part_path(&payload_path);
        staging.track(payload_part.clone());
        let body = serde_json::to_vec_pretty(payload)?;
        tokio::fs::write(&payload_part, body).await?;

        // Publish with no await in between; the JSON appears last and marks the submission
        if let Some((part, target)) = staged_attachment {
            staging.track(target.clone());
            std::fs::rename(&part, &target)?;
        }
        std::fs::rename(&payload_part, &payload_path)?;
        staging.commit();
        debug!("Wrote {}", payload_path.display());

        info!(submission_id = %payload.id, "Interview request stored in outbox");
        Ok(Receipt::stored_at(payload.id, payload_path))
    }
}

/// `<path>.part`, the name a file has until the submission is complete
fn part_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

/// Files written for one submission, removed on drop unless committed
#[derive(Debug, Default)]
struct Staging {
    paths: Vec<PathBuf>,
    committed: bool,
}

impl Staging {
    fn track(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        for path in &self.paths {
            if std::fs::remove_file(path).is_ok() {
                debug!("Removed staged {}", path.display());
            }
        }
    }
}
