//! Frozen submission payload and sink receipts

use crate::state::{non_blank, Attachment, EmploymentType, SubmissionDraft};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Immutable snapshot of a validated draft handed to the sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub employment_type: EmploymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl SubmissionPayload {
    /// Snapshot `draft` and `attachment` exactly as they were validated.
    ///
    /// Returns `None` when no employment type was chosen; callers validate
    /// first, so this only guards the type conversion. Blank optional fields
    /// are left out; no rule constrains them.
    pub fn freeze(draft: &SubmissionDraft, attachment: Option<&Attachment>) -> Option<Self> {
        let employment_type = draft.employment_type?;
        Some(Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            position: draft.position.as_deref().and_then(non_blank),
            employment_type,
            questions: draft.questions.as_deref().and_then(non_blank),
            attachment: attachment.cloned(),
        })
    }
}

/// Acknowledgement returned by a sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub submission_id: Uuid,
    pub accepted_at: DateTime<Utc>,
    /// Where the sink stored the submission, if it stores anything
    pub location: Option<PathBuf>,
}

impl Receipt {
    pub fn accepted(submission_id: Uuid) -> Self {
        Self {
            submission_id,
            accepted_at: Utc::now(),
            location: None,
        }
    }

    pub fn stored_at(submission_id: Uuid, location: PathBuf) -> Self {
        Self {
            location: Some(location),
            ..Self::accepted(submission_id)
        }
    }
}
