//! Interview request form domain layer
//!
//! Phone formatting, the draft and its validation schema, the attachment
//! gate, and the [`RequestForm`] that ties them together.

mod attachment;
mod draft;
mod field;
mod phone;
mod request_form;
mod validation;

pub use attachment::{dropped_path, Attachment, AttachmentCandidate, AttachmentError};
pub use draft::{non_blank, EmploymentType, SubmissionDraft, QUESTIONS_MAX_CHARS};
pub use field::FormSlot;
pub use request_form::{Form, RequestForm};
pub use validation::{Field, FieldErrors};

#[cfg(test)]
pub use validation::validate;
