//! Interview request form state

use super::attachment::{admit, Attachment, AttachmentCandidate, AttachmentError};
use super::draft::{non_blank, EmploymentType, SubmissionDraft};
use super::field::FormSlot;
use super::phone::{format_phone, pop_phone_digit};
use super::validation::{validate, Field, FieldErrors};
use crate::submission::{SubmissionPayload, SubmitError};
use std::collections::BTreeSet;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The draft, its attachment and the validation result for the current input.
///
/// Every mutation goes through a method that re-runs [`validate`], so
/// `errors` never describes an older draft.
#[derive(Debug, Clone)]
pub struct RequestForm {
    draft: SubmissionDraft,
    attachment: Option<Attachment>,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    submit_attempted: bool,
    active: usize,
    path_input: String,
    in_flight: bool,
}

impl Default for RequestForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RequestForm {
    fn field_count(&self) -> usize {
        FormSlot::ALL.len()
    }

    fn active_field(&self) -> usize {
        self.active
    }

    fn set_active_field(&mut self, index: usize) {
        self.active = index.min(FormSlot::ALL.len() - 1);
    }
}

impl RequestForm {
    pub fn new() -> Self {
        let draft = SubmissionDraft::default();
        let errors = validate(&draft);
        Self {
            draft,
            attachment: None,
            errors,
            touched: BTreeSet::new(),
            submit_attempted: false,
            active: 0,
            path_input: String::new(),
            in_flight: false,
        }
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn active_slot(&self) -> FormSlot {
        FormSlot::from_index(self.active)
    }

    pub fn focus(&mut self, slot: FormSlot) {
        self.active = slot.index();
    }

    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// No outstanding validation errors
    pub fn is_submittable(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the submit trigger should be enabled
    pub fn can_submit(&self) -> bool {
        self.is_submittable() && !self.in_flight
    }

    /// Current text of a slot, as shown in the form
    pub fn slot_text(&self, slot: FormSlot) -> String {
        match slot {
            FormSlot::Name => self.draft.name.clone(),
            FormSlot::Phone => self.draft.phone.clone(),
            FormSlot::Email => self.draft.email.clone(),
            FormSlot::Position => self.draft.position.clone().unwrap_or_default(),
            FormSlot::EmploymentType => self
                .draft
                .employment_type
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
            FormSlot::Questions => self.draft.questions.clone().unwrap_or_default(),
            FormSlot::Attachment => self.path_input.clone(),
            FormSlot::Submit => String::new(),
        }
    }

    /// Error message for a field, once the user has edited it or tried to submit
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.submit_attempted || self.touched.contains(&field) {
            self.errors.message(field)
        } else {
            None
        }
    }

    /// `Some(valid)` for a field that has content, `None` while it is empty
    pub fn field_marker(&self, field: Field) -> Option<bool> {
        let filled = match field {
            Field::Name => !self.draft.name.is_empty(),
            Field::Phone => !self.draft.phone.is_empty(),
            Field::Email => !self.draft.email.is_empty(),
            Field::Position => self.draft.position.is_some(),
            Field::EmploymentType => self.draft.employment_type.is_some(),
            Field::Questions => self.draft.questions.is_some(),
        };
        filled.then(|| !self.errors.has(field))
    }

    /// Type one character into the active slot
    pub fn input_char(&mut self, c: char) {
        match self.active_slot() {
            FormSlot::Name => self.draft.name.push(c),
            FormSlot::Phone => {
                self.draft.phone = format_phone(&format!("{}{}", self.draft.phone, c));
            }
            FormSlot::Email => self.draft.email.push(c),
            FormSlot::Position => push_optional(&mut self.draft.position, c),
            FormSlot::EmploymentType => {
                if let Some(kind) = EmploymentType::from_shortcut(c) {
                    self.draft.employment_type = Some(kind);
                }
            }
            FormSlot::Questions => push_optional(&mut self.draft.questions, c),
            FormSlot::Attachment => {
                self.path_input.push(c);
                return;
            }
            FormSlot::Submit => return,
        }
        self.edited(self.active_slot());
    }

    /// Insert a line break; only the questions field is multiline
    pub fn newline(&mut self) {
        if self.active_slot().is_multiline() {
            push_optional(&mut self.draft.questions, '\n');
            self.edited(FormSlot::Questions);
        }
    }

    /// Insert pasted text into the active slot
    pub fn insert_text(&mut self, text: &str) {
        let slot = self.active_slot();
        if !slot.accepts_text() {
            return;
        }
        if slot == FormSlot::Phone {
            self.draft.phone = format_phone(&format!("{}{}", self.draft.phone, text));
            self.edited(slot);
            return;
        }
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' if slot.is_multiline() => self.newline(),
                '\n' => self.input_char(' '),
                c => self.input_char(c),
            }
        }
    }

    /// Delete the last character of the active slot; the phone loses its last digit
    pub fn backspace(&mut self) {
        match self.active_slot() {
            FormSlot::Name => {
                self.draft.name.pop();
            }
            FormSlot::Phone => self.draft.phone = pop_phone_digit(&self.draft.phone),
            FormSlot::Email => {
                self.draft.email.pop();
            }
            FormSlot::Position => pop_optional(&mut self.draft.position),
            FormSlot::EmploymentType => self.draft.employment_type = None,
            FormSlot::Questions => pop_optional(&mut self.draft.questions),
            FormSlot::Attachment => {
                self.path_input.pop();
                return;
            }
            FormSlot::Submit => return,
        }
        self.edited(self.active_slot());
    }

    pub fn set_employment_type(&mut self, kind: EmploymentType) {
        self.draft.employment_type = Some(kind);
        self.edited(FormSlot::EmploymentType);
    }

    /// Step through the employment categories; starts at the first one when unset
    pub fn cycle_employment_type(&mut self, forward: bool) {
        let next = match self.draft.employment_type {
            Some(kind) if forward => kind.next(),
            Some(kind) => kind.prev(),
            None if forward => EmploymentType::Office,
            None => EmploymentType::Remote,
        };
        self.set_employment_type(next);
    }

    /// Hold `candidate` if it passes the attachment gate.
    ///
    /// A rejected candidate leaves the current attachment untouched; an
    /// accepted one replaces it.
    pub fn attach(&mut self, candidate: AttachmentCandidate) -> Result<&Attachment, AttachmentError> {
        let attachment = admit(candidate)?;
        Ok(self.attachment.insert(attachment))
    }

    pub fn remove_attachment(&mut self) -> Option<Attachment> {
        self.attachment.take()
    }

    /// Take the typed attachment path, clearing the input
    pub fn take_path_input(&mut self) -> String {
        std::mem::take(&mut self.path_input)
    }

    /// Re-validate and freeze the draft for the sink, taking the in-flight lock.
    pub fn begin_submission(&mut self) -> Result<SubmissionPayload, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::InProgress);
        }
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            self.submit_attempted = true;
            return Err(SubmitError::NotSubmittable(self.errors.clone()));
        }
        let payload = SubmissionPayload::freeze(&self.draft, self.attachment.as_ref())
            .ok_or_else(|| SubmitError::NotSubmittable(self.errors.clone()))?;
        self.in_flight = true;
        Ok(payload)
    }

    /// Release the in-flight lock; a successful submission clears the form.
    pub fn finish_submission(&mut self, succeeded: bool) {
        self.in_flight = false;
        if succeeded {
            self.reset();
        }
    }

    /// Back to an empty draft with no attachment
    pub fn reset(&mut self) {
        self.draft = SubmissionDraft::default();
        self.attachment = None;
        self.touched.clear();
        self.submit_attempted = false;
        self.path_input.clear();
        self.active = 0;
        self.errors = validate(&self.draft);
    }

    fn edited(&mut self, slot: FormSlot) {
        if let Some(field) = slot.field() {
            self.touched.insert(field);
        }
        self.errors = validate(&self.draft);
    }
}

fn push_optional(value: &mut Option<String>, c: char) {
    let mut text = value.take().unwrap_or_default();
    text.push(c);
    *value = non_blank(&text);
}

fn pop_optional(value: &mut Option<String>) {
    let mut text = value.take().unwrap_or_default();
    text.pop();
    *value = non_blank(&text);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PDF: &str = "application/pdf";

    fn type_into(form: &mut RequestForm, slot: FormSlot, text: &str) {
        form.focus(slot);
        for c in text.chars() {
            form.input_char(c);
        }
    }

    fn filled_form() -> RequestForm {
        let mut form = RequestForm::new();
        type_into(&mut form, FormSlot::Name, "Ann Lee");
        type_into(&mut form, FormSlot::Phone, "79991234567");
        type_into(&mut form, FormSlot::Email, "a@b.com");
        form.set_employment_type(EmploymentType::Remote);
        form
    }

    mod validation_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_is_not_submittable() {
            let form = RequestForm::new();
            assert!(!form.is_submittable());
            assert!(!form.can_submit());
        }

        #[test]
        fn test_ann_lee_is_submittable() {
            let form = filled_form();
            assert_eq!(form.draft().phone, "+7 (999) 123-45-67");
            assert!(form.is_submittable());
            assert!(form.can_submit());
        }

        #[test]
        fn test_bad_email_blocks_submit() {
            let mut form = filled_form();
            form.focus(FormSlot::Email);
            for _ in 0..7 {
                form.backspace();
            }
            type_into(&mut form, FormSlot::Email, "not-an-email");
            assert!(form.errors().has(Field::Email));
            assert!(!form.is_submittable());
        }

        #[test]
        fn test_errors_follow_every_edit() {
            let mut form = RequestForm::new();
            type_into(&mut form, FormSlot::Name, "A");
            assert!(form.errors().has(Field::Name));
            form.input_char('n');
            assert!(!form.errors().has(Field::Name));
        }

        #[test]
        fn test_errors_hidden_until_touched() {
            let mut form = RequestForm::new();
            assert_eq!(form.visible_error(Field::Email), None);
            type_into(&mut form, FormSlot::Email, "x");
            assert_eq!(form.visible_error(Field::Email), Some("Invalid email format"));
            assert_eq!(form.visible_error(Field::Name), None);
        }

        #[test]
        fn test_field_markers() {
            let mut form = RequestForm::new();
            assert_eq!(form.field_marker(Field::Phone), None);
            type_into(&mut form, FormSlot::Phone, "7999");
            assert_eq!(form.field_marker(Field::Phone), Some(false));
            type_into(&mut form, FormSlot::Phone, "1234567");
            assert_eq!(form.field_marker(Field::Phone), Some(true));
        }

        #[test]
        fn test_questions_over_limit() {
            let mut form = filled_form();
            form.focus(FormSlot::Questions);
            form.insert_text(&"q".repeat(501));
            assert!(form.errors().has(Field::Questions));
            form.backspace();
            assert!(form.is_submittable());
        }
    }

    mod input_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_phone_backspace_drops_digit() {
            let mut form = RequestForm::new();
            type_into(&mut form, FormSlot::Phone, "7999");
            assert_eq!(form.draft().phone, "+7 (999");
            form.backspace();
            assert_eq!(form.draft().phone, "+7 (99");
        }

        #[test]
        fn test_phone_ignores_letters() {
            let mut form = RequestForm::new();
            type_into(&mut form, FormSlot::Phone, "7a9");
            assert_eq!(form.draft().phone, "+7 (9");
        }

        #[test]
        fn test_phone_paste_is_formatted() {
            let mut form = RequestForm::new();
            form.focus(FormSlot::Phone);
            form.insert_text("8 (999) 123 45 67");
            assert_eq!(form.draft().phone, "+7 (999) 123-45-67");
        }

        #[test]
        fn test_single_line_paste_flattens_newlines() {
            let mut form = RequestForm::new();
            form.focus(FormSlot::Name);
            form.insert_text("Ann\nLee");
            assert_eq!(form.draft().name, "Ann Lee");
        }

        #[test]
        fn test_questions_accept_newlines() {
            let mut form = RequestForm::new();
            form.focus(FormSlot::Questions);
            form.insert_text("a\r\nb");
            assert_eq!(form.draft().questions.as_deref(), Some("a\nb"));
        }

        #[test]
        fn test_blank_position_is_absent() {
            let mut form = RequestForm::new();
            type_into(&mut form, FormSlot::Position, "QA");
            form.backspace();
            form.backspace();
            assert_eq!(form.draft().position, None);
        }

        #[test]
        fn test_employment_shortcuts_and_cycle() {
            let mut form = RequestForm::new();
            type_into(&mut form, FormSlot::EmploymentType, "2");
            assert_eq!(form.draft().employment_type, Some(EmploymentType::Internship));
            form.cycle_employment_type(true);
            assert_eq!(form.draft().employment_type, Some(EmploymentType::Remote));
            form.backspace();
            assert_eq!(form.draft().employment_type, None);
            form.cycle_employment_type(false);
            assert_eq!(form.draft().employment_type, Some(EmploymentType::Remote));
        }

        #[test]
        fn test_path_input_is_not_validated() {
            let mut form = RequestForm::new();
            type_into(&mut form, FormSlot::Attachment, "/tmp/cv.pdf");
            assert_eq!(form.path_input(), "/tmp/cv.pdf");
            assert_eq!(form.take_path_input(), "/tmp/cv.pdf");
            assert_eq!(form.path_input(), "");
        }

        #[test]
        fn test_tab_order_wraps() {
            let mut form = RequestForm::new();
            form.prev_field();
            assert_eq!(form.active_slot(), FormSlot::Submit);
            form.next_field();
            assert_eq!(form.active_slot(), FormSlot::Name);
        }
    }

    mod attachment_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_second_file_replaces_first() {
            let mut form = RequestForm::new();
            form.attach(AttachmentCandidate::new("a.pdf", 10, PDF)).unwrap();
            form.attach(AttachmentCandidate::new("b.pdf", 20, PDF)).unwrap();
            assert_eq!(form.attachment().map(|a| a.name.as_str()), Some("b.pdf"));
        }

        #[test]
        fn test_rejected_file_keeps_previous() {
            let mut form = RequestForm::new();
            form.attach(AttachmentCandidate::new("a.pdf", 10, PDF)).unwrap();
            let result = form.attach(AttachmentCandidate::new("b.png", 10, "image/png"));
            assert!(matches!(result, Err(AttachmentError::UnsupportedFileType { .. })));
            assert_eq!(form.attachment().map(|a| a.name.as_str()), Some("a.pdf"));
        }

        #[test]
        fn test_remove_attachment() {
            let mut form = RequestForm::new();
            form.attach(AttachmentCandidate::new("a.pdf", 10, PDF)).unwrap();
            assert!(form.remove_attachment().is_some());
            assert!(form.attachment().is_none());
        }
    }

    mod submission_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_takes_lock() {
            let mut form = filled_form();
            let payload = form.begin_submission().unwrap();
            assert_eq!(payload.name, "Ann Lee");
            assert!(form.is_in_flight());
            assert!(!form.can_submit());
            assert!(matches!(form.begin_submission(), Err(SubmitError::InProgress)));
        }

        #[test]
        fn test_invalid_draft_is_refused() {
            let mut form = RequestForm::new();
            let err = form.begin_submission().unwrap_err();
            assert!(matches!(err, SubmitError::NotSubmittable(ref e) if e.has(Field::Name)));
            assert!(!form.is_in_flight());
            assert!(form.visible_error(Field::Phone).is_some());
        }

        #[test]
        fn test_success_resets_everything() {
            let mut form = filled_form();
            form.attach(AttachmentCandidate::new("cv.pdf", 10, PDF)).unwrap();
            form.begin_submission().unwrap();
            form.finish_submission(true);
            assert!(form.draft().is_blank());
            assert!(form.attachment().is_none());
            assert!(!form.is_in_flight());
            assert_eq!(form.visible_error(Field::Name), None);
        }

        #[test]
        fn test_failure_keeps_draft() {
            let mut form = filled_form();
            form.attach(AttachmentCandidate::new("cv.pdf", 10, PDF)).unwrap();
            let before = form.draft().clone();
            form.begin_submission().unwrap();
            form.finish_submission(false);
            assert_eq!(form.draft(), &before);
            assert!(form.attachment().is_some());
            assert!(form.can_submit());
        }
    }
}
