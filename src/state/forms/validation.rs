//! Field-keyed validation results for the interview request
//!
//! [`validate`] is a pure function of the draft. The form calls it after every
//! mutation and keeps the result beside the draft, so the error map always
//! describes the current input.

use super::draft::SubmissionDraft;
use std::collections::BTreeMap;
use std::fmt;
use validator::{Validate, ValidationErrors};

/// Validated fields of the draft, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Position,
    EmploymentType,
    Questions,
}

impl Field {
    /// Key the validator derive reports the field under
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Position => "position",
            Self::EmploymentType => "employment_type",
            Self::Questions => "questions",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "phone" => Some(Self::Phone),
            "email" => Some(Self::Email),
            "position" => Some(Self::Position),
            "employment_type" => Some(Self::EmploymentType),
            "questions" => Some(Self::Questions),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    TooShort,
    LettersOnly,
    PhoneFormat,
    EmailFormat,
    TooLong,
    Other,
}

impl Rule {
    fn from_code(code: &str) -> Self {
        match code {
            "required" => Self::Required,
            "too_short" => Self::TooShort,
            "letters_only" => Self::LettersOnly,
            "phone_format" => Self::PhoneFormat,
            "email_format" => Self::EmailFormat,
            "too_long" => Self::TooLong,
            _ => Self::Other,
        }
    }
}

/// One broken rule on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub rule: Rule,
    pub message: String,
}

/// Every validation failure of a draft, grouped per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    by_field: BTreeMap<Field, Vec<FieldError>>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Number of fields with at least one error
    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn has(&self, field: Field) -> bool {
        self.by_field.contains_key(&field)
    }

    /// All errors reported for `field`
    pub fn for_field(&self, field: Field) -> &[FieldError] {
        self.by_field.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message for `field`, the one rendered inline
    pub fn message(&self, field: Field) -> Option<&str> {
        self.for_field(field).first().map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.by_field.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.by_field.values().flatten()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut by_field: BTreeMap<Field, Vec<FieldError>> = BTreeMap::new();

        for (key, field_errors) in errors.field_errors() {
            let key: &str = &key;
            let Some(field) = Field::from_key(key) else {
                continue;
            };
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value in field: {key}"));
                by_field.entry(field).or_default().push(FieldError {
                    field,
                    rule: Rule::from_code(&error.code),
                    message,
                });
            }
        }

        Self { by_field }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Validate a draft against the interview request schema
pub fn validate(draft: &SubmissionDraft) -> FieldErrors {
    match draft.validate() {
        Ok(()) => FieldErrors::default(),
        Err(errors) => errors.into(),
    }
}
