//! Interview request draft and its validation rules

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Latin or Cyrillic letters and whitespace only
pub static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[а-яА-ЯёЁa-zA-Z\s]+$").expect("name pattern"));

/// Fully formatted phone number
pub static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+7 \([0-9]{3}\) [0-9]{3}-[0-9]{2}-[0-9]{2}$").expect("phone pattern")
});

/// Address with a dotted domain and an alphabetic top-level label of 2+ letters.
///
/// The local part may not start or end with a dot, nor hold two in a row.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern")
});

/// Upper bound on the free-form questions field
pub const QUESTIONS_MAX_CHARS: usize = 500;

/// Employment category the applicant is interested in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    Office,
    Internship,
    Remote,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 3] = [Self::Office, Self::Internship, Self::Remote];

    pub fn next(&self) -> Self {
        match self {
            Self::Office => Self::Internship,
            Self::Internship => Self::Remote,
            Self::Remote => Self::Office,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Office => Self::Remote,
            Self::Internship => Self::Office,
            Self::Remote => Self::Internship,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Office => "Office job",
            Self::Internship => "Internship",
            Self::Remote => "Remote job",
        }
    }

    /// Map the `1`/`2`/`3` shortcut keys
    pub fn from_shortcut(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::Office),
            '2' => Some(Self::Internship),
            '3' => Some(Self::Remote),
            _ => None,
        }
    }
}

/// In-progress interview request owned by the form while it is open
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SubmissionDraft {
    #[validate(
        length(min = 2, code = "too_short", message = "Name must contain at least 2 characters"),
        regex(path = *NAME_PATTERN, code = "letters_only", message = "Name may contain letters only")
    )]
    pub name: String,

    #[validate(regex(path = *PHONE_PATTERN, code = "phone_format", message = "Invalid phone format"))]
    pub phone: String,

    #[validate(regex(path = *EMAIL_PATTERN, code = "email_format", message = "Invalid email format"))]
    pub email: String,

    pub position: Option<String>,

    #[validate(required(code = "required", message = "Choose an employment category"))]
    pub employment_type: Option<EmploymentType>,

    #[validate(length(max = 500, code = "too_long", message = "500 characters at most"))]
    pub questions: Option<String>,
}

impl SubmissionDraft {
    /// Whether every field is still blank
    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Character count of the questions field
    pub fn questions_len(&self) -> usize {
        self.questions.as_deref().map_or(0, |q| q.chars().count())
    }
}

/// Normalize an optional text input: blank becomes absent
pub fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(NAME_PATTERN.is_match("Ann Lee"));
        assert!(PHONE_PATTERN.is_match("+7 (999) 123-45-67"));
    }

    #[test]
    fn test_name_pattern_accepts_cyrillic() {
        assert!(NAME_PATTERN.is_match("Анна Ёлкина"));
        assert!(!NAME_PATTERN.is_match("Ann2"));
        assert!(!NAME_PATTERN.is_match("Ann-Lee"));
    }

    #[test]
    fn test_email_pattern_needs_dotted_domain() {
        for ok in ["a@b.com", "first.last@mail.example.ru", "o'neil+cv@hr-team.io", "a_b-c@x.co"] {
            assert!(EMAIL_PATTERN.is_match(ok), "{ok}");
        }
        for bad in ["a@b", "a@localhost", "a@b.c", "a@b.c0m", "@b.com", "a@.com", "a@-b.com"] {
            assert!(!EMAIL_PATTERN.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn test_email_pattern_local_part_dots() {
        assert!(!EMAIL_PATTERN.is_match(".a@b.com"));
        assert!(!EMAIL_PATTERN.is_match("a.@b.com"));
        assert!(!EMAIL_PATTERN.is_match("a..b@b.com"));
        assert!(!EMAIL_PATTERN.is_match("a'@b.com"));
        assert!(!EMAIL_PATTERN.is_match("a b@b.com"));
    }

    #[test]
    fn test_phone_pattern_rejects_partial() {
        assert!(!PHONE_PATTERN.is_match("+7 (999) 123-45-6"));
        assert!(!PHONE_PATTERN.is_match("8 (999) 123-45-67"));
    }

    #[test]
    fn test_employment_type_cycle() {
        assert_eq!(EmploymentType::Office.next(), EmploymentType::Internship);
        assert_eq!(EmploymentType::Remote.next(), EmploymentType::Office);
        assert_eq!(EmploymentType::Office.prev(), EmploymentType::Remote);
        for kind in EmploymentType::ALL {
            assert_eq!(kind.next().prev(), kind);
        }
    }

    #[test]
    fn test_employment_type_shortcuts() {
        assert_eq!(EmploymentType::from_shortcut('1'), Some(EmploymentType::Office));
        assert_eq!(EmploymentType::from_shortcut('3'), Some(EmploymentType::Remote));
        assert_eq!(EmploymentType::from_shortcut('4'), None);
    }

    #[test]
    fn test_employment_type_serializes_lowercase() {
        let json = serde_json::to_string(&EmploymentType::Internship).unwrap();
        assert_eq!(json, "\"internship\"");
    }

    #[test]
    fn test_default_draft_is_blank() {
        let draft = SubmissionDraft::default();
        assert!(draft.is_blank());
        assert_eq!(draft.questions_len(), 0);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank("QA engineer"), Some("QA engineer".to_string()));
    }
}
