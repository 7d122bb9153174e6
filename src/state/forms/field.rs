//! Focusable slots of the interview request form

use super::validation::Field;

/// One focusable row of the request form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    Name,
    Phone,
    Email,
    Position,
    EmploymentType,
    Questions,
    Attachment,
    Submit,
}

impl FormSlot {
    pub const ALL: [FormSlot; 8] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Position,
        Self::EmploymentType,
        Self::Questions,
        Self::Attachment,
        Self::Submit,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Label shown in the field's border; `*` marks required fields
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "How should we address you? *",
            Self::Phone => "Phone *",
            Self::Email => "Email *",
            Self::Position => "Desired position",
            Self::EmploymentType => "Employment category *",
            Self::Questions => "Your questions",
            Self::Attachment => "Attach résumé",
            Self::Submit => "Sign up",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter your name",
            Self::Phone => super::phone::PHONE_PLACEHOLDER,
            Self::Email => "example@mail.com",
            Self::Position => "Enter a position",
            Self::Questions => "Any questions for us?",
            Self::Attachment => "Type a path and press Enter, or drop a file here",
            Self::EmploymentType | Self::Submit => "",
        }
    }

    /// Draft field edited through this slot
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Name => Some(Field::Name),
            Self::Phone => Some(Field::Phone),
            Self::Email => Some(Field::Email),
            Self::Position => Some(Field::Position),
            Self::EmploymentType => Some(Field::EmploymentType),
            Self::Questions => Some(Field::Questions),
            Self::Attachment | Self::Submit => None,
        }
    }

    /// Whether free text is typed into this slot
    pub fn accepts_text(&self) -> bool {
        !matches!(self, Self::EmploymentType | Self::Submit)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, slot) in FormSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
            assert_eq!(FormSlot::from_index(i), *slot);
        }
    }

    #[test]
    fn test_from_index_clamps() {
        assert_eq!(FormSlot::from_index(100), FormSlot::Submit);
    }

    #[test]
    fn test_required_labels_are_marked() {
        for slot in [FormSlot::Name, FormSlot::Phone, FormSlot::Email, FormSlot::EmploymentType] {
            assert!(slot.label().ends_with('*'), "{slot:?}");
        }
        assert!(!FormSlot::Position.label().ends_with('*'));
    }

    #[test]
    fn test_text_slots() {
        assert!(FormSlot::Name.accepts_text());
        assert!(FormSlot::Attachment.accepts_text());
        assert!(!FormSlot::EmploymentType.accepts_text());
        assert!(!FormSlot::Submit.accepts_text());
        assert!(FormSlot::Questions.is_multiline());
        assert!(!FormSlot::Email.is_multiline());
    }

    #[test]
    fn test_slot_fields() {
        assert_eq!(FormSlot::Phone.field(), Some(Field::Phone));
        assert_eq!(FormSlot::Attachment.field(), None);
    }
}
