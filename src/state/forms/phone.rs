//! Progressive formatting for Russian phone numbers
//!
//! Raw input is reduced to its digits and rebuilt into the canonical
//! `+7 (XXX) XXX-XX-XX` shape. Partial input yields a partial prefix of that
//! shape, so the formatter can be applied after every keystroke.

/// Country digit plus the ten digit subscriber number
pub const MAX_PHONE_DIGITS: usize = 11;

/// Placeholder shown in an empty phone field
pub const PHONE_PLACEHOLDER: &str = "+7 (___) ___-__-__";

/// Keep only the ASCII digits of `raw`, capped at [`MAX_PHONE_DIGITS`]
pub fn phone_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect()
}

/// Format arbitrary input into the canonical phone shape.
///
/// The first digit is the country digit and is always rendered as `7`.
pub fn format_phone(raw: &str) -> String {
    let digits = phone_digits(raw);
    if digits.is_empty() {
        return String::new();
    }

    // All digits are ASCII, byte slicing is char slicing here.
    let subscriber = &digits[1..];
    let mut out = String::from("+7");
    if subscriber.is_empty() {
        return out;
    }

    let groups: [(usize, usize, &str); 4] = [(0, 3, " ("), (3, 6, ") "), (6, 8, "-"), (8, 10, "-")];
    for (start, end, separator) in groups {
        if subscriber.len() <= start {
            break;
        }
        out.push_str(separator);
        out.push_str(&subscriber[start..end.min(subscriber.len())]);
    }
    out
}

/// Remove the last digit from an already formatted number and re-format
pub fn pop_phone_digit(formatted: &str) -> String {
    let mut digits = phone_digits(formatted);
    digits.pop();
    format_phone(&digits)
}
