use crossterm::event::KeyCode;

/// Field width cap; bounds the parsed seat minimum to four digits.
const MAX_DIGITS: usize = 4;

/// Digits-only input field for the minimum seat count.
///
/// The parse happens here at the input boundary, so the filter criteria carry
/// an already-validated `Option<u32>` instead of raw text.
#[derive(Debug, Clone, Default)]
pub struct NumericInputField {
    value: String,
}

impl NumericInputField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key while the field is focused. Returns true if the value changed.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() && self.value.len() < MAX_DIGITS => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => self.value.pop().is_some(),
            _ => false,
        }
    }

    /// Get current raw text (for rendering).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parsed seat minimum; empty or zero means no minimum.
    pub fn parsed(&self) -> Option<u32> {
        match self.value.parse::<u32>() {
            Ok(0) | Err(_) => None,
            Ok(n) => Some(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(field: &mut NumericInputField, text: &str) {
        for c in text.chars() {
            field.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn accepts_digits_only() {
        let mut field = NumericInputField::new();
        type_str(&mut field, "1a2b!");
        assert_eq!(field.value(), "12");
        assert_eq!(field.parsed(), Some(12));
    }

    #[test]
    fn backspace_removes_last_digit() {
        let mut field = NumericInputField::new();
        type_str(&mut field, "12");
        assert!(field.handle_key(KeyCode::Backspace));
        assert_eq!(field.value(), "1");
        assert!(field.handle_key(KeyCode::Backspace));
        assert!(!field.handle_key(KeyCode::Backspace));
        assert_eq!(field.parsed(), None);
    }

    #[test]
    fn length_is_capped() {
        let mut field = NumericInputField::new();
        type_str(&mut field, "123456");
        assert_eq!(field.value(), "1234");
        assert_eq!(field.parsed(), Some(1234));
    }

    #[test]
    fn empty_and_zero_mean_no_minimum() {
        let mut field = NumericInputField::new();
        assert_eq!(field.parsed(), None);
        type_str(&mut field, "0");
        assert_eq!(field.parsed(), None);
    }

    #[test]
    fn leading_zeros_still_parse() {
        let mut field = NumericInputField::new();
        type_str(&mut field, "0010");
        assert_eq!(field.parsed(), Some(10));
    }
}
