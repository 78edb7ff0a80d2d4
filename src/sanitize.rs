//! Digit-only Inputs
//!
//! Phone and number fields drop every non-digit character as the user types.

/// Keep only ASCII digits, in order
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// `Some(cleaned)` when the field must be rewritten, `None` when it is already clean
pub fn sanitized_update(value: &str) -> Option<String> {
    if value.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        Some(digits_only(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_non_digits() {
        assert_eq!(digits_only("+33 (6) 12-34"), "3361234");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only(""), "");
    }

    #[test]
    fn test_non_ascii_digits_are_stripped() {
        assert_eq!(digits_only("١٢3"), "3");
        assert_eq!(digits_only("1²3"), "13");
    }

    #[test]
    fn test_is_longest_digit_subsequence() {
        let inputs = ["0x1F", "  12 34  ", "1.5e3", "-42", "٣٤5é6"];
        for input in inputs {
            let out = digits_only(input);
            assert!(out.chars().all(|c| c.is_ascii_digit()));
            let expected: String = input.chars().filter(|c| ('0'..='9').contains(c)).collect();
            assert_eq!(out, expected, "input {input:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        for input in ["06 12 34 56 78", "123", "", "x"] {
            let once = digits_only(input);
            assert_eq!(digits_only(&once), once);
            assert_eq!(sanitized_update(&once), None);
        }
    }

    #[test]
    fn test_update_only_when_dirty() {
        assert_eq!(sanitized_update("0612"), None);
        assert_eq!(sanitized_update("06-12"), Some("0612".to_string()));
    }
}
