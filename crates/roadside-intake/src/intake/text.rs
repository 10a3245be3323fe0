//! Text measurements matching what the browser form reports for a field.

/// Length in UTF-16 code units, the unit form length limits are stated in.
/// Characters outside the Basic Multilingual Plane (emoji) count twice.
pub(crate) fn field_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Whitespace as stripped from form input: the `Zs` space separators, the
/// ASCII controls tab through carriage return, the line and paragraph
/// separators, and the byte-order mark. U+0085 (next line) is not included.
pub(crate) fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `value` with leading and trailing form whitespace removed.
pub(crate) fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn astral_characters_count_as_two_units() {
        assert_eq!(field_length("Lagos, 🚗🚗"), 11);
        assert_eq!(field_length("Ikeja"), 5);
        assert_eq!(field_length("Ọba"), 3);
    }

    #[test]
    fn byte_order_mark_is_whitespace_but_next_line_is_not() {
        assert!(is_form_whitespace('\u{FEFF}'));
        assert!(is_form_whitespace('\u{3000}'));
        assert!(is_form_whitespace('\u{000B}'));
        assert!(!is_form_whitespace('\u{0085}'));
        assert!(!is_form_whitespace('\u{200B}'));
    }

    #[test]
    fn trim_uses_form_whitespace() {
        assert_eq!(trim_form("\u{FEFF} Adunni \u{00A0}"), "Adunni");
        assert_eq!(trim_form("\u{0085}Adunni"), "\u{0085}Adunni");
    }
}
