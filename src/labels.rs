//! Display-label helpers for the renderer.
//!
//! Tree and group keys may carry a sort prefix before an underscore, and
//! field names are usually camel case; these helpers turn them into the
//! labels the renderer shows, driven by session flags.

use crate::session::Session;

/// Insert spaces between camel-case words.
///
/// With `split_numbers`, letter/digit boundaries also split:
/// `Abc123DefGhi` becomes `Abc 123 Def Ghi`. Text of two characters or
/// fewer is returned unchanged.
pub fn insert_camel_spaces(text: &str, split_numbers: bool) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 2 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1];
            let next = chars.get(i + 1);
            let upper_starts_word = c.is_ascii_uppercase()
                && next
                    .is_some_and(|n| n.is_ascii_lowercase() || (split_numbers && n.is_ascii_digit()));
            let boundary_after_lower = prev.is_ascii_lowercase()
                && (c.is_ascii_uppercase() || (split_numbers && c.is_ascii_digit()));
            let upper_after_digit =
                split_numbers && prev.is_ascii_digit() && c.is_ascii_uppercase();
            if (upper_starts_word || boundary_after_lower || upper_after_digit)
                && !prev.is_whitespace()
            {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}

/// Drop everything up to and including the first underscore.
///
/// Tree and group names may use an `NN_Name` prefix purely to control
/// sort order; the prefix is not shown.
pub fn strip_sort_prefix(name: &str) -> &str {
    name.split_once('_').map(|(_, rest)| rest).unwrap_or(name)
}

/// Display label for a tree name.
pub fn tree_label<'a>(tree_name: &'a str, session: &Session) -> &'a str {
    if session.split_tree_on_underscore {
        strip_sort_prefix(tree_name)
    } else {
        tree_name
    }
}

/// Display label for a group name.
pub fn group_label(group_name: &str, session: &Session) -> String {
    let text = if session.split_group_on_underscore {
        strip_sort_prefix(group_name)
    } else {
        group_name
    };
    if session.space_camel_case_group {
        insert_camel_spaces(text, session.space_camel_case_number)
    } else {
        text.to_string()
    }
}

/// Display label for a field name.
pub fn field_label(name: &str, session: &Session) -> String {
    if session.space_camel_case_label {
        insert_camel_spaces(name, session.space_camel_case_number)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_between_camel_words() {
        assert_eq!(insert_camel_spaces("WindowWidth", false), "Window Width");
        assert_eq!(insert_camel_spaces("HTTPServer", false), "HTTP Server");
    }

    #[test]
    fn digit_boundaries_split_only_when_asked() {
        assert_eq!(insert_camel_spaces("Abc123DefGhi", true), "Abc 123 Def Ghi");
        assert_eq!(insert_camel_spaces("Abc123Def", false), "Abc123 Def");
    }

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(insert_camel_spaces("Ab", true), "Ab");
    }

    #[test]
    fn sort_prefix_is_stripped_once() {
        assert_eq!(strip_sort_prefix("01_General"), "General");
        assert_eq!(strip_sort_prefix("a_b_c"), "b_c");
        assert_eq!(strip_sort_prefix("Plain"), "Plain");
    }

    #[test]
    fn labels_follow_session_flags() {
        let session = Session {
            split_tree_on_underscore: true,
            split_group_on_underscore: true,
            ..Session::default()
        };
        assert_eq!(tree_label("10_Advanced", &session), "Advanced");
        assert_eq!(group_label("02_KeyBindings", &session), "Key Bindings");
        assert_eq!(field_label("ShowToolTip", &session), "Show Tool Tip");

        let plain = Session {
            space_camel_case_label: false,
            ..Session::default()
        };
        assert_eq!(field_label("ShowToolTip", &plain), "ShowToolTip");
    }
}
