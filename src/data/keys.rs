//! Key-combination values.
//!
//! A combination is up to three modifiers (`Ctrl`, `Shift`, `Alt`) plus
//! exactly one terminal key. Parsing accepts the tokens in any order and
//! any case; encoding always renders present modifiers in the fixed order
//! `Ctrl + Shift + Alt + <Key>`.

use crate::error::DecodeError;
use std::fmt;

macro_rules! keys {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A terminal key recognized in key combinations.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $($variant,)+
        }

        impl Key {
            /// Canonical token for this key.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Key::$variant => $name,)+
                }
            }

            /// Match a token case-insensitively against the key names.
            pub fn from_token(token: &str) -> Option<Self> {
                $(if token.eq_ignore_ascii_case($name) {
                    return Some(Key::$variant);
                })+
                None
            }
        }
    };
}

keys! {
    A => "A", B => "B", C => "C", D => "D", E => "E", F => "F",
    G => "G", H => "H", I => "I", J => "J", K => "K", L => "L",
    M => "M", N => "N", O => "O", P => "P", Q => "Q", R => "R",
    S => "S", T => "T", U => "U", V => "V", W => "W", X => "X",
    Y => "Y", Z => "Z",
    D0 => "0", D1 => "1", D2 => "2", D3 => "3", D4 => "4",
    D5 => "5", D6 => "6", D7 => "7", D8 => "8", D9 => "9",
    F1 => "F1", F2 => "F2", F3 => "F3", F4 => "F4", F5 => "F5",
    F6 => "F6", F7 => "F7", F8 => "F8", F9 => "F9", F10 => "F10",
    F11 => "F11", F12 => "F12",
    Up => "Up", Down => "Down", Left => "Left", Right => "Right",
    Space => "Space", Tab => "Tab", Enter => "Enter",
    Escape => "Escape", Backspace => "Backspace", Delete => "Delete",
    Insert => "Insert", Home => "Home", End => "End",
    PageUp => "PageUp", PageDown => "PageDown",
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A modifier set plus one terminal key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: Key,
}

impl KeyCombo {
    /// Build a combination with no modifiers.
    pub fn plain(key: Key) -> Self {
        KeyCombo {
            ctrl: false,
            shift: false,
            alt: false,
            key,
        }
    }

    /// Parse a `+`-joined token sequence.
    ///
    /// Modifiers are recognized case-insensitively in any order. A token
    /// that matches neither a modifier nor a key name, or a second
    /// non-modifier token, is a decode error.
    pub fn parse(raw: &str, path: &str) -> Result<Self, DecodeError> {
        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key = None;

        for token in raw.split('+').map(str::trim) {
            if token.eq_ignore_ascii_case("ctrl") {
                ctrl = true;
            } else if token.eq_ignore_ascii_case("shift") {
                shift = true;
            } else if token.eq_ignore_ascii_case("alt") {
                alt = true;
            } else if let Some(k) = Key::from_token(token) {
                if key.is_some() {
                    return Err(DecodeError::ExtraKeyToken {
                        path: path.to_string(),
                        token: token.to_string(),
                    });
                }
                key = Some(k);
            } else {
                return Err(DecodeError::UnknownKeyToken {
                    path: path.to_string(),
                    token: token.to_string(),
                });
            }
        }

        match key {
            Some(key) => Ok(KeyCombo {
                ctrl,
                shift,
                alt,
                key,
            }),
            None => Err(DecodeError::MissingKeyToken {
                path: path.to_string(),
            }),
        }
    }
}

impl Default for KeyCombo {
    fn default() -> Self {
        KeyCombo::plain(Key::Escape)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl + ")?;
        }
        if self.shift {
            f.write_str("Shift + ")?;
        }
        if self.alt {
            f.write_str("Alt + ")?;
        }
        f.write_str(self.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modifiers_and_key() {
        let combo = KeyCombo::parse("Ctrl + Alt + F4", "k").unwrap();
        assert!(combo.ctrl && combo.alt && !combo.shift);
        assert_eq!(combo.key, Key::F4);
    }

    #[test]
    fn round_trips_canonical_form() {
        let combo = KeyCombo::parse("Ctrl + Alt + F4", "k").unwrap();
        assert_eq!(combo.to_string(), "Ctrl + Alt + F4");
    }

    #[test]
    fn tokens_are_case_insensitive_and_order_free() {
        let combo = KeyCombo::parse("alt+CTRL+f4", "k").unwrap();
        assert_eq!(combo.to_string(), "Ctrl + Alt + F4");
    }

    #[test]
    fn shift_renders_between_ctrl_and_alt() {
        let combo = KeyCombo::parse("Alt + Shift + Ctrl + S", "k").unwrap();
        assert_eq!(combo.to_string(), "Ctrl + Shift + Alt + S");
    }

    #[test]
    fn unknown_token_is_an_error() {
        let err = KeyCombo::parse("Ctrl + Bogus", "k").unwrap_err();
        assert!(matches!(err, DecodeError::UnknownKeyToken { token, .. } if token == "Bogus"));
    }

    #[test]
    fn second_key_token_is_an_error() {
        let err = KeyCombo::parse("Ctrl + A + B", "k").unwrap_err();
        assert!(matches!(err, DecodeError::ExtraKeyToken { token, .. } if token == "B"));
    }

    #[test]
    fn modifiers_without_key_are_an_error() {
        let err = KeyCombo::parse("Ctrl + Shift", "k").unwrap_err();
        assert!(matches!(err, DecodeError::MissingKeyToken { .. }));
    }
}
