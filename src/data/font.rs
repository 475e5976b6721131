//! Font-family values.
//!
//! A font family is carried by name only; resolving the name against the
//! installed font set is the renderer's job. Parsing accepts a bare name
//! or the bracketed `[FontFamily: Name=X]` wrapper and falls back to the
//! system default family when nothing usable remains.

use std::fmt;

/// Family name used when input is empty or unresolvable.
pub const DEFAULT_FAMILY: &str = "Sans Serif";

/// A font family identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontFamily {
    name: String,
}

impl FontFamily {
    /// Wrap a family name, substituting the default for an empty one.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.trim().is_empty() {
            FontFamily {
                name: DEFAULT_FAMILY.to_string(),
            }
        } else {
            FontFamily { name }
        }
    }

    /// Parse a bare name or a `[FontFamily: Name=X]` wrapper.
    ///
    /// Never fails; unusable input yields the default family.
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            let name = inner
                .split_once("Name=")
                .map(|(_, n)| n.trim())
                .unwrap_or("");
            return FontFamily::new(name);
        }
        FontFamily::new(text)
    }

    /// The family name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        FontFamily {
            name: DEFAULT_FAMILY.to_string(),
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
