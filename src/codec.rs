//! Serialized option format codec.
//!
//! One persisted entry is a separator-joined record:
//!
//! ```text
//! value | treeName | groupName | description | min | max
//! ```
//!
//! Trailing fields are optional. A missing tree or group name falls back
//! to `"Default"`, a missing description to the empty string, and missing
//! bounds to none. The value field parses per the field's [`TypeTag`];
//! bounds parse with the same parser and are ignored entirely for
//! text-like tags. [`encode`] is the exact inverse of [`decode`].

use crate::data::color::Color;
use crate::data::entry::ConfigEntry;
use crate::data::font::FontFamily;
use crate::data::keys::KeyCombo;
use crate::data::value::{OptionValue, TypeTag};
use crate::error::DecodeError;

/// Fallback for a missing tree or group name.
pub const DEFAULT_NAME: &str = "Default";

/// The structured form of one serialized option string.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedOption {
    pub value: OptionValue,
    pub tree_name: String,
    pub group_name: String,
    pub description: String,
    pub min: Option<OptionValue>,
    pub max: Option<OptionValue>,
}

impl DecodedOption {
    /// The all-defaults decode result for a type.
    pub fn defaults(tag: &TypeTag) -> Self {
        DecodedOption {
            value: tag.default_value(),
            tree_name: DEFAULT_NAME.to_string(),
            group_name: DEFAULT_NAME.to_string(),
            description: String::new(),
            min: None,
            max: None,
        }
    }
}

/// Decode one serialized option string.
///
/// Empty input yields the type default with default metadata. Field
/// absence is not an error; each field falls back independently. A value
/// or bound that fails its type's parse is a [`DecodeError`], fatal to
/// this entry only.
pub fn decode(
    raw: &str,
    tag: &TypeTag,
    separator: char,
    path: &str,
) -> Result<DecodedOption, DecodeError> {
    if raw.trim().is_empty() {
        return Ok(DecodedOption::defaults(tag));
    }

    let parts: Vec<&str> = raw.split(separator).collect();
    let value = parse_value(parts[0], tag, path)?;
    let tree_name = parts.get(1).copied().unwrap_or(DEFAULT_NAME).to_string();
    let group_name = parts.get(2).copied().unwrap_or(DEFAULT_NAME).to_string();
    let description = parts.get(3).copied().unwrap_or("").to_string();

    let (min, max) = if tag.is_text_like() {
        (None, None)
    } else {
        let min = parse_bound(parts.get(4), tag, path)?;
        let max = parse_bound(parts.get(5), tag, path)?;
        check_bounds(&min, &max, path)?;
        (min, max)
    };

    Ok(DecodedOption {
        value,
        tree_name,
        group_name,
        description,
        min,
        max,
    })
}

/// Encode an entry back to its serialized string form.
pub fn encode(entry: &ConfigEntry, separator: char) -> String {
    let mut out = format!(
        "{value}{sep}{tree}{sep}{group}{sep}{desc}",
        value = entry.value,
        tree = entry.tree_name,
        group = entry.group_name,
        desc = entry.description,
        sep = separator,
    );
    if entry.min.is_some() || entry.max.is_some() {
        out.push(separator);
        if let Some(min) = &entry.min {
            out.push_str(&min.to_string());
        }
        if let Some(max) = &entry.max {
            out.push(separator);
            out.push_str(&max.to_string());
        }
    }
    out
}

/// Parse a raw value field per its declared type.
///
/// An empty field yields the type default for every tag except `Text`,
/// where the raw text (including emptiness) is the value itself.
pub fn parse_value(raw: &str, tag: &TypeTag, path: &str) -> Result<OptionValue, DecodeError> {
    if let TypeTag::Text = tag {
        return Ok(OptionValue::Text(raw.to_string()));
    }

    let text = raw.trim();
    if text.is_empty() {
        return Ok(tag.default_value());
    }

    match tag {
        TypeTag::Bool => {
            if text.eq_ignore_ascii_case("true") {
                Ok(OptionValue::Bool(true))
            } else if text.eq_ignore_ascii_case("false") {
                Ok(OptionValue::Bool(false))
            } else {
                Err(mismatch(tag, text, path))
            }
        }
        TypeTag::I8 => parse_num(text, tag, path, OptionValue::I8),
        TypeTag::I16 => parse_num(text, tag, path, OptionValue::I16),
        TypeTag::I32 => parse_num(text, tag, path, OptionValue::I32),
        TypeTag::I64 => parse_num(text, tag, path, OptionValue::I64),
        TypeTag::U8 => parse_num(text, tag, path, OptionValue::U8),
        TypeTag::U16 => parse_num(text, tag, path, OptionValue::U16),
        TypeTag::U32 => parse_num(text, tag, path, OptionValue::U32),
        TypeTag::U64 => parse_num(text, tag, path, OptionValue::U64),
        TypeTag::F32 => parse_num(text, tag, path, OptionValue::F32),
        TypeTag::F64 => parse_num(text, tag, path, OptionValue::F64),
        TypeTag::Color => Color::parse(text, path).map(OptionValue::Color),
        TypeTag::Font => Ok(OptionValue::Font(FontFamily::parse(raw))),
        TypeTag::Keys => KeyCombo::parse(text, path).map(OptionValue::Keys),
        TypeTag::Choice { .. } => {
            let mut choice = match tag.default_value() {
                OptionValue::Choice(c) => c,
                _ => unreachable!(),
            };
            choice.select(text, path)?;
            Ok(OptionValue::Choice(choice))
        }
        TypeTag::Text => unreachable!(),
    }
}

fn parse_num<T: std::str::FromStr>(
    text: &str,
    tag: &TypeTag,
    path: &str,
    wrap: fn(T) -> OptionValue,
) -> Result<OptionValue, DecodeError> {
    text.parse::<T>()
        .map(wrap)
        .map_err(|_| mismatch(tag, text, path))
}

fn mismatch(tag: &TypeTag, actual: &str, path: &str) -> DecodeError {
    DecodeError::TypeMismatch {
        path: path.to_string(),
        expected: tag.describe().to_string(),
        actual: actual.to_string(),
    }
}

fn parse_bound(
    part: Option<&&str>,
    tag: &TypeTag,
    path: &str,
) -> Result<Option<OptionValue>, DecodeError> {
    match part {
        Some(raw) if !raw.trim().is_empty() => parse_value(raw, tag, path).map(Some),
        _ => Ok(None),
    }
}

fn check_bounds(
    min: &Option<OptionValue>,
    max: &Option<OptionValue>,
    path: &str,
) -> Result<(), DecodeError> {
    let (Some(min), Some(max)) = (min, max) else {
        return Ok(());
    };
    let inverted = match (min.as_int(), max.as_int()) {
        (Some(lo), Some(hi)) => lo > hi,
        _ => match (min.as_float(), max.as_float()) {
            (Some(lo), Some(hi)) => lo > hi,
            _ => false,
        },
    };
    if inverted {
        return Err(DecodeError::InvalidBounds {
            path: path.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::keys::Key;

    fn entry(value: OptionValue, tree: &str, group: &str, desc: &str) -> ConfigEntry {
        ConfigEntry {
            name: "test".into(),
            value,
            tree_name: tree.into(),
            group_name: group.into(),
            description: desc.into(),
            seq: 0,
            min: None,
            max: None,
        }
    }

    #[test]
    fn decodes_color_with_metadata() {
        let decoded = decode("FF0000|MyTree|MyGroup|red|", &TypeTag::Color, '|', "c").unwrap();
        assert_eq!(
            decoded.value,
            OptionValue::Color(Color::from_argb(0xFFFF0000))
        );
        assert_eq!(decoded.tree_name, "MyTree");
        assert_eq!(decoded.group_name, "MyGroup");
        assert_eq!(decoded.description, "red");
        assert_eq!(decoded.min, None);
    }

    #[test]
    fn empty_input_yields_type_default() {
        let decoded = decode("", &TypeTag::I32, '|', "n").unwrap();
        assert_eq!(decoded.value, OptionValue::I32(0));
        assert_eq!(decoded.tree_name, "Default");
        assert_eq!(decoded.group_name, "Default");
        assert_eq!(decoded.description, "");
    }

    #[test]
    fn missing_trailing_fields_fall_back() {
        let decoded = decode("42|Network", &TypeTag::U16, '|', "port").unwrap();
        assert_eq!(decoded.value, OptionValue::U16(42));
        assert_eq!(decoded.tree_name, "Network");
        assert_eq!(decoded.group_name, "Default");
    }

    #[test]
    fn present_but_empty_group_is_kept_verbatim() {
        let decoded = decode("1|Tree||desc", &TypeTag::I32, '|', "n").unwrap();
        assert_eq!(decoded.group_name, "");
    }

    #[test]
    fn bounds_parse_with_the_value_type() {
        let decoded = decode("5|T|G|d|1|10", &TypeTag::I32, '|', "n").unwrap();
        assert_eq!(decoded.min, Some(OptionValue::I32(1)));
        assert_eq!(decoded.max, Some(OptionValue::I32(10)));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = decode("5|T|G|d|10|1", &TypeTag::I32, '|', "n").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidBounds { .. }));
    }

    #[test]
    fn bounds_are_ignored_for_text_like_tags() {
        let decoded = decode("abc|T|G|d|1|10", &TypeTag::Text, '|', "s").unwrap();
        assert_eq!(decoded.min, None);
        assert_eq!(decoded.max, None);
    }

    #[test]
    fn custom_separator() {
        let decoded = decode("7;T;G", &TypeTag::U8, ';', "n").unwrap();
        assert_eq!(decoded.value, OptionValue::U8(7));
        assert_eq!(decoded.tree_name, "T");
    }

    #[test]
    fn bad_number_is_a_type_mismatch() {
        let err = decode("oops|T", &TypeTag::I32, '|', "n").unwrap_err();
        assert!(matches!(err, DecodeError::TypeMismatch { .. }));
    }

    #[test]
    fn round_trips_plain_entry() {
        let e = entry(OptionValue::I32(-12), "Tree", "Group", "help");
        let encoded = encode(&e, '|');
        assert_eq!(encoded, "-12|Tree|Group|help");
        let decoded = decode(&encoded, &TypeTag::I32, '|', "n").unwrap();
        assert_eq!(decoded.value, e.value);
        assert_eq!(decoded.tree_name, e.tree_name);
        assert_eq!(decoded.group_name, e.group_name);
        assert_eq!(decoded.description, e.description);
    }

    #[test]
    fn round_trips_entry_with_bounds() {
        let mut e = entry(OptionValue::U8(9), "T", "G", "");
        e.min = Some(OptionValue::U8(1));
        e.max = Some(OptionValue::U8(20));
        let encoded = encode(&e, '|');
        assert_eq!(encoded, "9|T|G||1|20");
        let decoded = decode(&encoded, &TypeTag::U8, '|', "n").unwrap();
        assert_eq!(decoded.min, e.min);
        assert_eq!(decoded.max, e.max);
    }

    #[test]
    fn round_trips_max_only_bounds() {
        let mut e = entry(OptionValue::F64(0.5), "T", "G", "");
        e.max = Some(OptionValue::F64(1.0));
        let encoded = encode(&e, '|');
        assert_eq!(encoded, "0.5|T|G|||1");
        let decoded = decode(&encoded, &TypeTag::F64, '|', "f").unwrap();
        assert_eq!(decoded.min, None);
        assert_eq!(decoded.max, Some(OptionValue::F64(1.0)));
    }

    #[test]
    fn round_trips_key_combo() {
        let combo = KeyCombo {
            ctrl: true,
            shift: false,
            alt: true,
            key: Key::F4,
        };
        let e = entry(OptionValue::Keys(combo), "Hotkeys", "General", "close");
        let encoded = encode(&e, '|');
        assert_eq!(encoded, "Ctrl + Alt + F4|Hotkeys|General|close");
        let decoded = decode(&encoded, &TypeTag::Keys, '|', "k").unwrap();
        assert_eq!(decoded.value, OptionValue::Keys(combo));
    }

    #[test]
    fn round_trips_color() {
        let e = entry(
            OptionValue::Color(Color::from_argb(0x80336699)),
            "T",
            "G",
            "",
        );
        let decoded = decode(&encode(&e, '|'), &TypeTag::Color, '|', "c").unwrap();
        assert_eq!(decoded.value, e.value);
    }

    #[test]
    fn empty_value_field_with_metadata_defaults() {
        let decoded = decode("|Tree|Group", &TypeTag::Bool, '|', "b").unwrap();
        assert_eq!(decoded.value, OptionValue::Bool(false));
        assert_eq!(decoded.tree_name, "Tree");
    }
}
