//! Write-back of edited values.
//!
//! The renderer reports an edit as an [`Edited`] value; [`apply`] converts
//! it to the field's native type, clamps numeric values into the
//! effective bounds, and commits it to the store. A conversion failure
//! reports the entry name and the attempted value and leaves the store
//! untouched; the write is all-or-nothing per entry.

use std::fmt;

use crate::codec;
use crate::data::color::Color;
use crate::data::font::FontFamily;
use crate::data::value::{OptionValue, TypeTag};
use crate::dispatch::{Bounds, effective_bounds};
use crate::error::{DecodeError, WriteError};
use crate::session::Session;
use crate::store::Settings;

/// An edited value as reported by a concrete editor widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Edited {
    /// Checkbox state.
    Bool(bool),
    /// Whole-number spinner position.
    Int(i128),
    /// Decimal spinner position.
    Float(f64),
    /// Text box content or combo selection label.
    Text(String),
    /// Composite color editor result.
    Color(Color),
    /// An already-typed value, passed through unconverted.
    Value(OptionValue),
}

impl fmt::Display for Edited {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edited::Bool(v) => write!(f, "{v}"),
            Edited::Int(v) => write!(f, "{v}"),
            Edited::Float(v) => write!(f, "{v}"),
            Edited::Text(v) => f.write_str(v),
            Edited::Color(v) => write!(f, "{v}"),
            Edited::Value(v) => write!(f, "{v}"),
        }
    }
}

/// Convert and commit one edit.
///
/// On success the session is marked dirty. On failure the store is left
/// unmodified and the error carries the field name and attempted value.
pub fn apply(
    settings: &mut Settings,
    session: &mut Session,
    name: &str,
    edited: Edited,
) -> Result<(), WriteError> {
    let Some(spec) = settings.field(name).cloned() else {
        return Err(WriteError::UnknownField {
            name: name.to_string(),
        });
    };

    // Bounds declared in the schema default override the type defaults.
    let (min, max) = match spec.default_decoded(session.separator) {
        Ok(d) => (d.min, d.max),
        Err(_) => (None, None),
    };

    let attempted = edited.to_string();
    let converted = convert(edited, &spec.tag, name).map_err(|source| WriteError::Conversion {
        name: name.to_string(),
        attempted,
        source,
    })?;
    let value = clamp(converted, effective_bounds(&spec.tag, &min, &max));

    settings.set(name, value);
    session.dirty = true;
    Ok(())
}

fn convert(edited: Edited, tag: &TypeTag, path: &str) -> Result<OptionValue, DecodeError> {
    match edited {
        Edited::Value(v) => {
            if tag.matches(&v) {
                Ok(v)
            } else {
                Err(mismatch(tag, &v.to_string(), path))
            }
        }
        Edited::Bool(b) => match tag {
            TypeTag::Bool => Ok(OptionValue::Bool(b)),
            _ => Err(mismatch(tag, &b.to_string(), path)),
        },
        Edited::Color(c) => match tag {
            TypeTag::Color => Ok(OptionValue::Color(c)),
            _ => Err(mismatch(tag, &c.to_string(), path)),
        },
        Edited::Int(i) => from_int(i, tag, path),
        Edited::Float(f) => match tag {
            TypeTag::F32 => Ok(OptionValue::F32(f as f32)),
            TypeTag::F64 => Ok(OptionValue::F64(f)),
            // Whole-number editors may report a decimal position.
            _ => from_int(f.round() as i128, tag, path),
        },
        Edited::Text(s) => match tag {
            // Combo selections carry the family name only; rewrap it.
            TypeTag::Font => Ok(OptionValue::Font(FontFamily::new(s))),
            _ => codec::parse_value(&s, tag, path),
        },
    }
}

fn from_int(i: i128, tag: &TypeTag, path: &str) -> Result<OptionValue, DecodeError> {
    // Width overflow is handled by the clamp step; saturate here.
    match tag {
        TypeTag::I8 => Ok(OptionValue::I8(i.clamp(i8::MIN as i128, i8::MAX as i128) as i8)),
        TypeTag::I16 => Ok(OptionValue::I16(
            i.clamp(i16::MIN as i128, i16::MAX as i128) as i16,
        )),
        TypeTag::I32 => Ok(OptionValue::I32(
            i.clamp(i32::MIN as i128, i32::MAX as i128) as i32,
        )),
        TypeTag::I64 => Ok(OptionValue::I64(
            i.clamp(i64::MIN as i128, i64::MAX as i128) as i64,
        )),
        TypeTag::U8 => Ok(OptionValue::U8(i.clamp(0, u8::MAX as i128) as u8)),
        TypeTag::U16 => Ok(OptionValue::U16(i.clamp(0, u16::MAX as i128) as u16)),
        TypeTag::U32 => Ok(OptionValue::U32(i.clamp(0, u32::MAX as i128) as u32)),
        TypeTag::U64 => Ok(OptionValue::U64(i.clamp(0, u64::MAX as i128) as u64)),
        TypeTag::F32 => Ok(OptionValue::F32(i as f32)),
        TypeTag::F64 => Ok(OptionValue::F64(i as f64)),
        _ => Err(mismatch(tag, &i.to_string(), path)),
    }
}

/// Clamp a numeric value into the effective display bounds.
fn clamp(value: OptionValue, bounds: Option<Bounds>) -> OptionValue {
    let Some(bounds) = bounds else {
        return value;
    };
    match (value, bounds) {
        (OptionValue::I8(v), Bounds::Int { min, max }) => {
            OptionValue::I8((v as i128).clamp(min, max) as i8)
        }
        (OptionValue::I16(v), Bounds::Int { min, max }) => {
            OptionValue::I16((v as i128).clamp(min, max) as i16)
        }
        (OptionValue::I32(v), Bounds::Int { min, max }) => {
            OptionValue::I32((v as i128).clamp(min, max) as i32)
        }
        (OptionValue::I64(v), Bounds::Int { min, max }) => {
            OptionValue::I64((v as i128).clamp(min, max) as i64)
        }
        (OptionValue::U8(v), Bounds::Int { min, max }) => {
            OptionValue::U8((v as i128).clamp(min, max) as u8)
        }
        (OptionValue::U16(v), Bounds::Int { min, max }) => {
            OptionValue::U16((v as i128).clamp(min, max) as u16)
        }
        (OptionValue::U32(v), Bounds::Int { min, max }) => {
            OptionValue::U32((v as i128).clamp(min, max) as u32)
        }
        (OptionValue::U64(v), Bounds::Int { min, max }) => {
            OptionValue::U64((v as i128).clamp(min, max) as u64)
        }
        (OptionValue::F32(v), Bounds::Float { min, max }) => {
            OptionValue::F32(v.clamp(min as f32, max as f32))
        }
        (OptionValue::F64(v), Bounds::Float { min, max }) => {
            OptionValue::F64(v.clamp(min, max))
        }
        (other, _) => other,
    }
}

fn mismatch(tag: &TypeTag, actual: &str, path: &str) -> DecodeError {
    DecodeError::TypeMismatch {
        path: path.to_string(),
        expected: tag.describe().to_string(),
        actual: actual.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Settings {
        Settings::builder()
            .wrapped("Volume", TypeTag::U8, "80|Audio|Output|volume|0|100")
            .wrapped("Brightness", TypeTag::I8, "0|Display")
            .wrapped("Scale", TypeTag::F64, "1|Display")
            .wrapped("Hotkey", TypeTag::Keys, "Ctrl + S|Hotkeys")
            .wrapped("Editor", TypeTag::Font, "Consolas|Appearance")
            .wrapped(
                "Format",
                TypeTag::Choice {
                    variants: vec!["Jpeg".into(), "Png".into()],
                    color_names: false,
                },
                "Png|Output",
            )
            .plain("Title", TypeTag::Text, "untitled")
            .build()
            .unwrap()
    }

    #[test]
    fn out_of_range_integer_clamps_to_declared_bound() {
        let mut settings = sample();
        let mut session = Session::default();
        apply(&mut settings, &mut session, "Volume", Edited::Int(250)).unwrap();
        assert_eq!(settings.get("Volume"), Some(&OptionValue::U8(100)));
    }

    #[test]
    fn out_of_range_integer_clamps_to_natural_bound() {
        let mut settings = sample();
        let mut session = Session::default();
        apply(&mut settings, &mut session, "Brightness", Edited::Int(-500)).unwrap();
        assert_eq!(settings.get("Brightness"), Some(&OptionValue::I8(-127)));
    }

    #[test]
    fn successful_write_marks_the_session_dirty() {
        let mut settings = sample();
        let mut session = Session::default();
        assert!(!session.dirty);
        apply(&mut settings, &mut session, "Volume", Edited::Int(42)).unwrap();
        assert!(session.dirty);
        assert_eq!(settings.get("Volume"), Some(&OptionValue::U8(42)));
    }

    #[test]
    fn conversion_failure_leaves_store_unmodified() {
        let mut settings = sample();
        let mut session = Session::default();
        settings.set("Format", OptionValue::Text("sentinel".into()));
        let err = apply(
            &mut settings,
            &mut session,
            "Format",
            Edited::Text("Webp".into()),
        )
        .unwrap_err();
        match err {
            WriteError::Conversion {
                name, attempted, ..
            } => {
                assert_eq!(name, "Format");
                assert_eq!(attempted, "Webp");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            settings.get("Format"),
            Some(&OptionValue::Text("sentinel".into()))
        );
        assert!(!session.dirty);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let mut settings = sample();
        let mut session = Session::default();
        let err = apply(&mut settings, &mut session, "Nope", Edited::Bool(true)).unwrap_err();
        assert!(matches!(err, WriteError::UnknownField { name } if name == "Nope"));
    }

    #[test]
    fn font_name_is_rewrapped() {
        let mut settings = sample();
        let mut session = Session::default();
        apply(
            &mut settings,
            &mut session,
            "Editor",
            Edited::Text("Fira Code".into()),
        )
        .unwrap();
        assert_eq!(
            settings.get("Editor"),
            Some(&OptionValue::Font(FontFamily::new("Fira Code")))
        );
    }

    #[test]
    fn key_combo_converts_through_its_parser() {
        let mut settings = sample();
        let mut session = Session::default();
        apply(
            &mut settings,
            &mut session,
            "Hotkey",
            Edited::Text("ctrl + shift + p".into()),
        )
        .unwrap();
        let stored = settings.get("Hotkey").unwrap();
        assert_eq!(stored.to_string(), "Ctrl + Shift + P");
    }

    #[test]
    fn typed_pass_through_must_match_the_declared_type() {
        let mut settings = sample();
        let mut session = Session::default();
        let err = apply(
            &mut settings,
            &mut session,
            "Volume",
            Edited::Value(OptionValue::Bool(true)),
        )
        .unwrap_err();
        assert!(matches!(err, WriteError::Conversion { .. }));
    }

    #[test]
    fn float_edit_rounds_into_integer_fields() {
        let mut settings = sample();
        let mut session = Session::default();
        apply(&mut settings, &mut session, "Volume", Edited::Float(41.6)).unwrap();
        assert_eq!(settings.get("Volume"), Some(&OptionValue::U8(42)));
    }

    #[test]
    fn fractional_bound_clamps_without_truncation() {
        let mut settings = Settings::builder()
            .wrapped("Opacity", TypeTag::F64, "0.5|Display|Window|opacity|0|0.9")
            .build()
            .unwrap();
        let mut session = Session::default();
        // Inside the declared bounds; stored untouched.
        apply(&mut settings, &mut session, "Opacity", Edited::Float(0.7)).unwrap();
        assert_eq!(settings.get("Opacity"), Some(&OptionValue::F64(0.7)));
        // Outside; clamped to the fractional bound itself.
        apply(&mut settings, &mut session, "Opacity", Edited::Float(1.5)).unwrap();
        assert_eq!(settings.get("Opacity"), Some(&OptionValue::F64(0.9)));
    }

    #[test]
    fn float_field_accepts_float_edit() {
        let mut settings = sample();
        let mut session = Session::default();
        apply(&mut settings, &mut session, "Scale", Edited::Float(1.25)).unwrap();
        assert_eq!(settings.get("Scale"), Some(&OptionValue::F64(1.25)));
    }
}
