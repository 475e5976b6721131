//! Editor archetype classification.
//!
//! [`classify`] maps an entry's value to the editor widget category the
//! renderer should build, with the numeric bounds and precision to apply.
//! Integer bounds are exactly the type's natural range; floating values
//! default to the widest integer display range regardless of their true
//! numeric range (long-standing display behavior, kept as-is), with
//! fractional declared bounds kept exact.

use crate::data::entry::ConfigEntry;
use crate::data::value::{ManageAction, OptionValue, TypeTag};
use crate::session::Session;

// Natural display ranges, shared by classification and write-time
// clamping. The -127 lower bound for 8-bit signed is long-standing
// display behavior, kept as-is.
const I8_RANGE: (i128, i128) = (-127, 127);
const I16_RANGE: (i128, i128) = (i16::MIN as i128, i16::MAX as i128);
const I32_RANGE: (i128, i128) = (i32::MIN as i128, i32::MAX as i128);
const I64_RANGE: (i128, i128) = (i64::MIN as i128, i64::MAX as i128);
const U8_RANGE: (i128, i128) = (0, u8::MAX as i128);
const U16_RANGE: (i128, i128) = (0, u16::MAX as i128);
const U32_RANGE: (i128, i128) = (0, u32::MAX as i128);
const U64_RANGE: (i128, i128) = (0, u64::MAX as i128);

/// Default display bounds for floating-point editors.
const FLOAT_RANGE: (f64, f64) = (i64::MIN as f64, u64::MAX as f64);

/// The editor widget category assigned to an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorArchetype {
    /// Action button for a manage-page entry.
    Trigger(ManageAction),
    /// Numeric up/down over whole numbers.
    Integer { min: i128, max: i128 },
    /// Numeric up/down with decimal places.
    Decimal { places: u32, min: f64, max: f64 },
    /// Combo box over declared variant labels.
    Choice {
        variants: Vec<String>,
        /// Render swatches: the variants are named colors.
        is_color: bool,
    },
    /// R/G/B channel spinners plus a color swatch box.
    ColorComposite,
    /// Combo box over installed font families.
    FontChoice,
    /// Two-state checkbox.
    Checkbox,
    /// Free-text box.
    TextBox,
}

/// Numeric bounds, integer or floating per the value's type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Bounds {
    Int { min: i128, max: i128 },
    Float { min: f64, max: f64 },
}

impl Bounds {
    fn int((min, max): (i128, i128)) -> Self {
        Bounds::Int { min, max }
    }

    fn float((min, max): (f64, f64)) -> Self {
        Bounds::Float { min, max }
    }
}

/// Natural display bounds of a numeric type, if it has any.
pub(crate) fn natural_bounds(tag: &TypeTag) -> Option<Bounds> {
    Some(match tag {
        TypeTag::I8 => Bounds::int(I8_RANGE),
        TypeTag::I16 => Bounds::int(I16_RANGE),
        TypeTag::I32 => Bounds::int(I32_RANGE),
        TypeTag::I64 => Bounds::int(I64_RANGE),
        TypeTag::U8 => Bounds::int(U8_RANGE),
        TypeTag::U16 => Bounds::int(U16_RANGE),
        TypeTag::U32 => Bounds::int(U32_RANGE),
        TypeTag::U64 => Bounds::int(U64_RANGE),
        TypeTag::F32 | TypeTag::F64 => Bounds::float(FLOAT_RANGE),
        _ => return None,
    })
}

/// Effective bounds for an entry: explicit decoded bounds override the
/// type-derived defaults; a missing side keeps the default. Bounds on
/// floating types stay floating, so a fractional bound keeps its
/// fraction.
pub(crate) fn effective_bounds(
    tag: &TypeTag,
    min: &Option<OptionValue>,
    max: &Option<OptionValue>,
) -> Option<Bounds> {
    Some(match natural_bounds(tag)? {
        Bounds::Int { min: lo, max: hi } => Bounds::int(override_int((lo, hi), min, max)),
        Bounds::Float { min: lo, max: hi } => Bounds::float(override_float((lo, hi), min, max)),
    })
}

fn override_int(
    (mut lo, mut hi): (i128, i128),
    min: &Option<OptionValue>,
    max: &Option<OptionValue>,
) -> (i128, i128) {
    if let Some(m) = min.as_ref().and_then(int_bound) {
        lo = m;
    }
    if let Some(m) = max.as_ref().and_then(int_bound) {
        hi = m;
    }
    (lo, hi)
}

fn override_float(
    (mut lo, mut hi): (f64, f64),
    min: &Option<OptionValue>,
    max: &Option<OptionValue>,
) -> (f64, f64) {
    if let Some(m) = min.as_ref().and_then(float_bound) {
        lo = m;
    }
    if let Some(m) = max.as_ref().and_then(float_bound) {
        hi = m;
    }
    (lo, hi)
}

fn int_bound(value: &OptionValue) -> Option<i128> {
    value
        .as_int()
        .or_else(|| value.as_float().map(|f| f as i128))
}

fn float_bound(value: &OptionValue) -> Option<f64> {
    value
        .as_float()
        .or_else(|| value.as_int().map(|i| i as f64))
}

/// Assign the editor archetype for one entry.
pub fn classify(entry: &ConfigEntry, session: &Session) -> EditorArchetype {
    match &entry.value {
        OptionValue::Trigger(action) => EditorArchetype::Trigger(*action),
        OptionValue::Bool(_) => EditorArchetype::Checkbox,
        OptionValue::Choice(choice) => EditorArchetype::Choice {
            variants: choice.variants.clone(),
            is_color: choice.color_names,
        },
        OptionValue::Color(_) => EditorArchetype::ColorComposite,
        OptionValue::Font(_) => EditorArchetype::FontChoice,
        OptionValue::Text(_) | OptionValue::Keys(_) => EditorArchetype::TextBox,
        OptionValue::I8(_) => integer_editor(I8_RANGE, entry),
        OptionValue::I16(_) => integer_editor(I16_RANGE, entry),
        OptionValue::I32(_) => integer_editor(I32_RANGE, entry),
        OptionValue::I64(_) => integer_editor(I64_RANGE, entry),
        OptionValue::U8(_) => integer_editor(U8_RANGE, entry),
        OptionValue::U16(_) => integer_editor(U16_RANGE, entry),
        OptionValue::U32(_) => integer_editor(U32_RANGE, entry),
        OptionValue::U64(_) => integer_editor(U64_RANGE, entry),
        OptionValue::F32(_) | OptionValue::F64(_) => {
            let (min, max) = override_float(FLOAT_RANGE, &entry.min, &entry.max);
            EditorArchetype::Decimal {
                places: session.decimal_places,
                min,
                max,
            }
        }
    }
}

fn integer_editor(natural: (i128, i128), entry: &ConfigEntry) -> EditorArchetype {
    let (min, max) = override_int(natural, &entry.min, &entry.max);
    EditorArchetype::Integer { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::color::Color;
    use crate::data::font::FontFamily;
    use crate::data::keys::KeyCombo;

    fn entry(value: OptionValue) -> ConfigEntry {
        ConfigEntry {
            name: "e".into(),
            value,
            tree_name: "T".into(),
            group_name: "G".into(),
            description: String::new(),
            seq: 0,
            min: None,
            max: None,
        }
    }

    #[test]
    fn integer_bounds_are_the_natural_range() {
        let session = Session::default();
        let cases: [(OptionValue, i128, i128); 8] = [
            (OptionValue::I8(0), -127, 127),
            (OptionValue::I16(0), -0x8000, 0x7FFF),
            (OptionValue::I32(0), i32::MIN as i128, i32::MAX as i128),
            (OptionValue::I64(0), i64::MIN as i128, i64::MAX as i128),
            (OptionValue::U8(0), 0, 255),
            (OptionValue::U16(0), 0, 0xFFFF),
            (OptionValue::U32(0), 0, 4294967295),
            (OptionValue::U64(0), 0, u64::MAX as i128),
        ];
        for (value, lo, hi) in cases {
            let archetype = classify(&entry(value), &session);
            assert_eq!(archetype, EditorArchetype::Integer { min: lo, max: hi });
        }
    }

    #[test]
    fn floats_use_the_widest_display_range() {
        let session = Session::default();
        let archetype = classify(&entry(OptionValue::F64(0.0)), &session);
        assert_eq!(
            archetype,
            EditorArchetype::Decimal {
                places: 2,
                min: i64::MIN as f64,
                max: u64::MAX as f64,
            }
        );
    }

    #[test]
    fn decimal_places_come_from_the_session() {
        let session = Session {
            decimal_places: 4,
            ..Session::default()
        };
        let archetype = classify(&entry(OptionValue::F32(0.0)), &session);
        assert!(matches!(archetype, EditorArchetype::Decimal { places: 4, .. }));
    }

    #[test]
    fn decoded_bounds_override_type_bounds() {
        let mut e = entry(OptionValue::U8(5));
        e.min = Some(OptionValue::U8(1));
        e.max = Some(OptionValue::U8(100));
        let archetype = classify(&e, &Session::default());
        assert_eq!(archetype, EditorArchetype::Integer { min: 1, max: 100 });
    }

    #[test]
    fn fractional_bounds_keep_their_fraction() {
        let mut e = entry(OptionValue::F64(0.5));
        e.min = Some(OptionValue::F64(0.0));
        e.max = Some(OptionValue::F64(0.9));
        let archetype = classify(&e, &Session::default());
        assert_eq!(
            archetype,
            EditorArchetype::Decimal {
                places: 2,
                min: 0.0,
                max: 0.9,
            }
        );
    }

    #[test]
    fn one_sided_bound_keeps_the_other_default() {
        let mut e = entry(OptionValue::I32(0));
        e.max = Some(OptionValue::I32(10));
        let archetype = classify(&e, &Session::default());
        assert_eq!(
            archetype,
            EditorArchetype::Integer {
                min: i32::MIN as i128,
                max: 10
            }
        );
    }

    #[test]
    fn non_numeric_archetypes() {
        let session = Session::default();
        assert_eq!(
            classify(&entry(OptionValue::Bool(true)), &session),
            EditorArchetype::Checkbox
        );
        assert_eq!(
            classify(&entry(OptionValue::Color(Color::default())), &session),
            EditorArchetype::ColorComposite
        );
        assert_eq!(
            classify(&entry(OptionValue::Font(FontFamily::default())), &session),
            EditorArchetype::FontChoice
        );
        assert_eq!(
            classify(&entry(OptionValue::Text("x".into())), &session),
            EditorArchetype::TextBox
        );
        assert_eq!(
            classify(&entry(OptionValue::Keys(KeyCombo::default())), &session),
            EditorArchetype::TextBox
        );
        assert_eq!(
            classify(&entry(OptionValue::Trigger(ManageAction::Export)), &session),
            EditorArchetype::Trigger(ManageAction::Export)
        );
    }

    #[test]
    fn color_named_choice_is_flagged() {
        let value = OptionValue::Choice(crate::data::value::ChoiceValue {
            variants: vec!["Red".into(), "Blue".into()],
            selected: 0,
            color_names: true,
        });
        let archetype = classify(&entry(value), &Session::default());
        assert!(matches!(
            archetype,
            EditorArchetype::Choice { is_color: true, .. }
        ));
    }
}
