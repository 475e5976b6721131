//! Typed option values and their schema tags.
//!
//! The supported value domains form a closed set: a field declares a
//! [`TypeTag`] in the schema and its live value is an [`OptionValue`] of
//! the matching variant. Everything downstream (codec, dispatcher,
//! writer) is a match over these variants.

use crate::data::color::Color;
use crate::data::font::FontFamily;
use crate::data::keys::KeyCombo;
use crate::error::DecodeError;
use std::fmt;

/// Schema-declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// Free text.
    Text,
    /// ARGB color.
    Color,
    /// Font-family name.
    Font,
    /// Modifier + key combination.
    Keys,
    /// Enumerated choice over declared variant labels.
    Choice {
        /// Variant labels in declaration order.
        variants: Vec<String>,
        /// The variant set is the named-color enumeration (rendering hint).
        color_names: bool,
    },
}

impl TypeTag {
    /// Human-readable name used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TypeTag::Bool => "boolean",
            TypeTag::I8 => "8-bit signed integer",
            TypeTag::I16 => "16-bit signed integer",
            TypeTag::I32 => "32-bit signed integer",
            TypeTag::I64 => "64-bit signed integer",
            TypeTag::U8 => "8-bit unsigned integer",
            TypeTag::U16 => "16-bit unsigned integer",
            TypeTag::U32 => "32-bit unsigned integer",
            TypeTag::U64 => "64-bit unsigned integer",
            TypeTag::F32 => "32-bit float",
            TypeTag::F64 => "64-bit float",
            TypeTag::Text => "text",
            TypeTag::Color => "color",
            TypeTag::Font => "font family",
            TypeTag::Keys => "key combination",
            TypeTag::Choice { .. } => "choice",
        }
    }

    /// The default value for this type.
    pub fn default_value(&self) -> OptionValue {
        match self {
            TypeTag::Bool => OptionValue::Bool(false),
            TypeTag::I8 => OptionValue::I8(0),
            TypeTag::I16 => OptionValue::I16(0),
            TypeTag::I32 => OptionValue::I32(0),
            TypeTag::I64 => OptionValue::I64(0),
            TypeTag::U8 => OptionValue::U8(0),
            TypeTag::U16 => OptionValue::U16(0),
            TypeTag::U32 => OptionValue::U32(0),
            TypeTag::U64 => OptionValue::U64(0),
            TypeTag::F32 => OptionValue::F32(0.0),
            TypeTag::F64 => OptionValue::F64(0.0),
            TypeTag::Text => OptionValue::Text(String::new()),
            TypeTag::Color => OptionValue::Color(Color::default()),
            TypeTag::Font => OptionValue::Font(FontFamily::default()),
            TypeTag::Keys => OptionValue::Keys(KeyCombo::default()),
            TypeTag::Choice {
                variants,
                color_names,
            } => OptionValue::Choice(ChoiceValue {
                variants: variants.clone(),
                selected: 0,
                color_names: *color_names,
            }),
        }
    }

    /// Whether a value carries the variant this tag declares.
    pub fn matches(&self, value: &OptionValue) -> bool {
        matches!(
            (self, value),
            (TypeTag::Bool, OptionValue::Bool(_))
                | (TypeTag::I8, OptionValue::I8(_))
                | (TypeTag::I16, OptionValue::I16(_))
                | (TypeTag::I32, OptionValue::I32(_))
                | (TypeTag::I64, OptionValue::I64(_))
                | (TypeTag::U8, OptionValue::U8(_))
                | (TypeTag::U16, OptionValue::U16(_))
                | (TypeTag::U32, OptionValue::U32(_))
                | (TypeTag::U64, OptionValue::U64(_))
                | (TypeTag::F32, OptionValue::F32(_))
                | (TypeTag::F64, OptionValue::F64(_))
                | (TypeTag::Text, OptionValue::Text(_))
                | (TypeTag::Color, OptionValue::Color(_))
                | (TypeTag::Font, OptionValue::Font(_))
                | (TypeTag::Keys, OptionValue::Keys(_))
                | (TypeTag::Choice { .. }, OptionValue::Choice(_))
        )
    }

    /// String-like tags never carry numeric bounds.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            TypeTag::Text | TypeTag::Font | TypeTag::Keys | TypeTag::Choice { .. }
        )
    }
}

/// A live typed value of a configuration field.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Text(String),
    Color(Color),
    Font(FontFamily),
    Keys(KeyCombo),
    Choice(ChoiceValue),
    /// Synthetic manage-page action, never stored in the settings store.
    Trigger(ManageAction),
}

impl OptionValue {
    /// Numeric magnitude for bound comparisons, if this is an integer value.
    pub fn as_int(&self) -> Option<i128> {
        match self {
            OptionValue::I8(v) => Some(*v as i128),
            OptionValue::I16(v) => Some(*v as i128),
            OptionValue::I32(v) => Some(*v as i128),
            OptionValue::I64(v) => Some(*v as i128),
            OptionValue::U8(v) => Some(*v as i128),
            OptionValue::U16(v) => Some(*v as i128),
            OptionValue::U32(v) => Some(*v as i128),
            OptionValue::U64(v) => Some(*v as i128),
            _ => None,
        }
    }

    /// Numeric value for bound comparisons, if this is a float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            OptionValue::F32(v) => Some(*v as f64),
            OptionValue::F64(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    /// Canonical string form, the exact inverse of the codec's value parse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(v) => write!(f, "{v}"),
            OptionValue::I8(v) => write!(f, "{v}"),
            OptionValue::I16(v) => write!(f, "{v}"),
            OptionValue::I32(v) => write!(f, "{v}"),
            OptionValue::I64(v) => write!(f, "{v}"),
            OptionValue::U8(v) => write!(f, "{v}"),
            OptionValue::U16(v) => write!(f, "{v}"),
            OptionValue::U32(v) => write!(f, "{v}"),
            OptionValue::U64(v) => write!(f, "{v}"),
            OptionValue::F32(v) => write!(f, "{v}"),
            OptionValue::F64(v) => write!(f, "{v}"),
            OptionValue::Text(v) => f.write_str(v),
            OptionValue::Color(v) => write!(f, "{v}"),
            OptionValue::Font(v) => write!(f, "{v}"),
            OptionValue::Keys(v) => write!(f, "{v}"),
            OptionValue::Choice(v) => write!(f, "{v}"),
            OptionValue::Trigger(v) => write!(f, "{v}"),
        }
    }
}

/// Enum selection over declared variant labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceValue {
    /// List of variant labels.
    pub variants: Vec<String>,
    /// Selected variant index.
    pub selected: usize,
    /// The variant set is the named-color enumeration.
    pub color_names: bool,
}

impl ChoiceValue {
    /// The selected variant label, if the index is in range.
    pub fn selected_str(&self) -> Option<&str> {
        self.variants.get(self.selected).map(String::as_str)
    }

    /// Select a variant by label, case-insensitively.
    pub fn select(&mut self, label: &str, path: &str) -> Result<(), DecodeError> {
        match self
            .variants
            .iter()
            .position(|v| v.eq_ignore_ascii_case(label))
        {
            Some(idx) => {
                self.selected = idx;
                Ok(())
            }
            None => Err(DecodeError::UnknownChoice {
                path: path.to_string(),
                variants: self.variants.clone(),
                actual: label.to_string(),
            }),
        }
    }
}

impl fmt::Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selected_str().unwrap_or(""))
    }
}

/// Synthetic manage-page actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageAction {
    /// Export all settings to a JSON file.
    Export,
    /// Import settings from a JSON file.
    Import,
    /// Restore every setting to its schema default.
    Restore,
}

impl ManageAction {
    /// Entry name shown for this action.
    pub const fn label(self) -> &'static str {
        match self {
            ManageAction::Export => "Export now",
            ManageAction::Import => "Import now",
            ManageAction::Restore => "Restore default",
        }
    }
}

impl fmt::Display for ManageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
