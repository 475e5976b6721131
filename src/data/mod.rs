//! Core value and entry types.
//!
//! This module holds the closed set of value domains the engine supports
//! and the record type the renderer consumes:
//!
//! - [`value`] - typed values and their schema tags
//! - [`entry`] - the displayable configuration entry
//! - [`color`] - ARGB color values
//! - [`font`] - font-family values
//! - [`keys`] - key-combination values

/// ARGB color values.
pub mod color;

/// The displayable configuration entry.
pub mod entry;

/// Font-family values.
pub mod font;

/// Key-combination values.
pub mod keys;

/// Typed option values and schema tags.
pub mod value;

pub use color::Color;
pub use entry::ConfigEntry;
pub use font::FontFamily;
pub use keys::{Key, KeyCombo};
pub use value::{ChoiceValue, ManageAction, OptionValue, TypeTag};
