//! # opttree
//!
//! A renderer-agnostic settings model engine for tree/group option
//! editors.
//!
//! opttree turns a declared settings schema into an ordered, grouped list
//! of editable entries, assigns each entry the editor widget category a
//! renderer should build, and converts edited values back into the store.
//! The renderer itself (windowing, layout, drawing) is an external
//! collaborator; this crate owns the synchronization and parsing core
//! only.
//!
//! ## Features
//!
//! - Pipe-delimited option format (configurable separator) carrying a
//!   value plus tree/group/description/bounds metadata
//! - Typed value domains: booleans, all integer widths, floats, text,
//!   ARGB colors, font families, key combinations, enumerated choices
//! - Deterministic (tree, group, declaration-order) display ordering
//! - Write-back with per-type conversion and write-time clamping
//! - JSON export/import with all-or-nothing import semantics
//! - TOML/JSON store persistence with automatic backup
//!
//! ## Quick Start
//!
//! ```rust
//! use opttree::{Session, Settings, TypeTag, model};
//!
//! let mut settings = Settings::builder()
//!     .wrapped("Volume", TypeTag::U8, "80|Audio|Output|Playback volume|0|100")
//!     .wrapped("Accent", TypeTag::Color, "FF8000|Appearance|Colors|Accent color")
//!     .build()
//!     .unwrap();
//!
//! let session = Session::new();
//! let entries = model::build(&mut settings, &session).unwrap();
//! for entry in &entries {
//!     let archetype = opttree::classify(entry, &session);
//!     println!("{} -> {archetype:?}", entry.name);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`data`] - typed values and the display entry record
//! - [`codec`] - serialized option format decode/encode
//! - [`store`] - schema manifest, live values, persistence
//! - [`model`] - entry-list construction and ordering
//! - [`dispatch`] - editor archetype classification
//! - [`writer`] - edited-value conversion and commit
//! - [`transfer`] - JSON export/import and restore
//! - [`labels`] - display-label helpers

/// Serialized option format decode/encode.
pub mod codec;

/// Core value and entry types.
pub mod data;

/// Editor archetype classification.
pub mod dispatch;

/// Error taxonomy.
pub mod error;

/// Display-label helpers.
pub mod labels;

/// Entry-list construction and ordering.
pub mod model;

/// Per-editing-session context.
pub mod session;

/// Schema manifest and live value store.
pub mod store;

/// JSON export/import and restore.
pub mod transfer;

/// Edited-value conversion and commit.
pub mod writer;

pub use codec::{DecodedOption, decode, encode};
pub use data::{
    ChoiceValue, Color, ConfigEntry, FontFamily, Key, KeyCombo, ManageAction, OptionValue, TypeTag,
};
pub use dispatch::{EditorArchetype, classify};
pub use error::{ConfigError, DecodeError, ImportError, WriteError};
pub use session::Session;
pub use store::{FieldSpec, Settings, SettingsBuilder};
pub use writer::{Edited, apply};
