//! Error taxonomy for the settings model engine.
//!
//! Each concern carries its own error type:
//!
//! - [`ConfigError`] - fatal schema problems, abort model construction
//! - [`DecodeError`] - malformed option string, fatal to one entry only
//! - [`WriteError`] - write-back conversion failure, store left unchanged
//! - [`ImportError`] - malformed import document, whole import aborted

use thiserror::Error;

/// Fatal configuration source problems.
///
/// These abort model construction entirely and are surfaced to the caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings schema declares no fields at all.
    #[error("settings schema declares no fields")]
    EmptySchema,

    /// Two fields share the same name.
    #[error("duplicate field name: {0}")]
    DuplicateField(String),
}

/// Malformed option string for a type demanding strict parsing.
///
/// A decode failure is fatal to the single entry being decoded; the
/// model builder falls back to the type default instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The raw text does not parse as the expected value type.
    #[error("{path}: expected {expected}, got {actual:?}")]
    TypeMismatch {
        /// Field name being decoded.
        path: String,
        /// Human-readable expected type.
        expected: String,
        /// The offending raw text.
        actual: String,
    },

    /// Neither a known color name nor a hexadecimal ARGB string.
    #[error("{path}: unknown color {actual:?}")]
    UnknownColor { path: String, actual: String },

    /// Selected label is not one of the declared choice variants.
    #[error("{path}: expected one of {variants:?}, got {actual:?}")]
    UnknownChoice {
        path: String,
        variants: Vec<String>,
        actual: String,
    },

    /// A key-combination token matched no modifier and no key name.
    #[error("{path}: unknown key token {token:?}")]
    UnknownKeyToken { path: String, token: String },

    /// More than one non-modifier token in a key combination.
    #[error("{path}: extra key token {token:?}")]
    ExtraKeyToken { path: String, token: String },

    /// No terminal key token in a key combination.
    #[error("{path}: key combination has no terminal key")]
    MissingKeyToken { path: String },

    /// Declared bounds do not satisfy `min <= max`.
    #[error("{path}: min bound exceeds max bound")]
    InvalidBounds { path: String },
}

/// Write-back conversion failure.
///
/// The store is left unchanged; the error carries the entry name and the
/// attempted value so the caller can report it without consulting logs.
#[derive(Debug, Error)]
pub enum WriteError {
    /// No field with this name exists in the schema.
    #[error("no such field: {name}")]
    UnknownField { name: String },

    /// The edited value could not be converted to the field's type.
    #[error("cannot write {name}: value {attempted:?} not accepted")]
    Conversion {
        /// Field name the write targeted.
        name: String,
        /// String form of the rejected value.
        attempted: String,
        #[source]
        source: DecodeError,
    },
}

/// Malformed or incomplete import document.
///
/// Any variant aborts the entire import; no partial state is committed.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The document is not valid JSON of the expected shape.
    #[error("import document is not valid JSON")]
    Malformed(#[from] serde_json::Error),

    /// The document contains no records.
    #[error("import document contains no entries")]
    Empty,

    /// A record has an empty `Name` field.
    #[error("import entry {index} has an empty name")]
    EmptyName { index: usize },

    /// A record names a field the schema does not declare.
    #[error("import entry names unknown field {name:?}")]
    UnknownField { name: String },

    /// A record's value failed to convert to the field's type.
    #[error("import value for {name:?} is invalid")]
    Value {
        name: String,
        #[source]
        source: DecodeError,
    },

    /// The import file could not be read.
    #[error("failed to read import file")]
    Io(#[from] std::io::Error),
}
