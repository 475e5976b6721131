//! Settings export, import and restore.
//!
//! The transfer document is a JSON array of `{"Name", "Value"}` records,
//! one per declared field in declaration order, with every value in its
//! canonical string form. Import is two-phase: every record is validated
//! and converted first, and nothing is committed unless all of them
//! succeed.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::data::value::OptionValue;
use crate::error::ImportError;
use crate::session::Session;
use crate::store::Settings;

/// One exported settings record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Snapshot every declared field as a `{Name, Value}` record.
///
/// A field with no live value yet exports its default-derived value, so
/// export works before the model has been built.
pub fn export(settings: &Settings, session: &Session) -> Vec<TransferEntry> {
    settings
        .fields()
        .iter()
        .map(|field| {
            let value = match settings.get(&field.name) {
                Some(v) => v.to_string(),
                None => field
                    .default_decoded(session.separator)
                    .map(|d| d.value.to_string())
                    .unwrap_or_default(),
            };
            TransferEntry {
                name: field.name.clone(),
                value,
            }
        })
        .collect()
}

/// Export as a pretty-printed JSON document.
pub fn export_json(settings: &Settings, session: &Session) -> anyhow::Result<String> {
    let entries = export(settings, session);
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Export to a JSON file.
pub fn export_to_file(
    settings: &Settings,
    session: &Session,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = export_json(settings, session)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Import a JSON transfer document.
///
/// Every record must carry a non-empty `Name` naming a declared field and
/// a convertible `Value`; any failure aborts the entire import with the
/// store unmodified. On success all values are committed and the dirty
/// flag is cleared.
pub fn import_json(
    settings: &mut Settings,
    session: &mut Session,
    json: &str,
) -> Result<(), ImportError> {
    let records: Vec<TransferEntry> = serde_json::from_str(json)?;
    if records.is_empty() {
        return Err(ImportError::Empty);
    }

    // Phase one: convert everything, committing nothing.
    let mut converted: Vec<(String, OptionValue)> = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.name.is_empty() {
            return Err(ImportError::EmptyName { index });
        }
        let Some(field) = settings.field(&record.name) else {
            return Err(ImportError::UnknownField {
                name: record.name.clone(),
            });
        };
        // Tolerate a full option string; only its value field matters.
        let raw = record
            .value
            .split(session.separator)
            .next()
            .unwrap_or_default();
        let value = codec::parse_value(raw, &field.tag, &record.name).map_err(|source| {
            ImportError::Value {
                name: record.name.clone(),
                source,
            }
        })?;
        converted.push((record.name.clone(), value));
    }

    // Phase two: commit.
    for (name, value) in converted {
        settings.set(&name, value);
    }
    session.dirty = false;
    Ok(())
}

/// Import from a JSON file.
pub fn import_from_file(
    settings: &mut Settings,
    session: &mut Session,
    path: impl AsRef<Path>,
) -> Result<(), ImportError> {
    let json = std::fs::read_to_string(path)?;
    import_json(settings, session, &json)
}

/// Reset every live value to its schema default.
///
/// The entry list must be rebuilt afterwards; the store differs from any
/// previously saved state, so the session is marked dirty.
pub fn restore(settings: &mut Settings, session: &mut Session) {
    settings.reset();
    session.dirty = true;
}
