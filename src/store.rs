//! Declared settings schema and live value store.
//!
//! The schema is an explicit manifest: every field declares a name, a
//! [`TypeTag`], a default serialized value, and whether it is wrapped in
//! the option envelope (value plus tree/group/description/bounds
//! metadata). The store owns the live typed values and can persist them
//! as TOML or JSON, chosen by file extension, with a timestamped backup
//! before overwriting.

use std::{
    collections::HashMap,
    fs,
    path::Path,
    time::SystemTime,
};

use anyhow::{Context, bail};
use log::warn;

use crate::codec::{self, DecodedOption};
use crate::data::value::{OptionValue, TypeTag};
use crate::error::{ConfigError, DecodeError};

/// One declared configuration field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name, unique within the schema.
    pub name: String,
    /// Declared value type.
    pub tag: TypeTag,
    /// Default in serialized form: a full option string for wrapped
    /// fields, a bare value string for plain ones.
    pub default: String,
    /// Whether the field carries option-envelope metadata.
    pub wrapped: bool,
}

impl FieldSpec {
    /// Decode this field's default string into structured form.
    ///
    /// Plain fields parse the bare value and carry empty metadata; the
    /// model builder applies the default-name fallback afterwards.
    pub fn default_decoded(&self, separator: char) -> Result<DecodedOption, DecodeError> {
        if self.wrapped {
            codec::decode(&self.default, &self.tag, separator, &self.name)
        } else {
            Ok(DecodedOption {
                value: codec::parse_value(&self.default, &self.tag, &self.name)?,
                tree_name: String::new(),
                group_name: String::new(),
                description: String::new(),
                min: None,
                max: None,
            })
        }
    }
}

/// Schema manifest plus live values.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    fields: Vec<FieldSpec>,
    values: HashMap<String, OptionValue>,
}

impl Settings {
    /// Start declaring a schema.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder { fields: Vec::new() }
    }

    /// All declared fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The live value of a field, if one has been set or seeded.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Store a live value.
    pub fn set(&mut self, name: &str, value: OptionValue) {
        self.values.insert(name.to_string(), value);
    }

    /// Store a value only when none is present yet.
    pub(crate) fn seed(&mut self, name: &str, value: OptionValue) {
        self.values.entry(name.to_string()).or_insert(value);
    }

    /// Drop every live value; defaults are re-derived on the next build.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Persist live values to `path` as TOML or JSON by extension.
    ///
    /// An existing file is first copied to a `bk-<unix-secs>.<ext>`
    /// sibling. Values are written in their canonical string form.
    pub fn save_to(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let content = match ext {
            "toml" | "tml" => {
                let mut table = toml::map::Map::new();
                for field in &self.fields {
                    if let Some(value) = self.values.get(&field.name) {
                        table.insert(
                            field.name.clone(),
                            toml::Value::String(value.to_string()),
                        );
                    }
                }
                toml::to_string_pretty(&table)?
            }
            "json" => {
                let mut map = serde_json::Map::new();
                for field in &self.fields {
                    if let Some(value) = self.values.get(&field.name) {
                        map.insert(
                            field.name.clone(),
                            serde_json::Value::String(value.to_string()),
                        );
                    }
                }
                serde_json::to_string_pretty(&map)?
            }
            _ => {
                bail!("Unsupported settings file extension: {ext:?}");
            }
        };

        if path.exists() {
            let bk = format!(
                "bk-{}.{ext}",
                SystemTime::now()
                    .duration_since(SystemTime::UNIX_EPOCH)?
                    .as_secs()
            );
            fs::copy(path, path.with_extension(bk))?;
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Load live values from a previously saved file.
    ///
    /// Unknown names and unparsable values are skipped with a warning;
    /// persistence is lenient where import is strict.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let pairs: Vec<(String, String)> = match ext {
            "toml" | "tml" => {
                let table: toml::Table = toml::from_str(&content)?;
                table
                    .into_iter()
                    .map(|(k, v)| match v {
                        toml::Value::String(s) => (k, s),
                        other => (k, other.to_string()),
                    })
                    .collect()
            }
            "json" => {
                let map: serde_json::Map<String, serde_json::Value> =
                    serde_json::from_str(&content)?;
                map.into_iter()
                    .map(|(k, v)| match v {
                        serde_json::Value::String(s) => (k, s),
                        other => (k, other.to_string()),
                    })
                    .collect()
            }
            _ => {
                bail!("Unsupported settings file extension: {ext:?}");
            }
        };

        for (name, raw) in pairs {
            let Some(field) = self.field(&name) else {
                warn!("ignoring unknown settings field {name:?}");
                continue;
            };
            let tag = field.tag.clone();
            match codec::parse_value(&raw, &tag, &name) {
                Ok(value) => self.set(&name, value),
                Err(err) => warn!("ignoring unparsable value for {name:?}: {err}"),
            }
        }
        Ok(())
    }
}

/// Incremental schema declaration.
pub struct SettingsBuilder {
    fields: Vec<FieldSpec>,
}

impl SettingsBuilder {
    /// Declare an option-wrapped field; `default` is a full option string.
    pub fn wrapped(
        mut self,
        name: impl Into<String>,
        tag: TypeTag,
        default: impl Into<String>,
    ) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            tag,
            default: default.into(),
            wrapped: true,
        });
        self
    }

    /// Declare a plain field; `default` is a bare value string.
    pub fn plain(
        mut self,
        name: impl Into<String>,
        tag: TypeTag,
        default: impl Into<String>,
    ) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            tag,
            default: default.into(),
            wrapped: false,
        });
        self
    }

    /// Finish the declaration, rejecting duplicate names.
    pub fn build(self) -> Result<Settings, ConfigError> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ConfigError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Settings {
            fields: self.fields,
            values: HashMap::new(),
        })
    }
}
