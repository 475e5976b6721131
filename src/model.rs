//! Model construction and display ordering.
//!
//! [`build`] walks the declared schema in declaration order, decodes each
//! wrapped field's default option string for its metadata, reads the live
//! value from the store (seeding it with the default when absent), applies
//! the default-name fallback, sorts by (tree, group, seq), and optionally
//! appends the reserved manage-page trigger entries.

use std::cmp::Ordering;

use log::warn;

use crate::codec::{DEFAULT_NAME, DecodedOption};
use crate::data::entry::ConfigEntry;
use crate::data::value::{ManageAction, OptionValue};
use crate::error::ConfigError;
use crate::session::Session;
use crate::store::Settings;

/// Reserved tree name for the manage-page entries.
pub const MANAGE_TREE: &str = "ManageSettings";

/// Group name for the manage-page entries.
pub const MANAGE_GROUP: &str = "Managing settings";

/// Build the ordered entry list for a settings store.
///
/// The list is rebuilt wholesale on every call; callers discard any
/// previous list. A schema declaring zero fields is a fatal
/// [`ConfigError`]. A single entry whose default fails to decode falls
/// back to its type default and is logged, not fatal.
pub fn build(settings: &mut Settings, session: &Session) -> Result<Vec<ConfigEntry>, ConfigError> {
    if settings.fields().is_empty() {
        return Err(ConfigError::EmptySchema);
    }

    let specs = settings.fields().to_vec();
    let mut entries = Vec::with_capacity(specs.len());
    let mut seq: u32 = 0;

    for spec in specs {
        let decoded = match spec.default_decoded(session.separator) {
            Ok(d) => d,
            Err(err) => {
                warn!("default for {} failed to decode: {err}", spec.name);
                let mut fallback = DecodedOption::defaults(&spec.tag);
                if !spec.wrapped {
                    fallback.tree_name.clear();
                    fallback.group_name.clear();
                }
                fallback
            }
        };

        // The live value is independent of the schema default; when it is
        // absent the default-derived value becomes both the live and the
        // stored value.
        let value = match settings.get(&spec.name) {
            Some(v) => v.clone(),
            None => {
                settings.seed(&spec.name, decoded.value.clone());
                decoded.value.clone()
            }
        };

        let tree_name = if decoded.tree_name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            decoded.tree_name
        };
        let group_name = if decoded.group_name.is_empty() {
            if session.show_default_group_name {
                DEFAULT_NAME.to_string()
            } else {
                String::new()
            }
        } else {
            decoded.group_name
        };

        entries.push(ConfigEntry {
            name: spec.name,
            value,
            tree_name,
            group_name,
            description: decoded.description,
            seq,
            min: decoded.min,
            max: decoded.max,
        });
        seq += 1;
    }

    entries.sort_by(compare);

    // Manage entries form their own reserved tree and always sort last.
    if session.show_manage_page {
        for action in [
            ManageAction::Export,
            ManageAction::Import,
            ManageAction::Restore,
        ] {
            entries.push(ConfigEntry {
                name: action.label().to_string(),
                value: OptionValue::Trigger(action),
                tree_name: MANAGE_TREE.to_string(),
                group_name: MANAGE_GROUP.to_string(),
                description: action.label().to_string(),
                seq,
                min: None,
                max: None,
            });
            seq += 1;
        }
    }

    Ok(entries)
}

/// Total-order comparator over (tree, group, seq).
///
/// `seq` is unique per build, so no two distinct entries compare equal
/// and the order is stable across rebuilds of the same schema.
pub fn compare(a: &ConfigEntry, b: &ConfigEntry) -> Ordering {
    a.tree_name
        .cmp(&b.tree_name)
        .then_with(|| a.group_name.cmp(&b.group_name))
        .then_with(|| a.seq.cmp(&b.seq))
}
