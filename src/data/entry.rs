//! The central display record.

use crate::data::value::OptionValue;

/// One displayable configuration entry.
///
/// Entries are rebuilt wholesale on every (re)load of the settings store;
/// none survives past a rebuild. `seq` preserves declaration order and is
/// the final sort tie-break, which makes the (tree, group, seq) order
/// total.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    /// Property identifier, unique within one store.
    pub name: String,
    /// Current typed value (a display copy; the store owns the live value).
    pub value: OptionValue,
    /// Top-level grouping key, never empty after fallback.
    pub tree_name: String,
    /// Second-level grouping key.
    pub group_name: String,
    /// Hover help text, may be empty.
    pub description: String,
    /// Declaration-order ordinal, strictly increasing.
    pub seq: u32,
    /// Inclusive lower bound, numeric tags only.
    pub min: Option<OptionValue>,
    /// Inclusive upper bound, numeric tags only.
    pub max: Option<OptionValue>,
}
