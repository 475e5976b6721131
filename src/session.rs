//! Per-editing-session context.
//!
//! One [`Session`] lives for the duration of an editing session and holds
//! the knobs that were process-wide statics in older option editors: the
//! serialized-option separator, the dirty flag gating the save prompt, and
//! the display preferences the renderer consults.

/// Editing-session state shared by the model builder, dispatcher and writer.
#[derive(Debug, Clone)]
pub struct Session {
    /// Field separator for the serialized option format.
    pub separator: char,
    /// Decimal places shown for floating-point editors.
    pub decimal_places: u32,
    /// Substitute `"Default"` for an empty group name.
    pub show_default_group_name: bool,
    /// Append the export/import/restore trigger entries.
    pub show_manage_page: bool,
    /// Strip the part before the first underscore from tree display labels.
    pub split_tree_on_underscore: bool,
    /// Strip the part before the first underscore from group display labels.
    pub split_group_on_underscore: bool,
    /// Insert spaces between camel-case words in group display labels.
    pub space_camel_case_group: bool,
    /// Insert spaces between camel-case words in field display labels.
    pub space_camel_case_label: bool,
    /// Also split on letter/digit boundaries when spacing camel case.
    pub space_camel_case_number: bool,
    /// Whether any write succeeded since the session started.
    pub dirty: bool,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            separator: '|',
            decimal_places: 2,
            show_default_group_name: true,
            show_manage_page: true,
            split_tree_on_underscore: false,
            split_group_on_underscore: false,
            space_camel_case_group: true,
            space_camel_case_label: true,
            space_camel_case_number: true,
            dirty: false,
        }
    }
}

impl Session {
    /// Create a session with default settings.
    pub fn new() -> Self {
        Session::default()
    }

    /// Create a session with a non-default option separator.
    pub fn with_separator(separator: char) -> Self {
        Session {
            separator,
            ..Session::default()
        }
    }
}
