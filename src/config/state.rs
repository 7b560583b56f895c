// src/config/state.rs
use std::collections::HashSet;

use super::options::AppOptions;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Live search box contents; every edit refilters.
    pub search_query: String,

    /// Exact-match role filter; empty means any role.
    pub role_filter: String,

    /// Member codes whose checkbox is checked. Keyed by code, never by row
    /// position, so refiltering cannot misattribute a selection.
    pub selected_codes: HashSet<String>,

    /// Free-text exam code for the export filename and payload.
    pub exam_code: String,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
