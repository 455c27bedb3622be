//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::Focus;
use crate::models::CountryRecord;

/// Fetch dimension of the view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewPhase {
    #[default]
    Loading,
    Errored(String),
    Loaded,
}

/// One row of the filtered list
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRow {
    pub record: CountryRecord,
    /// Drives the filled/empty star
    pub is_favorite: bool,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub phase: ViewPhase,

    // Search input
    pub search_text: String,
    pub cursor_position: usize,
    /// False when the trimmed search text is empty; the list section is then blank
    pub searching: bool,

    // Filtered list
    pub rows: Vec<CountryRow>,
    pub selected_row: usize,
    pub total_records: usize,

    // Favorites panel, already resolved against the current records
    pub favorites: Vec<CountryRecord>,
    /// True when any id is favorited, even if none of them resolve anymore
    pub has_favorite_ids: bool,
    pub selected_favorite: usize,

    // UI state
    pub focus: Focus,
    pub show_help: bool,
    pub fetch_time_ms: u64,
}

impl RenderState {
    /// List and favorites controls are only reachable once the catalog loaded
    pub fn is_interactive(&self) -> bool {
        self.phase == ViewPhase::Loaded
    }
}
