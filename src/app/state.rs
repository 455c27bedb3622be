//! App state - pure data structure with no I/O logic

use crate::messages::render::{CountryRow, ViewPhase};
use crate::messages::ui_events::Focus;
use crate::messages::RenderState;
use crate::models::CountryRecord;

/// Records matching `search_text` by name or region, case-insensitively.
///
/// An empty (or all-whitespace) search yields no rows at all rather than
/// every record.
pub fn filter_countries<'a>(records: &'a [CountryRecord], search_text: &str) -> Vec<&'a CountryRecord> {
    let needle = search_text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    records.iter().filter(|r| r.matches(&needle)).collect()
}

/// The country view's own data: what was fetched and what the user did to it
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub records: Vec<CountryRecord>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub search_text: String,
    /// Insertion ordered. Ids stay here after their record is deleted.
    pub favorite_ids: Vec<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            records: Vec::new(),
            is_loading: true,
            error_message: None,
            search_text: String::new(),
            favorite_ids: Vec::new(),
        }
    }

    pub fn phase(&self) -> ViewPhase {
        match (&self.error_message, self.is_loading) {
            (Some(message), _) => ViewPhase::Errored(message.clone()),
            (None, true) => ViewPhase::Loading,
            (None, false) => ViewPhase::Loaded,
        }
    }

    /// Loading -> Loaded. Ignored once the fetch has settled.
    pub fn apply_loaded(&mut self, records: Vec<CountryRecord>) -> bool {
        if !self.is_loading {
            return false;
        }
        self.records = records;
        self.is_loading = false;
        true
    }

    /// Loading -> Errored. Ignored once the fetch has settled.
    pub fn apply_failed(&mut self, message: String) -> bool {
        if !self.is_loading {
            return false;
        }
        self.error_message = Some(message);
        self.is_loading = false;
        true
    }

    pub fn apply_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Remove the first record with `id`. Favorites are left alone.
    pub fn apply_delete(&mut self, id: &str) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip membership of `id`, returns whether it is a favorite afterwards
    pub fn apply_toggle_favorite(&mut self, id: &str) -> bool {
        if let Some(index) = self.favorite_ids.iter().position(|f| f == id) {
            self.favorite_ids.remove(index);
            false
        } else {
            self.favorite_ids.push(id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorite_ids.iter().any(|f| f == id)
    }

    pub fn filtered_list(&self) -> Vec<&CountryRecord> {
        filter_countries(&self.records, &self.search_text)
    }

    /// Favorites in insertion order, skipping ids whose record was deleted
    pub fn favorites_panel(&self) -> Vec<&CountryRecord> {
        self.favorite_ids
            .iter()
            .filter_map(|id| self.records.iter().find(|r| &r.id == id))
            .collect()
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub view: ViewState,

    // UI state
    pub focus: Focus,
    pub cursor_position: usize,
    pub selected_row: usize,
    pub selected_favorite: usize,
    pub show_help: bool,

    // Fetch bookkeeping
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    pub fetch_time_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            view: ViewState::new(),
            focus: Focus::Search,
            cursor_position: 0,
            selected_row: 0,
            selected_favorite: 0,
            show_help: false,
            next_request_id: 1,
            pending_request_id: None,
            fetch_time_ms: 0,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Whether list and favorites controls are reachable
    pub fn is_interactive(&self) -> bool {
        self.view.phase() == ViewPhase::Loaded
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let rows = self
            .view
            .filtered_list()
            .into_iter()
            .map(|record| CountryRow {
                is_favorite: self.view.is_favorite(&record.id),
                record: record.clone(),
            })
            .collect();

        RenderState {
            phase: self.view.phase(),
            search_text: self.view.search_text.clone(),
            cursor_position: self.cursor_position,
            searching: !self.view.search_text.trim().is_empty(),
            rows,
            selected_row: self.selected_row,
            total_records: self.view.records.len(),
            favorites: self.view.favorites_panel().into_iter().cloned().collect(),
            has_favorite_ids: !self.view.favorite_ids.is_empty(),
            selected_favorite: self.selected_favorite,
            focus: self.focus,
            show_help: self.show_help,
            fetch_time_ms: self.fetch_time_ms,
        }
    }
}
