//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::Focus;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Fetch lifecycle
    // ========================

    /// Initial -> Loading. Yields the fetch command the first time only.
    pub fn begin_fetch(&mut self) -> Option<NetworkCommand> {
        if !self.view.is_loading || self.pending_request_id.is_some() {
            return None;
        }
        let id = self.next_id();
        self.pending_request_id = Some(id);
        tracing::info!(id, "Requesting country catalog");
        Some(NetworkCommand::FetchCountries { id })
    }

    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::warn!(id = response.id(), "Ignoring response for unknown request");
            return;
        }
        self.pending_request_id = None;

        match response {
            NetworkResponse::Countries { records, time_ms, .. } => {
                let count = records.len();
                if self.view.apply_loaded(records) {
                    self.fetch_time_ms = time_ms;
                    tracing::info!(count, time_ms, "Countries loaded");
                }
            }
            NetworkResponse::FetchFailed { message, time_ms, .. } => {
                tracing::warn!(%message, time_ms, "Country fetch failed");
                if self.view.apply_failed(message) {
                    self.fetch_time_ms = time_ms;
                }
            }
        }
        self.clamp_selection();
    }

    // ========================
    // Focus
    // ========================

    pub fn next_focus(&mut self) {
        if self.is_interactive() {
            self.focus = self.focus.next();
        }
    }

    pub fn prev_focus(&mut self) {
        if self.is_interactive() {
            self.focus = self.focus.prev();
        }
    }

    pub fn focus_search(&mut self) {
        if self.is_interactive() {
            self.focus = Focus::Search;
            self.cursor_position = self.view.search_text.len();
        }
    }

    // ========================
    // Search input
    // ========================

    pub fn enter_char(&mut self, c: char) {
        if !self.is_interactive() {
            return;
        }
        let mut text = self.view.search_text.clone();
        let cursor_pos = self.cursor_position.min(text.len());
        text.insert(cursor_pos, c);
        self.cursor_position = cursor_pos + c.len_utf8();
        self.view.apply_search(text);
        self.reset_selection();
    }

    pub fn delete_char(&mut self) {
        if !self.is_interactive() || self.cursor_position == 0 {
            return;
        }
        let mut text = self.view.search_text.clone();
        let prev_pos = text[..self.cursor_position]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        text.remove(prev_pos);
        self.cursor_position = prev_pos;
        self.view.apply_search(text);
        self.reset_selection();
    }

    pub fn move_cursor_left(&mut self) {
        let input = &self.view.search_text;
        if self.cursor_position > 0 {
            self.cursor_position = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = &self.view.search_text;
        if self.cursor_position < input.len() {
            self.cursor_position = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
        }
    }

    // ========================
    // Selection
    // ========================

    pub fn select_prev(&mut self) {
        match self.focus {
            Focus::Countries => self.selected_row = self.selected_row.saturating_sub(1),
            Focus::Favorites => self.selected_favorite = self.selected_favorite.saturating_sub(1),
            Focus::Search => {}
        }
    }

    pub fn select_next(&mut self) {
        match self.focus {
            Focus::Countries => {
                let len = self.view.filtered_list().len();
                if self.selected_row + 1 < len {
                    self.selected_row += 1;
                }
            }
            Focus::Favorites => {
                let len = self.view.favorites_panel().len();
                if self.selected_favorite + 1 < len {
                    self.selected_favorite += 1;
                }
            }
            Focus::Search => {}
        }
    }

    fn reset_selection(&mut self) {
        self.selected_row = 0;
    }

    /// Keep both selections inside the rows currently on screen
    fn clamp_selection(&mut self) {
        let rows = self.view.filtered_list().len();
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));
        let favorites = self.view.favorites_panel().len();
        self.selected_favorite = self.selected_favorite.min(favorites.saturating_sub(1));
    }

    // ========================
    // Row actions
    // ========================

    pub fn delete_selected(&mut self) {
        if !self.is_interactive() || self.focus != Focus::Countries {
            return;
        }
        let Some(id) = self
            .view
            .filtered_list()
            .get(self.selected_row)
            .map(|r| r.id.clone())
        else {
            return;
        };

        if self.view.apply_delete(&id) {
            tracing::debug!(%id, remaining = self.view.records.len(), "Deleted country");
        }
        self.clamp_selection();
    }

    pub fn toggle_favorite_selected(&mut self) {
        if !self.is_interactive() {
            return;
        }
        let id = match self.focus {
            Focus::Countries => self.view.filtered_list().get(self.selected_row).map(|r| r.id.clone()),
            Focus::Favorites => self
                .view
                .favorites_panel()
                .get(self.selected_favorite)
                .map(|r| r.id.clone()),
            Focus::Search => None,
        };
        let Some(id) = id else {
            return;
        };

        let favorite = self.view.apply_toggle_favorite(&id);
        tracing::debug!(%id, favorite, "Toggled favorite");
        self.clamp_selection();
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::render::ViewPhase;
    use crate::models::CountryRecord;

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let Some(NetworkCommand::FetchCountries { id }) = state.begin_fetch() else {
            panic!("expected a fetch command");
        };
        state.handle_response(NetworkResponse::Countries {
            id,
            records: vec![
                CountryRecord::new("FRA", "France", "Europe", "🇫🇷"),
                CountryRecord::new("FIN", "Finland", "Europe", "🇫🇮"),
                CountryRecord::new("JPN", "Japan", "Asia", "🇯🇵"),
            ],
            time_ms: 12,
        });
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.enter_char(c);
        }
    }

    #[test]
    fn test_begin_fetch_only_once() {
        let mut state = AppState::new();
        assert!(state.begin_fetch().is_some());
        assert!(state.begin_fetch().is_none());
    }

    #[test]
    fn test_no_fetch_after_settled() {
        let mut state = loaded_state();
        assert!(state.begin_fetch().is_none());
        assert_eq!(state.fetch_time_ms, 12);
    }

    #[test]
    fn test_failure_blocks_interaction() {
        let mut state = AppState::new();
        let Some(NetworkCommand::FetchCountries { id }) = state.begin_fetch() else {
            panic!("expected a fetch command");
        };
        state.handle_response(NetworkResponse::FetchFailed {
            id,
            message: "network down".to_string(),
            time_ms: 3,
        });

        assert!(!state.view.is_loading);
        assert_eq!(state.view.error_message.as_deref(), Some("network down"));

        type_text(&mut state, "fra");
        state.next_focus();
        state.toggle_favorite_selected();
        assert!(state.view.search_text.is_empty());
        assert_eq!(state.focus, Focus::Search);
        assert!(state.view.favorite_ids.is_empty());
        assert!(state.begin_fetch().is_none());
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut state = AppState::new();
        state.begin_fetch();
        state.handle_response(NetworkResponse::FetchFailed {
            id: 99,
            message: "other".to_string(),
            time_ms: 0,
        });
        assert_eq!(state.view.phase(), ViewPhase::Loading);
    }

    #[test]
    fn test_typing_filters() {
        let mut state = loaded_state();
        type_text(&mut state, "F");
        assert_eq!(state.view.search_text, "F");
        assert_eq!(state.view.filtered_list().len(), 2);

        state.delete_char();
        assert!(state.view.search_text.is_empty());
        assert!(state.view.filtered_list().is_empty());
    }

    #[test]
    fn test_cursor_editing_multibyte() {
        let mut state = loaded_state();
        type_text(&mut state, "Åland");
        state.move_cursor_left();
        state.move_cursor_left();
        state.move_cursor_left();
        state.move_cursor_left();
        assert_eq!(state.cursor_position, 'Å'.len_utf8());
        state.move_cursor_left();
        assert_eq!(state.cursor_position, 0);
        state.move_cursor_right();
        state.enter_char('x');
        assert_eq!(state.view.search_text, "Åxland");
    }

    #[test]
    fn test_delete_selected_row() {
        let mut state = loaded_state();
        type_text(&mut state, "europe");
        state.next_focus();
        state.select_next();
        state.delete_selected();

        let ids: Vec<_> = state.view.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["FRA", "JPN"]);
        // only one europe row left, selection follows it
        assert_eq!(state.selected_row, 0);
    }

    #[test]
    fn test_delete_with_empty_search_does_nothing() {
        let mut state = loaded_state();
        state.next_focus();
        state.delete_selected();
        assert_eq!(state.view.records.len(), 3);
    }

    #[test]
    fn test_favorite_then_delete_keeps_id() {
        let mut state = loaded_state();
        type_text(&mut state, "fra");
        state.next_focus();
        state.toggle_favorite_selected();
        state.delete_selected();

        assert_eq!(state.view.favorite_ids, vec!["FRA"]);
        let render = state.to_render_state();
        assert!(render.favorites.is_empty());
        assert!(render.has_favorite_ids);
    }

    #[test]
    fn test_unfavorite_from_panel() {
        let mut state = loaded_state();
        type_text(&mut state, "europe");
        state.next_focus();
        state.toggle_favorite_selected();
        state.select_next();
        state.toggle_favorite_selected();
        assert_eq!(state.view.favorite_ids, vec!["FRA", "FIN"]);

        state.next_focus();
        assert_eq!(state.focus, Focus::Favorites);
        state.select_next();
        state.toggle_favorite_selected();
        assert_eq!(state.view.favorite_ids, vec!["FRA"]);
        assert_eq!(state.selected_favorite, 0);
    }

    #[test]
    fn test_help_toggle() {
        let mut state = AppState::new();
        state.toggle_help();
        assert!(state.show_help);
        state.close_help();
        assert!(!state.show_help);
    }
}
