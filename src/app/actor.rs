//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Mount: the one and only catalog fetch
        if let Some(cmd) = self.state.begin_fetch() {
            let _ = self.network_tx.send(cmd);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Focus
            UiEvent::NextFocus => self.state.next_focus(),
            UiEvent::PrevFocus => self.state.prev_focus(),
            UiEvent::FocusSearch => self.state.focus_search(),

            // Search input
            UiEvent::SearchChar(c) => self.state.enter_char(c),
            UiEvent::SearchBackspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Selection
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::SelectNext => self.state.select_next(),

            // Row actions
            UiEvent::DeleteSelected => self.state.delete_selected(),
            UiEvent::ToggleFavoriteSelected => self.state.toggle_favorite_selected(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::render::ViewPhase;
    use crate::models::CountryRecord;

    #[tokio::test]
    async fn test_fetch_on_mount_then_render_loaded() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(AppActor::new(net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

        let Some(NetworkCommand::FetchCountries { id }) = net_cmd_rx.recv().await else {
            panic!("expected a fetch on mount");
        };
        let initial = render_rx.recv().await.unwrap();
        assert_eq!(initial.phase, ViewPhase::Loading);

        net_resp_tx
            .send(NetworkResponse::Countries {
                id,
                records: vec![CountryRecord::new("FRA", "France", "Europe", "🇫🇷")],
                time_ms: 5,
            })
            .unwrap();
        let loaded = render_rx.recv().await.unwrap();
        assert_eq!(loaded.phase, ViewPhase::Loaded);
        assert_eq!(loaded.total_records, 1);
        assert!(loaded.rows.is_empty());

        for c in "fra".chars() {
            ui_tx.send(UiEvent::SearchChar(c)).unwrap();
        }
        let mut last = None;
        for _ in 0..3 {
            last = render_rx.recv().await;
        }
        assert_eq!(last.unwrap().rows[0].record.id, "FRA");

        ui_tx.send(UiEvent::Quit).unwrap();
        handle.await.unwrap();
        assert!(matches!(net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown)));
        // no second fetch was ever issued
        assert!(net_cmd_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_help_and_quit_after_failed_fetch() {
        use crate::messages::ui_events::key_to_ui_event;
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(AppActor::new(net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

        let Some(NetworkCommand::FetchCountries { id }) = net_cmd_rx.recv().await else {
            panic!("expected a fetch on mount");
        };
        render_rx.recv().await.unwrap();
        net_resp_tx
            .send(NetworkResponse::FetchFailed {
                id,
                message: "network down".to_string(),
                time_ms: 1,
            })
            .unwrap();
        let errored = render_rx.recv().await.unwrap();
        assert_eq!(errored.phase, ViewPhase::Errored("network down".to_string()));
        assert!(!errored.is_interactive());

        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        let event = key_to_ui_event(key('?'), errored.focus, errored.show_help, errored.is_interactive())
            .expect("help is reachable");
        ui_tx.send(event).unwrap();
        let with_help = render_rx.recv().await.unwrap();
        assert!(with_help.show_help);

        // any key closes the popup, then 'q' quits
        let event = key_to_ui_event(key('q'), with_help.focus, with_help.show_help, false).unwrap();
        ui_tx.send(event).unwrap();
        let closed = render_rx.recv().await.unwrap();
        assert!(!closed.show_help);

        let event = key_to_ui_event(key('q'), closed.focus, closed.show_help, false).unwrap();
        assert_eq!(event, UiEvent::Quit);
        ui_tx.send(event).unwrap();
        handle.await.unwrap();
    }
}
