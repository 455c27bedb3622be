//! Drawing - a pure projection of `RenderState` onto a ratatui frame

use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_NAME;
use crate::messages::render::ViewPhase;
use crate::messages::ui_events::Focus;
use crate::messages::RenderState;

const STAR_FILLED: &str = "★";
const STAR_EMPTY: &str = "☆";

/// Shell: header bar, country view, status bar, popups
pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, main_chunks[0]);
    draw_country_view(f, state, pad(main_chunks[1]));
    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", APP_NAME),
        Style::default().bold(),
    )))
    .style(Style::default().fg(Color::White).bg(Color::DarkGray));
    f.render_widget(header, area);
}

/// Page margin around the content region
fn pad(area: Rect) -> Rect {
    area.inner(Margin::new(2, 1))
}

fn draw_country_view(f: &mut Frame, state: &RenderState, area: Rect) {
    match &state.phase {
        ViewPhase::Loading => {
            f.render_widget(Paragraph::new("Loading countries..."), area);
        }
        ViewPhase::Errored(message) => {
            let line = Line::from(Span::styled(
                format!("Error: {}", message),
                Style::default().fg(Color::Red),
            ));
            f.render_widget(Paragraph::new(line), area);
        }
        ViewPhase::Loaded => draw_loaded(f, state, area),
    }
}

fn draw_loaded(f: &mut Frame, state: &RenderState, area: Rect) {
    let favorites_height = (state.favorites.len().max(1) + 2).min(10) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                // Title
            Constraint::Length(3),                // Search
            Constraint::Min(3),                   // Filtered list
            Constraint::Length(favorites_height), // Favorites
        ])
        .split(area);

    let title = Paragraph::new("COUNTRIES LIST")
        .alignment(Alignment::Center)
        .style(Style::default().bold());
    f.render_widget(title, chunks[0]);

    draw_search(f, state, chunks[1]);
    draw_country_list(f, state, chunks[2]);
    draw_favorites(f, state, chunks[3]);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_search(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::Search;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        })
        .title(" Looking for a country? ");

    let input = if state.search_text.is_empty() {
        Paragraph::new(Span::styled(
            "Search your country here",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(state.search_text.as_str())
    };
    f.render_widget(input.block(block), area);

    if is_focused {
        let before_cursor = &state.search_text[..state.cursor_position.min(state.search_text.len())];
        let offset = Line::from(before_cursor).width() as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + offset + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_country_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::Countries;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .title(format!(" Countries ({} loaded) ", state.total_records));

    // Nothing at all until something is typed
    if !state.searching {
        f.render_widget(block, area);
        return;
    }

    if state.rows.is_empty() {
        let empty = Paragraph::new("No countries found.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .rows
        .iter()
        .map(|row| {
            let star = if row.is_favorite {
                Span::styled(STAR_FILLED, Style::default().fg(Color::Yellow))
            } else {
                Span::styled(STAR_EMPTY, Style::default().fg(Color::Yellow))
            };
            ListItem::new(Line::from(vec![
                Span::styled("[x] ", Style::default().fg(Color::Red)),
                star,
                Span::raw(" "),
                Span::styled(row.record.common_name.clone(), Style::default().bold()),
                Span::styled(format!("  {}", row.record.region), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if is_focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        });

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_row));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_favorites(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.focus == Focus::Favorites;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .title(" Your Favorites ");

    if !state.has_favorite_ids {
        let empty = Paragraph::new("You have no favorite countries.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .favorites
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} {} ", record.flag_glyph, record.common_name)),
                Span::styled(STAR_FILLED, Style::default().fg(Color::Yellow)),
            ]))
            .style(Style::default().fg(Color::Blue))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if is_focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        });

    let mut list_state = ListState::default();
    if !state.favorites.is_empty() {
        list_state.select(Some(state.selected_favorite));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = match (&state.phase, state.focus) {
        (ViewPhase::Loading, _) => " Loading... | ?:help | q:quit ".to_string(),
        (ViewPhase::Errored(_), _) => " ?:help | q:quit ".to_string(),
        (ViewPhase::Loaded, Focus::Search) => {
            " type to search | Enter/Tab:list | Ctrl+C:quit ".to_string()
        }
        (ViewPhase::Loaded, Focus::Countries) => {
            " ↑/↓:select | d:delete | f:favorite | /:search | Tab:next | ?:help | q:quit ".to_string()
        }
        (ViewPhase::Loaded, Focus::Favorites) => {
            " ↑/↓:select | f:unfavorite | /:search | Tab:next | ?:help | q:quit ".to_string()
        }
    };

    let status = if state.fetch_time_ms > 0 {
        format!("{}| fetched in {}ms ", status, state.fetch_time_ms)
    } else {
        status
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 COUNTRY CHALLENGE - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch between search, list, favorites
   ↑ / ↓              Move the selection
   /                  Jump to the search box

 COUNTRIES
   d / Delete         Remove the selected country
   f / Space / Enter  Mark or unmark as favorite

 FAVORITES
   f / Space / Enter  Unmark the selected favorite

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
