//! Layout rendering (top bar, genre rail)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, Route, UiState};
use crate::theme::{Palette, Theme};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(14), // Theme toggle
        ])
        .split(area);

    let search_focused = ui_state.active_section == ActiveSection::Search;
    let search_text = if ui_state.search_input.is_empty() {
        "Search movies..."
    } else {
        &ui_state.search_input
    };
    let search_style = if search_focused {
        Style::default().fg(palette.focus)
    } else if ui_state.search_input.is_empty() {
        Style::default().fg(palette.dim)
    } else {
        Style::default().fg(palette.text)
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(if search_focused {
                Style::default().fg(palette.focus)
            } else {
                Style::default().fg(palette.dim)
            }),
    );
    frame.render_widget(search, chunks[0]);

    let icon = match ui_state.theme {
        Theme::Light => "🌞",
        Theme::Dark => "🌙",
    };
    let theme = Paragraph::new(format!("{icon} {}", ui_state.theme.label()))
        .style(Style::default().fg(palette.accent))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" [t]heme ")
                .border_style(Style::default().fg(palette.dim)),
        );
    frame.render_widget(theme, chunks[1]);
}

pub fn render_genre_rail(frame: &mut Frame, area: Rect, ui_state: &UiState, palette: &Palette) {
    let focused = ui_state.active_section == ActiveSection::Genres;
    let active_genre = match ui_state.route {
        Route::Genre(id) => Some(id),
        Route::Home => None,
    };

    let items: Vec<ListItem> = ui_state
        .genres
        .iter()
        .enumerate()
        .map(|(i, genre)| {
            let is_cursor = i == ui_state.genre_selected;
            let is_active = active_genre == Some(genre.id);

            let style = if is_cursor && focused {
                Style::default().fg(palette.focus).add_modifier(Modifier::BOLD)
            } else if is_active {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else if is_cursor {
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };

            let marker = if is_active { "▸ " } else { "  " };
            ListItem::new(format!("{marker}{}", genre.name)).style(style)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(palette.focus)
    } else {
        Style::default().fg(palette.dim)
    };

    let genres = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Genres ")
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        )
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(ui_state.genre_selected));

    frame.render_stateful_widget(genres, area, &mut list_state);
}
