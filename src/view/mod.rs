//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! Every widget takes its colors from the active theme's palette. It is
//! organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (truncation, field formatting)
//! - `layout`: Top bar and genre rail
//! - `content`: Main content area rendering
//! - `overlays`: Modal overlays (movie detail, error, help)

mod utils;
mod layout;
mod content;
mod overlays;

pub use overlays::modal_area;
pub use utils::truncate;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::model::{BrowseState, MovieDetail, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        browse: &BrowseState,
        selected_movie: Option<&MovieDetail>,
    ) {
        let palette = ui_state.theme.palette();

        // Paint the themed background before anything else
        let background = Block::default().style(Style::default().bg(palette.background));
        frame.render_widget(background, frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + theme toggle
                Constraint::Min(0),    // Genre rail + content
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state, &palette);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(24), // Genre rail
                Constraint::Percentage(76), // Main content
            ])
            .split(chunks[1]);

        layout::render_genre_rail(frame, main_chunks[0], ui_state, &palette);
        content::render_content(frame, main_chunks[1], ui_state, browse, &palette);

        // Movie detail modal (visible exactly while a movie is selected)
        if let Some(movie) = selected_movie {
            overlays::render_movie_modal(frame, movie, &palette);
        }

        // Error notification overlay (if there's an error)
        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state, &palette);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame, &palette);
        }
    }
}
