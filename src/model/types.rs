//! Core type definitions for the application

use std::time::Instant;

use crate::theme::Theme;

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Genres,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Genres,
            ActiveSection::Genres => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Genres => ActiveSection::Search,
            ActiveSection::Results => ActiveSection::Genres,
        }
    }
}

/// Client-side route: the landing feed or a single genre's listing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Genre(u32),
}

/// A catalog-defined movie category
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub route: Route,
    /// Live text in the search box; becomes the submitted term on Enter.
    pub search_input: String,
    pub genres: Vec<Genre>,
    pub genre_selected: usize,
    pub theme: Theme,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Results,
            route: Route::Home,
            search_input: String::new(),
            genres: vec![], // Loaded from the catalog API
            genre_selected: 0,
            theme: Theme::default(),
            error_message: None,
            error_timestamp: None,
            show_help_popup: false,
        }
    }
}
