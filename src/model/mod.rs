//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the
//! application. It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (sections, routes, UI state)
//! - `content`: Browse state and catalog data structures
//! - `tmdb_client`: TMDB API client wrapper
//! - `app_model`: Main application model with state management methods

mod types;
mod content;
mod tmdb_client;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, Genre, Route, UiState};

pub use content::{BrowseRequest, BrowseState, MovieDetail, MoviePage, MovieSummary};

pub use tmdb_client::{backdrop_url, browse_url, poster_url, TmdbClient};

pub use app_model::AppModel;
