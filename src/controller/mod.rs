//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates between the model and the catalog API. It is organized
//! into submodules by responsibility:
//!
//! - `input`: Key and mouse event handling
//! - `navigation`: Browse, search, genre and detail fetches

mod input;
mod navigation;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self { model }
    }

    pub(crate) fn format_error(error: &anyhow::Error) -> String {
        let error_str = error.to_string();

        // Handle common TMDB API errors
        if error_str.contains("401") {
            "Unauthorized. Check your TMDB API token.".to_string()
        } else if error_str.contains("404") {
            "Not found in the movie catalog.".to_string()
        } else if error_str.contains("429") {
            "Rate limited. Please wait a moment.".to_string()
        } else {
            format!("Error: {}", error_str)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_recognizes_common_statuses() {
        let err = anyhow::anyhow!("https://api.example -> 401 Unauthorized body");
        assert_eq!(
            AppController::format_error(&err),
            "Unauthorized. Check your TMDB API token."
        );

        let err = anyhow::anyhow!("connection reset by peer");
        assert_eq!(
            AppController::format_error(&err),
            "Error: connection reset by peer"
        );
    }
}
