//! Browse state and catalog data structures

use chrono::NaiveDate;

use super::types::{Genre, Route};

/// One movie as it appears in a paged listing
#[derive(Clone, Debug, Default)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
    pub original_language: Option<String>,
}

impl MovieSummary {
    /// Year of release, if the catalog sent a well-formed date.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| chrono::Datelike::year(&d))
    }
}

/// A page of movies plus the catalog's paging signal
#[derive(Clone, Debug, Default)]
pub struct MoviePage {
    pub page: u32,
    pub total_pages: u32,
    pub movies: Vec<MovieSummary>,
}

/// Full detail for a selected movie
#[derive(Clone, Debug, Default)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub original_language: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub genres: Vec<Genre>,
}

/// The parameters a browse fetch is derived from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseRequest {
    Trending { page: u32 },
    Search { query: String, page: u32 },
    Genre { genre_id: u32, page: u32 },
}

impl BrowseRequest {
    /// Derive the request for the current (route, submitted term, page).
    ///
    /// The landing feed serves trending movies until a search term is
    /// submitted; a genre route always serves that genre's listing.
    pub fn derive(route: Route, search_term: &str, page: u32) -> Self {
        match route {
            Route::Genre(genre_id) => BrowseRequest::Genre { genre_id, page },
            Route::Home if search_term.is_empty() => BrowseRequest::Trending { page },
            Route::Home => BrowseRequest::Search {
                query: search_term.to_string(),
                page,
            },
        }
    }
}

/// Paging state for the visible listing
#[derive(Clone, Debug)]
pub struct BrowseState {
    /// Submitted search term; empty means the trending feed.
    pub search_term: String,
    pub page: u32,
    pub results: Option<MoviePage>,
    pub selected: usize,
    pub is_loading: bool,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            page: 1,
            results: None,
            selected: 0,
            is_loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_term_derives_trending() {
        assert_eq!(
            BrowseRequest::derive(Route::Home, "", 1),
            BrowseRequest::Trending { page: 1 }
        );
    }

    #[test]
    fn submitted_term_derives_search() {
        assert_eq!(
            BrowseRequest::derive(Route::Home, "dune", 2),
            BrowseRequest::Search {
                query: "dune".to_string(),
                page: 2
            }
        );
    }

    #[test]
    fn genre_route_derives_genre_listing_even_with_a_term() {
        assert_eq!(
            BrowseRequest::derive(Route::Genre(28), "dune", 3),
            BrowseRequest::Genre {
                genre_id: 28,
                page: 3
            }
        );
    }

    #[test]
    fn release_year_requires_a_well_formed_date() {
        let mut movie = MovieSummary {
            release_date: Some("2024-03-01".to_string()),
            ..Default::default()
        };
        assert_eq!(movie.release_year(), Some(2024));

        movie.release_date = Some("soon".to_string());
        assert_eq!(movie.release_year(), None);

        movie.release_date = None;
        assert_eq!(movie.release_year(), None);
    }
}
