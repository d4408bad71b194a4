//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::theme::{Theme, ThemeStore};

use super::content::{BrowseRequest, BrowseState, MovieDetail, MoviePage, MovieSummary};
use super::tmdb_client::TmdbClient;
use super::types::{ActiveSection, Genre, Route, UiState};

/// Main application model containing all state
///
/// Lock order is ui_state before browse_state wherever both are held.
pub struct AppModel {
    pub tmdb: Option<TmdbClient>,
    pub ui_state: Arc<Mutex<UiState>>,
    browse_state: Arc<Mutex<BrowseState>>,
    selected_movie: Arc<Mutex<Option<MovieDetail>>>,
    /// Token of the most recently issued browse fetch. Completions carrying
    /// an older token are discarded so the listing always answers the latest
    /// requested parameters.
    browse_seq: Arc<Mutex<u64>>,
    theme_store: ThemeStore,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(theme: Theme, theme_store: ThemeStore) -> Self {
        let ui_state = UiState {
            theme,
            ..UiState::default()
        };
        Self {
            tmdb: None,
            ui_state: Arc::new(Mutex::new(ui_state)),
            browse_state: Arc::new(Mutex::new(BrowseState::default())),
            selected_movie: Arc::new(Mutex::new(None)),
            browse_seq: Arc::new(Mutex::new(0)),
            theme_store,
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_tmdb_client(&mut self, client: TmdbClient) {
        self.tmdb = Some(client);
    }

    pub async fn get_tmdb_client(&self) -> Option<TmdbClient> {
        self.tmdb.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI sections & search input
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_input.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_input.pop();
    }

    pub async fn clear_search_input(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_input.clear();
    }

    // ========================================================================
    // Genres
    // ========================================================================

    pub async fn set_genres(&self, genres: Vec<Genre>) {
        let mut state = self.ui_state.lock().await;
        if state.genre_selected >= genres.len() {
            state.genre_selected = 0;
        }
        state.genres = genres;
    }

    pub async fn genre_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.genre_selected > 0 {
            state.genre_selected -= 1;
        }
    }

    pub async fn genre_move_down(&self) {
        let mut state = self.ui_state.lock().await;
        if state.genre_selected < state.genres.len().saturating_sub(1) {
            state.genre_selected += 1;
        }
    }

    pub async fn get_selected_genre(&self) -> Option<Genre> {
        let state = self.ui_state.lock().await;
        state.genres.get(state.genre_selected).cloned()
    }

    // ========================================================================
    // Routing & paging
    // ========================================================================

    /// Open a genre's listing. The page resets to 1 and the previous result
    /// set is dropped immediately so the old genre's movies never show while
    /// the new fetch is pending.
    pub async fn navigate_to_genre(&self, genre_id: u32) {
        let mut ui = self.ui_state.lock().await;
        ui.route = Route::Genre(genre_id);
        ui.search_input.clear();
        let mut browse = self.browse_state.lock().await;
        browse.search_term.clear();
        browse.page = 1;
        browse.results = None;
        browse.selected = 0;
    }

    /// Return to the landing feed with a fresh trending page.
    pub async fn go_home(&self) {
        let mut ui = self.ui_state.lock().await;
        ui.route = Route::Home;
        ui.search_input.clear();
        let mut browse = self.browse_state.lock().await;
        browse.search_term.clear();
        browse.page = 1;
        browse.results = None;
        browse.selected = 0;
    }

    /// Promote the live search input to the submitted term. Always routes to
    /// the landing feed and resets to page 1; an empty term means trending.
    pub async fn submit_search(&self) {
        let mut ui = self.ui_state.lock().await;
        ui.route = Route::Home;
        let term = ui.search_input.clone();
        let mut browse = self.browse_state.lock().await;
        browse.search_term = term;
        browse.page = 1;
        browse.selected = 0;
    }

    /// Advance one page, clamped against the catalog's total-pages signal.
    /// Does nothing until a result set is loaded.
    pub async fn next_page(&self) -> bool {
        let mut browse = self.browse_state.lock().await;
        let total_pages = match &browse.results {
            Some(results) => results.total_pages,
            None => return false,
        };
        if browse.page < total_pages {
            browse.page += 1;
            browse.selected = 0;
            true
        } else {
            false
        }
    }

    /// Go back one page; a no-op at page 1.
    pub async fn prev_page(&self) -> bool {
        let mut browse = self.browse_state.lock().await;
        if browse.page > 1 {
            browse.page -= 1;
            browse.selected = 0;
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Browse results
    // ========================================================================

    pub async fn get_browse_state(&self) -> BrowseState {
        self.browse_state.lock().await.clone()
    }

    /// The request the current (route, term, page) parameters call for.
    pub async fn current_browse_request(&self) -> BrowseRequest {
        let ui = self.ui_state.lock().await;
        let browse = self.browse_state.lock().await;
        BrowseRequest::derive(ui.route, &browse.search_term, browse.page)
    }

    /// Mark a browse fetch as issued and return its sequence token.
    pub async fn begin_browse(&self) -> u64 {
        let mut seq = self.browse_seq.lock().await;
        *seq += 1;
        let token = *seq;
        let mut browse = self.browse_state.lock().await;
        browse.is_loading = true;
        token
    }

    /// Commit a completed browse fetch. Stale completions are discarded.
    pub async fn apply_browse(&self, token: u64, page: MoviePage) -> bool {
        let seq = self.browse_seq.lock().await;
        if token != *seq {
            tracing::debug!(token, latest = *seq, "Discarding stale browse response");
            return false;
        }
        let mut browse = self.browse_state.lock().await;
        browse.results = Some(page);
        browse.selected = 0;
        browse.is_loading = false;
        true
    }

    /// Record a failed browse fetch, leaving the previous results intact.
    pub async fn browse_failed(&self, token: u64) {
        let seq = self.browse_seq.lock().await;
        if token != *seq {
            return;
        }
        let mut browse = self.browse_state.lock().await;
        browse.is_loading = false;
    }

    pub async fn results_move_up(&self) {
        let mut browse = self.browse_state.lock().await;
        if browse.selected > 0 {
            browse.selected -= 1;
        }
    }

    pub async fn results_move_down(&self) {
        let mut browse = self.browse_state.lock().await;
        let count = browse.results.as_ref().map_or(0, |r| r.movies.len());
        if browse.selected < count.saturating_sub(1) {
            browse.selected += 1;
        }
    }

    pub async fn get_selected_summary(&self) -> Option<MovieSummary> {
        let browse = self.browse_state.lock().await;
        let results = browse.results.as_ref()?;
        results.movies.get(browse.selected).cloned()
    }

    // ========================================================================
    // Detail modal
    // ========================================================================

    /// Set the selected movie; the modal is visible exactly while one is set.
    pub async fn open_movie(&self, detail: MovieDetail) {
        *self.selected_movie.lock().await = Some(detail);
    }

    pub async fn close_modal(&self) {
        *self.selected_movie.lock().await = None;
    }

    pub async fn is_modal_open(&self) -> bool {
        self.selected_movie.lock().await.is_some()
    }

    pub async fn get_selected_movie(&self) -> Option<MovieDetail> {
        self.selected_movie.lock().await.clone()
    }

    // ========================================================================
    // Theme
    // ========================================================================

    pub async fn current_theme(&self) -> Theme {
        self.ui_state.lock().await.theme
    }

    /// Flip the theme and persist the new value before the next render.
    pub async fn toggle_theme(&self) -> Theme {
        let mut state = self.ui_state.lock().await;
        let next = state.theme.toggle();
        state.theme = next;
        if let Err(e) = self.theme_store.save(next) {
            tracing::warn!(error = %e, "Could not persist theme preference");
        }
        next
    }

    // ========================================================================
    // Error popup
    // ========================================================================

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > 5 {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    // ========================================================================
    // Help popup
    // ========================================================================

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_store(dir: &tempfile::TempDir) -> AppModel {
        let store = ThemeStore::with_path(dir.path().join("theme.json"));
        AppModel::new(Theme::Dark, store)
    }

    fn page_of(count: usize, page: u32, total_pages: u32) -> MoviePage {
        MoviePage {
            page,
            total_pages,
            movies: (0..count as u64)
                .map(|id| MovieSummary {
                    id,
                    title: format!("Movie {id}"),
                    ..MovieSummary::default()
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn initial_request_is_trending_page_one() {
        let dir = tempfile::tempdir().unwrap();
        let model = model_with_store(&dir);
        assert_eq!(
            model.current_browse_request().await,
            BrowseRequest::Trending { page: 1 }
        );
    }

    #[tokio::test]
    async fn previous_at_page_one_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let model = model_with_store(&dir);
        assert!(!model.prev_page().await);
        assert_eq!(model.get_browse_state().await.page, 1);
    }

    #[tokio::test]
    async fn next_increments_and_clamps_at_total_pages() {
        let dir = tempfile::tempdir().unwrap();
        let model = model_with_store(&dir);

        // No results loaded yet: Next does nothing
        assert!(!model.next_page().await);

        let token = model.begin_browse().await;
        model.apply_browse(token, page_of(3, 1, 2)).await;

        assert!(model.next_page().await);
        assert_eq!(model.get_browse_state().await.page, 2);
        assert!(!model.next_page().await);
        assert_eq!(model.get_browse_state().await.page, 2);

        assert!(model.prev_page().await);
        assert_eq!(model.get_browse_state().await.page, 1);
    }

    #[tokio::test]
    async fn page_change_resets_selection_to_top() {
        let dir = tempfile::tempdir().unwrap();
        let model = model_with_store(&dir);
        let token = model.begin_browse().await;
        model.apply_browse(token, page_of(5, 1, 3)).await;

        model.results_move_down().await;
        model.results_move_down().await;
        assert_eq!(model.get_browse_state().await.selected, 2);

        model.next_page().await;
        assert_eq!(model.get_browse_state().await.selected, 0);
    }

    #[tokio::test]
    async fn search_submission_resets_page_and_routes_home() {
        let dir = tempfile::tempdir().unwrap();
        let model = model_with_store(&dir);
        let token = model.begin_browse().await;
        model.apply_browse(token, page_of(2, 1, 10)).await;
        model.next_page().await;
        model.next_page().await;
        assert_eq!(model.get_browse_state().await.page, 3);

        for c in "dune".chars() {
            model.append_to_search(c).await;
        }
        model.submit_search().await;

        assert_eq!(
            model.current_browse_request().await,
            BrowseRequest::Search {
                query: "dune".to_string(),
                page: 1
            }
        );
    }

    #[tokio::test]
    async fn genre_navigation_resets_page_and_clears_stale_results() {
        let dir = tempfile::tempdir().unwrap();
        let model = model_with_store(&dir);
        let token = model.begin_browse().await;
        model.apply_browse(token, page_of(4, 1, 8)).await;
        model.next_page().await;

        model.navigate_to_genre(28).await;

        let browse = model.get_browse_state().await;
        assert_eq!(browse.page, 1);
        assert!(browse.results.is_none());
        assert_eq!(
            model.current_browse_request().await,
            BrowseRequest::Genre {
                genre_id: 28,
                page: 1
            }
        );
    }

    #[tokio::test]
    async fn stale_browse_responses_are_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let model = model_with_store(&dir);

        let first = model.begin_browse().await;
        let second = model.begin_browse().await;

        assert!(!model.apply_browse(first, page_of(1, 1, 1)).await);
        assert!(model.get_browse_state().await.results.is_none());

        assert!(model.apply_browse(second, page_of(2, 1, 1)).await);
        let browse = model.get_browse_state().await;
        assert_eq!(browse.results.unwrap().movies.len(), 2);
        assert!(!browse.is_loading);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_previous_results_intact() {
        let dir = tempfile::tempdir().unwrap();
        let model = model_with_store(&dir);

        let token = model.begin_browse().await;
        model.apply_browse(token, page_of(3, 1, 5)).await;

        let failing = model.begin_browse().await;
        model.browse_failed(failing).await;

        let browse = model.get_browse_state().await;
        assert!(!browse.is_loading);
        assert_eq!(browse.results.unwrap().movies.len(), 3);
    }

    #[tokio::test]
    async fn modal_is_visible_iff_a_movie_is_selected() {
        let dir = tempfile::tempdir().unwrap();
        let model = model_with_store(&dir);
        assert!(!model.is_modal_open().await);

        model
            .open_movie(MovieDetail {
                id: 42,
                title: "Deep Thought".to_string(),
                ..MovieDetail::default()
            })
            .await;
        assert!(model.is_modal_open().await);
        assert_eq!(model.get_selected_movie().await.unwrap().id, 42);

        model.close_modal().await;
        assert!(!model.is_modal_open().await);
        assert!(model.get_selected_movie().await.is_none());

        // Closing again is harmless
        model.close_modal().await;
        assert!(!model.is_modal_open().await);
    }

    #[tokio::test]
    async fn genre_catalog_yields_a_navigable_selection() {
        let dir = tempfile::tempdir().unwrap();
        let model = model_with_store(&dir);

        model
            .set_genres(vec![Genre {
                id: 28,
                name: "Action".to_string(),
            }])
            .await;

        assert_eq!(model.get_selected_genre().await.unwrap().id, 28);

        // A single entry clamps cursor movement in both directions
        model.genre_move_down().await;
        model.genre_move_up().await;
        assert_eq!(model.get_ui_state().await.genre_selected, 0);
    }

    #[tokio::test]
    async fn theme_toggle_flips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::with_path(dir.path().join("theme.json"));
        let model = AppModel::new(Theme::Dark, store.clone());

        assert_eq!(model.toggle_theme().await, Theme::Light);
        assert_eq!(model.current_theme().await, Theme::Light);
        assert_eq!(store.load(), Some(Theme::Light));

        assert_eq!(model.toggle_theme().await, Theme::Dark);
        assert_eq!(store.load(), Some(Theme::Dark));
    }
}
