//! Browse, search, genre and detail fetches

use crate::model::ActiveSection;

use super::AppController;

impl AppController {
    /// Startup load: the genre catalog and the first trending page, fetched
    /// concurrently.
    pub async fn load_initial(&self) {
        futures::join!(self.load_genres(), self.refresh_browse());
    }

    /// Fetch the genre catalog. Safe to call repeatedly; a failure leaves
    /// the previously loaded list in place.
    pub async fn load_genres(&self) {
        let model = self.model.lock().await;
        let Some(tmdb) = model.get_tmdb_client().await else {
            return;
        };
        drop(model);

        match tmdb.fetch_genres().await {
            Ok(genres) => {
                let model = self.model.lock().await;
                model.set_genres(genres).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Fetching genres failed");
                let model = self.model.lock().await;
                model.set_error(Self::format_error(&e)).await;
            }
        }
    }

    /// Issue the browse fetch the current (route, term, page) parameters
    /// call for, replacing the visible results wholesale on success.
    ///
    /// The fetch carries a sequence token; if newer parameters were issued
    /// while it was in flight, its response is discarded on arrival.
    pub async fn refresh_browse(&self) {
        let model = self.model.lock().await;
        let Some(tmdb) = model.get_tmdb_client().await else {
            return;
        };
        let request = model.current_browse_request().await;
        let token = model.begin_browse().await;
        drop(model);

        tracing::debug!(request = ?request, token, "Refreshing browse results");

        match tmdb.browse(&request).await {
            Ok(page) => {
                let model = self.model.lock().await;
                model.apply_browse(token, page).await;
            }
            Err(e) => {
                tracing::error!(request = ?request, error = %e, "Browse fetch failed");
                let model = self.model.lock().await;
                model.browse_failed(token).await;
                model.set_error(Self::format_error(&e)).await;
            }
        }
    }

    /// Re-fetch in the background so the input loop never waits on the
    /// network.
    pub fn spawn_refresh(&self) {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.refresh_browse().await;
        });
    }

    pub async fn submit_search(&self) {
        let model = self.model.lock().await;
        model.submit_search().await;
        model.set_active_section(ActiveSection::Results).await;
        drop(model);
        self.spawn_refresh();
    }

    pub async fn open_genre(&self, genre_id: u32) {
        let model = self.model.lock().await;
        model.navigate_to_genre(genre_id).await;
        model.set_active_section(ActiveSection::Results).await;
        drop(model);
        self.spawn_refresh();
    }

    pub async fn go_home(&self) {
        let model = self.model.lock().await;
        model.go_home().await;
        drop(model);
        self.spawn_refresh();
    }

    pub async fn next_page(&self) {
        let model = self.model.lock().await;
        let changed = model.next_page().await;
        drop(model);
        if changed {
            self.spawn_refresh();
        }
    }

    pub async fn prev_page(&self) {
        let model = self.model.lock().await;
        let changed = model.prev_page().await;
        drop(model);
        if changed {
            self.spawn_refresh();
        }
    }

    /// Fetch full detail for a movie and open the modal on success. A
    /// failure leaves any previous selection untouched.
    pub async fn open_movie(&self, id: u64) {
        let model = self.model.lock().await;
        let Some(tmdb) = model.get_tmdb_client().await else {
            return;
        };
        drop(model);

        let controller = self.clone();
        tokio::spawn(async move {
            tracing::debug!(movie_id = id, "Fetching movie detail");
            match tmdb.movie_detail(id).await {
                Ok(detail) => {
                    let model = controller.model.lock().await;
                    model.open_movie(detail).await;
                }
                Err(e) => {
                    tracing::error!(movie_id = id, error = %e, "Movie detail fetch failed");
                    let model = controller.model.lock().await;
                    model.set_error(Self::format_error(&e)).await;
                }
            }
        });
    }

    pub async fn open_selected_movie(&self) {
        let model = self.model.lock().await;
        let selected = model.get_selected_summary().await;
        drop(model);
        if let Some(movie) = selected {
            self.open_movie(movie.id).await;
        }
    }

    pub async fn open_selected_genre(&self) {
        let model = self.model.lock().await;
        let selected = model.get_selected_genre().await;
        drop(model);
        if let Some(genre) = selected {
            tracing::debug!(genre_id = genre.id, genre = %genre.name, "Opening genre listing");
            self.open_genre(genre.id).await;
        }
    }
}
