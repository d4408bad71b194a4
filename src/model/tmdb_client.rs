//! TMDB API client wrapper
//!
//! All outbound catalog requests go through this adapter. Responses are
//! deserialized into wire structs with every optional field nullable, then
//! converted into the domain types the rest of the app uses.

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;

use super::content::{BrowseRequest, MovieDetail, MoviePage, MovieSummary};
use super::types::Genre;

const TMDB_BASE: &str = "https://api.themoviedb.org/3";
const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

pub const POSTER_SIZE: &str = "w500";
pub const BACKDROP_SIZE: &str = "w1280";

/// Build an image URL for a catalog-returned asset path.
pub fn image_url(size: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    format!("{IMAGE_BASE}/{size}/{path}")
}

pub fn poster_url(path: Option<&str>) -> Option<String> {
    path.map(|p| image_url(POSTER_SIZE, p))
}

pub fn backdrop_url(path: Option<&str>) -> Option<String> {
    path.map(|p| image_url(BACKDROP_SIZE, p))
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
}

impl TmdbClient {
    /// Create a client that sends the bearer token on every request.
    pub fn new(api_token: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_token}"))
            .context("API token is not a valid header value")?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("building HTTP client failed")?;
        Ok(Self { client })
    }

    /// Fetch the full genre catalog.
    pub async fn fetch_genres(&self) -> Result<Vec<Genre>> {
        let url = format!("{TMDB_BASE}/genre/movie/list?language=en");
        let data: GenreListResponse = self.get_json(&url).await?;
        let genres: Vec<Genre> = data.genres.into_iter().map(Genre::from).collect();
        tracing::info!(count = genres.len(), "Fetched genre catalog");
        Ok(genres)
    }

    /// Fetch one page of movies for a browse request.
    pub async fn browse(&self, request: &BrowseRequest) -> Result<MoviePage> {
        let url = browse_url(request);
        let data: PagedResponse = self.get_json(&url).await?;
        let page = MoviePage::from(data);
        tracing::info!(
            request = ?request,
            movies = page.movies.len(),
            total_pages = page.total_pages,
            "Browse request completed"
        );
        Ok(page)
    }

    /// Fetch full detail for a single movie.
    pub async fn movie_detail(&self, id: u64) -> Result<MovieDetail> {
        let data: MovieDetailResponse = self.get_json(&detail_url(id)).await?;
        Ok(MovieDetail::from(data))
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "API request started");
        let res = self.client.get(url).send().await.context("request failed")?;
        let status = res.status();
        let text = res.text().await.context("reading body failed")?;
        if !status.is_success() {
            return Err(anyhow!("{} -> {} {}", url, status, text));
        }
        let parsed: T = serde_json::from_str(&text).context("JSON parse failed")?;
        Ok(parsed)
    }
}

/// URL for a single movie's full detail.
pub fn detail_url(id: u64) -> String {
    format!("{TMDB_BASE}/movie/{id}?language=en-US")
}

/// URL for a browse request, query parameters matching the catalog contract.
pub fn browse_url(request: &BrowseRequest) -> String {
    match request {
        BrowseRequest::Trending { page } => {
            format!("{TMDB_BASE}/trending/movie/day?language=en-US&page={page}")
        }
        BrowseRequest::Search { query, page } => format!(
            "{TMDB_BASE}/search/movie?query={}&include_adult=false&language=en-US&page={page}",
            urlencoding::encode(query)
        ),
        BrowseRequest::Genre { genre_id, page } => format!(
            "{TMDB_BASE}/discover/movie?with_genres={genre_id}&language=en-US&page={page}"
        ),
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    genres: Vec<GenreEntry>,
}

#[derive(Debug, Deserialize)]
struct GenreEntry {
    id: u32,
    name: String,
}

impl From<GenreEntry> for Genre {
    fn from(entry: GenreEntry) -> Self {
        Genre {
            id: entry.id,
            name: entry.name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PagedResponse {
    page: Option<u32>,
    results: Vec<MovieResult>,
    total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MovieResult {
    id: u64,
    title: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f64>,
    original_language: Option<String>,
}

impl From<MovieResult> for MovieSummary {
    fn from(r: MovieResult) -> Self {
        MovieSummary {
            id: r.id,
            title: r.title.unwrap_or_default(),
            overview: r.overview.filter(|o| !o.is_empty()),
            poster_path: r.poster_path,
            backdrop_path: r.backdrop_path,
            release_date: r.release_date.filter(|d| !d.is_empty()),
            // The catalog reports unrated movies as 0.0
            vote_average: r.vote_average.filter(|v| *v > 0.0),
            original_language: r.original_language,
        }
    }
}

impl From<PagedResponse> for MoviePage {
    fn from(r: PagedResponse) -> Self {
        MoviePage {
            page: r.page.unwrap_or(1),
            total_pages: r.total_pages.unwrap_or(1),
            movies: r.results.into_iter().map(MovieSummary::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MovieDetailResponse {
    id: u64,
    title: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    release_date: Option<String>,
    runtime: Option<u32>,
    original_language: Option<String>,
    vote_average: Option<f64>,
    vote_count: Option<u64>,
    genres: Option<Vec<GenreEntry>>,
}

impl From<MovieDetailResponse> for MovieDetail {
    fn from(r: MovieDetailResponse) -> Self {
        MovieDetail {
            id: r.id,
            title: r.title.unwrap_or_default(),
            overview: r.overview.filter(|o| !o.is_empty()),
            poster_path: r.poster_path,
            release_date: r.release_date.filter(|d| !d.is_empty()),
            runtime: r.runtime.filter(|m| *m > 0),
            original_language: r.original_language,
            vote_average: r.vote_average.filter(|v| *v > 0.0),
            vote_count: r.vote_count.filter(|c| *c > 0),
            genres: r
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(Genre::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trending_url_carries_page() {
        let url = browse_url(&BrowseRequest::Trending { page: 1 });
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/trending/movie/day?language=en-US&page=1"
        );
    }

    #[test]
    fn search_url_encodes_the_query() {
        let url = browse_url(&BrowseRequest::Search {
            query: "dune part two".to_string(),
            page: 1,
        });
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?query=dune%20part%20two&include_adult=false&language=en-US&page=1"
        );
    }

    #[test]
    fn genre_url_filters_by_genre_id() {
        let url = browse_url(&BrowseRequest::Genre {
            genre_id: 28,
            page: 4,
        });
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/discover/movie?with_genres=28&language=en-US&page=4"
        );
    }

    #[test]
    fn detail_url_targets_the_movie_id() {
        assert_eq!(
            detail_url(42),
            "https://api.themoviedb.org/3/movie/42?language=en-US"
        );
    }

    #[test]
    fn image_urls_tolerate_leading_slash() {
        assert_eq!(
            poster_url(Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(
            backdrop_url(Some("xyz.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w1280/xyz.jpg")
        );
        assert_eq!(poster_url(None), None);
    }

    #[test]
    fn paged_response_converts_with_absent_optionals() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 1, "title": "A", "poster_path": "/a.jpg",
                 "release_date": "2021-10-22", "vote_average": 7.8},
                {"id": 2, "release_date": "", "vote_average": 0.0}
            ],
            "total_pages": 5
        }"#;
        let parsed: PagedResponse = serde_json::from_str(json).unwrap();
        let page = MoviePage::from(parsed);

        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.movies.len(), 2);
        assert_eq!(page.movies[0].title, "A");
        assert_eq!(page.movies[0].release_year(), Some(2021));
        assert_eq!(page.movies[0].vote_average, Some(7.8));
        // Absent or zeroed fields collapse to None
        assert_eq!(page.movies[1].title, "");
        assert_eq!(page.movies[1].release_date, None);
        assert_eq!(page.movies[1].vote_average, None);
    }

    #[test]
    fn response_without_results_is_a_parse_failure() {
        let json = r#"{"status_code": 7, "status_message": "Invalid API key"}"#;
        assert!(serde_json::from_str::<PagedResponse>(json).is_err());
    }

    #[test]
    fn detail_response_converts_genre_list_and_fallbacks() {
        let json = r#"{
            "id": 42,
            "title": "Deep Thought",
            "overview": "",
            "runtime": 0,
            "vote_average": 8.2,
            "vote_count": 1200,
            "original_language": "en",
            "genres": [{"id": 18, "name": "Drama"}, {"id": 878, "name": "Science Fiction"}]
        }"#;
        let parsed: MovieDetailResponse = serde_json::from_str(json).unwrap();
        let detail = MovieDetail::from(parsed);

        assert_eq!(detail.id, 42);
        assert_eq!(detail.overview, None);
        assert_eq!(detail.runtime, None);
        assert_eq!(detail.vote_count, Some(1200));
        assert_eq!(detail.genres.len(), 2);
        assert_eq!(detail.genres[1].name, "Science Fiction");
    }
}
