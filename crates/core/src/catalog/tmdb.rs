//! TMDB (The Movie Database) API client.
//!
//! TMDB requires an API key for access.
//! Rate limits are generous (around 40 requests per second).

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{MovieId, MovieList, MoviePage, MovieSummary};
use super::{CatalogError, MovieCatalog};
use crate::metrics::{CATALOG_REQUESTS, CATALOG_REQUEST_DURATION};

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_LANGUAGE: &str = "en-US";

/// TMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// TMDB API key (required).
    pub api_key: String,
    /// Base URL (default: https://api.themoviedb.org/3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Language for curated lists and recommendations (default: en-US).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Request timeout. Requests never time out when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self, CatalogError> {
        if config.api_key.is_empty() {
            return Err(CatalogError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let base_url = config
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let language = config
            .language
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            language,
        })
    }

    /// Build the endpoint URL and query string for a listing page.
    fn request_parts(&self, list: &MovieList, page: u32) -> (String, Vec<(&'static str, String)>) {
        let mut query = vec![("api_key", self.api_key.clone())];

        let path = match list {
            MovieList::Search { query: text } => {
                query.push(("query", text.clone()));
                "search/movie".to_string()
            }
            MovieList::Popular => "movie/popular".to_string(),
            MovieList::TopRated => "movie/top_rated".to_string(),
            MovieList::Upcoming => "movie/upcoming".to_string(),
            MovieList::Recommendations { movie_id } => recommendations_path(*movie_id),
        };

        if !matches!(list, MovieList::Search { .. }) {
            query.push(("language", self.language.clone()));
        }
        query.push(("page", page.to_string()));

        (format!("{}/{}", self.base_url, path), query)
    }

    async fn request_page(&self, list: &MovieList, page: u32) -> Result<MoviePage, CatalogError> {
        let (url, query) = self.request_parts(list, page);

        debug!("TMDB {} request: page={}, list={:?}", list.kind(), page, list);

        let response = self.client.get(&url).query(&query).send().await?;
        let response = check_status(response, list).await?;

        let body: TmdbPageResponse = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!(
                "Failed to parse {} response: {}",
                list.kind(),
                e
            ))
        })?;

        Ok(body.into_page(page))
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn fetch_page(&self, list: &MovieList, page: u32) -> Result<MoviePage, CatalogError> {
        let start = Instant::now();
        let result = self.request_page(list, page).await;

        let status = if result.is_ok() { "success" } else { "error" };
        CATALOG_REQUESTS
            .with_label_values(&[list.kind(), status])
            .inc();
        CATALOG_REQUEST_DURATION
            .with_label_values(&[list.kind()])
            .observe(start.elapsed().as_secs_f64());

        result
    }
}

fn recommendations_path(movie_id: MovieId) -> String {
    format!("movie/{}/recommendations", movie_id)
}

/// Map non-success HTTP statuses onto catalog errors.
async fn check_status(response: Response, list: &MovieList) -> Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        401 => Err(CatalogError::NotConfigured(
            "Invalid TMDB API key".to_string(),
        )),
        404 => Err(CatalogError::NotFound(format!("{:?}", list))),
        429 => Err(CatalogError::RateLimitExceeded),
        code => {
            let body = response.text().await.unwrap_or_default();
            Err(CatalogError::ApiError {
                status: code,
                message: body,
            })
        }
    }
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TmdbPageResponse {
    page: Option<u32>,
    #[serde(default)]
    results: Vec<TmdbMovieResult>,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results: u32,
}

impl TmdbPageResponse {
    fn into_page(self, requested: u32) -> MoviePage {
        MoviePage {
            page: self.page.unwrap_or(requested),
            results: self.results.into_iter().map(|r| r.into()).collect(),
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TmdbMovieResult {
    id: MovieId,
    #[serde(default)]
    title: String,
    overview: Option<String>,
    poster_path: Option<String>,
    vote_average: Option<f32>,
}

impl From<TmdbMovieResult> for MovieSummary {
    fn from(r: TmdbMovieResult) -> Self {
        Self {
            id: r.id,
            title: r.title,
            overview: r.overview.unwrap_or_default(),
            poster_path: r.poster_path,
            vote_average: r.vote_average.unwrap_or(0.0),
        }
    }
}
