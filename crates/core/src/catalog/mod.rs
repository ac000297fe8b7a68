//! Remote movie catalog integration.
//!
//! The catalog is a paginated JSON API (TMDB) serving search results,
//! curated lists and per-movie recommendations.

mod tmdb;
mod types;

pub use tmdb::{TmdbClient, TmdbConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to the catalog.
///
/// Any of these is a transport failure from the user's point of view.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// A paginated movie catalog.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch one page (1-based) of the given listing.
    async fn fetch_page(&self, list: &MovieList, page: u32) -> Result<MoviePage, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(overview: &str, poster_path: Option<&str>) -> MovieSummary {
        MovieSummary {
            id: 268,
            title: "Batman".to_string(),
            overview: overview.to_string(),
            poster_path: poster_path.map(str::to_string),
            vote_average: 7.234,
        }
    }

    #[test]
    fn test_poster_url_uses_base_url() {
        let images = ImageConfig::default();
        let m = movie("", Some("/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg"));
        assert_eq!(
            m.poster_url(&images),
            "https://image.tmdb.org/t/p/w500/kBf3g9crrADGMc2AMAMlLBgSm2h.jpg"
        );
    }

    #[test]
    fn test_poster_url_falls_back_without_poster() {
        let images = ImageConfig::default();
        assert_eq!(movie("", None).poster_url(&images), images.fallback_url);
        assert_eq!(movie("", Some("")).poster_url(&images), images.fallback_url);
    }

    #[test]
    fn test_player_url_autoplays_movie() {
        assert_eq!(
            movie("", None).player_url(),
            "https://www.vidlink.pro/movie/268?autoplay=true"
        );
    }

    #[test]
    fn test_rating_label_one_decimal() {
        assert_eq!(movie("", None).rating_label(), "7.2");
    }

    #[test]
    fn test_overview_preview_short_text_untouched() {
        let preview = movie("Short.", None).overview_preview(DEFAULT_OVERVIEW_PREVIEW_CHARS);
        assert_eq!(preview.text, "Short.");
        assert!(!preview.truncated);
    }

    #[test]
    fn test_overview_preview_truncates_on_char_boundary() {
        let overview = "é".repeat(200);
        let preview = movie(&overview, None).overview_preview(150);
        assert!(preview.truncated);
        assert_eq!(preview.text, format!("{}... ", "é".repeat(150)));
    }

    #[test]
    fn test_movie_summary_defaults_missing_fields() {
        let m: MovieSummary = serde_json::from_str(r#"{"id": 1, "title": "X"}"#).unwrap();
        assert_eq!(m.overview, "");
        assert_eq!(m.vote_average, 0.0);
        assert!(m.poster_path.is_none());
    }

    #[test]
    fn test_movie_list_kind() {
        assert_eq!(MovieList::search("batman").kind(), "search");
        assert_eq!(MovieList::TopRated.kind(), "top_rated");
        assert_eq!(MovieList::recommendations(603).kind(), "recommendations");
    }
}
