//! Types for movie catalog responses.

use serde::{Deserialize, Serialize};

/// TMDB movie identifier.
pub type MovieId = u32;

/// Default number of overview characters shown before "Read more".
pub const DEFAULT_OVERVIEW_PREVIEW_CHARS: usize = 150;

/// Embedded player the card details link to.
pub const PLAYER_BASE_URL: &str = "https://www.vidlink.pro/movie";

/// A movie as listed by any catalog endpoint.
///
/// Immutable once fetched; identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    /// TMDB movie ID.
    pub id: MovieId,
    /// Movie title.
    pub title: String,
    /// Synopsis (empty when the catalog has none).
    #[serde(default)]
    pub overview: String,
    /// Poster path (relative to the image base URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    /// Average vote (0-10).
    #[serde(default)]
    pub vote_average: f32,
}

impl MovieSummary {
    /// Absolute poster URL, or the fallback cover when the movie has no poster.
    pub fn poster_url(&self, images: &ImageConfig) -> String {
        match self.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", images.base_url, path),
            _ => images.fallback_url.clone(),
        }
    }

    /// Autoplaying player URL for this movie.
    pub fn player_url(&self) -> String {
        format!("{}/{}?autoplay=true", PLAYER_BASE_URL, self.id)
    }

    /// Vote average rounded to one decimal.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// Overview cut to `max_chars` characters.
    pub fn overview_preview(&self, max_chars: usize) -> OverviewPreview {
        if self.overview.chars().count() <= max_chars {
            return OverviewPreview {
                text: self.overview.clone(),
                truncated: false,
            };
        }

        let cut: String = self.overview.chars().take(max_chars).collect();
        OverviewPreview {
            text: format!("{}... ", cut),
            truncated: true,
        }
    }
}

/// Shortened overview for card details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewPreview {
    pub text: String,
    /// Whether the full overview is longer than `text` ("Read more").
    pub truncated: bool,
}

/// Where poster images come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageConfig {
    pub base_url: String,
    pub fallback_url: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            fallback_url: "https://dummyimage.com/200x300/333/fff.png&text=No+Cover".to_string(),
        }
    }
}

/// One page of a paginated catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviePage {
    /// 1-based page number.
    pub page: u32,
    pub results: Vec<MovieSummary>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl MoviePage {
    /// An empty single page.
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: vec![],
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// Which paginated listing to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MovieList {
    /// Free-text title search.
    Search { query: String },
    Popular,
    TopRated,
    Upcoming,
    /// Titles recommended for a given movie.
    Recommendations { movie_id: MovieId },
}

impl MovieList {
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search {
            query: query.into(),
        }
    }

    pub fn recommendations(movie_id: MovieId) -> Self {
        Self::Recommendations { movie_id }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            MovieList::Search { .. } => "search",
            MovieList::Popular => "popular",
            MovieList::TopRated => "top_rated",
            MovieList::Upcoming => "upcoming",
            MovieList::Recommendations { .. } => "recommendations",
        }
    }
}
