//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the catalog and presenter
//! traits, allowing the whole flow to be exercised without network access
//! or a front-end.
//!
//! # Example
//!
//! ```rust,ignore
//! use reelscout_core::testing::{fixtures, MockCatalog, RecordingPresenter};
//!
//! let catalog = MockCatalog::new();
//! let presenter = RecordingPresenter::new();
//!
//! // Configure mock responses
//! catalog.set_page(&MovieList::Popular, fixtures::movie_page(1, 20, 1, 10, 200)).await;
//! ```

mod mock_catalog;
mod recording_presenter;

pub use mock_catalog::{MockCatalog, RecordedRequest};
pub use recording_presenter::{PresenterCall, RecordingPresenter};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{MovieId, MoviePage, MovieSummary};

    /// Create a test movie with reasonable defaults.
    pub fn movie(id: MovieId, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            overview: format!("A movie about {}.", title.to_lowercase()),
            poster_path: Some(format!("/poster-{}.jpg", id)),
            vote_average: 7.5,
        }
    }

    /// Create a page of `count` movies with consecutive ids from `first_id`.
    pub fn movie_page(
        first_id: MovieId,
        count: u32,
        page: u32,
        total_pages: u32,
        total_results: u32,
    ) -> MoviePage {
        MoviePage {
            page,
            results: (first_id..first_id + count)
                .map(|id| movie(id, &format!("Movie {}", id)))
                .collect(),
            total_pages,
            total_results,
        }
    }
}
