//! Application lifecycle integration tests.
//!
//! These tests drive `MovieApp` through UI events with a mock catalog,
//! a recording presenter and an on-disk SQLite store:
//! - Start page (browse lists, favorites, recommendations)
//! - Search with pagination and superseded queries
//! - Favorites and watch history persistence across restarts

use std::sync::Arc;

use tempfile::TempDir;
use tokio_test::{assert_pending, assert_ready_eq};

use reelscout_core::{
    testing::{fixtures, MockCatalog, RecordingPresenter},
    Container, KeyValueStore, LoadMoreState, MovieApp, MovieCatalog, MovieList, Presenter,
    RefreshOutcome, SearchOutcome, Section, SqliteStore, View,
};

/// Test helper wiring the app with mocks.
struct TestHarness {
    app: MovieApp,
    catalog: Arc<MockCatalog>,
    presenter: Arc<RecordingPresenter>,
    temp_dir: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self::with_dir(temp_dir)
    }

    fn with_dir(temp_dir: TempDir) -> Self {
        let store = Arc::new(
            SqliteStore::new(&temp_dir.path().join("reelscout.db"))
                .expect("Failed to create store"),
        );
        let catalog = Arc::new(MockCatalog::new());
        let presenter = Arc::new(RecordingPresenter::new());

        let app = MovieApp::new(
            Arc::clone(&catalog) as Arc<dyn MovieCatalog>,
            store as Arc<dyn KeyValueStore>,
            Arc::clone(&presenter) as Arc<dyn Presenter>,
        );

        Self {
            app,
            catalog,
            presenter,
            temp_dir,
        }
    }

    /// Drop the app and reopen it on the same database.
    fn restart(self) -> Self {
        Self::with_dir(self.temp_dir)
    }
}

#[tokio::test]
async fn test_initialize_paints_start_page() {
    let h = TestHarness::new();
    h.catalog
        .set_page(&MovieList::Popular, fixtures::movie_page(1, 20, 1, 500, 10000))
        .await;
    h.catalog
        .set_page(&MovieList::TopRated, fixtures::movie_page(100, 20, 1, 400, 8000))
        .await;
    h.catalog
        .set_page(&MovieList::Upcoming, fixtures::movie_page(200, 20, 1, 20, 400))
        .await;

    h.app.initialize().await;

    assert_eq!(h.presenter.contents(Container::Popular).len(), 20);
    assert_eq!(h.presenter.contents(Container::TopRated).len(), 20);
    assert_eq!(h.presenter.contents(Container::Upcoming).len(), 20);
    assert_eq!(h.presenter.section_visible(Section::Favorites), Some(false));
    assert_eq!(
        h.presenter.section_visible(Section::Recommendations),
        Some(false)
    );
    // No history yet, so only the three curated lists were fetched.
    assert_eq!(h.catalog.requests().await.len(), 3);
    assert!(h.presenter.alerts().is_empty());
}

#[tokio::test]
async fn test_search_load_more_then_clear() {
    let h = TestHarness::new();
    let batman = MovieList::search("batman");
    h.catalog
        .set_page(&batman, fixtures::movie_page(1, 20, 1, 3, 55))
        .await;
    h.catalog
        .set_page(&batman, fixtures::movie_page(21, 20, 2, 3, 55))
        .await;
    h.catalog
        .set_page(&batman, fixtures::movie_page(41, 15, 3, 3, 55))
        .await;

    h.app.on_query_changed("batman").await;
    assert_eq!(
        h.presenter.last_status().unwrap().summary(),
        "Showing 20 of 55 results for \"batman\""
    );

    h.app.on_load_more_clicked().await;
    h.app.on_load_more_clicked().await;

    let status = h.presenter.last_status().unwrap();
    assert_eq!(status.displayed_count, 55);
    assert_eq!(status.load_more, LoadMoreState::EndOfResults);
    assert_eq!(h.presenter.contents(Container::SearchResults).len(), 55);

    assert_eq!(h.app.on_load_more_clicked().await, SearchOutcome::Exhausted);
    assert_eq!(h.catalog.request_count(&batman).await, 3);

    assert_eq!(h.app.on_query_changed("").await, SearchOutcome::Browse);
    assert_eq!(h.presenter.current_view(), Some(View::Browse));
    assert_eq!(h.app.search_snapshot().displayed_count, 0);
}

#[tokio::test]
async fn test_fast_typing_only_latest_query_renders() {
    let h = TestHarness::new();
    let bat = MovieList::search("bat");
    let cat = MovieList::search("cat");
    h.catalog.set_page(&bat, fixtures::movie_page(1, 10, 1, 2, 30)).await;
    h.catalog.set_page(&cat, fixtures::movie_page(500, 4, 1, 1, 4)).await;
    h.catalog.hold(&bat).await;

    let mut slow = tokio_test::task::spawn(h.app.on_query_changed("bat"));
    assert_pending!(slow.poll());

    h.app.on_query_changed("cat").await;
    h.catalog.release(&bat).await;
    assert_ready_eq!(slow.poll(), SearchOutcome::Superseded);

    assert_eq!(
        h.presenter.contents(Container::SearchResults),
        vec![500, 501, 502, 503]
    );
    let status = h.presenter.last_status().unwrap();
    assert_eq!(status.query, "cat");
    assert_eq!(status.load_more, LoadMoreState::EndOfResults);
}

#[tokio::test]
async fn test_favorites_persist_across_restart() {
    let h = TestHarness::new();
    let matrix = fixtures::movie(603, "The Matrix");

    assert!(h.app.on_favorite_toggled(&matrix).unwrap());
    assert_eq!(h.presenter.section_visible(Section::Favorites), Some(true));
    assert_eq!(h.presenter.contents(Container::Favorites), vec![603]);

    let h = h.restart();
    assert!(h.app.is_favorite(603));
    assert_eq!(h.app.favorites(), vec![matrix.clone()]);

    assert!(!h.app.on_favorite_toggled(&matrix).unwrap());
    assert_eq!(h.presenter.section_visible(Section::Favorites), Some(false));
    assert!(h.presenter.contents(Container::Favorites).is_empty());
}

#[tokio::test]
async fn test_opening_cards_drives_recommendations() {
    let h = TestHarness::new();
    h.catalog
        .set_page(
            &MovieList::recommendations(603),
            fixtures::movie_page(604, 6, 1, 2, 40),
        )
        .await;

    for id in [11, 12, 13, 14, 15, 12] {
        h.app.on_card_opened(id).await.unwrap();
    }
    let outcome = h.app.on_card_opened(603).await.unwrap();

    assert_eq!(
        outcome,
        RefreshOutcome::Rendered {
            movie_id: 603,
            count: 6
        }
    );
    assert_eq!(h.app.recently_watched().ids(), &[13, 14, 15, 12, 603]);
}

#[tokio::test]
async fn test_recommendations_restored_on_restart() {
    let h = TestHarness::new();
    h.app.on_card_opened(268).await.unwrap();

    let h = h.restart();
    h.catalog
        .set_page(
            &MovieList::recommendations(268),
            fixtures::movie_page(900, 2, 1, 1, 2),
        )
        .await;
    h.app.initialize().await;

    assert_eq!(h.presenter.contents(Container::Recommendations), vec![900, 901]);
    assert_eq!(
        h.presenter.section_visible(Section::Recommendations),
        Some(true)
    );
}
