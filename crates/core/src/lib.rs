pub mod app;
pub mod browse;
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod metrics;
pub mod presenter;
pub mod recommendations;
pub mod search;
pub mod storage;
pub mod testing;

pub use app::MovieApp;
pub use browse::BrowseFeed;
pub use catalog::{
    CatalogError, ImageConfig, MovieCatalog, MovieId, MovieList, MoviePage, MovieSummary,
    OverviewPreview, TmdbClient, TmdbConfig, DEFAULT_OVERVIEW_PREVIEW_CHARS,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    SanitizedConfig, ServerConfig, StorageBackend, StorageConfig,
};
pub use favorites::FavoritesStore;
pub use presenter::{
    Container, LoadMoreState, Presenter, RenderMode, SearchStatus, Section, View,
    FETCH_FAILED_MESSAGE,
};
pub use recommendations::{RecentlyWatched, RecommendationFeed, RefreshOutcome};
pub use search::{SearchController, SearchOutcome, SearchSnapshot};
pub use storage::{open_store, KeyValueStore, MemoryStore, SqliteStore, StorageError};
