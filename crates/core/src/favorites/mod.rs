//! Favorite movies, persisted as a single blob.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, warn};

use crate::catalog::{MovieId, MovieSummary};
use crate::metrics::FAVORITE_TOGGLES;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key of the favorites blob.
pub const FAVORITES_KEY: &str = "favoriteMovies";

/// Favorites keyed by movie id.
pub type FavoritesMap = BTreeMap<MovieId, MovieSummary>;

/// Map of favorite movies backed by a key-value store.
///
/// The stored value is a JSON object of id to full movie record.
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    /// Held across load-modify-save so concurrent toggles see each other.
    write_lock: Mutex<()>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.load().contains_key(&id)
    }

    /// Add `movie` when absent, remove it when present.
    ///
    /// Persists the full map once and returns the new favorite state.
    pub fn toggle(&self, movie: &MovieSummary) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut favorites = self.load();

        let favorited = if favorites.remove(&movie.id).is_some() {
            false
        } else {
            favorites.insert(movie.id, movie.clone());
            true
        };

        self.save(&favorites)?;

        let action = if favorited { "added" } else { "removed" };
        FAVORITE_TOGGLES.with_label_values(&[action]).inc();
        debug!("Favorite {}: id={}, title='{}'", action, movie.id, movie.title);

        Ok(favorited)
    }

    /// All favorites ordered by id.
    pub fn list(&self) -> Vec<MovieSummary> {
        self.load().into_values().collect()
    }

    /// Current map. A missing or unreadable blob counts as empty.
    pub fn load(&self) -> FavoritesMap {
        let blob = match self.store.get(FAVORITES_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return FavoritesMap::new(),
            Err(e) => {
                warn!("Failed to read favorites: {}", e);
                return FavoritesMap::new();
            }
        };

        serde_json::from_str(&blob).unwrap_or_else(|e| {
            warn!("Ignoring unreadable favorites blob: {}", e);
            FavoritesMap::new()
        })
    }

    fn save(&self, favorites: &FavoritesMap) -> Result<(), StorageError> {
        let blob = serde_json::to_string(favorites)?;
        self.store.set(FAVORITES_KEY, &blob)
    }
}
