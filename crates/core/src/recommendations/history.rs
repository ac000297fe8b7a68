//! Bounded list of recently watched movie ids.

use serde::{Deserialize, Serialize};

use crate::catalog::MovieId;

/// How many watched ids are remembered.
pub const MAX_RECENTLY_WATCHED: usize = 5;

/// Recently watched ids, oldest first, most recent last.
///
/// Never longer than [`MAX_RECENTLY_WATCHED`] and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentlyWatched(Vec<MovieId>);

impl RecentlyWatched {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored ids, restoring the invariants if the blob broke them.
    pub fn from_ids(ids: impl IntoIterator<Item = MovieId>) -> Self {
        let mut watched = Self::new();
        for id in ids {
            watched.push(id);
        }
        watched
    }

    /// Record `id` as the most recent; re-watching moves it to the end.
    pub fn push(&mut self, id: MovieId) {
        self.0.retain(|&existing| existing != id);
        self.0.push(id);
        if self.0.len() > MAX_RECENTLY_WATCHED {
            let excess = self.0.len() - MAX_RECENTLY_WATCHED;
            self.0.drain(..excess);
        }
    }

    pub fn most_recent(&self) -> Option<MovieId> {
        self.0.last().copied()
    }

    pub fn ids(&self) -> &[MovieId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
