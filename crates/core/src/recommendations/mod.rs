//! Watch history and the recommendations it drives.

mod feed;
mod history;

pub use feed::{RecommendationFeed, RefreshOutcome, RECENTLY_WATCHED_KEY};
pub use history::{RecentlyWatched, MAX_RECENTLY_WATCHED};
