//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog requests (counts, latency)
//! - Search reconciliation (stale responses dropped)
//! - Favorites and watch history

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Catalog Metrics
// =============================================================================

/// Catalog requests total by listing kind and status.
pub static CATALOG_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "reelscout_catalog_requests_total",
            "Total movie catalog requests",
        ),
        &["list", "status"], // status: "success", "error"
    )
    .unwrap()
});

/// Catalog request duration in seconds.
pub static CATALOG_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "reelscout_catalog_request_duration_seconds",
            "Duration of movie catalog requests",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["list"],
    )
    .unwrap()
});

// =============================================================================
// Search Metrics
// =============================================================================

/// Responses dropped because a newer request superseded them.
pub static STALE_RESPONSES_DROPPED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "reelscout_stale_responses_dropped_total",
            "Catalog responses discarded as superseded",
        ),
        &["feed"], // "search", "recommendations"
    )
    .unwrap()
});

/// Search pages applied to the session.
pub static SEARCH_PAGES_APPLIED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "reelscout_search_pages_applied_total",
            "Search result pages applied",
        ),
        &["mode"], // "replace", "append"
    )
    .unwrap()
});

// =============================================================================
// Side Store Metrics
// =============================================================================

/// Favorite toggles by resulting action.
pub static FAVORITE_TOGGLES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("reelscout_favorite_toggles_total", "Favorite toggles"),
        &["action"], // "added", "removed"
    )
    .unwrap()
});

/// Movies recorded as watched.
pub static WATCHED_RECORDED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "reelscout_watched_recorded_total",
        "Movies opened and recorded in watch history",
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CATALOG_REQUESTS.clone()),
        Box::new(CATALOG_REQUEST_DURATION.clone()),
        Box::new(STALE_RESPONSES_DROPPED.clone()),
        Box::new(SEARCH_PAGES_APPLIED.clone()),
        Box::new(FAVORITE_TOGGLES.clone()),
        Box::new(WATCHED_RECORDED.clone()),
    ]
}
