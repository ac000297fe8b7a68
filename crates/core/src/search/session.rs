//! Search session state and request generations.

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::catalog::MoviePage;
use crate::presenter::{LoadMoreState, RenderMode, SearchStatus};

/// A search request issued by the session.
///
/// Carries the generation it was issued under; its response may only be
/// applied while that generation is still current.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub generation: u64,
    pub query: String,
    pub page: u32,
    pub mode: RenderMode,
    pub token: CancellationToken,
}

/// Read-only view of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSnapshot {
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub displayed_count: usize,
    pub generation: u64,
    pub in_flight: bool,
}

/// Query, pagination and cancellation state of the search flow.
///
/// At most one request is outstanding: issuing a request cancels the
/// previous token and bumps the generation before anything else.
#[derive(Debug)]
pub struct SearchSession {
    query: String,
    page: u32,
    total_pages: u32,
    total_results: u32,
    displayed_count: usize,
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_pages: 0,
            total_results: 0,
            displayed_count: 0,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Start over with a new query.
    ///
    /// Always cancels the outstanding request. Returns the page-1 request to
    /// issue, or `None` when the query is empty.
    pub fn reset(&mut self, query: &str) -> Option<SearchRequest> {
        self.cancel_in_flight();
        self.generation += 1;

        self.query = query.to_string();
        self.page = 1;
        self.total_pages = 0;
        self.total_results = 0;
        self.displayed_count = 0;

        if self.query.is_empty() {
            return None;
        }
        Some(self.issue(1, RenderMode::Replace))
    }

    /// Request the page after the last applied one.
    ///
    /// `None` when there is no query or the last page was already reached.
    pub fn next_page(&mut self) -> Option<SearchRequest> {
        if self.query.is_empty() || self.page >= self.total_pages {
            return None;
        }
        Some(self.issue(self.page + 1, RenderMode::Append))
    }

    /// Whether a response for `request` may still touch the session.
    pub fn is_current(&self, request: &SearchRequest) -> bool {
        request.generation == self.generation
            && request.query == self.query
            && !request.token.is_cancelled()
    }

    /// Fold a response into the session and return the resulting status.
    ///
    /// Callers must check [`is_current`](Self::is_current) first.
    pub fn apply(&mut self, request: &SearchRequest, page: &MoviePage) -> SearchStatus {
        self.page = request.page;
        self.total_pages = page.total_pages;
        self.total_results = page.total_results;
        match request.mode {
            RenderMode::Replace => self.displayed_count = page.results.len(),
            RenderMode::Append => self.displayed_count += page.results.len(),
        }
        self.in_flight = None;

        let load_more = if self.page < self.total_pages {
            LoadMoreState::Available
        } else if !page.results.is_empty() {
            LoadMoreState::EndOfResults
        } else {
            LoadMoreState::Hidden
        };

        SearchStatus {
            query: self.query.clone(),
            displayed_count: self.displayed_count,
            total_results: self.total_results,
            load_more,
            no_results: page.results.is_empty() && request.mode == RenderMode::Replace,
        }
    }

    /// Drop the handle of a finished current request without touching state.
    pub fn finish(&mut self, request: &SearchRequest) {
        if request.generation == self.generation {
            self.in_flight = None;
        }
    }

    /// Status shown while a fresh query is loading.
    pub fn pending_status(&self) -> SearchStatus {
        SearchStatus {
            query: self.query.clone(),
            displayed_count: self.displayed_count,
            total_results: self.total_results,
            load_more: LoadMoreState::Hidden,
            no_results: false,
        }
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            query: self.query.clone(),
            page: self.page,
            total_pages: self.total_pages,
            total_results: self.total_results,
            displayed_count: self.displayed_count,
            generation: self.generation,
            in_flight: self.in_flight.is_some(),
        }
    }

    fn issue(&mut self, page: u32, mode: RenderMode) -> SearchRequest {
        self.cancel_in_flight();
        self.generation += 1;

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        SearchRequest {
            generation: self.generation,
            query: self.query.clone(),
            page,
            mode,
            token,
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_reset_with_empty_query_issues_nothing() {
        let mut session = SearchSession::new();
        assert!(session.reset("").is_none());
        assert_eq!(session.snapshot().page, 1);
        assert!(!session.snapshot().in_flight);
    }

    #[test]
    fn test_reset_cancels_previous_request() {
        let mut session = SearchSession::new();
        let first = session.reset("bat").unwrap();
        let second = session.reset("cat").unwrap();

        assert!(first.token.is_cancelled());
        assert!(!second.token.is_cancelled());
        assert!(!session.is_current(&first));
        assert!(session.is_current(&second));
    }

    #[test]
    fn test_reset_to_empty_cancels_previous_request() {
        let mut session = SearchSession::new();
        let request = session.reset("bat").unwrap();
        assert!(session.reset("").is_none());
        assert!(request.token.is_cancelled());
        assert!(!session.is_current(&request));
    }

    #[test]
    fn test_same_query_resubmitted_supersedes() {
        let mut session = SearchSession::new();
        let first = session.reset("bat").unwrap();
        let second = session.reset("bat").unwrap();
        assert!(!session.is_current(&first));
        assert!(session.is_current(&second));
    }

    #[test]
    fn test_apply_fresh_then_append() {
        let mut session = SearchSession::new();
        let request = session.reset("batman").unwrap();
        let status = session.apply(&request, &fixtures::movie_page(1, 20, 1, 3, 55));

        assert_eq!(status.displayed_count, 20);
        assert_eq!(status.total_results, 55);
        assert_eq!(status.load_more, LoadMoreState::Available);
        assert!(!status.no_results);

        let request = session.next_page().unwrap();
        assert_eq!(request.page, 2);
        assert_eq!(request.mode, RenderMode::Append);

        let status = session.apply(&request, &fixtures::movie_page(21, 20, 2, 3, 55));
        assert_eq!(status.displayed_count, 40);
        assert_eq!(session.snapshot().page, 2);
    }

    #[test]
    fn test_next_page_exhausted() {
        let mut session = SearchSession::new();
        let request = session.reset("batman").unwrap();
        let status = session.apply(&request, &fixtures::movie_page(1, 5, 1, 1, 5));
        assert_eq!(status.load_more, LoadMoreState::EndOfResults);

        let generation = session.snapshot().generation;
        assert!(session.next_page().is_none());
        assert_eq!(session.snapshot().generation, generation);
    }

    #[test]
    fn test_next_page_before_first_response_is_noop() {
        let mut session = SearchSession::new();
        let request = session.reset("batman").unwrap();
        assert!(session.next_page().is_none());
        assert!(session.is_current(&request));
    }

    #[test]
    fn test_next_page_without_query_is_noop() {
        let mut session = SearchSession::new();
        assert!(session.next_page().is_none());
    }

    #[test]
    fn test_empty_fresh_result_is_no_results() {
        let mut session = SearchSession::new();
        let request = session.reset("zzzzqx").unwrap();
        let status = session.apply(&request, &fixtures::movie_page(1, 0, 1, 0, 0));
        assert!(status.no_results);
        assert_eq!(status.load_more, LoadMoreState::Hidden);
    }

    #[test]
    fn test_finish_ignores_stale_request() {
        let mut session = SearchSession::new();
        let stale = session.reset("bat").unwrap();
        let _current = session.reset("cat").unwrap();
        session.finish(&stale);
        assert!(session.snapshot().in_flight);
    }
}
