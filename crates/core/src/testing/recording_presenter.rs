//! Presenter that records every call for test assertions.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::catalog::{MovieId, MovieSummary};
use crate::presenter::{Container, Presenter, RenderMode, SearchStatus, Section, View};

/// A recorded presenter call.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    Render {
        container: Container,
        movies: Vec<MovieId>,
        mode: RenderMode,
    },
    ShowView(View),
    SectionVisible(Section, bool),
    SearchStatus(SearchStatus),
    Loading(bool),
    Alert(String),
}

/// Mock implementation of the Presenter trait.
///
/// Besides the raw call log it tracks what each container would display.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    calls: Mutex<Vec<PresenterCall>>,
    containers: Mutex<HashMap<Container, Vec<MovieId>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls in order.
    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Movie ids currently displayed in `container`.
    pub fn contents(&self, container: Container) -> Vec<MovieId> {
        self.containers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&container)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of render calls targeting `container`.
    pub fn render_count(&self, container: Container) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, PresenterCall::Render { container: target, .. } if *target == container))
            .count()
    }

    /// Messages passed to `alert`.
    pub fn alerts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                PresenterCall::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Last search status pushed.
    pub fn last_status(&self) -> Option<SearchStatus> {
        self.calls().into_iter().rev().find_map(|c| match c {
            PresenterCall::SearchStatus(status) => Some(status),
            _ => None,
        })
    }

    /// Last view shown.
    pub fn current_view(&self) -> Option<View> {
        self.calls().into_iter().rev().find_map(|c| match c {
            PresenterCall::ShowView(view) => Some(view),
            _ => None,
        })
    }

    /// Last visibility set for `section`.
    pub fn section_visible(&self, section: Section) -> Option<bool> {
        self.calls().into_iter().rev().find_map(|c| match c {
            PresenterCall::SectionVisible(s, visible) if s == section => Some(visible),
            _ => None,
        })
    }

    /// Forget all recorded calls and container contents.
    pub fn clear(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.containers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn record(&self, call: PresenterCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl Presenter for RecordingPresenter {
    fn render(&self, container: Container, movies: &[MovieSummary], mode: RenderMode) {
        let ids: Vec<MovieId> = movies.iter().map(|m| m.id).collect();

        {
            let mut containers = self
                .containers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let shown = containers.entry(container).or_default();
            if mode == RenderMode::Replace {
                shown.clear();
            }
            shown.extend(ids.iter().copied());
        }

        self.record(PresenterCall::Render {
            container,
            movies: ids,
            mode,
        });
    }

    fn show_view(&self, view: View) {
        self.record(PresenterCall::ShowView(view));
    }

    fn set_section_visible(&self, section: Section, visible: bool) {
        self.record(PresenterCall::SectionVisible(section, visible));
    }

    fn update_search_status(&self, status: &SearchStatus) {
        self.record(PresenterCall::SearchStatus(status.clone()));
    }

    fn set_loading(&self, loading: bool) {
        self.record(PresenterCall::Loading(loading));
    }

    fn alert(&self, message: &str) {
        self.record(PresenterCall::Alert(message.to_string()));
    }
}
