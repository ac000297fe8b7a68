//! Server-side presenter: keeps the current view and mirrors every change
//! to WebSocket subscribers.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use reelscout_core::{
    Container, MovieId, MovieSummary, Presenter, RenderMode, SearchStatus, Section, View,
};
use tracing::{debug, warn};

use crate::api::{WsBroadcaster, WsMessage};

/// What the browser currently shows.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub view: View,
    pub containers: HashMap<Container, Vec<MovieSummary>>,
    pub sections: HashMap<Section, bool>,
    pub search: SearchStatus,
    pub loading: bool,
    pub last_alert: Option<String>,
}

impl ViewState {
    /// Movies painted in `container`, empty if it was never rendered.
    pub fn movies(&self, container: Container) -> &[MovieSummary] {
        self.containers
            .get(&container)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn section_visible(&self, section: Section) -> bool {
        self.sections.get(&section).copied().unwrap_or(false)
    }
}

/// [`Presenter`] backed by an in-memory [`ViewState`].
pub struct ViewPresenter {
    state: RwLock<ViewState>,
    broadcaster: WsBroadcaster,
}

impl ViewPresenter {
    pub fn new(broadcaster: WsBroadcaster) -> Self {
        Self {
            state: RwLock::new(ViewState::default()),
            broadcaster,
        }
    }

    pub fn broadcaster(&self) -> &WsBroadcaster {
        &self.broadcaster
    }

    /// Copy of the current view.
    pub fn snapshot(&self) -> ViewState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Look up a displayed movie by id, in any container.
    pub fn find_movie(&self, id: MovieId) -> Option<MovieSummary> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .containers
            .values()
            .flatten()
            .find(|movie| movie.id == id)
            .cloned()
    }

    fn update<F: FnOnce(&mut ViewState)>(&self, f: F) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state);
    }
}

impl Presenter for ViewPresenter {
    fn render(&self, container: Container, movies: &[MovieSummary], mode: RenderMode) {
        debug!(
            container = container.as_str(),
            count = movies.len(),
            ?mode,
            "Rendering movies"
        );
        self.update(|state| {
            let shown = state.containers.entry(container).or_default();
            if mode == RenderMode::Replace {
                shown.clear();
            }
            shown.extend_from_slice(movies);
        });
        self.broadcaster.rendered(container, movies, mode);
    }

    fn show_view(&self, view: View) {
        self.update(|state| state.view = view);
        self.broadcaster.broadcast(WsMessage::ViewChanged { view });
    }

    fn set_section_visible(&self, section: Section, visible: bool) {
        self.update(|state| {
            state.sections.insert(section, visible);
        });
        self.broadcaster
            .broadcast(WsMessage::SectionVisibility { section, visible });
    }

    fn update_search_status(&self, status: &SearchStatus) {
        self.update(|state| state.search = status.clone());
        self.broadcaster.search_status(status);
    }

    fn set_loading(&self, loading: bool) {
        self.update(|state| state.loading = loading);
        self.broadcaster.broadcast(WsMessage::Loading { loading });
    }

    fn alert(&self, message: &str) {
        warn!("Alert: {}", message);
        self.update(|state| state.last_alert = Some(message.to_string()));
        self.broadcaster.broadcast(WsMessage::Alert {
            message: message.to_string(),
        });
    }
}
