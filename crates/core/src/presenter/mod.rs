//! Presentation boundary.
//!
//! The core never touches markup. It tells a [`Presenter`] what to paint and
//! which parts of the page to show; the presenter owns everything visual.

mod types;

pub use types::*;

use crate::catalog::MovieSummary;

/// Renderer capability implemented by the front-end host.
///
/// Calls are synchronous and cheap; implementations must not block.
pub trait Presenter: Send + Sync {
    /// Paint `movies` into `container`, replacing or appending.
    fn render(&self, container: Container, movies: &[MovieSummary], mode: RenderMode);

    /// Switch between the browse and search views.
    fn show_view(&self, view: View);

    /// Show or hide a content-dependent section.
    fn set_section_visible(&self, section: Section, visible: bool);

    /// Update the status line, load-more control and "no results" message.
    fn update_search_status(&self, status: &SearchStatus);

    /// Show or hide the loading overlay.
    fn set_loading(&self, loading: bool);

    /// Surface a user-visible notification.
    fn alert(&self, message: &str);
}

/// Notification shown when a catalog request fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies.";
