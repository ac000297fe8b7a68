//! Search flow: query state, incremental pagination and the stale-response
//! guard.

mod controller;
mod session;

pub use controller::{SearchController, SearchOutcome};
pub use session::{SearchRequest, SearchSession, SearchSnapshot};
