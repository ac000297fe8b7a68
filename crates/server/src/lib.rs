//! HTTP front-end for the ReelScout movie browser.
//!
//! Serves the browser UI, exposes the browser's events as JSON endpoints and
//! pushes every render to connected WebSocket clients.

pub mod api;
pub mod metrics;
pub mod presenter;
pub mod state;
