pub mod cards;
pub mod favorites;
pub mod handlers;
pub mod middleware;
pub mod movies;
pub mod routes;
pub mod search;
pub mod ws;

pub use routes::create_router;
pub use ws::{WsBroadcaster, WsMessage};
