//! Web server module
//!
//! HTTP transport adapter: translates JSON requests into dispatcher calls and
//! dispatcher outcomes back into HTTP responses.

mod handlers;
mod routes;
mod state;
mod wire;

pub use routes::create_router;
pub use state::AppState;
pub use wire::{ErrorBody, ResultItem, SearchPayload};
