//! Search orchestration module
//!
//! Validates incoming requests, resolves the provider for the requested
//! category, and normalizes what it returns.

mod dispatcher;
mod models;

pub use dispatcher::Dispatcher;
pub use models::*;
