//! Result types and ranking for search results
//!
//! This module defines the result structures returned by providers and the
//! normalization applied before a response leaves the dispatcher.

mod ranking;
mod types;

pub use ranking::{normalize, rank_and_truncate};
pub use types::*;
