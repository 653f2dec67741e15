//! CLI command implementations.

pub mod listing;
pub mod redditor;
