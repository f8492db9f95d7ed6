//! View-agnostic projections over the store.
//!
//! # Responsibility
//! - Derive filtered/sorted/grouped read models for each dashboard view.
//! - Route user intents back into the store as actions.
//!
//! # Invariants
//! - Projections never mutate their inputs.
//! - Presentation state (search text, filters, tab) is owned by the caller.

pub mod diligence;
pub mod home;
pub mod inbox;
pub mod network;
pub mod palette;
pub mod pipeline;
pub mod portfolio;
pub mod route;

/// Case-insensitive substring match; an empty needle matches everything.
pub(crate) fn matches_search(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
