//! Application state container.
//!
//! # Responsibility
//! - Own the four entity collections plus the selected-deal pointer.
//! - Apply actions one at a time and report a typed outcome for each.
//!
//! # Invariants
//! - Every action touches exactly one collection.
//! - A failed action leaves state untouched.
//! - Entities are never deleted.

pub mod action;
pub mod error;
pub mod state;

pub use action::{Action, DispatchOutcome};
pub use error::{StoreError, StoreResult};
pub use state::{AppState, Store};
