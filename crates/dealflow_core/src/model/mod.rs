//! Domain model for the deal-tracking core.
//!
//! # Responsibility
//! - Define canonical records shared by every view projection.
//! - Name cross-entity references explicitly as weak ids.
//!
//! # Invariants
//! - Every entity carries a stable string id, unique within its collection.
//! - Cross-entity ids are weak: lookup only, no ownership, no integrity check.
//! - A `Deal` exclusively owns its `Evidence` records.

pub mod deal;
pub mod notification;
pub mod person;
pub mod portfolio;
pub mod task;

/// Weak reference to a [`deal::Deal`] by id.
pub type DealId = String;
/// Weak reference to a [`task::Task`] by id.
pub type TaskId = String;
/// Weak reference to a [`person::Person`] by id.
pub type PersonId = String;
/// Weak reference to a [`portfolio::PortfolioCompany`] by id.
pub type PortfolioId = String;
/// Identifier of an [`deal::Evidence`] record, unique within its owning deal.
pub type EvidenceId = String;

/// Runway below this many months raises an alert (strict `<`).
pub const RUNWAY_ALERT_MONTHS: i64 = 12;

/// Mints a fresh id for records created inside the core.
pub fn new_entity_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
