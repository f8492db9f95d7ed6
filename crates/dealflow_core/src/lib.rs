//! Core domain logic for dealflow.
//! This crate is the single source of truth for deal-tracking business rules.

pub mod export;
pub mod logging;
pub mod model;
pub mod seed;
pub mod store;
pub mod views;

pub use export::{investment_memo, lp_report, ExportError, ExportedDocument};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::deal::{Deal, DealMetrics, DealStatus, Evidence, EvidenceType, ScoreBand, Stage};
pub use model::notification::Notification;
pub use model::person::Person;
pub use model::portfolio::{PortfolioCompany, PortfolioMetrics, PortfolioStatus};
pub use model::task::{Task, TaskPriority, TaskType};
pub use model::{DealId, EvidenceId, PersonId, PortfolioId, TaskId};
pub use store::{Action, AppState, DispatchOutcome, Store, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
