//! Typed notifications held by the application state.
//!
//! The store keeps them in arrival order and never produces them on its own.
//! `views::pipeline::move_deal` pushes `StageChanged` and
//! `views::inbox::complete_task` pushes `TaskCompleted` after a successful
//! dispatch.

use super::deal::Stage;
use super::{DealId, TaskId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// A deal moved to another pipeline stage.
    StageChanged {
        deal_id: DealId,
        from: Stage,
        to: Stage,
    },
    /// A task was marked completed.
    TaskCompleted { task_id: TaskId },
}
