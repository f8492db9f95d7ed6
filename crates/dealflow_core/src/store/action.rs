//! Store actions and their outcomes.

use crate::model::deal::Deal;
use crate::model::task::Task;
use crate::model::TaskId;

/// One request against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Point the selected-deal slot at this record, by value.
    SelectDeal(Deal),
    /// Replace the deal with the same id by this full record.
    UpdateDeal(Deal),
    /// Mark one task completed.
    CompleteTask(TaskId),
    /// Append a task.
    AddTask(Task),
    /// Append a deal.
    AddDeal(Deal),
}

impl Action {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectDeal(_) => "select_deal",
            Self::UpdateDeal(_) => "update_deal",
            Self::CompleteTask(_) => "complete_task",
            Self::AddTask(_) => "add_task",
            Self::AddDeal(_) => "add_deal",
        }
    }

    /// Id of the record the action targets.
    pub fn target_id(&self) -> &str {
        match self {
            Self::SelectDeal(deal) | Self::UpdateDeal(deal) | Self::AddDeal(deal) => &deal.id,
            Self::CompleteTask(id) => id,
            Self::AddTask(task) => &task.id,
        }
    }
}

/// Result of an action that found its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// State changed.
    Applied,
    /// Target already matched the request; state unchanged.
    Unchanged,
}

impl DispatchOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Unchanged => "unchanged",
        }
    }
}
