//! Store error taxonomy.

use crate::model::{DealId, TaskId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Reasons an action could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `UpdateDeal` targeted an id absent from the deal collection.
    DealNotFound(DealId),
    /// `CompleteTask` targeted an id absent from the task collection.
    TaskNotFound(TaskId),
    /// `AddDeal` or `Store::new` would admit a second deal with this id.
    DuplicateDealId(DealId),
    /// `AddTask` or `Store::new` would admit a second task with this id.
    DuplicateTaskId(TaskId),
}

impl StoreError {
    /// Stable machine-readable code used in log lines and CLI output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DealNotFound(_) => "deal_not_found",
            Self::TaskNotFound(_) => "task_not_found",
            Self::DuplicateDealId(_) => "duplicate_deal_id",
            Self::DuplicateTaskId(_) => "duplicate_task_id",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DealNotFound(id) => write!(f, "deal not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateDealId(id) => write!(f, "duplicate deal id: {id}"),
            Self::DuplicateTaskId(id) => write!(f, "duplicate task id: {id}"),
        }
    }
}

impl Error for StoreError {}
