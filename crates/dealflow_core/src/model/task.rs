//! Task records surfaced in the inbox and morning brief.
//!
//! # Invariants
//! - `completed` only moves from `false` to `true`.
//! - `deal_id` is a weak reference; a dangling id is tolerated.

use super::{new_entity_id, DealId, TaskId};
use serde::{Deserialize, Serialize};

/// Task urgency with strict order `high > medium > low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    /// Larger rank sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<TaskPriority> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// Kind of follow-up work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskType {
    Review,
    Call,
    Research,
    FollowUp,
}

impl TaskType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Review => "review",
            Self::Call => "call",
            Self::Research => "research",
            Self::FollowUp => "follow-up",
        }
    }
}

/// Action item, optionally linked to a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub priority: TaskPriority,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: TaskType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<DealId>,
    pub due_date: String,
    pub completed: bool,
    pub assignee: String,
}

impl Task {
    /// Creates an open task with a generated id.
    pub fn new(title: impl Into<String>, priority: TaskPriority, kind: TaskType) -> Self {
        Self::with_id(new_entity_id(), title, priority, kind)
    }

    /// Creates an open task with a caller-provided id.
    ///
    /// Uniqueness is checked by the store on insert, not here.
    pub fn with_id(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        priority: TaskPriority,
        kind: TaskType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            priority,
            kind,
            deal_id: None,
            due_date: String::new(),
            completed: false,
            assignee: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.completed
    }
}
