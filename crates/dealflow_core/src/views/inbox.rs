//! Task inbox: completion filter, title search, deal-name resolution.

use crate::model::deal::Deal;
use crate::model::notification::Notification;
use crate::model::task::{Task, TaskPriority};
use crate::store::{DispatchOutcome, Store, StoreResult};
use crate::views::matches_search;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn parse(value: &str) -> Option<TaskFilter> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// One inbox line with its deal reference resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxRow<'a> {
    pub task: &'a Task,
    /// `None` when the task has no deal or the id dangles.
    pub deal_name: Option<&'a str>,
}

pub fn filter_tasks<'a>(tasks: &'a [Task], filter: TaskFilter, search: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task) && matches_search(&task.title, search))
        .collect()
}

pub fn inbox_rows<'a>(
    tasks: &'a [Task],
    deals: &'a [Deal],
    filter: TaskFilter,
    search: &str,
) -> Vec<InboxRow<'a>> {
    filter_tasks(tasks, filter, search)
        .into_iter()
        .map(|task| InboxRow {
            task,
            deal_name: task.deal_id.as_deref().and_then(|deal_id| {
                deals
                    .iter()
                    .find(|deal| deal.id == deal_id)
                    .map(|deal| deal.name.as_str())
            }),
        })
        .collect()
}

/// Counters shown above the task list, over the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InboxSummary {
    pub pending: usize,
    /// Pending tasks with `high` priority.
    pub high_priority_pending: usize,
    pub completed: usize,
}

impl InboxSummary {
    pub fn build(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut summary, task| {
            if task.completed {
                summary.completed += 1;
            } else {
                summary.pending += 1;
                if task.priority == TaskPriority::High {
                    summary.high_priority_pending += 1;
                }
            }
            summary
        })
    }
}

/// Completes a task from the inbox.
///
/// Appends `Notification::TaskCompleted` only when the task actually changed.
pub fn complete_task(store: &mut Store, task_id: &str) -> StoreResult<DispatchOutcome> {
    let outcome = store.complete_task(task_id)?;
    if outcome == DispatchOutcome::Applied {
        store.push_notification(Notification::TaskCompleted {
            task_id: task_id.to_string(),
        });
    }
    Ok(outcome)
}
