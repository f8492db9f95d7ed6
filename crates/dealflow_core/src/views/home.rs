//! Morning brief: top open tasks, runway alerts, recent deals.

use crate::model::deal::Deal;
use crate::model::task::Task;

pub const DEFAULT_PRIORITY_TASKS: usize = 3;
pub const DEFAULT_RECENT_DEALS: usize = 3;

/// Open tasks ordered `high > medium > low`, truncated to `limit`.
///
/// The sort is stable: equal priorities keep collection order.
pub fn priority_tasks(tasks: &[Task], limit: usize) -> Vec<&Task> {
    let mut open: Vec<&Task> = tasks.iter().filter(|task| task.is_open()).collect();
    open.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
    open.truncate(limit);
    open
}

/// Deals whose runway is under the alert threshold.
pub fn runway_alerts(deals: &[Deal]) -> Vec<&Deal> {
    deals.iter().filter(|deal| deal.has_runway_alert()).collect()
}

/// The first `count` deals in collection order.
pub fn recent_deals(deals: &[Deal], count: usize) -> Vec<&Deal> {
    deals.iter().take(count).collect()
}

/// Everything the home view shows at once.
#[derive(Debug, Clone, PartialEq)]
pub struct MorningBrief<'a> {
    pub priority_tasks: Vec<&'a Task>,
    pub runway_alerts: Vec<&'a Deal>,
    pub recent_deals: Vec<&'a Deal>,
}

impl<'a> MorningBrief<'a> {
    pub fn build(deals: &'a [Deal], tasks: &'a [Task]) -> Self {
        Self {
            priority_tasks: priority_tasks(tasks, DEFAULT_PRIORITY_TASKS),
            runway_alerts: runway_alerts(deals),
            recent_deals: recent_deals(deals, DEFAULT_RECENT_DEALS),
        }
    }
}
