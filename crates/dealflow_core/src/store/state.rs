//! Session state and the reducer that mutates it.
//!
//! # Invariants
//! - Mutation requires `&mut Store`; there is exactly one owner per session.
//! - Deal ids are unique within `deals`; task ids are unique within `tasks`.

use crate::model::deal::Deal;
use crate::model::notification::Notification;
use crate::model::person::Person;
use crate::model::portfolio::PortfolioCompany;
use crate::model::task::Task;
use crate::seed;
use crate::store::action::{Action, DispatchOutcome};
use crate::store::error::{StoreError, StoreResult};
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashSet;

/// Everything a session knows. Lost when the store is dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub deals: Vec<Deal>,
    pub tasks: Vec<Task>,
    pub people: Vec<Person>,
    pub portfolio: Vec<PortfolioCompany>,
    /// Held by value; not checked against `deals`.
    pub selected_deal: Option<Deal>,
    pub notifications: Vec<Notification>,
}

impl AppState {
    /// Builds the state every session starts from.
    pub fn seeded() -> Self {
        Self {
            deals: seed::deals(),
            tasks: seed::tasks(),
            people: seed::people(),
            portfolio: seed::portfolio(),
            selected_deal: None,
            notifications: Vec::new(),
        }
    }
}

/// Single source of truth for one session.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    /// Wraps caller-supplied state.
    ///
    /// # Errors
    /// - `DuplicateDealId` / `DuplicateTaskId` for the first repeated id found.
    pub fn new(state: AppState) -> StoreResult<Self> {
        if let Some(id) = first_duplicate(state.deals.iter().map(|deal| deal.id.as_str())) {
            return Err(StoreError::DuplicateDealId(id.to_string()));
        }
        if let Some(id) = first_duplicate(state.tasks.iter().map(|task| task.id.as_str())) {
            return Err(StoreError::DuplicateTaskId(id.to_string()));
        }
        Ok(Self { state })
    }

    /// Creates a store over the static seed collections.
    pub fn seeded() -> Self {
        Self {
            state: AppState::seeded(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Applies one action.
    ///
    /// # Errors
    /// - `DealNotFound` / `TaskNotFound` when an id-keyed mutation has no target.
    /// - `DuplicateDealId` / `DuplicateTaskId` when an append would collide.
    ///
    /// State is unchanged on every error path.
    pub fn dispatch(&mut self, action: Action) -> StoreResult<DispatchOutcome> {
        let action_name = action.name();
        let target = action.target_id().to_string();
        let result = self.reduce(action);
        match &result {
            Ok(outcome) => debug!(
                "event=dispatch module=store action={} target={} status={}",
                action_name,
                target,
                outcome.as_str()
            ),
            Err(err) => warn!(
                "event=dispatch module=store action={} target={} status=error code={}",
                action_name,
                target,
                err.code()
            ),
        }
        result
    }

    fn reduce(&mut self, action: Action) -> StoreResult<DispatchOutcome> {
        match action {
            Action::SelectDeal(deal) => {
                if self.state.selected_deal.as_ref() == Some(&deal) {
                    return Ok(DispatchOutcome::Unchanged);
                }
                self.state.selected_deal = Some(deal);
                Ok(DispatchOutcome::Applied)
            }
            Action::UpdateDeal(deal) => {
                let slot = self
                    .state
                    .deals
                    .iter_mut()
                    .find(|existing| existing.id == deal.id)
                    .ok_or_else(|| StoreError::DealNotFound(deal.id.clone()))?;
                if *slot == deal {
                    return Ok(DispatchOutcome::Unchanged);
                }
                *slot = deal;
                Ok(DispatchOutcome::Applied)
            }
            Action::CompleteTask(task_id) => {
                let task = self
                    .state
                    .tasks
                    .iter_mut()
                    .find(|task| task.id == task_id)
                    .ok_or(StoreError::TaskNotFound(task_id))?;
                if task.completed {
                    return Ok(DispatchOutcome::Unchanged);
                }
                task.completed = true;
                Ok(DispatchOutcome::Applied)
            }
            Action::AddTask(task) => {
                if self.task(&task.id).is_some() {
                    return Err(StoreError::DuplicateTaskId(task.id));
                }
                self.state.tasks.push(task);
                Ok(DispatchOutcome::Applied)
            }
            Action::AddDeal(deal) => {
                if self.deal(&deal.id).is_some() {
                    return Err(StoreError::DuplicateDealId(deal.id));
                }
                self.state.deals.push(deal);
                Ok(DispatchOutcome::Applied)
            }
        }
    }

    pub fn select_deal(&mut self, deal: Deal) -> StoreResult<DispatchOutcome> {
        self.dispatch(Action::SelectDeal(deal))
    }

    /// Full-record overwrite; fields not carried in `deal` are lost.
    pub fn update_deal(&mut self, deal: Deal) -> StoreResult<DispatchOutcome> {
        self.dispatch(Action::UpdateDeal(deal))
    }

    pub fn complete_task(&mut self, task_id: impl Into<String>) -> StoreResult<DispatchOutcome> {
        self.dispatch(Action::CompleteTask(task_id.into()))
    }

    pub fn add_task(&mut self, task: Task) -> StoreResult<DispatchOutcome> {
        self.dispatch(Action::AddTask(task))
    }

    pub fn add_deal(&mut self, deal: Deal) -> StoreResult<DispatchOutcome> {
        self.dispatch(Action::AddDeal(deal))
    }

    /// Appends a notification in arrival order.
    pub fn push_notification(&mut self, notification: Notification) {
        self.state.notifications.push(notification);
    }

    pub fn deal(&self, id: &str) -> Option<&Deal> {
        self.state.deals.iter().find(|deal| deal.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.state.tasks.iter().find(|task| task.id == id)
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.state.people.iter().find(|person| person.id == id)
    }

    pub fn portfolio_company(&self, id: &str) -> Option<&PortfolioCompany> {
        self.state.portfolio.iter().find(|company| company.id == id)
    }

    /// Resolves a weak deal reference to its display name.
    pub fn deal_name(&self, id: &str) -> Option<&str> {
        self.deal(id).map(|deal| deal.name.as_str())
    }

    pub fn selected_deal(&self) -> Option<&Deal> {
        self.state.selected_deal.as_ref()
    }
}

fn first_duplicate<'a>(mut ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::{AppState, Store};
    use crate::model::deal::Deal;
    use crate::model::task::{Task, TaskPriority, TaskType};
    use crate::store::{DispatchOutcome, StoreError};

    #[test]
    fn new_rejects_repeated_deal_ids() {
        let mut state = AppState::seeded();
        state.deals.push(Deal::new("2", "Shadow Co"));

        let err = Store::new(state).expect_err("repeated deal id");
        assert_eq!(err, StoreError::DuplicateDealId("2".to_string()));
    }

    #[test]
    fn new_rejects_repeated_task_ids() {
        let mut state = AppState::seeded();
        state.tasks.push(Task::with_id("1", "Again", TaskPriority::Low, TaskType::Call));

        let err = Store::new(state).expect_err("repeated task id");
        assert_eq!(err, StoreError::DuplicateTaskId("1".to_string()));
    }

    #[test]
    fn new_accepts_seed_and_empty_state() {
        let store = Store::new(AppState::seeded()).expect("seed ids are unique");
        assert_eq!(store.state(), Store::seeded().state());
        assert!(Store::new(AppState::default()).is_ok());
    }

    #[test]
    fn failed_dispatch_leaves_state_untouched() {
        let mut store = Store::seeded();
        let before = store.state().clone();

        let err = store
            .update_deal(Deal::new("missing", "Ghost Co"))
            .expect_err("unknown id must fail");
        assert_eq!(err, StoreError::DealNotFound("missing".to_string()));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn select_deal_does_not_require_membership() {
        let mut store = Store::seeded();
        let outsider = Deal::new("outside", "Not In Pipeline");

        let outcome = store.select_deal(outsider.clone()).expect("select never fails");
        assert_eq!(outcome, DispatchOutcome::Applied);
        assert_eq!(store.selected_deal(), Some(&outsider));
        assert!(store.deal("outside").is_none());
    }

    #[test]
    fn selecting_same_deal_twice_reports_unchanged() {
        let mut store = Store::seeded();
        let deal = store.deal("1").cloned().expect("seed deal 1");
        store.select_deal(deal.clone()).expect("first select");
        assert_eq!(
            store.select_deal(deal).expect("second select"),
            DispatchOutcome::Unchanged
        );
    }
}
