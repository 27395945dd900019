use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TaskId {
    fn from(n: u32) -> Self {
        TaskId(n)
    }
}

/// Declaration order is rank order: `High` sorts before `Medium`, which
/// sorts before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPrio {
    High,
    Medium,
    Low,
}

impl fmt::Display for TaskPrio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskPrio::High => write!(f, "high"),
            TaskPrio::Medium => write!(f, "medium"),
            TaskPrio::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    ToDo,
    InProgress,
    Done,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskState::ToDo => write!(f, "to do"),
            TaskState::InProgress => write!(f, "in progress"),
            TaskState::Done => write!(f, "done"),
        }
    }
}

/// A unit of work owned by exactly one project.
///
/// Tasks are created through [`Project::add_task`](super::Project::add_task),
/// which assigns their ID; the ID and creation date never change afterwards.
/// Every mutation refreshes `last_updated`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    taken_by: Option<String>,
    state: TaskState,
    prio: TaskPrio,
    created: NaiveDate,
    last_updated: NaiveDate,
}

impl Task {
    pub(crate) fn new(id: TaskId, description: impl Into<String>, prio: TaskPrio) -> Self {
        let today = Local::now().date_naive();
        Self {
            id,
            description: description.into(),
            taken_by: None,
            state: TaskState::ToDo,
            prio,
            created: today,
            last_updated: today,
        }
    }

    /// Claim the task for `name`. A task already taken by a non-empty
    /// assignee cannot be claimed again.
    pub fn take(&mut self, name: impl Into<String>) -> DomainResult<()> {
        if let Some(holder) = self.taken_by.as_deref() {
            if !holder.is_empty() {
                return Err(DomainError::AlreadyTaken(holder.to_string()));
            }
        }
        self.taken_by = Some(name.into());
        self.touch();
        Ok(())
    }

    pub fn set_state(&mut self, state: TaskState) {
        self.state = state;
        self.touch();
    }

    pub fn set_prio(&mut self, prio: TaskPrio) {
        self.prio = prio;
        self.touch();
    }

    fn touch(&mut self) {
        self.last_updated = Local::now().date_naive();
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn taken_by(&self) -> Option<&str> {
        self.taken_by.as_deref()
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn prio(&self) -> TaskPrio {
        self.prio
    }

    #[allow(dead_code)] // No console view renders it; kept with the other accessors
    pub fn created(&self) -> NaiveDate {
        self.created
    }

    pub fn last_updated(&self) -> NaiveDate {
        self.last_updated
    }
}

/// Equality is value-level on description and priority only, never on
/// identity. [`Project::remove_task`](super::Project::remove_task) relies
/// on this.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description && self.prio == other.prio
    }
}

impl Eq for Task {}

/// Natural order: priority rank first (high before low), then description.
/// Compares the same fields as `PartialEq`.
impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        self.prio
            .cmp(&other.prio)
            .then_with(|| self.description.cmp(&other.description))
    }
}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_to_do_and_unclaimed() {
        let task = Task::new(TaskId(1), "Design homepage", TaskPrio::High);
        assert_eq!(task.id(), TaskId(1));
        assert_eq!(task.state(), TaskState::ToDo);
        assert_eq!(task.taken_by(), None);
        assert_eq!(task.created(), task.last_updated());
    }

    #[test]
    fn take_claims_an_unclaimed_task() {
        let mut task = Task::new(TaskId(1), "Write copy", TaskPrio::Low);
        task.take("alice").unwrap();
        assert_eq!(task.taken_by(), Some("alice"));
    }

    #[test]
    fn take_fails_on_a_claimed_task_and_keeps_the_holder() {
        let mut task = Task::new(TaskId(1), "Write copy", TaskPrio::Low);
        task.take("alice").unwrap();

        let err = task.take("bob").unwrap_err();
        assert_eq!(err, DomainError::AlreadyTaken("alice".to_string()));
        assert_eq!(task.taken_by(), Some("alice"));
    }

    #[test]
    fn take_succeeds_again_after_an_empty_claim() {
        let mut task = Task::new(TaskId(1), "Write copy", TaskPrio::Low);
        task.take("").unwrap();
        task.take("bob").unwrap();
        assert_eq!(task.taken_by(), Some("bob"));
    }

    #[test]
    fn equality_compares_description_and_prio_only() {
        let a = Task::new(TaskId(1), "Refactor login", TaskPrio::Medium);
        let mut b = Task::new(TaskId(7), "Refactor login", TaskPrio::Medium);
        b.set_state(TaskState::Done);
        assert_eq!(a, b);

        let c = Task::new(TaskId(1), "Refactor login", TaskPrio::High);
        assert_ne!(a, c);
    }

    #[test]
    fn natural_order_ranks_priority_then_description() {
        let high = Task::new(TaskId(1), "zebra", TaskPrio::High);
        let medium_a = Task::new(TaskId(2), "apple", TaskPrio::Medium);
        let medium_b = Task::new(TaskId(3), "banana", TaskPrio::Medium);
        let low = Task::new(TaskId(4), "apple", TaskPrio::Low);

        let mut tasks = vec![low.clone(), medium_b.clone(), high.clone(), medium_a.clone()];
        tasks.sort();

        assert_eq!(tasks, vec![high, medium_a, medium_b, low]);
    }

    #[test]
    fn prio_ranks_high_before_medium_before_low() {
        assert!(TaskPrio::High < TaskPrio::Medium);
        assert!(TaskPrio::Medium < TaskPrio::Low);
    }
}
