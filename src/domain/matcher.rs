use super::task::{Task, TaskPrio, TaskState};

/// A pluggable predicate over tasks, used by
/// [`Project::find_tasks`](super::Project::find_tasks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskMatcher {
    /// Accepts every task whose state is not done.
    NotDone,
    /// Accepts tasks with exactly this priority.
    Prio(TaskPrio),
    /// Accepts tasks taken by exactly this assignee. A task nobody has
    /// claimed never matches.
    TakenBy(String),
}

impl TaskMatcher {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskMatcher::NotDone => task.state() != TaskState::Done,
            TaskMatcher::Prio(prio) => task.prio() == *prio,
            TaskMatcher::TakenBy(name) => task.taken_by() == Some(name.as_str()),
        }
    }
}
