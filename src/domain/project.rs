use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::matcher::TaskMatcher;
use super::task::{Task, TaskId, TaskPrio, TaskState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProjectId {
    fn from(n: u32) -> Self {
        ProjectId(n)
    }
}

/// Derived from the states of a project's tasks, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectState {
    Empty,
    Ongoing,
    Completed,
}

impl fmt::Display for ProjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectState::Empty => write!(f, "empty"),
            ProjectState::Ongoing => write!(f, "ongoing"),
            ProjectState::Completed => write!(f, "completed"),
        }
    }
}

/// A uniquely-titled container of tasks.
///
/// Projects are created through
/// [`ProjectsManager::add_project`](super::ProjectsManager::add_project),
/// which assigns their ID. Task IDs are handed out sequentially from 1 and
/// never reused, even after a removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    created: NaiveDate,
    next_task_id: u32,
    tasks: Vec<Task>,
}

impl Project {
    pub(crate) fn new(title: impl Into<String>, description: impl Into<String>, id: ProjectId) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            created: Local::now().date_naive(),
            next_task_id: 1,
            tasks: Vec::new(),
        }
    }

    /// Look up a task by ID. Absence is a normal outcome, not an error.
    pub fn task_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn task_by_id_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id() == id)
    }

    /// Create a task with the next sequential ID and append it.
    pub fn add_task(&mut self, description: impl Into<String>, prio: TaskPrio) -> &Task {
        let task = Task::new(TaskId(self.next_task_id), description, prio);
        self.next_task_id += 1;
        self.tasks.push(task);
        self.tasks.last().expect("task was just pushed")
    }

    /// Collect every task the matcher accepts, sorted by natural order.
    /// The returned tasks are copies; the project itself is untouched.
    pub fn find_tasks(&self, matcher: &TaskMatcher) -> Vec<Task> {
        let mut matched: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| matcher.matches(t))
            .cloned()
            .collect();
        matched.sort();
        matched
    }

    /// A project with no tasks is empty. Only an in-progress task makes it
    /// ongoing; any other mix of states, including all to-do, counts as
    /// completed.
    pub fn state(&self) -> ProjectState {
        if self.tasks.is_empty() {
            return ProjectState::Empty;
        }
        if self
            .tasks
            .iter()
            .any(|t| t.state() == TaskState::InProgress)
        {
            ProjectState::Ongoing
        } else {
            ProjectState::Completed
        }
    }

    /// The creation date when there are no tasks, otherwise the most recent
    /// `last_updated` across them.
    pub fn last_updated(&self) -> NaiveDate {
        self.tasks
            .iter()
            .map(Task::last_updated)
            .max()
            .unwrap_or(self.created)
    }

    /// Remove the first task equal to `task` by value (description and
    /// priority). Returns whether a removal happened.
    pub fn remove_task(&mut self, task: &Task) -> bool {
        match self.tasks.iter().position(|t| t == task) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created(&self) -> NaiveDate {
        self.created
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.title == other.title
    }
}

impl Eq for Project {}

/// Projects order by title; the ID tie-break keeps the order total without
/// widening equality (titles are unique while a manager holds them).
impl Ord for Project {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .cmp(&other.title)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Project {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
