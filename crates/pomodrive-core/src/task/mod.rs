//! Task list tracked alongside the timer.
//!
//! Persisted as the `pomodrive-tasks` record. The list doubles as the
//! engine's [`TaskTracker`]: the first task that is not done receives credit
//! for each finished work phase.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, Result, ValidationError};
use crate::timer::{TaskId, TaskTracker};

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: String,
    pub title: String,
    pub done: bool,
    /// Number of completed work sessions credited to this task
    pub pomos: u32,
    /// Estimated number of work sessions
    #[serde(default = "default_est_pomos")]
    pub est_pomos: u32,
}

fn default_est_pomos() -> u32 {
    1
}

impl Task {
    /// Create a new open task.
    pub fn new(title: impl Into<String>, est_pomos: u32) -> Self {
        Task {
            id: format!("task-{}-{}", Utc::now().timestamp_millis(), uuid::Uuid::new_v4().simple()),
            title: title.into(),
            done: false,
            pomos: 0,
            est_pomos,
        }
    }

    /// Calculate completion percentage (0.0 to 1.0).
    pub fn completion_percentage(&self) -> f64 {
        if self.est_pomos == 0 {
            0.0
        } else {
            (self.pomos as f64 / self.est_pomos as f64).min(1.0)
        }
    }
}

/// Ordered task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a task. `est_pomos` of `None` means the default of 1.
    ///
    /// # Errors
    /// Returns [`ValidationError::Empty`] for a blank title.
    pub fn add(&mut self, title: &str, est_pomos: Option<u32>) -> Result<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty("title".into()).into());
        }
        let task = Task::new(title, est_pomos.unwrap_or_else(default_est_pomos));
        debug!(id = %task.id, "task added");
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flip the done flag.
    pub fn toggle(&mut self, id: &str) -> Result<&Task> {
        let task = self.find_mut(id)?;
        task.done = !task.done;
        Ok(&*task)
    }

    /// Remove a task, returning it.
    pub fn delete(&mut self, id: &str) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::TaskNotFound(id.to_string()))?;
        Ok(self.tasks.remove(index))
    }

    /// Credit one completed session to a task.
    pub fn inc_pomo(&mut self, id: &str) -> Result<&Task> {
        let task = self.find_mut(id)?;
        task.pomos = task.pomos.saturating_add(1);
        Ok(&*task)
    }

    /// First task that is not done.
    pub fn find_active(&self) -> Option<&Task> {
        self.tasks.iter().find(|t| !t.done)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::TaskNotFound(id.to_string()))
    }
}

impl TaskTracker for TaskList {
    fn find_active_task(&self) -> Option<TaskId> {
        self.find_active().map(|t| t.id.clone())
    }

    fn increment_completed_sessions(&mut self, id: &str) {
        if let Err(e) = self.inc_pomo(id) {
            warn!("could not credit session: {e}");
        }
    }
}
