use crate::error::AppError;
use crate::model::{Task, TaskFilter};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Ordered to-do list addressed by 1-based positions.
///
/// Positions are not stable identifiers: deleting a task shifts every later
/// task down by one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks matching `filter`, paired with their position in the full list.
    pub fn entries(&self, filter: TaskFilter) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(offset, task)| (offset + 1, task))
            .filter(move |(_, task)| filter.matches(task))
    }

    pub fn get(&self, index: i64) -> Result<&Task, AppError> {
        let offset = self.offset(index)?;
        Ok(&self.tasks[offset])
    }

    pub fn add<D: Into<String>>(&mut self, description: D) -> &Task {
        let task = Task::new(description, OffsetDateTime::now_utc());
        tracing::info!(description = %task.description, "adding task");
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn complete(&mut self, index: i64) -> Result<&Task, AppError> {
        let offset = self.offset(index)?;
        self.tasks[offset].mark_done(OffsetDateTime::now_utc());
        tracing::info!(index, "completed task");
        Ok(&self.tasks[offset])
    }

    pub fn undo_complete(&mut self, index: i64) -> Result<&Task, AppError> {
        let offset = self.offset(index)?;
        self.tasks[offset].mark_pending();
        tracing::info!(index, "reopened task");
        Ok(&self.tasks[offset])
    }

    pub fn delete(&mut self, index: i64) -> Result<Task, AppError> {
        let offset = self.offset(index)?;
        tracing::info!(index, "deleting task");
        Ok(self.tasks.remove(offset))
    }

    /// Removes every task and returns how many were dropped.
    pub fn delete_all(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        tracing::info!(removed, "cleared task list");
        removed
    }

    /// Validates a 1-based `index` and returns it as a list position.
    pub fn position(&self, index: i64) -> Result<usize, AppError> {
        let len = self.tasks.len();
        usize::try_from(index)
            .ok()
            .filter(|position| (1..=len).contains(position))
            .ok_or_else(|| AppError::out_of_range(index, len))
    }

    fn offset(&self, index: i64) -> Result<usize, AppError> {
        Ok(self.position(index)? - 1)
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
