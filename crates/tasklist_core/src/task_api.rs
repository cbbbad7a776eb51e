use crate::config::Config;
use crate::error::AppError;
use crate::list::TaskList;
use crate::model::{Task, TaskFilter};
use crate::storage::json_store;

/// A task together with the 1-based position it had when the command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub index: usize,
    pub task: Task,
}

pub fn add_task(config: &Config, description: &str) -> Result<TaskEntry, AppError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(AppError::blank_input("task cannot be blank"));
    }

    let mut list = json_store::load_list(config.store_path())?;
    let task = list.add(trimmed).clone();
    let index = list.len();
    json_store::save_list(config.store_path(), &list)?;

    Ok(TaskEntry { index, task })
}

pub fn list_tasks(config: &Config, filter: TaskFilter) -> Result<Vec<TaskEntry>, AppError> {
    let list = json_store::load_list(config.store_path())?;
    Ok(list
        .entries(filter)
        .map(|(index, task)| TaskEntry {
            index,
            task: task.clone(),
        })
        .collect())
}

pub fn complete_task(config: &Config, index: i64) -> Result<TaskEntry, AppError> {
    mutate_at(config, index, |list| list.complete(index).cloned())
}

pub fn undo_task(config: &Config, index: i64) -> Result<TaskEntry, AppError> {
    mutate_at(config, index, |list| list.undo_complete(index).cloned())
}

pub fn delete_task(config: &Config, index: i64) -> Result<TaskEntry, AppError> {
    mutate_at(config, index, |list| list.delete(index))
}

/// Empties the store and returns how many tasks it held.
pub fn clear_tasks(config: &Config) -> Result<usize, AppError> {
    let mut list = json_store::load_list(config.store_path())?;
    let removed = list.delete_all();
    json_store::save_list(config.store_path(), &list)?;
    Ok(removed)
}

fn mutate_at<F>(config: &Config, index: i64, op: F) -> Result<TaskEntry, AppError>
where
    F: FnOnce(&mut TaskList) -> Result<Task, AppError>,
{
    let mut list = json_store::load_list(config.store_path())?;
    let position = list.position(index)?;
    let task = op(&mut list)?;
    json_store::save_list(config.store_path(), &list)?;

    Ok(TaskEntry {
        index: position,
        task,
    })
}
