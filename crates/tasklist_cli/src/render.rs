use serde_json::Value;
use tasklist_core::error::AppError;
use tasklist_core::model::Task;
use tasklist_core::task_api::TaskEntry;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

pub const EMPTY_LIST: &str = "No tasks found.";

pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

fn status_marker(task: &Task) -> &'static str {
    if task.done { "X" } else { " " }
}

fn format_stamp(at: OffsetDateTime, offset: UtcOffset) -> Result<String, AppError> {
    let local = at.to_offset(offset);
    let day = local
        .format(format_description!("[weekday repr:short] [day]/[month]"))
        .map_err(|err| AppError::invalid_data(err.to_string()))?;
    let clock = local
        .format(format_description!("[hour]:[minute]"))
        .map_err(|err| AppError::invalid_data(err.to_string()))?;
    Ok(format!("{day} {clock}"))
}

/// One line per task, `X` marking completed ones. Verbose lines carry the
/// completion time, or the creation time for pending tasks.
pub fn render_list(
    entries: &[TaskEntry],
    verbose: bool,
    offset: UtcOffset,
) -> Result<String, AppError> {
    if entries.is_empty() {
        return Ok(format!("{EMPTY_LIST}\n"));
    }

    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        let marker = status_marker(&entry.task);
        let line = if verbose {
            let stamp = format_stamp(entry.task.last_changed_at(), offset)?;
            format!(
                "{} {}: {} {}",
                marker, entry.index, stamp, entry.task.description
            )
        } else {
            format!("{} {}: {}", marker, entry.index, entry.task.description)
        };
        lines.push(line);
    }
    Ok(lines.join("\n") + "\n")
}

pub fn entry_json(entry: &TaskEntry) -> Result<Value, AppError> {
    let mut value =
        serde_json::to_value(&entry.task).map_err(|err| AppError::invalid_data(err.to_string()))?;
    if let Value::Object(map) = &mut value {
        map.insert("index".to_string(), Value::from(entry.index));
    }
    Ok(value)
}

pub fn entries_json(entries: &[TaskEntry]) -> Result<Value, AppError> {
    entries
        .iter()
        .map(entry_json)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

pub fn added_message(task: &Task) -> String {
    format!("Added Task [{}]", task.description)
}

pub fn completed_message(task: &Task) -> String {
    format!("Completed Task [{}]", task.description)
}

pub fn reopened_message(task: &Task) -> String {
    format!("Reopened Task [{}]", task.description)
}

pub fn removed_message(task: &Task) -> String {
    format!("Removed Task [{}]", task.description)
}

pub fn cleared_message() -> &'static str {
    "All tasks removed"
}

#[cfg(test)]
mod tests {
    use super::{
        EMPTY_LIST, cleared_message, entries_json, entry_json, removed_message, render_list,
    };
    use tasklist_core::model::Task;
    use tasklist_core::task_api::TaskEntry;
    use time::UtcOffset;
    use time::macros::{datetime, offset};

    fn entry(index: usize, description: &str, done: bool) -> TaskEntry {
        let mut task = Task::new(description, datetime!(2021-02-03 04:05 UTC));
        if done {
            task.mark_done(datetime!(2021-02-03 06:05 UTC));
        }
        TaskEntry { index, task }
    }

    #[test]
    fn empty_list_prints_placeholder() {
        let out = render_list(&[], false, UtcOffset::UTC).unwrap();
        assert_eq!(out, format!("{EMPTY_LIST}\n"));
    }

    #[test]
    fn plain_list_marks_done_tasks() {
        let entries = vec![entry(1, "task A", false), entry(2, "task B", true)];
        let out = render_list(&entries, false, UtcOffset::UTC).unwrap();
        assert_eq!(out, "  1: task A\nX 2: task B\n");
    }

    #[test]
    fn filtered_list_keeps_original_positions() {
        let entries = vec![entry(3, "task C", false)];
        let out = render_list(&entries, false, UtcOffset::UTC).unwrap();
        assert_eq!(out, "  3: task C\n");
    }

    #[test]
    fn verbose_list_shows_relevant_timestamp() {
        let entries = vec![entry(1, "task A", false), entry(2, "task B", true)];
        let out = render_list(&entries, true, UtcOffset::UTC).unwrap();
        assert_eq!(
            out,
            "  1: Wed 03/02 04:05 task A\nX 2: Wed 03/02 06:05 task B\n"
        );
    }

    #[test]
    fn verbose_list_converts_to_local_offset() {
        let entries = vec![entry(1, "late", false)];
        let out = render_list(&entries, true, offset!(+21:00)).unwrap();
        assert_eq!(out, "  1: Thu 04/02 01:05 late\n");
    }

    #[test]
    fn entry_json_includes_index_and_fields() {
        let value = entry_json(&entry(2, "task B", true)).unwrap();
        assert_eq!(value["index"], 2);
        assert_eq!(value["task"], "task B");
        assert_eq!(value["done"], true);
        assert_eq!(value["created_at"], "2021-02-03T04:05:00Z");
        assert_eq!(value["completed_at"], "2021-02-03T06:05:00Z");
    }

    #[test]
    fn entries_json_is_array() {
        let value = entries_json(&[entry(1, "a", false), entry(2, "b", false)]).unwrap();
        let items = value.as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert!(items[0]["completed_at"].is_null());
    }

    #[test]
    fn messages_name_the_task() {
        let task = Task::new("Walk dog", datetime!(2021-02-03 04:05 UTC));
        assert_eq!(removed_message(&task), "Removed Task [Walk dog]");
        assert_eq!(cleared_message(), "All tasks removed");
    }
}
