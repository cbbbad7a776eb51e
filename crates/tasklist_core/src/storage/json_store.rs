use crate::error::AppError;
use crate::list::TaskList;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn load_list(path: &Path) -> Result<TaskList, AppError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "store file absent, starting empty");
            return Ok(TaskList::new());
        }
        Err(err) => return Err(AppError::io(format!("{}: {}", path.display(), err))),
    };
    if content.trim().is_empty() {
        tracing::warn!(path = %path.display(), "store file is empty, treating it as no tasks");
        return Ok(TaskList::new());
    }

    let list: TaskList = serde_json::from_str(&content).map_err(|err| {
        AppError::parse(format!("invalid JSON in {}: {}", path.display(), err))
    })?;

    if let Some(position) = list.iter().position(|task| !task.is_consistent()) {
        return Err(AppError::parse(format!(
            "task {} in {}: done flag and completed_at disagree",
            position + 1,
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), tasks = list.len(), "loaded task list");
    Ok(list)
}

/// Replaces the store file with `list` through a temp file and rename, so a
/// failed write never leaves a truncated store behind.
pub fn save_list(path: &Path, list: &TaskList) -> Result<(), AppError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .map_err(|err| AppError::io(format!("{}: {}", dir.display(), err)))?;

    let content =
        serde_json::to_string_pretty(list).map_err(|err| AppError::invalid_data(err.to_string()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|err| AppError::io(format!("{}: {}", dir.display(), err)))?;
    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|err| AppError::io(err.to_string()))?;
    tmp.persist(path)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err.error)))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions).map_err(|err| AppError::io(err.to_string()))?;
    }

    tracing::debug!(path = %path.display(), tasks = list.len(), "saved task list");
    Ok(())
}
