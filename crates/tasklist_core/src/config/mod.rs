use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = ".todo.json";
pub const STORE_ENV_VAR: &str = "TODO_FILENAME";

/// Where the task list lives. Resolved once at startup and handed to every
/// store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }
}

impl Config {
    pub fn new<P: Into<PathBuf>>(store_path: P) -> Self {
        Self {
            store_path: store_path.into(),
        }
    }

    /// Explicit overrides win over `TODO_FILENAME`, which wins over the
    /// default `.todo.json` in the working directory.
    pub fn resolve(overrides: &ConfigOverrides) -> Self {
        let env_value = std::env::var(STORE_ENV_VAR).ok();
        resolve_with_env(env_value.as_deref(), overrides)
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

fn resolve_with_env(env_value: Option<&str>, overrides: &ConfigOverrides) -> Config {
    if let Some(path) = overrides.store_path.as_ref()
        && !path.as_os_str().is_empty()
    {
        return Config::new(path.clone());
    }

    if let Some(value) = env_value
        && !value.trim().is_empty()
    {
        return Config::new(value);
    }

    Config::default()
}
