use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub description: String,
    #[serde(default)]
    pub done: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, with = "completion_time")]
    pub completed_at: Option<OffsetDateTime>,
}

/// RFC 3339 like `created_at`, except that the zero time
/// `0001-01-01T00:00:00Z` reads as "not completed".
mod completion_time {
    use serde::{Deserializer, Serializer};
    use time::OffsetDateTime;
    use time::macros::datetime;

    const UNSET: OffsetDateTime = datetime!(0001-01-01 00:00 UTC);

    pub fn serialize<S: Serializer>(
        value: &Option<OffsetDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        time::serde::rfc3339::option::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<OffsetDateTime>, D::Error> {
        let value = time::serde::rfc3339::option::deserialize(deserializer)?;
        Ok(value.filter(|at| *at != UNSET))
    }
}

impl Task {
    pub fn new<D: Into<String>>(description: D, created_at: OffsetDateTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            created_at,
            completed_at: None,
        }
    }

    pub fn mark_done(&mut self, at: OffsetDateTime) {
        self.done = true;
        self.completed_at = Some(at);
    }

    pub fn mark_pending(&mut self) {
        self.done = false;
        self.completed_at = None;
    }

    /// `completed_at` must be present exactly when the task is done.
    pub fn is_consistent(&self) -> bool {
        self.done == self.completed_at.is_some()
    }

    /// Completion time for finished tasks, creation time otherwise.
    pub fn last_changed_at(&self) -> OffsetDateTime {
        self.completed_at.unwrap_or(self.created_at)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Done,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.done,
            Self::Done => task.done,
        }
    }
}
