pub mod config;
pub mod error;
pub mod list;
pub mod model;
pub mod storage;
pub mod task_api;

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::model::Task;
    use time::macros::datetime;

    #[test]
    fn task_has_required_fields() {
        let task = Task {
            description: "demo".to_string(),
            done: false,
            created_at: datetime!(2025-12-20 00:00 UTC),
            completed_at: None,
        };

        assert_eq!(task.description, "demo");
        assert!(!task.done);
        assert_eq!(task.created_at, datetime!(2025-12-20 00:00 UTC));
        assert_eq!(task.completed_at, None);
        assert!(task.is_consistent());
    }

    #[test]
    fn app_error_exposes_code() {
        let err = AppError::blank_input("task cannot be blank");
        assert_eq!(err.code(), "blank_input");
        assert_eq!(err.to_string(), "blank_input - task cannot be blank");
    }
}
