use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A study task as stored in the database and returned by the API.
///
/// A task is visible and mutable only through requests authenticated as its
/// owner; the store filters every read and write by `(id, user_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i32,
    /// Owner of the task, set on creation and never changed. Server-side
    /// only: the wire format omits it, since every response is already
    /// scoped to the caller.
    #[serde(skip_serializing, default)]
    pub user_id: i32,
    pub title: String,
    pub description: String,
    /// Optional due date; tasks without one sort last in listings.
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
}

/// Payload for creating a task. Only the title is required; the wire format
/// uses `dueDate` for the optional date, matching the rest of the JSON API.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, message = "title required"))]
    pub title: String,

    pub description: Option<String>,

    #[serde(rename = "dueDate")]
    pub due_date: Option<NaiveDate>,
}

/// Payload for updating a task.
///
/// Updates are a full replace of title/description/dueDate/completed, not a
/// partial patch: callers resend every field, and a caller that only wants to
/// toggle completion resends the rest unchanged. Omitted description and
/// completed fields fall back to their column defaults.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, message = "title required"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "dueDate")]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_request_validation() {
        let valid = CreateTaskRequest {
            title: "Read ch.1".to_string(),
            description: None,
            due_date: None,
        };
        assert!(valid.validate().is_ok());

        let empty_title = CreateTaskRequest {
            title: "".to_string(),
            description: Some("anything".to_string()),
            due_date: None,
        };
        assert!(empty_title.validate().is_err());
    }

    #[test]
    fn test_update_request_defaults() {
        // Omitted description and completed fall back to "" and false.
        let parsed: UpdateTaskRequest =
            serde_json::from_str(r#"{"title": "Read ch.1", "dueDate": null}"#).unwrap();
        assert_eq!(parsed.title, "Read ch.1");
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.due_date, None);
        assert!(!parsed.completed);
    }

    #[test]
    fn test_update_request_due_date_wire_name() {
        let parsed: UpdateTaskRequest = serde_json::from_str(
            r#"{"title": "t", "description": "d", "dueDate": "2026-09-01", "completed": true}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.due_date,
            Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );
        assert!(parsed.completed);
    }

    #[test]
    fn test_task_serializes_snake_case_due_date() {
        let task = Task {
            id: 1,
            user_id: 7,
            title: "Read ch.1".to_string(),
            description: "".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1),
            completed: false,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["due_date"], "2026-09-01");
        assert_eq!(value["completed"], false);
        // The owner never appears on the wire.
        assert!(value.get("user_id").is_none());
    }
}
