use sqlx::PgPool;

use crate::models::{CreateTaskRequest, Task, UpdateTaskRequest};

/// Owner-scoped task persistence.
///
/// Every read, update, and delete filters by `(id, user_id)`, so acting on
/// another user's task is indistinguishable from the task not existing.
/// Each operation is a single SQL statement, atomic at the storage layer; no
/// in-process locking is needed.
#[derive(Clone)]
pub struct TaskStore {
    pool: PgPool,
}

const TASK_COLUMNS: &str = "id, user_id, title, description, due_date, completed";

impl TaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists the owner's tasks ordered by due date ascending, tasks without a
    /// due date last. The explicit NULLS LAST keeps the order stable across
    /// Postgres defaults.
    pub async fn list(&self, owner_id: i32) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks WHERE user_id = $1 \
             ORDER BY due_date ASC NULLS LAST, id"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Inserts a task for the owner. A missing description defaults to the
    /// empty string; `completed` starts false.
    pub async fn create(
        &self,
        owner_id: i32,
        input: &CreateTaskRequest,
    ) -> Result<Task, sqlx::Error> {
        sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (user_id, title, description, due_date) \
             VALUES ($1, $2, $3, $4) RETURNING {TASK_COLUMNS}"
        ))
        .bind(owner_id)
        .bind(&input.title)
        .bind(input.description.as_deref().unwrap_or(""))
        .bind(input.due_date)
        .fetch_one(&self.pool)
        .await
    }

    /// Full replace of title/description/due_date/completed, scoped to the
    /// owner. Returns `None` when the task is absent or owned by someone
    /// else.
    pub async fn update(
        &self,
        owner_id: i32,
        task_id: i32,
        input: &UpdateTaskRequest,
    ) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks \
             SET title = $1, description = $2, due_date = $3, completed = $4 \
             WHERE id = $5 AND user_id = $6 RETURNING {TASK_COLUMNS}"
        ))
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.due_date)
        .bind(input.completed)
        .bind(task_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Deletes the owner's task; `false` when absent or owned by someone
    /// else.
    pub async fn delete(&self, owner_id: i32, task_id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(task_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
