use chrono::NaiveDate;

use crate::client::{ApiClient, ClientError};
use crate::models::{CreateTaskRequest, Task, UpdateTaskRequest};
use crate::quote::{fetch_quote_from, Quote, PUBLIC_QUOTE_URL};

/// Form contents for creating or editing a task. Whether it becomes a create
/// or a full-replace update depends on the session's edit state.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
}

/// Client-side session state: identity, the mirrored task list, the
/// at-most-one task being edited, and the dashboard quote.
///
/// Nothing here is speculative. Every mutation goes to the gateway first and
/// the local list is reconciled only from the successful response; on failure
/// the error is returned and local state is left untouched.
///
/// Known limitation, kept deliberately: `is_logged_in` derives from token
/// *presence*, not validity, so an expired token looks logged-in until the
/// first request comes back 401.
pub struct Session {
    api: ApiClient,
    username: Option<String>,
    tasks: Vec<Task>,
    editing: Option<Task>,
    quote: Option<Quote>,
    fallback_quote_url: String,
}

impl Session {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_api(ApiClient::new(base_url))
    }

    /// Resumes a session from a previously stored token and username, the
    /// client-side equivalent of finding them in local storage.
    pub fn resume(
        base_url: impl Into<String>,
        token: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        let mut session = Self::new(base_url);
        session.api.set_token(token);
        session.username = Some(username.into());
        session
    }

    fn with_api(api: ApiClient) -> Self {
        Self {
            api,
            username: None,
            tasks: Vec::new(),
            editing: None,
            quote: None,
            fallback_quote_url: PUBLIC_QUOTE_URL.to_string(),
        }
    }

    /// Overrides the public provider used when the internal quote route
    /// fails, so callers (and tests) can point the fallback elsewhere.
    pub fn set_fallback_quote_url(&mut self, url: impl Into<String>) {
        self.fallback_quote_url = url.into();
    }

    pub fn is_logged_in(&self) -> bool {
        self.api.has_token()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.api.token()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn editing(&self) -> Option<&Task> {
        self.editing.as_ref()
    }

    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    pub async fn register(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        self.authenticate("/api/register", username, password).await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        self.authenticate("/api/login", username, password).await
    }

    async fn authenticate(
        &mut self,
        path: &str,
        username: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let body = serde_json::json!({ "username": username, "password": password });
        let auth: crate::auth::AuthResponse = self.api.post(path, &body).await?;

        self.api.set_token(auth.token);
        self.username = Some(auth.username);
        Ok(())
    }

    /// Clears identity and the mirrored task list. The quote and any edit
    /// target are left alone; they are replaced on the next login anyway.
    pub fn logout(&mut self) {
        self.api.clear_token();
        self.username = None;
        self.tasks.clear();
    }

    /// Replaces the mirrored list with the server's, which arrives ordered by
    /// due date.
    pub async fn refresh_tasks(&mut self) -> Result<(), ClientError> {
        self.tasks = self.api.get("/api/tasks").await?;
        Ok(())
    }

    /// Marks a task as the edit target, replacing any previous one without
    /// confirmation.
    pub fn start_edit(&mut self, task: Task) {
        self.editing = Some(task);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Saves the draft: a full-replace update when a task is being edited
    /// (resending its `completed` flag unchanged), otherwise a create.
    pub async fn save_task(&mut self, draft: TaskDraft) -> Result<(), ClientError> {
        if let Some(editing) = &self.editing {
            let body = UpdateTaskRequest {
                title: draft.title,
                description: draft.description,
                due_date: draft.due_date,
                completed: editing.completed,
            };
            let updated: Task = self
                .api
                .put(&format!("/api/tasks/{}", editing.id), &body)
                .await?;

            self.upsert_task(updated);
            self.editing = None;
        } else {
            let body = CreateTaskRequest {
                title: draft.title,
                description: Some(draft.description),
                due_date: draft.due_date,
            };
            let created: Task = self.api.post("/api/tasks", &body).await?;
            self.tasks.push(created);
        }
        Ok(())
    }

    /// Flips a task's completed flag via a full-replace update, resending
    /// title, description, and due date unchanged.
    pub async fn toggle_completed(&mut self, task_id: i32) -> Result<(), ClientError> {
        let current = self
            .tasks
            .iter()
            .find(|t| t.id == task_id)
            .cloned()
            .ok_or(ClientError::UnknownTask(task_id))?;

        let body = UpdateTaskRequest {
            title: current.title,
            description: current.description,
            due_date: current.due_date,
            completed: !current.completed,
        };
        let updated: Task = self
            .api
            .put(&format!("/api/tasks/{}", task_id), &body)
            .await?;

        self.upsert_task(updated);
        Ok(())
    }

    pub async fn delete_task(&mut self, task_id: i32) -> Result<(), ClientError> {
        let _: serde_json::Value = self.api.delete(&format!("/api/tasks/{}", task_id)).await?;

        self.tasks.retain(|t| t.id != task_id);
        Ok(())
    }

    /// Loads the dashboard quote: the internal route first, then the public
    /// provider. When both fail the quote is simply absent; no error reaches
    /// the caller.
    pub async fn load_quote(&mut self) {
        match self.api.get::<Quote>("/api/motivation").await {
            Ok(quote) => {
                self.quote = Some(quote);
                return;
            }
            Err(e) => log::warn!("internal quote route failed: {}", e),
        }

        match fetch_quote_from(self.api.http(), &self.fallback_quote_url).await {
            Ok(quote) => self.quote = Some(quote),
            // Quote absence is a valid state; a quote loaded earlier stays.
            Err(e) => log::warn!("quote fallback failed: {}", e),
        }
    }

    /// Merges a confirmed task into the mirrored list, replacing the entry
    /// with the same id or appending when it is new.
    fn upsert_task(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task,
            None => self.tasks.push(task),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(id: i32, title: &str, completed: bool) -> Task {
        Task {
            id,
            user_id: 1,
            title: title.to_string(),
            description: String::new(),
            due_date: None,
            completed,
        }
    }

    #[test]
    fn test_resume_is_logged_in_regardless_of_token_validity() {
        let session = Session::resume("http://localhost:4000", "expired.or.not", "alice");
        assert!(session.is_logged_in());
        assert_eq!(session.username(), Some("alice"));

        let fresh = Session::new("http://localhost:4000");
        assert!(!fresh.is_logged_in());
    }

    #[test_log::test]
    fn test_logout_clears_identity_and_tasks() {
        let mut session = Session::resume("http://localhost:4000", "tok", "alice");
        session.tasks.push(task(1, "Read ch.1", false));

        session.logout();

        assert!(!session.is_logged_in());
        assert_eq!(session.username(), None);
        assert!(session.tasks().is_empty());
    }

    #[test]
    fn test_start_edit_replaces_previous_target() {
        let mut session = Session::new("http://localhost:4000");
        session.start_edit(task(1, "first", false));
        session.start_edit(task(2, "second", false));

        assert_eq!(session.editing().map(|t| t.id), Some(2));

        session.cancel_edit();
        assert!(session.editing().is_none());
    }

    #[actix_rt::test]
    async fn test_failed_quote_load_keeps_previous_quote() {
        // Nothing listens on these addresses, so both sources fail fast.
        let mut session = Session::new("http://127.0.0.1:9");
        session.set_fallback_quote_url("http://127.0.0.1:9/quote");
        session.quote = Some(Quote {
            text: "old wisdom".to_string(),
            author: "someone".to_string(),
        });

        session.load_quote().await;

        assert_eq!(
            session.quote().map(|q| q.text.as_str()),
            Some("old wisdom")
        );
    }

    #[test]
    fn test_upsert_replaces_or_appends() {
        let mut session = Session::new("http://localhost:4000");
        session.tasks.push(task(1, "old title", false));

        session.upsert_task(task(1, "new title", true));
        assert_eq!(session.tasks().len(), 1);
        assert_eq!(session.tasks()[0].title, "new title");
        assert!(session.tasks()[0].completed);

        session.upsert_task(task(2, "another", false));
        assert_eq!(session.tasks().len(), 2);
    }
}
