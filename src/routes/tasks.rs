use crate::{
    auth::extractors::AuthenticatedUserId,
    error::AppError,
    models::{CreateTaskRequest, UpdateTaskRequest},
    store::TaskStore,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Retrieves the authenticated user's tasks, ordered by due date ascending
/// with undated tasks last.
#[get("")]
pub async fn get_tasks(
    store: web::Data<TaskStore>,
    AuthenticatedUserId(user_id): AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let tasks = store.list(user_id).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a task owned by the authenticated user.
///
/// ## Request Body:
/// - `title`: required, non-empty.
/// - `description` (optional): defaults to the empty string.
/// - `dueDate` (optional): date, absent means no due date.
///
/// ## Responses:
/// - `201 Created`: the new task, `completed` false.
/// - `400 Bad Request`: missing or empty title.
/// - `401 Unauthorized`: missing or invalid token.
#[post("")]
pub async fn create_task(
    store: web::Data<TaskStore>,
    AuthenticatedUserId(user_id): AuthenticatedUserId,
    task_data: web::Json<CreateTaskRequest>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = store.create(user_id, &task_data).await?;

    Ok(HttpResponse::Created().json(task))
}

/// Updates a task in place: a full replace of title, description, due date,
/// and completed — not a partial patch. Callers resend every field, even when
/// only toggling completion.
///
/// A task that does not exist and a task owned by someone else are both 404;
/// ownership is never disclosed.
#[put("/{id}")]
pub async fn update_task(
    store: web::Data<TaskStore>,
    task_id: web::Path<i32>,
    AuthenticatedUserId(user_id): AuthenticatedUserId,
    task_data: web::Json<UpdateTaskRequest>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = store
        .update(user_id, task_id.into_inner(), &task_data)
        .await?
        .ok_or_else(|| AppError::NotFound("task not found".into()))?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes the authenticated user's task. Absent and foreign tasks are both
/// 404.
#[delete("/{id}")]
pub async fn delete_task(
    store: web::Data<TaskStore>,
    task_id: web::Path<i32>,
    AuthenticatedUserId(user_id): AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let deleted = store.delete(user_id, task_id.into_inner()).await?;

    if !deleted {
        return Err(AppError::NotFound("task not found".into()));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "task deleted" })))
}
