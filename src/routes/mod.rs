pub mod auth;
pub mod health;
pub mod motivation;
pub mod tasks;

use actix_web::web;

/// Wires every `/api` route. Register, login, and motivation are skipped by
/// the auth middleware; the task scope requires a bearer token.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::register)
        .service(auth::login)
        .service(motivation::motivation)
        .service(
            web::scope("/tasks")
                .service(tasks::get_tasks)
                .service(tasks::create_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );
}
