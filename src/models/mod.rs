pub mod task;
pub mod user;

pub use task::{CreateTaskRequest, Task, UpdateTaskRequest};
pub use user::{Credentials, User};
