use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Public view of a user account. The password hash never leaves the store
/// layer.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
}

/// Full credential row, only used by login to compare password hashes.
#[derive(Debug, FromRow)]
pub struct Credentials {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}
