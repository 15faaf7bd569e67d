use crate::{
    auth::{hash_password, verify_password, AuthResponse, CredentialsRequest, TokenService},
    error::AppError,
    store::UserStore,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates an account and returns a session token so the client can log in
/// immediately. Duplicate usernames fail with 400.
#[post("/register")]
pub async fn register(
    users: web::Data<UserStore>,
    tokens: web::Data<TokenService>,
    register_data: web::Json<CredentialsRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    if users
        .find_by_username(&register_data.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("username taken".into()));
    }

    let password_hash = hash_password(&register_data.password)?;

    // The unique index still guards against a concurrent register racing the
    // existence check.
    let user = match users.insert(&register_data.username, &password_hash).await {
        Ok(user) => user,
        Err(e)
            if e.as_database_error()
                .map_or(false, |db| db.is_unique_violation()) =>
        {
            return Err(AppError::Conflict("username taken".into()));
        }
        Err(e) => return Err(e.into()),
    };

    let token = tokens.issue(user.id)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        username: user.username,
    }))
}

/// Login user
///
/// Verifies credentials and returns a session token. Unknown usernames and
/// wrong passwords fail identically, so the response leaks nothing about
/// which half was wrong.
#[post("/login")]
pub async fn login(
    users: web::Data<UserStore>,
    tokens: web::Data<TokenService>,
    login_data: web::Json<CredentialsRequest>,
) -> Result<impl Responder, AppError> {
    let user = users
        .find_by_username(&login_data.username)
        .await?
        .ok_or_else(|| AppError::BadRequest("invalid login".into()))?;

    if !verify_password(&login_data.password, &user.password_hash)? {
        return Err(AppError::BadRequest("invalid login".into()));
    }

    let token = tokens.issue(user.id)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        username: user.username,
    }))
}
