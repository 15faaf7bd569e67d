pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenService};

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Payload for both login and registration requests.
///
/// The contract is intentionally loose: usernames and passwords only have to
/// be non-empty (plus a charset restriction on usernames), so short demo
/// credentials still register.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// Must be non-empty; alphanumeric with underscores or hyphens.
    #[validate(
        length(min = 1, message = "username and password required"),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// Must be non-empty.
    #[validate(length(min = 1, message = "username and password required"))]
    pub password: String,
}

/// Response after a successful login or registration: the session token plus
/// the username the client should display.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_credentials_validation() {
        let valid = CredentialsRequest {
            username: "alice".to_string(),
            password: "pw1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_username = CredentialsRequest {
            username: "".to_string(),
            password: "pw1".to_string(),
        };
        assert!(empty_username.validate().is_err());

        let empty_password = CredentialsRequest {
            username: "alice".to_string(),
            password: "".to_string(),
        };
        assert!(empty_password.validate().is_err());

        let bad_charset = CredentialsRequest {
            username: "al ice!".to_string(),
            password: "pw1".to_string(),
        };
        assert!(bad_charset.validate().is_err());

        // No upper bound on username length.
        let long_username = CredentialsRequest {
            username: "a".repeat(100),
            password: "pw1".to_string(),
        };
        assert!(long_username.validate().is_ok());
    }
}
