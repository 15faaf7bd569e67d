use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// How long an issued session token stays valid.
const TOKEN_LIFETIME_DAYS: i64 = 7;

/// Claims encoded within a session JWT.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token, the user's unique identifier.
    pub sub: i32,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Issues and verifies signed session tokens.
///
/// Constructed once with the server-held signing secret and cloned into the
/// pieces that need it (auth middleware, auth routes). Tokens are stateless:
/// nothing is persisted server-side, and a token that fails verification for
/// any reason is treated the same as a missing one by the gateway.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Generates a JWT for the given user id, expiring in 7 days.
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(chrono::Duration::days(TOKEN_LIFETIME_DAYS))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: user_id,
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a JWT and decodes its claims.
    ///
    /// Fails with `AppError::Unauthorized` if the token is malformed, its
    /// signature is invalid, or it has expired. Default validation checks
    /// apply (signature, expiration).
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let tokens = TokenService::new("test_secret_for_round_trip");
        let user_id = 1;
        let token = tokens.issue(user_id).unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_token_expiration() {
        let secret = "test_secret_for_expiration";
        let tokens = TokenService::new(secret);

        let expiration = chrono::Utc::now()
            .checked_sub_signed(chrono::Duration::hours(2))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims_expired = Claims {
            sub: 2,
            exp: expiration,
        };
        let expired_token = encode(
            &Header::default(),
            &claims_expired,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        match tokens.verify(&expired_token) {
            Err(AppError::Unauthorized(msg)) => {
                assert!(msg.contains("ExpiredSignature"), "unexpected message: {}", msg);
            }
            Ok(_) => panic!("Token should have been invalid due to expiration"),
            Err(e) => panic!("Unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_tampered_signature() {
        let tokens = TokenService::new("signing_secret_a");
        let other = TokenService::new("signing_secret_b");

        let token = other.issue(3).unwrap();

        match tokens.verify(&token) {
            Err(AppError::Unauthorized(msg)) => {
                // jsonwebtoken reports InvalidSignature when only the secret
                // differs, InvalidToken for structural damage. Both are
                // acceptable here.
                assert!(
                    msg.contains("InvalidSignature") || msg.contains("InvalidToken"),
                    "unexpected message: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to signature mismatch"),
            Err(e) => panic!("Unexpected error type for tampered token: {:?}", e),
        }
    }

    #[test]
    fn test_garbage_token_rejected() {
        let tokens = TokenService::new("test_secret_for_garbage");
        assert!(matches!(
            tokens.verify("not-a-jwt-at-all"),
            Err(AppError::Unauthorized(_))
        ));
    }
}
