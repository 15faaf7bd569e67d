use std::env;

/// Runtime configuration, read once at startup and passed down explicitly.
///
/// Nothing in the application reads environment variables after construction;
/// the signing secret and pool are injected into the pieces that need them so
/// tests can substitute their own.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Signing secret for session tokens.
    pub jwt_secret: String,
    pub server_port: u16,
    pub server_host: String,
    /// When true (APP_ENV=production), TLS is required on the database
    /// connection.
    pub database_require_tls: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-me".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            database_require_tls: env::var("APP_ENV")
                .map(|v| v == "production")
                .unwrap_or(false),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
