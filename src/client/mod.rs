//!
//! # API Client
//!
//! HTTP client for the studytrack API, mirroring the server's JSON contract.
//! `ApiClient` handles transport concerns (base URL, bearer token, error
//! body decoding); `session::Session` layers the dashboard state on top.

pub mod session;

pub use session::{Session, TaskDraft};

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Failures the client surfaces to its caller.
#[derive(Debug)]
pub enum ClientError {
    /// The server answered with a non-success status. Carries the server's
    /// `message` when the body had one, otherwise a generic
    /// "request failed {status}".
    Api { status: u16, message: String },
    /// The request never produced a usable response (connection, TLS, or
    /// body decoding failure).
    Transport(String),
    /// A session operation referenced a task id that is not in the mirrored
    /// list.
    UnknownTask(i32),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::Api { status, message } => write!(f, "{} ({})", message, status),
            ClientError::Transport(msg) => write!(f, "transport error: {}", msg),
            ClientError::UnknownTask(id) => write!(f, "unknown task {}", id),
        }
    }
}

impl std::error::Error for ClientError {}

/// Thin wrapper over `reqwest::Client` that attaches the stored bearer token
/// to every request and decodes `{"message": ...}` error bodies.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            token: None,
        }
    }

    /// The underlying HTTP client, for calls that bypass the API entirely
    /// (the public quote fallback).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Whether a token is stored. Says nothing about validity: an expired
    /// token still counts until the server rejects it.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.execute(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.execute(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| format!("request failed {}", status.as_u16()));
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))
    }
}
