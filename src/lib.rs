//! The `studytrack` library crate.
//!
//! Server side: domain models, the auth layer (password hashing, session
//! tokens, bearer middleware), owner-scoped stores, and the HTTP routes.
//! Client side: an API client plus the `client::session::Session` state that
//! mirrors the dashboard (identity, task list, edit target, quote).
//! The server binary (`main.rs`) wires these together.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod quote;
pub mod routes;
pub mod store;
