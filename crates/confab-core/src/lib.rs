//! Core library for confab, a messaging app client.
//!
//! This crate owns everything between "the user asked for a view" and "the
//! request left with credentials attached":
//!
//! - `auth`: durable session token storage shared by the guard and the client
//! - `routing`: the navigation guard deciding whether a view may be entered
//! - `api`: the authenticated REST client for the confab service
//! - `models`: wire types for users, conversations, and messages
//!
//! Front-end crates embed this library; they render views, run the
//! login/logout flow (the only writer of session state), and own the async
//! runtime.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod routing;

pub use api::{ApiClient, ApiError};
pub use auth::{FileSessionStore, MemorySessionStore, SessionStore};
pub use config::Config;
pub use routing::{GuardDecision, NavigationGuard, RouteConfig};
