//! REST API client module for the confab service.
//!
//! This module provides the `ApiClient` for communicating with the confab
//! backend to fetch users, conversations, and messages.
//!
//! The API uses bearer token authentication; the token comes from the
//! shared session store and is attached to every outbound request.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
