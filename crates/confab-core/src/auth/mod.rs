//! Session state shared by the navigation guard and the API client.
//!
//! This module provides:
//! - `SessionStore`: read-only view of the current session token
//! - `FileSessionStore`: durable on-disk store surviving restarts
//! - `MemorySessionStore`: in-process store for tests and embedders
//!
//! The login/logout flow is the only writer; the guard and the client
//! never mutate session state.

pub mod session;

pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
