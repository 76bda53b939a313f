//! Navigation access control.
//!
//! Every attempted view transition runs through `NavigationGuard` before the
//! front-end is allowed to render the target. The guard is the security
//! boundary keeping protected views unreachable without a session; the
//! routes it compares against come from `RouteConfig`.

pub mod guard;

pub use guard::{GuardDecision, NavigationGuard, RouteConfig};
