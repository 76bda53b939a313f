use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::SessionStore;

/// The two routes the guard distinguishes.
///
/// Every path not named here is an opaque identifier and implicitly
/// protected; there is no per-route allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// The one route reachable without a session (the login view).
    pub public_entry_point: String,
    /// Landing target when a logged-in user is steered away from the
    /// public entry point.
    pub default_route: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            public_entry_point: "/login".to_string(),
            default_route: "/".to_string(),
        }
    }
}

/// Outcome of evaluating one attempted navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the transition continue to its target unchanged.
    Proceed,
    /// Abandon the target and navigate to the carried route instead.
    Redirect(String),
}

/// Decides, before each navigation completes, whether the requested view may
/// be entered given the current session state.
///
/// The guard only reads the session store; it never writes it. Evaluation is
/// synchronous and has no failure mode: an absent session is a valid input,
/// not an error.
pub struct NavigationGuard {
    routes: RouteConfig,
    session: Arc<dyn SessionStore>,
}

impl NavigationGuard {
    pub fn new(routes: RouteConfig, session: Arc<dyn SessionStore>) -> Self {
        Self { routes, session }
    }

    /// Decide the outcome for a navigation to `target`. First match wins:
    ///
    /// 1. public entry point while logged in → redirect to the default route
    /// 2. any other route while logged out → redirect to the public entry point
    /// 3. otherwise → proceed
    pub fn evaluate(&self, target: &str) -> GuardDecision {
        let logged_in = self.session.token().is_some();

        if target == self.routes.public_entry_point && logged_in {
            debug!(target, to = %self.routes.default_route, "Already logged in, leaving login view");
            GuardDecision::Redirect(self.routes.default_route.clone())
        } else if !logged_in && target != self.routes.public_entry_point {
            debug!(target, to = %self.routes.public_entry_point, "No session, redirecting to login");
            GuardDecision::Redirect(self.routes.public_entry_point.clone())
        } else {
            GuardDecision::Proceed
        }
    }

    /// The route that will actually render for a navigation to `target`.
    ///
    /// Follows at most one redirect hop: under an unchanged session, a
    /// redirect target always evaluates to `Proceed`.
    pub fn resolve(&self, target: &str) -> String {
        match self.evaluate(target) {
            GuardDecision::Proceed => target.to_string(),
            GuardDecision::Redirect(route) => route,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemorySessionStore;

    fn guard_with(token: Option<&str>) -> (NavigationGuard, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new(token));
        let guard = NavigationGuard::new(RouteConfig::default(), store.clone());
        (guard, store)
    }

    // -------------------------------------------------------------------------
    // Decision table
    // -------------------------------------------------------------------------

    #[test]
    fn test_logged_out_protected_route_redirects_to_login() {
        let (guard, _) = guard_with(None);
        assert_eq!(
            guard.evaluate("/"),
            GuardDecision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_logged_in_login_route_redirects_to_default() {
        let (guard, _) = guard_with(Some("abc123"));
        assert_eq!(
            guard.evaluate("/login"),
            GuardDecision::Redirect("/".to_string())
        );
    }

    #[test]
    fn test_logged_in_default_route_proceeds() {
        let (guard, _) = guard_with(Some("abc123"));
        assert_eq!(guard.evaluate("/"), GuardDecision::Proceed);
    }

    #[test]
    fn test_logged_out_login_route_proceeds() {
        let (guard, _) = guard_with(None);
        assert_eq!(guard.evaluate("/login"), GuardDecision::Proceed);
    }

    #[test]
    fn test_opaque_routes_are_protected() {
        let (guard, _) = guard_with(None);
        assert_eq!(
            guard.evaluate("/conversations/42"),
            GuardDecision::Redirect("/login".to_string())
        );

        let (guard, _) = guard_with(Some("abc123"));
        assert_eq!(guard.evaluate("/conversations/42"), GuardDecision::Proceed);
    }

    // -------------------------------------------------------------------------
    // Idempotence and termination
    // -------------------------------------------------------------------------

    #[test]
    fn test_evaluation_is_idempotent() {
        let (guard, _) = guard_with(None);
        assert_eq!(guard.evaluate("/"), guard.evaluate("/"));

        let (guard, _) = guard_with(Some("abc123"));
        assert_eq!(guard.evaluate("/login"), guard.evaluate("/login"));
    }

    #[test]
    fn test_redirects_terminate_in_one_hop() {
        // Whatever the starting (target, session) pair, the resolved route
        // must evaluate to Proceed under the same session state.
        for token in [None, Some("abc123")] {
            for target in ["/", "/login", "/settings", "/conversations/7"] {
                let (guard, _) = guard_with(token);
                let resolved = guard.resolve(target);
                assert_eq!(
                    guard.evaluate(&resolved),
                    GuardDecision::Proceed,
                    "redirect loop from target {target:?} with token {token:?}"
                );
            }
        }
    }

    #[test]
    fn test_resolve_passes_through_allowed_targets() {
        let (guard, _) = guard_with(Some("abc123"));
        assert_eq!(guard.resolve("/settings"), "/settings");

        let (guard, _) = guard_with(None);
        assert_eq!(guard.resolve("/settings"), "/login");
    }

    // -------------------------------------------------------------------------
    // Session changes and injected routes
    // -------------------------------------------------------------------------

    #[test]
    fn test_session_change_reflected_on_next_evaluation() {
        let (guard, store) = guard_with(None);
        assert_eq!(
            guard.evaluate("/"),
            GuardDecision::Redirect("/login".to_string())
        );

        store.set(Some("abc123".to_string()));
        assert_eq!(guard.evaluate("/"), GuardDecision::Proceed);

        store.set(None);
        assert_eq!(
            guard.evaluate("/"),
            GuardDecision::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_custom_route_config() {
        let routes = RouteConfig {
            public_entry_point: "/signin".to_string(),
            default_route: "/home".to_string(),
        };
        let store = Arc::new(MemorySessionStore::new(Some("abc123")));
        let guard = NavigationGuard::new(routes, store);

        assert_eq!(
            guard.evaluate("/signin"),
            GuardDecision::Redirect("/home".to_string())
        );
        assert_eq!(guard.evaluate("/home"), GuardDecision::Proceed);
        // The old defaults carry no special meaning under injected routes
        assert_eq!(guard.evaluate("/login"), GuardDecision::Proceed);
    }
}
