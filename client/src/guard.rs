//! # Role Routing Guard
//!
//! Gate every navigation to a protected area on the live session. The
//! outcome is a pure function of (token present, role allowed); redirects
//! are silent, never errors. [`Navigator`] re-runs the check on each call,
//! since the session can change between navigations, and remembers a denied
//! target so a successful login can return the user there.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::Role;
use tracing::info;

use crate::session::{Session, SessionManager};

/// Every page the application can show. Dashboard areas carry an
/// allowed-role set; the rest are public.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Features,
    Pricing,
    Faq,
    Contact,
    Login,
    Register,
    UserDashboard,
    AgentDashboard,
    AdminDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Features => "/features",
            Route::Pricing => "/pricing",
            Route::Faq => "/faq",
            Route::Contact => "/contact",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::UserDashboard => "/dashboard/user",
            Route::AgentDashboard => "/dashboard/agent",
            Route::AdminDashboard => "/dashboard/admin",
        }
    }

    /// Roles allowed into this route, or `None` when it is public.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::UserDashboard => Some(&[Role::User]),
            Route::AgentDashboard => Some(&[Role::Agent]),
            Route::AdminDashboard => Some(&[Role::Admin]),
            _ => None,
        }
    }
}

/// What a navigation attempt resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The target renders.
    Render(Route),
    /// No session: go to login, remembering where the user was headed.
    RedirectToLogin { from: &'static str },
    /// Authenticated but the role does not fit: land on the home page.
    RedirectHome,
}

/// Resolve one navigation attempt against a session snapshot.
pub fn resolve(session: Option<&Session>, target: Route) -> NavOutcome {
    let Some(allowed) = target.allowed_roles() else {
        return NavOutcome::Render(target);
    };
    match session {
        None => NavOutcome::RedirectToLogin {
            from: target.path(),
        },
        Some(s) if allowed.contains(&s.user.role) => NavOutcome::Render(target),
        Some(_) => NavOutcome::RedirectHome,
    }
}

struct NavState {
    current: Route,
    return_to: Option<Route>,
}

/// The application's navigation state: current route plus the remembered
/// target of the last login redirect.
pub struct Navigator {
    sessions: Arc<SessionManager>,
    state: RwLock<NavState>,
}

impl Navigator {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self {
            sessions,
            state: RwLock::new(NavState {
                current: Route::Home,
                return_to: None,
            }),
        }
    }

    pub fn current(&self) -> Route {
        self.state.read().current
    }

    /// Navigate, running the guard against the live session.
    pub fn navigate(&self, target: Route) -> NavOutcome {
        let session = self.sessions.current();
        let outcome = resolve(session.as_ref(), target);
        let mut state = self.state.write();
        match &outcome {
            NavOutcome::Render(route) => state.current = *route,
            NavOutcome::RedirectToLogin { from } => {
                info!(%from, "unauthenticated, redirecting to login");
                state.return_to = Some(target);
                state.current = Route::Login;
            }
            NavOutcome::RedirectHome => {
                info!(target = target.path(), "role not allowed, redirecting home");
                state.current = Route::Home;
            }
        }
        outcome
    }

    /// After a successful login, go back to the remembered target (or home).
    /// The guard runs again: the fresh session may still not fit the target.
    pub fn resume_after_login(&self) -> Route {
        let target = { self.state.write().return_to.take() }.unwrap_or(Route::Home);
        self.navigate(target);
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AuthUser;

    fn session(role: Role) -> Session {
        Session {
            token: "demo.jwt.token".to_string(),
            user: AuthUser {
                id: format!("u_{}", role),
                name: "Test".to_string(),
                email: "test@zpay.dev".to_string(),
                phone: None,
                role,
            },
        }
    }

    #[test]
    fn no_token_redirects_to_login_and_remembers_the_target() {
        let outcome = resolve(None, Route::AdminDashboard);
        assert_eq!(
            outcome,
            NavOutcome::RedirectToLogin {
                from: "/dashboard/admin"
            }
        );
    }

    #[test]
    fn wrong_role_redirects_home() {
        let s = session(Role::User);
        assert_eq!(
            resolve(Some(&s), Route::AdminDashboard),
            NavOutcome::RedirectHome
        );
        assert_eq!(
            resolve(Some(&s), Route::AgentDashboard),
            NavOutcome::RedirectHome
        );
    }

    #[test]
    fn matching_role_renders() {
        let s = session(Role::Admin);
        assert_eq!(
            resolve(Some(&s), Route::AdminDashboard),
            NavOutcome::Render(Route::AdminDashboard)
        );
    }

    #[test]
    fn public_routes_render_for_everyone() {
        for route in [Route::Home, Route::Pricing, Route::Login] {
            assert_eq!(resolve(None, route), NavOutcome::Render(route));
            assert_eq!(
                resolve(Some(&session(Role::Agent)), route),
                NavOutcome::Render(route)
            );
        }
    }
}
