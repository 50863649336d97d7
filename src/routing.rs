//! Route guard and view selection.
//!
//! Everything here is a pure function of the current [`Session`]: which
//! top-level view to render, which dashboard an authenticated user gets,
//! and where to navigate when the session changes. None of it is a
//! security boundary; the service re-checks authorization on every
//! request, and these functions only decide what the UI shows.

use crate::session::Session;

/// The application's route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Movies,
    NotFound,
}

impl Route {
    /// Where a fresh login lands.
    pub const AUTHENTICATED_LANDING: Route = Route::Movies;

    /// Where a logout lands.
    pub const LOGOUT_LANDING: Route = Route::Login;

    /// Path the route is served under.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Movies => "/movies",
            Route::NotFound => "/404",
        }
    }

    /// Resolves a path to a route. Unknown paths resolve to `NotFound`.
    pub fn from_path(path: &str) -> Route {
        match path {
            "/" => Route::Home,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/movies" => Route::Movies,
            _ => Route::NotFound,
        }
    }
}

/// Top-level view the current session is entitled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTarget {
    /// No session: login/register/browse-anonymously views.
    Anonymous,
    /// A session without the admin flag.
    RegularDashboard,
    /// A session the service flagged as an administrator.
    AdminDashboard,
}

/// Selects the top-level view for the current session.
pub fn select_view(session: Option<&Session>) -> ViewTarget {
    match session {
        None => ViewTarget::Anonymous,
        Some(s) if s.is_admin() => ViewTarget::AdminDashboard,
        Some(_) => ViewTarget::RegularDashboard,
    }
}

/// Which dashboard the movies view renders.
///
/// The admin dashboard is selected only for a session whose claims carry
/// the admin flag; everything else, including an absent session, falls
/// back to the regular dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    Regular,
    Admin,
}

impl DashboardKind {
    pub fn for_session(session: Option<&Session>) -> DashboardKind {
        match session {
            Some(s) if s.is_admin() => DashboardKind::Admin,
            _ => DashboardKind::Regular,
        }
    }
}

/// Navigation triggered by a session transition.
///
/// An absent-to-present transition navigates to the authenticated
/// landing view. A present-to-absent transition triggers nothing here:
/// only an explicit logout redirects, and that redirect is issued by the
/// logout action itself.
pub fn on_session_change(prev: Option<&Session>, next: Option<&Session>) -> Option<Route> {
    match (prev, next) {
        (None, Some(_)) => Some(Route::AUTHENTICATED_LANDING),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::SecretString;
    use crate::token::SessionClaims;

    fn session(is_admin: bool) -> Session {
        let claims: SessionClaims = serde_json::from_value(serde_json::json!({
            "id": "1",
            "email": "a@b.com",
            "isAdmin": is_admin,
        }))
        .unwrap();
        Session::new(SecretString::new("raw"), claims)
    }

    #[test]
    fn test_select_view_anonymous() {
        assert_eq!(select_view(None), ViewTarget::Anonymous);
    }

    #[test]
    fn test_select_view_regular() {
        assert_eq!(
            select_view(Some(&session(false))),
            ViewTarget::RegularDashboard
        );
    }

    #[test]
    fn test_select_view_admin() {
        assert_eq!(select_view(Some(&session(true))), ViewTarget::AdminDashboard);
    }

    #[test]
    fn test_dashboard_kind_all_claim_combinations() {
        assert_eq!(
            DashboardKind::for_session(Some(&session(true))),
            DashboardKind::Admin
        );
        assert_eq!(
            DashboardKind::for_session(Some(&session(false))),
            DashboardKind::Regular
        );
        assert_eq!(DashboardKind::for_session(None), DashboardKind::Regular);
    }

    #[test]
    fn test_login_transition_navigates_to_movies() {
        let s = session(false);
        assert_eq!(on_session_change(None, Some(&s)), Some(Route::Movies));
    }

    #[test]
    fn test_no_automatic_navigation_otherwise() {
        let s = session(false);
        assert_eq!(on_session_change(Some(&s), None), None);
        assert_eq!(on_session_change(Some(&s), Some(&s)), None);
        assert_eq!(on_session_change(None, None), None);
    }

    #[test]
    fn test_route_paths_round_trip() {
        for route in [Route::Home, Route::Login, Route::Register, Route::Movies] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
        assert_eq!(Route::from_path(""), Route::NotFound);
    }
}
