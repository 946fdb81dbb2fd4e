// demos/storefront_app/src/guard.rs

//! Dashboard route gate.
//!
//! A pure allow/deny decision: dashboard paths require the auth cookie,
//! and a logged-in visit to the login page bounces to the dashboard.

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PREFIX: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
  Allow,
  RedirectToLogin,
  RedirectToDashboard,
}

pub fn route_decision(path: &str, has_auth_cookie: bool) -> RouteDecision {
  let is_auth_page = path == LOGIN_PATH;
  let is_dashboard_page = path.starts_with(DASHBOARD_PREFIX);

  // Redirect to login if accessing the dashboard without a token
  if is_dashboard_page && !has_auth_cookie {
    return RouteDecision::RedirectToLogin;
  }

  // Redirect to the dashboard if accessing login with a token
  if is_auth_page && has_auth_cookie {
    return RouteDecision::RedirectToDashboard;
  }

  RouteDecision::Allow
}
