//! Navigation surface: which screen a path shows for a given session.

use crate::session::Session;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    Terms,
    Privacy,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::Terms => "/terms",
            Route::Privacy => "/privacy",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "login" => Some(Route::Login),
            "signup" => Some(Route::Signup),
            "dashboard" => Some(Route::Dashboard),
            "terms" => Some(Route::Terms),
            "privacy" => Some(Route::Privacy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    /// Show this screen at the requested path.
    Render(Route),
    /// Replace the location with this screen's path.
    Redirect(Route),
}

impl Navigation {
    pub fn route(&self) -> Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => *route,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Route(Route),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
}

pub struct Router;

impl Router {
    /// Resolve a location to the screen it shows.
    ///
    /// Query strings, fragments and trailing slashes are ignored. Unknown
    /// paths go through the root redirect, so the result is always final.
    pub fn resolve(path: &str, session: &Session) -> Navigation {
        let authenticated = session.is_authenticated();
        let home = if authenticated {
            Route::Dashboard
        } else {
            Route::Login
        };

        let Some(route) = Route::from_segment(normalize(path)) else {
            tracing::debug!(path, redirect = home.path(), "Unmatched path");
            return Navigation::Redirect(home);
        };

        match route {
            Route::Login | Route::Signup if authenticated => Navigation::Redirect(Route::Dashboard),
            Route::Dashboard if !authenticated => Navigation::Redirect(Route::Login),
            route => Navigation::Render(route),
        }
    }

    /// Header links for the current session.
    pub fn nav_links(session: &Session) -> Vec<NavLink> {
        if session.is_authenticated() {
            vec![
                NavLink {
                    label: "Dashboard",
                    target: NavTarget::Route(Route::Dashboard),
                },
                NavLink {
                    label: "Logout",
                    target: NavTarget::Logout,
                },
            ]
        } else {
            vec![
                NavLink {
                    label: "Login",
                    target: NavTarget::Route(Route::Login),
                },
                NavLink {
                    label: "Sign Up",
                    target: NavTarget::Route(Route::Signup),
                },
            ]
        }
    }

    /// Links rendered on the signup screen itself.
    pub fn signup_links() -> [NavLink; 3] {
        [
            NavLink {
                label: "Login",
                target: NavTarget::Route(Route::Login),
            },
            NavLink {
                label: "Terms and Conditions",
                target: NavTarget::Route(Route::Terms),
            },
            NavLink {
                label: "Privacy Policy",
                target: NavTarget::Route(Route::Privacy),
            },
        ]
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    path.trim_matches('/')
}
