use crate::permissions;

use ft_auth::SessionStore;
use ft_core::{Page, Role};

use log::debug;

/// Where a denied navigation is sent.
///
/// Both targets are replace-style navigations: the redirect must not grow
/// history, or the back button would loop the user straight back into the
/// protected page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Unauthorized,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Unauthorized => "/unauthorized",
        }
    }
}

/// Outcome of one guard evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Granted { role: Option<Role> },
    Redirect(RedirectTarget),
}

/// Navigation gate, re-run on every pathname change.
///
/// Decisions are never cached across navigations: the session can change
/// between two evaluations (logout elsewhere, expiry), and the next
/// navigation must observe it.
pub struct RouteGuard {
    session: SessionStore,
}

impl RouteGuard {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    pub fn evaluate(&self, pathname: &str) -> GuardDecision {
        self.evaluate_at(pathname, chrono::Utc::now().timestamp())
    }

    /// Decide access for a pathname at a given instant.
    ///
    /// Pathnames that resolve to no known page are denied outright: an
    /// unauthenticated visitor is sent to login, anyone else to the
    /// unauthorized screen. The unauthorized page itself is never a
    /// redirect target of its own evaluation, which keeps the guard free
    /// of redirect loops.
    pub fn evaluate_at(&self, pathname: &str, now: i64) -> GuardDecision {
        let page = Page::from_path(pathname);

        let public = page.is_some_and(permissions::is_public);
        if !public && !self.session.is_session_valid_at(now) {
            debug!("No valid session for {pathname}, redirecting to login");
            return GuardDecision::Redirect(RedirectTarget::Login);
        }

        let role = self.session.role();
        let allowed = match page {
            Some(page) => permissions::is_allowed(page, role),
            None => false,
        };

        if !allowed && page != Some(Page::Unauthorized) {
            debug!("Access to {pathname} denied for role {role:?}");
            return GuardDecision::Redirect(RedirectTarget::Unauthorized);
        }

        GuardDecision::Granted { role }
    }
}
