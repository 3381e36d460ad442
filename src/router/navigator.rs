//! Navigation driver: resolve, guard, redirect, commit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigations run one at a time through `&mut Navigator`, mirroring the
//! single-threaded UI event loop. The session is only read here; login and
//! logout actions mutate it elsewhere and then navigate again.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::collections::BTreeMap;

use serde::Serialize;

use super::error::NavigationError;
use super::guard;
use super::location::Location;
use super::props::{DEFAULT_LOGIN_REDIRECT, ViewProps};
use super::table::{ROUTES, RouteDescriptor, RouteMatch, RouteName, resolve_in};
use crate::state::session::Session;

/// Upper bound on redirects followed by a single navigation.
pub const MAX_REDIRECTS: usize = 8;

/// A navigation about to be guarded.
#[derive(Clone, Debug)]
pub struct NavigationIntent {
    pub target: RouteMatch,
    /// Route committed before this navigation; `None` on initial load.
    pub origin: Option<RouteName>,
}

/// Result of a committed navigation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Navigation {
    pub route: RouteName,
    pub full_path: String,
    pub params: BTreeMap<&'static str, String>,
    pub props: ViewProps,
    pub origin: Option<RouteName>,
    /// Redirect locations followed before committing, in order.
    pub redirects: Vec<String>,
}

#[derive(Debug)]
pub struct Navigator {
    routes: &'static [RouteDescriptor],
    current: Option<RouteMatch>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::with_routes(&ROUTES)
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_routes(routes: &'static [RouteDescriptor]) -> Self {
        Self { routes, current: None }
    }

    /// The last committed route, if any.
    #[must_use]
    pub fn current(&self) -> Option<&RouteMatch> {
        self.current.as_ref()
    }

    /// Navigate to `url`, following guard redirects until a route commits.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] when the URL (or a redirect) is not a
    /// valid in-app path, matches no route, or redirects more than
    /// [`MAX_REDIRECTS`] times.
    pub fn navigate(&mut self, session: &Session, url: &str) -> Result<Navigation, NavigationError> {
        let origin = self.current.as_ref().map(RouteMatch::name);
        let mut redirects = Vec::new();
        let mut next = url.to_owned();

        loop {
            let location = Location::parse(&next)?;
            let target = resolve_in(self.routes, &location)
                .ok_or_else(|| NavigationError::NotFound { path: location.path().to_owned() })?;
            let intent = NavigationIntent { target, origin };

            let Some(redirect) = guard::check(session, &intent.target).redirect_location() else {
                return Ok(self.commit(intent, redirects));
            };

            if redirects.len() >= MAX_REDIRECTS {
                tracing::warn!(path = %url, limit = MAX_REDIRECTS, "redirect limit exceeded");
                return Err(NavigationError::RedirectLoop { path: url.to_owned(), limit: MAX_REDIRECTS });
            }
            tracing::debug!(from = %next, to = %redirect, "navigation redirected");
            redirects.push(redirect.clone());
            next = redirect;
        }
    }

    /// After a successful login, continue to the Login view's `redirect`
    /// target, or `/` when the current route is not Login.
    ///
    /// # Errors
    ///
    /// Same as [`Navigator::navigate`].
    pub fn resume_after_login(&mut self, session: &Session) -> Result<Navigation, NavigationError> {
        let redirect = match self.current.as_ref().map(RouteMatch::props) {
            Some(ViewProps::Login { redirect }) => redirect,
            _ => DEFAULT_LOGIN_REDIRECT.to_owned(),
        };
        self.navigate(session, &redirect)
    }

    /// Re-run the guard for the current route, e.g. after logout.
    ///
    /// # Errors
    ///
    /// Same as [`Navigator::navigate`].
    pub fn refresh(&mut self, session: &Session) -> Result<Option<Navigation>, NavigationError> {
        let Some(url) = self.current.as_ref().map(|m| m.location.full_path().to_owned()) else {
            return Ok(None);
        };
        self.navigate(session, &url).map(Some)
    }

    fn commit(&mut self, intent: NavigationIntent, redirects: Vec<String>) -> Navigation {
        let NavigationIntent { target, origin } = intent;
        tracing::info!(
            route = target.name().as_str(),
            path = target.location.full_path(),
            redirects = redirects.len(),
            "navigation committed"
        );
        let navigation = Navigation {
            route: target.name(),
            full_path: target.location.full_path().to_owned(),
            params: target.params.iter().map(|(k, v)| (*k, v.clone())).collect(),
            props: target.props(),
            origin,
            redirects,
        };
        self.current = Some(target);
        navigation
    }
}
