//! Static route table and path matching.
//!
//! DESIGN
//! ======
//! Routes are declared once in a fixed order and matched first-wins, so two
//! overlapping patterns resolve to whichever was declared earlier. Static
//! segments compare ASCII case-insensitively and a trailing slash is ignored.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use serde::Serialize;

use super::location::{Location, decode_component};
use super::policy::AccessPolicy;
use super::props::{self, ViewProps};

/// Pure function deriving typed view inputs from a matched route.
pub type PropExtractor = fn(&RouteMatch) -> ViewProps;

/// Symbolic route identifiers. Each name appears exactly once in [`ROUTES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RouteName {
    Home,
    Login,
    Register,
    Children,
    Adult,
    Chat,
    Survey,
    Image,
    EvaluateWithParams,
    Report,
}

impl RouteName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Children => "Children",
            Self::Adult => "Adult",
            Self::Chat => "Chat",
            Self::Survey => "Survey",
            Self::Image => "Image",
            Self::EvaluateWithParams => "EvaluateWithParams",
            Self::Report => "Report",
        }
    }

    /// The descriptor declared for this name.
    #[must_use]
    pub fn descriptor(self) -> &'static RouteDescriptor {
        match self {
            Self::Home => &ROUTES[0],
            Self::Login => &ROUTES[1],
            Self::Register => &ROUTES[2],
            Self::Children => &ROUTES[3],
            Self::Adult => &ROUTES[4],
            Self::Chat => &ROUTES[5],
            Self::Survey => &ROUTES[6],
            Self::Image => &ROUTES[7],
            Self::EvaluateWithParams => &ROUTES[8],
            Self::Report => &ROUTES[9],
        }
    }
}

/// One segment of a route path pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Static(&'static str),
    Param(&'static str),
}

/// Path → view binding with its access policy.
#[derive(Debug)]
pub struct RouteDescriptor {
    pub name: RouteName,
    /// Pattern with `:named` parameter segments, e.g. `/survey/:ageGroup/:gender`.
    pub path: &'static str,
    pub policy: AccessPolicy,
    pub props: Option<PropExtractor>,
}

impl RouteDescriptor {
    pub fn segments(&self) -> impl Iterator<Item = Segment> {
        self.path.split('/').filter(|s| !s.is_empty()).map(|s| match s.strip_prefix(':') {
            Some(name) => Segment::Param(name),
            None => Segment::Static(s),
        })
    }

    /// Match `location` against this pattern, capturing decoded params.
    #[must_use]
    pub fn match_location(&self, location: &Location) -> Option<Vec<(&'static str, String)>> {
        let mut params = Vec::new();
        let mut actual = location.segments();
        for segment in self.segments() {
            let value = actual.next()?;
            match segment {
                Segment::Static(expected) => {
                    if !expected.eq_ignore_ascii_case(value) {
                        return None;
                    }
                }
                Segment::Param(name) => params.push((name, decode_component(value))),
            }
        }
        if actual.next().is_some() {
            return None;
        }
        Some(params)
    }
}

/// Declaration order is the match order.
pub static ROUTES: [RouteDescriptor; 10] = [
    RouteDescriptor { name: RouteName::Home, path: "/", policy: AccessPolicy::RequiresAuth, props: None },
    RouteDescriptor {
        name: RouteName::Login,
        path: "/login",
        policy: AccessPolicy::GuestOnly,
        props: Some(props::login_props),
    },
    RouteDescriptor { name: RouteName::Register, path: "/register", policy: AccessPolicy::GuestOnly, props: None },
    RouteDescriptor {
        name: RouteName::Children,
        path: "/children",
        policy: AccessPolicy::RequiresAuth,
        props: Some(props::profile_form_props),
    },
    RouteDescriptor {
        name: RouteName::Adult,
        path: "/adult",
        policy: AccessPolicy::RequiresAuth,
        props: Some(props::profile_form_props),
    },
    RouteDescriptor { name: RouteName::Chat, path: "/chat", policy: AccessPolicy::RequiresAuth, props: None },
    RouteDescriptor {
        name: RouteName::Survey,
        path: "/survey/:ageGroup/:gender",
        policy: AccessPolicy::RequiresAuth,
        props: Some(props::group_params_props),
    },
    RouteDescriptor { name: RouteName::Image, path: "/image", policy: AccessPolicy::RequiresAuth, props: None },
    RouteDescriptor {
        name: RouteName::EvaluateWithParams,
        path: "/evaluate/:ageGroup/:gender",
        policy: AccessPolicy::RequiresAuth,
        props: Some(props::group_params_props),
    },
    RouteDescriptor {
        name: RouteName::Report,
        path: "/report",
        policy: AccessPolicy::RequiresAuth,
        props: Some(props::report_props),
    },
];

#[must_use]
pub fn routes() -> &'static [RouteDescriptor] {
    &ROUTES
}

/// A location resolved to its route, with captured path params.
#[derive(Clone, Debug)]
pub struct RouteMatch {
    pub route: &'static RouteDescriptor,
    pub location: Location,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    #[must_use]
    pub fn name(&self) -> RouteName {
        self.route.name
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn query(&self, key: &str) -> Option<&str> {
        self.location.query(key)
    }

    /// Run the route's prop extractor, or [`ViewProps::None`] if it has none.
    #[must_use]
    pub fn props(&self) -> ViewProps {
        self.route.props.map_or(ViewProps::None, |extract| extract(self))
    }
}

/// Resolve `location` against [`ROUTES`].
#[must_use]
pub fn resolve(location: &Location) -> Option<RouteMatch> {
    resolve_in(&ROUTES, location)
}

/// Resolve `location` to the first route in `table` whose pattern matches.
#[must_use]
pub fn resolve_in(table: &'static [RouteDescriptor], location: &Location) -> Option<RouteMatch> {
    table.iter().find_map(|route| {
        route
            .match_location(location)
            .map(|params| RouteMatch { route, location: location.clone(), params })
    })
}
