//! Client-side routing: route table, access policies and the navigation guard.
//!
//! ARCHITECTURE
//! ============
//! `location` parses raw URLs, `table` matches them against the static route
//! list, `guard` decides allow/redirect from the session, `props` derives
//! typed view inputs, and `navigator` drives one navigation end to end.

pub mod error;
pub mod guard;
pub mod location;
pub mod navigator;
pub mod policy;
pub mod props;
pub mod table;

pub use error::NavigationError;
pub use guard::GuardDecision;
pub use location::Location;
pub use navigator::{Navigation, Navigator};
pub use policy::AccessPolicy;
pub use props::ViewProps;
pub use table::{RouteDescriptor, RouteMatch, RouteName};
