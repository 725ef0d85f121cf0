//! Collection routes and their identifiers.

use std::fmt;

use super::Stop;

/// Route selection value meaning "every route".
pub const ALL_ROUTES: &str = "ALL";

/// Spanish label the public page has always used for [`ALL_ROUTES`].
/// Accepted as an alias so old bookmarked links keep working.
pub const ALL_ROUTES_LABEL: &str = "Todas";

/// Returns true if `name` collides with a route-selection sentinel.
pub fn is_reserved_route_name(name: &str) -> bool {
    name == ALL_ROUTES || name == ALL_ROUTES_LABEL
}

/// Identifier of a route, unique within its day.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RouteId(String);

impl RouteId {
    /// Create a route id.
    pub fn new(id: impl Into<String>) -> Self {
        RouteId(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A collection path visited on a given day.
///
/// A route without a name is a placeholder for a slot that has no
/// collection defined; placeholders never carry stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: RouteId,
    pub name: Option<String>,
    /// Stops in visiting order.
    pub stops: Vec<Stop>,
}

impl Route {
    /// Create a named route.
    pub fn named(id: RouteId, name: impl Into<String>, stops: Vec<Stop>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            stops,
        }
    }

    /// Create a placeholder route (no name, no stops).
    pub fn placeholder(id: RouteId) -> Self {
        Self {
            id,
            name: None,
            stops: Vec::new(),
        }
    }

    /// The route name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether this route is a placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.name.is_none()
    }
}
