//! Static path-to-route lookup.

use snafu::ensure;

use crate::error::{DuplicateRouteSnafu, EmptyRouteTableSnafu};

/// Outcome of resolving a request path. Every lookup produces exactly one
/// of these; callers decide what an unmatched path renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<R> {
    /// A route is registered for the path.
    Found(R),
    /// Nothing is registered for the path.
    NotFound,
}

/// Immutable mapping from literal request paths to route values.
///
/// Built once at startup and passed down; there is no global registry.
/// Lookup scans entries in declaration order and the first match wins.
/// Duplicate paths are rejected at construction, so order never changes
/// the outcome.
#[derive(Debug, Clone)]
pub struct RouteTable<R> {
    entries: Vec<(&'static str, R)>,
}

impl<R: Copy + PartialEq> RouteTable<R> {
    /// Build a table from `(path, route)` entries.
    ///
    /// Fails on an empty entry list or on a path registered twice.
    pub fn new(entries: impl IntoIterator<Item = (&'static str, R)>) -> crate::Result<Self> {
        let entries: Vec<_> = entries.into_iter().collect();
        ensure!(!entries.is_empty(), EmptyRouteTableSnafu);
        for (index, (path, _)) in entries.iter().enumerate() {
            ensure!(
                entries[..index].iter().all(|(seen, _)| seen != path),
                DuplicateRouteSnafu { path: *path }
            );
        }
        Ok(Self { entries })
    }

    /// Resolve a request path to its registered route.
    pub fn resolve(&self, path: &str) -> Resolution<R> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map_or(Resolution::NotFound, |(_, route)| Resolution::Found(*route))
    }

    /// The path a route is registered under, if any.
    pub fn path_of(&self, route: R) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == route)
            .map(|(path, _)| *path)
    }

    /// Number of registered paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries. Always false for a constructed
    /// table; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestRoute {
        Home,
        About,
    }

    #[test]
    fn resolves_registered_paths() {
        let table =
            RouteTable::new([("/", TestRoute::Home), ("/about", TestRoute::About)]).unwrap();

        assert_eq!(table.resolve("/"), Resolution::Found(TestRoute::Home));
        assert_eq!(table.resolve("/about"), Resolution::Found(TestRoute::About));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn unregistered_path_is_not_found() {
        let table = RouteTable::new([("/", TestRoute::Home)]).unwrap();

        assert_eq!(table.resolve("/does-not-exist"), Resolution::NotFound);
        // Exact matches only: no prefix or trailing-slash magic.
        assert_eq!(table.resolve(""), Resolution::NotFound);
        assert_eq!(table.resolve("//"), Resolution::NotFound);
    }

    #[test]
    fn duplicate_path_is_rejected() {
        let result = RouteTable::new([("/", TestRoute::Home), ("/", TestRoute::About)]);

        assert!(matches!(result, Err(Error::DuplicateRoute { path: "/" })));
    }

    #[test]
    fn empty_table_is_rejected() {
        let result = RouteTable::<TestRoute>::new([]);

        assert!(matches!(result, Err(Error::EmptyRouteTable)));
    }

    #[test]
    fn path_of_reverses_the_mapping() {
        let table =
            RouteTable::new([("/", TestRoute::Home), ("/about", TestRoute::About)]).unwrap();

        assert_eq!(table.path_of(TestRoute::About), Some("/about"));
    }
}
