//! Path-based navigation.
//!
//! [`RouteTable`] maps literal request paths to route values; [`Router`]
//! layers the current route and a back history on top of one.

pub mod table;

pub use table::{Resolution, RouteTable};

/// Tracks which route is current and the history behind it.
///
/// # Example
/// ```
/// use crossview::{Resolution, RouteTable, Router};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Screen { Home, Settings }
///
/// let table = RouteTable::new([("/", Screen::Home), ("/settings", Screen::Settings)]).unwrap();
/// let mut router = Router::new(table, Screen::Home);
///
/// assert_eq!(router.resolve("/settings"), Resolution::Found(Screen::Settings));
/// router.go(Screen::Settings);
/// assert_eq!(router.current(), Screen::Settings);
/// assert!(router.back());
/// assert_eq!(router.current(), Screen::Home);
/// ```
#[derive(Debug, Clone)]
pub struct Router<R> {
    table: RouteTable<R>,
    current: R,
    history: Vec<R>,
}

impl<R: Copy + PartialEq> Router<R> {
    /// Create a router positioned at `initial`.
    pub fn new(table: RouteTable<R>, initial: R) -> Self {
        Self {
            table,
            current: initial,
            history: Vec::new(),
        }
    }

    /// The current route.
    pub fn current(&self) -> R {
        self.current
    }

    /// Resolve a request path against the table. Pure lookup, never moves.
    pub fn resolve(&self, path: &str) -> Resolution<R> {
        self.table.resolve(path)
    }

    /// The path the current route is registered under, if it has one.
    pub fn current_path(&self) -> Option<&'static str> {
        self.table.path_of(self.current)
    }

    /// Move to `route`, pushing the previous route onto the history.
    /// Moving to the current route is a no-op.
    pub fn go(&mut self, route: R) {
        if self.current != route {
            self.history.push(self.current);
            self.current = route;
        }
    }

    /// Return to the previous route. False when the history is empty.
    pub fn back(&mut self) -> bool {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
            true
        } else {
            false
        }
    }

    /// Whether there is history to go back to.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of routes in the history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drop the navigation history, keeping the current route.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestRoute {
        Home,
        Settings,
        Profile,
    }

    fn router() -> Router<TestRoute> {
        let table = RouteTable::new([
            ("/", TestRoute::Home),
            ("/settings", TestRoute::Settings),
            ("/profile", TestRoute::Profile),
        ])
        .unwrap();
        Router::new(table, TestRoute::Home)
    }

    #[test]
    fn navigation_and_back() {
        let mut router = router();

        assert_eq!(router.current(), TestRoute::Home);
        assert!(!router.can_go_back());

        router.go(TestRoute::Settings);
        assert_eq!(router.current(), TestRoute::Settings);
        assert!(router.can_go_back());

        router.go(TestRoute::Profile);
        assert_eq!(router.history_len(), 2);

        assert!(router.back());
        assert_eq!(router.current(), TestRoute::Settings);

        assert!(router.back());
        assert_eq!(router.current(), TestRoute::Home);

        assert!(!router.back());
        assert_eq!(router.current(), TestRoute::Home);
    }

    #[test]
    fn self_navigation_leaves_history_untouched() {
        let mut router = router();
        router.go(TestRoute::Home);
        assert_eq!(router.history_len(), 0);
    }

    #[test]
    fn resolve_delegates_to_table() {
        let router = router();
        assert_eq!(router.resolve("/profile"), Resolution::Found(TestRoute::Profile));
        assert_eq!(router.resolve("/missing"), Resolution::NotFound);
    }

    #[test]
    fn current_path_reverse_lookup() {
        let mut router = router();
        assert_eq!(router.current_path(), Some("/"));
        router.go(TestRoute::Settings);
        assert_eq!(router.current_path(), Some("/settings"));
    }

    #[test]
    fn clear_history_keeps_current() {
        let mut router = router();
        router.go(TestRoute::Settings);
        router.clear_history();
        assert_eq!(router.current(), TestRoute::Settings);
        assert!(!router.can_go_back());
    }
}
