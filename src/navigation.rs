//! Navigation Stack
//!
//! Named routes and the stack the shell renders from. The top of the stack
//! is the visible screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    Lojas,
    Localizacao,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavStack {
    routes: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl NavStack {
    pub fn new(initial: Route) -> Self {
        Self { routes: vec![initial] }
    }

    pub fn current(&self) -> Route {
        // Never empty: every mutation keeps at least one entry
        self.routes.last().copied().unwrap_or(Route::Login)
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.depth() > 1
    }

    /// Pop back to `route` if it is already on the stack, otherwise push it.
    pub fn navigate(&mut self, route: Route) {
        if let Some(pos) = self.routes.iter().position(|r| *r == route) {
            self.routes.truncate(pos + 1);
        } else {
            self.routes.push(route);
        }
    }

    /// Returns false when already at the root.
    pub fn go_back(&mut self) -> bool {
        if self.can_go_back() {
            self.routes.pop();
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, route: Route) {
        self.routes.clear();
        self.routes.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_login() {
        let nav = NavStack::default();
        assert_eq!(nav.current(), Route::Login);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_navigate_pushes_new_routes() {
        let mut nav = NavStack::default();
        nav.navigate(Route::Home);
        nav.navigate(Route::Lojas);
        assert_eq!(nav.current(), Route::Lojas);
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_navigate_to_existing_route_pops_back() {
        let mut nav = NavStack::default();
        nav.navigate(Route::Home);
        nav.navigate(Route::Lojas);
        nav.navigate(Route::Localizacao);
        nav.navigate(Route::Home);
        assert_eq!(nav.current(), Route::Home);
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_go_back_never_empties() {
        let mut nav = NavStack::default();
        nav.navigate(Route::Register);
        assert!(nav.go_back());
        assert!(!nav.go_back());
        assert_eq!(nav.current(), Route::Login);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_reset_replaces_stack() {
        let mut nav = NavStack::default();
        nav.navigate(Route::Home);
        nav.navigate(Route::Lojas);
        nav.reset(Route::Login);
        assert_eq!(nav.current(), Route::Login);
        assert_eq!(nav.depth(), 1);
    }
}
