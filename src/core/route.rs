//! Routes the host can show and the history of visited routes

use super::collaborators::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Login => "/login",
        }
    }
}

/// History stack; the last entry is the route on screen.
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            history: vec![start],
        }
    }

    pub fn current(&self) -> Route {
        self.history.last().copied().unwrap_or(Route::Dashboard)
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Pops one entry. The first route is never popped.
    pub fn back(&mut self) -> Route {
        if self.history.len() > 1 {
            self.history.pop();
        }
        self.current()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Dashboard)
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: Route) {
        tracing::debug!(from = self.current().path(), to = route.path(), "navigate");
        self.history.push(route);
    }

    fn back(&mut self) {
        let from = self.current();
        let to = Router::back(self);
        tracing::debug!(from = from.path(), to = to.path(), "navigate back");
    }
}
