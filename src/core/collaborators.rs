//! Services the dashboard depends on but does not implement

use crate::domain::UserName;

use super::{Notice, Route};

/// Shows transient notices (toasts, banners, ...).
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Switches the route on screen.
pub trait Navigator {
    fn navigate(&mut self, route: Route);

    /// Returns to the previous route, if there is one.
    fn back(&mut self);
}

/// Current user plus the ability to end the session.
///
/// Credential teardown lives behind `logout`; views never see credentials.
pub trait Session {
    fn current_user(&self) -> &UserName;
    fn logout(&mut self);
}

/// Placeholder session holding a fixed display name.
#[derive(Debug, Clone)]
pub struct LocalSession {
    user: UserName,
    logouts: usize,
}

impl LocalSession {
    pub fn new(user: UserName) -> Self {
        Self { user, logouts: 0 }
    }

    pub fn logouts(&self) -> usize {
        self.logouts
    }
}

impl Session for LocalSession {
    fn current_user(&self) -> &UserName {
        &self.user
    }

    fn logout(&mut self) {
        // No token to clear; a real session would revoke credentials here.
        self.logouts += 1;
        tracing::info!(user = %self.user, "session ended");
    }
}
