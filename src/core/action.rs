//! Actions that modules can return to communicate with the app

use super::collaborators::{Navigator, Notifier, Session};
use super::{Notice, Route};

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch to another route
    Navigate(Route),

    /// Return to the previous route
    Back,

    /// Show a transient notice
    Notify(Notice),

    /// End the current session
    EndSession,

    /// Run several actions in order
    Batch(Vec<Action>),

    /// Request quit
    Quit,
}

impl Action {
    /// End the session, confirm it, then leave for the login route.
    pub fn logout() -> Self {
        Action::Batch(vec![
            Action::EndSession,
            Action::Notify(Notice::logged_out()),
            Action::Navigate(Route::Login),
        ])
    }
}

/// What the event loop should do after an action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The collaborators an action may touch.
pub struct Effects<'a> {
    pub session: &'a mut dyn Session,
    pub notifier: &'a mut dyn Notifier,
    pub navigator: &'a mut dyn Navigator,
}

pub fn dispatch(action: Action, effects: &mut Effects<'_>) -> Flow {
    match action {
        Action::None => Flow::Continue,
        Action::Navigate(route) => {
            effects.navigator.navigate(route);
            Flow::Continue
        }
        Action::Back => {
            effects.navigator.back();
            Flow::Continue
        }
        Action::Notify(notice) => {
            effects.notifier.notify(notice);
            Flow::Continue
        }
        Action::EndSession => {
            effects.session.logout();
            Flow::Continue
        }
        Action::Batch(actions) => {
            for action in actions {
                if dispatch(action, effects) == Flow::Quit {
                    return Flow::Quit;
                }
            }
            Flow::Continue
        }
        Action::Quit => Flow::Quit,
    }
}
