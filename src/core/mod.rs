pub mod action;
pub mod collaborators;
pub mod context;
pub mod module;
pub mod notice;
pub mod route;

pub use action::{dispatch, Action, Effects, Flow};
pub use collaborators::{LocalSession, Navigator, Notifier, Session};
pub use context::Context;
pub use module::Module;
pub use notice::{Notice, NotifyLevel, Toast, ToastQueue};
pub use route::{Route, Router};
