use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::layout::Rect;

use crate::config::Config;
use crate::core::{
    dispatch, Action, Context, Effects, Flow, LocalSession, Module, Route, Router, Session,
    ToastQueue,
};
use crate::domain::{GlyphSet, UserName};
use crate::modules::dashboard::Dashboard;
use crate::modules::login::LoginScreen;
use crate::ui::layout::Breakpoint;

/// Host-level knobs, usually taken from [`Config`].
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub user: UserName,
    pub glyphs: GlyphSet,
    pub animations: bool,
    pub toast_ttl: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for AppSettings {
    fn from(config: &Config) -> Self {
        Self {
            user: UserName::new(config.user_name.clone()),
            glyphs: config.glyphs(),
            animations: config.animations,
            toast_ttl: config.toast_ttl(),
        }
    }
}

pub struct App {
    /// Shared context for modules
    pub ctx: Context,
    pub router: Router,
    pub toasts: ToastQueue,
    pub session: Box<dyn Session>,
    pub dashboard: Dashboard,
    pub login: LoginScreen,
    pub help_open: bool,
    pub should_quit: bool,
    size: Rect,
    mounted_at: Instant,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        let session = LocalSession::new(settings.user.clone());
        Self::with_session(settings, Box::new(session))
    }

    pub fn with_session(settings: AppSettings, session: Box<dyn Session>) -> Self {
        Self {
            ctx: Context::new(
                session.current_user().clone(),
                settings.glyphs,
                settings.animations,
            ),
            router: Router::default(),
            toasts: ToastQueue::new(settings.toast_ttl),
            session,
            dashboard: Dashboard::new(),
            login: LoginScreen::new(),
            help_open: false,
            should_quit: false,
            size: Rect::default(),
            mounted_at: Instant::now(),
        }
    }

    pub fn current_route(&self) -> Route {
        self.router.current()
    }

    pub fn size(&self) -> Rect {
        self.size
    }

    pub fn resize(&mut self, size: Rect) {
        self.size = size;
        self.dashboard
            .set_columns(Breakpoint::for_width(size.width).feature_columns());
    }

    /// Sync context with app state
    pub fn sync_context(&mut self, now: Instant) {
        self.ctx.user = self.session.current_user().clone();
        self.ctx.since_mount = now.saturating_duration_since(self.mounted_at);
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.toasts.expire(now);
    }

    /// Starts the entry animation of the current route over.
    pub fn mount(&mut self, now: Instant) {
        self.mounted_at = now;
        match self.router.current() {
            Route::Dashboard => self.dashboard.remount(),
            Route::Login => self.login.remount(),
        }
    }

    /// The routed module together with the context it reads.
    fn active_module(&mut self) -> (&mut dyn Module, &Context) {
        let module: &mut dyn Module = match self.router.current() {
            Route::Dashboard => &mut self.dashboard,
            Route::Login => &mut self.login,
        };
        (module, &self.ctx)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.help_open {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.help_open = false;
            }
            return;
        }

        let (module, ctx) = self.active_module();
        if !module.captures_text() && key.code == KeyCode::Char('?') {
            self.help_open = true;
            return;
        }

        let action = module.handle_key(key, ctx);
        if action != Action::None {
            tracing::debug!(module = module.id(), ?action, "key action");
        }
        self.apply_action(action);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.help_open {
            return;
        }
        let size = self.size;
        let (module, ctx) = self.active_module();
        let action = module.handle_mouse(mouse, size, ctx);
        if action != Action::None {
            tracing::debug!(module = module.id(), ?action, "mouse action");
        }
        self.apply_action(action);
    }

    pub fn apply_action(&mut self, action: Action) {
        if action == Action::None {
            return;
        }
        let before = self.router.current();
        let flow = {
            let mut effects = Effects {
                session: self.session.as_mut(),
                notifier: &mut self.toasts,
                navigator: &mut self.router,
            };
            dispatch(action, &mut effects)
        };
        if flow == Flow::Quit {
            self.should_quit = true;
        }
        if self.router.current() != before {
            self.mount(Instant::now());
        }
    }
}
