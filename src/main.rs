use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::cursor;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use dashview::config::{self, Config};
use dashview::core::{Notice, Notifier};
use dashview::domain::UserName;
use dashview::{dump, logging, ui, App, AppSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "dashview",
    version,
    about = "Terminal account dashboard"
)]
struct Args {
    /// Config file (defaults to $DASHVIEW_CONFIG or ~/.config/dashview/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Display name to greet
    #[arg(long)]
    user: Option<String>,

    /// Render everything at rest
    #[arg(long)]
    no_animations: bool,

    /// Use ASCII glyphs instead of Unicode icons
    #[arg(long)]
    ascii: bool,

    /// Print the dashboard to stdout and exit
    #[arg(long, value_enum)]
    dump: Option<DumpFormat>,

    /// Width used by --dump text
    #[arg(long, default_value_t = 100)]
    width: u16,

    /// Height used by --dump text
    #[arg(long, default_value_t = 40)]
    height: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logging needs the config's filter, so startup problems are collected
    // and reported once the subscriber is up
    let mut startup: Vec<Notice> = Vec::new();
    let (mut config, config_err) = match config::load(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    apply_overrides(&mut config, &args);

    let _log_guard = match config::data_dir() {
        Some(dir) => match logging::init(&dir, &config.log_filter) {
            Ok(guard) => {
                tracing::info!(path = %logging::log_path(&dir).display(), "logging to file");
                Some(guard)
            }
            Err(err) => {
                startup.push(Notice::error("Logging disabled", err.to_string()));
                None
            }
        },
        None => None,
    };
    if let Some(err) = config_err {
        tracing::warn!(%err, "falling back to default config");
        startup.push(Notice::warn("Config ignored", err.to_string()));
    }
    tracing::info!(user = %config.user_name, animations = config.animations, "starting");

    if let Some(format) = args.dump {
        for notice in &startup {
            eprintln!("{}: {}", notice.title, notice.description);
        }
        let out = match format {
            DumpFormat::Text => dump::text(AppSettings::from(&config), args.width, args.height)?,
            DumpFormat::Json => dump::json(&UserName::new(config.user_name.clone()))?,
        };
        println!("{out}");
        return Ok(());
    }

    let mut app = App::new(AppSettings::from(&config));
    for notice in startup {
        app.toasts.notify(notice);
    }

    enable_raw_mode()?;
    let res = with_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
            run_app(&mut terminal, app, config.tick_rate())
        },
        restore_terminal,
    );

    if let Err(err) = res {
        tracing::error!(?err, "terminal loop failed");
        eprintln!("{err:?}");
    }
    tracing::info!("exiting");

    Ok(())
}

/// Runs `body`, then `restore` whatever `body` returned. A body error wins
/// over a restore error.
fn with_restore<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(user) = args.user.as_deref() {
        config.user_name = user.to_string();
    }
    if args.no_animations {
        config.animations = false;
    }
    if args.ascii {
        config.ascii_icons = true;
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();
    app.resize(terminal.size()?);
    app.mount(Instant::now());

    loop {
        app.sync_context(Instant::now());
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.resize(Rect::new(0, 0, width, height)),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }
}
