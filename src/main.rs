pub mod ui;

use chrono::{DateTime, Local};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

use drowse::{
    backdrop::Backdrop,
    config::{Config, ConfigStore, FileConfigStore},
    greeting::current_greeting,
    runtime::{CrosstermEventSource, FixedTicker, Runner, TrackerEvent},
    time_picker::TimePicker,
    tracker::{SleepSummary, ToggleOutcome, Tracker},
    watchdog::Watchdog,
};

const TICK_RATE_MS: u64 = 250;

/// minimal sleep tracking tui
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A minimal sleep tracking TUI: mark when you fall asleep and wake up, set a display alarm time, and get a post-sleep summary. An inactivity watchdog auto-stops forgotten sessions."
)]
pub struct Cli {
    /// name used in the greeting line (persisted for next time)
    #[clap(short = 'n', long)]
    name: Option<String>,

    /// disable the night-sky backdrop
    #[clap(long)]
    plain: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Home,
    AlarmPicker,
    Summary,
}

#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub tracker: Tracker,
    pub watchdog: Watchdog,
    pub picker: TimePicker,
    pub summary: Option<SleepSummary>,
    pub greeting: &'static str,
    pub backdrop: Option<Backdrop>,
    pub state: AppState,
}

impl App {
    pub fn new(config: Config) -> Self {
        // Greeting is evaluated once per mount, not on every redraw
        let greeting = current_greeting();
        let backdrop = if config.backdrop {
            Some(Backdrop::new())
        } else {
            None
        };

        Self {
            config,
            tracker: Tracker::new(),
            watchdog: Watchdog::new(),
            picker: TimePicker::default(),
            summary: None,
            greeting,
            backdrop,
            state: AppState::Home,
        }
    }

    /// Start or stop the sleep session, keeping the watchdog in lockstep
    /// with the active-state transition.
    pub fn toggle_session_at(&mut self, now: DateTime<Local>) {
        match self.tracker.toggle_at(now) {
            ToggleOutcome::Started => {
                self.watchdog.arm(now, self.tracker.seq());
                self.state = AppState::Home;
            }
            ToggleOutcome::Stopped(summary) => {
                self.watchdog.cancel();
                self.summary = Some(summary);
                self.state = AppState::Summary;
            }
        }
    }

    pub fn toggle_session(&mut self) {
        self.toggle_session_at(Local::now());
    }

    /// Evaluate the watchdog. Returns true if it forced a stop (the screen
    /// needs a redraw); nothing else changes on a tick.
    pub fn on_tick_at(&mut self, now: DateTime<Local>) -> bool {
        if let Some(seq) = self.watchdog.poll(now) {
            // A fire for a superseded session is ignored
            if self.tracker.is_tracking() && self.tracker.seq() == seq {
                self.toggle_session_at(now);
                return true;
            }
        }
        false
    }

    pub fn on_tick(&mut self) -> bool {
        self.on_tick_at(Local::now())
    }

    pub fn open_picker_at(&mut self, now: DateTime<Local>) {
        let initial = self.tracker.alarm().unwrap_or_else(|| now.time());
        self.picker = TimePicker::from_time(initial);
        self.state = AppState::AlarmPicker;
    }

    pub fn confirm_alarm(&mut self) {
        self.tracker.set_alarm(self.picker.selected());
        self.state = AppState::Home;
    }

    pub fn cancel_picker(&mut self) {
        self.state = AppState::Home;
    }

    pub fn dismiss_summary(&mut self) {
        self.summary = None;
        self.state = AppState::Home;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let mut config = store.load();
    if let Some(name) = cli.name {
        config.name = name;
        let _ = store.save(&config);
    }
    if cli.plain {
        config.backdrop = false;
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| render(app, f))?;

    loop {
        match runner.step() {
            TrackerEvent::Tick => {
                // Redraw only when the watchdog actually changed state
                if app.on_tick() {
                    terminal.draw(|f| render(app, f))?;
                }
            }
            TrackerEvent::Resize => {
                terminal.draw(|f| render(app, f))?;
            }
            TrackerEvent::Key(key) => {
                if handle_key(app, key) {
                    break;
                }
                terminal.draw(|f| render(app, f))?;
            }
        }
    }

    Ok(())
}

/// Returns true when the app should quit
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.state {
        AppState::Home => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char(' ') => app.toggle_session(),
            KeyCode::Char('a') => app.open_picker_at(Local::now()),
            _ => {}
        },
        AppState::AlarmPicker => match key.code {
            KeyCode::Esc => app.cancel_picker(),
            KeyCode::Enter => app.confirm_alarm(),
            KeyCode::Up => app.picker.increment(),
            KeyCode::Down => app.picker.decrement(),
            KeyCode::Right | KeyCode::Tab => app.picker.next_field(),
            KeyCode::Left | KeyCode::BackTab => app.picker.prev_field(),
            _ => {}
        },
        // The summary dialog has a single acknowledgment action
        AppState::Summary => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(_) => app.dismiss_summary(),
            _ => {}
        },
    }

    false
}

fn render(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
