//! Host application: owns the committed selection and the catalog, runs the
//! terminal event loop, and applies (or ignores) the wheel's proposals.

pub mod toast;
pub mod ui;

use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use rand::seq::SliceRandom;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::catalog::{self, Catalog};
use crate::model::{Scenario, Selection, SelectionUpdate, Signal};
use crate::wheel::{WheelConfig, WheelState};

use toast::ToastQueue;

/// Simulated generation delay before a scenario is revealed.
const GENERATE_DELAY: Duration = Duration::from_millis(700);
/// How long the success state stays on the button.
const SUCCESS_HOLD: Duration = Duration::from_millis(900);

/// Runtime configuration, environment-overridable.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `scenarios.json` and `signals.json`.
    pub data_dir: PathBuf,
    /// When set, fetch the catalog from this backend instead of the data dir.
    pub api_url: Option<String>,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            api_url: None,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("SEED_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(url) = std::env::var("SEED_API_URL") {
            if !url.is_empty() {
                config.api_url = Some(url);
            }
        }
        if let Ok(dir) = std::env::var("SEED_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        config
    }
}

/// Generate-button choreography states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Default,
    Loading,
    Success,
}

/// Events sent from background tasks to the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    DataLoaded(Catalog),
    DataFailed(String),
    ScenarioReady(Scenario),
    ButtonReset,
}

/// TUI application state. `selection` is the single source of truth the
/// wheel renders against.
pub struct App {
    pub selection: Selection,
    pub catalog: Catalog,
    pub loaded: bool,
    pub current_scenario: Option<Scenario>,
    pub button: ButtonState,
    pub wheel: WheelState,
    pub wheel_config: WheelConfig,
    pub toasts: ToastQueue,
    pub list_cursor: usize,
    should_quit: bool,
    event_rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl App {
    /// Build the app and start loading the catalog in the background.
    pub fn new(config: &AppConfig) -> Self {
        let (tx, rx) = mpsc::channel(16);

        let tx_load = tx.clone();
        let data_dir = config.data_dir.clone();
        let api_url = config.api_url.clone();
        tokio::spawn(async move {
            let result = match api_url {
                Some(url) => catalog::remote::fetch(&url).await,
                None => Catalog::load(&data_dir).await,
            };
            let event = match result {
                Ok(catalog) => AppEvent::DataLoaded(catalog),
                Err(e) => AppEvent::DataFailed(e.to_string()),
            };
            let _ = tx_load.send(event).await;
        });

        Self {
            selection: Selection::default(),
            catalog: Catalog::default(),
            loaded: false,
            current_scenario: None,
            button: ButtonState::Default,
            wheel: WheelState::default(),
            wheel_config: WheelConfig {
                show_title: true,
                ..WheelConfig::default()
            },
            toasts: ToastQueue::default(),
            list_cursor: 0,
            should_quit: false,
            event_rx: rx,
            event_tx: tx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Accept a wheel proposal: replace the selection and hide the current
    /// scenario so it can never disagree with the wheel.
    pub fn apply_update(&mut self, update: SelectionUpdate) {
        self.selection.apply(update);
        self.current_scenario = None;
        self.list_cursor = 0;
        info!(
            polarity = %self.selection.polarity,
            likelihood = %self.selection.likelihood,
            "selection changed"
        );
    }

    /// Signals backing the current scenario; empty without one.
    pub fn visible_signals(&self) -> Vec<&Signal> {
        match &self.current_scenario {
            Some(scenario) => self.catalog.signals_for(scenario),
            None => Vec::new(),
        }
    }

    /// Generate/regenerate: pick a random matching scenario after a short
    /// staged delay, with toast feedback when nothing matches.
    pub fn generate(&mut self) {
        if self.button == ButtonState::Loading {
            return;
        }
        let matches = self.catalog.scenarios_matching(self.selection);
        let Some(picked) = matches.choose(&mut rand::thread_rng()).map(|s| (*s).clone()) else {
            self.current_scenario = None;
            self.toasts
                .push("No scenario found", "No scenario matches your selection.");
            return;
        };
        self.button = ButtonState::Loading;
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(GENERATE_DELAY).await;
            let _ = tx.send(AppEvent::ScenarioReady(picked)).await;
        });
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::DataLoaded(catalog) => {
                self.catalog = catalog;
                self.loaded = true;
            }
            AppEvent::DataFailed(e) => {
                error!("catalog load failed: {e}");
                self.toasts.push("Load failed", e);
            }
            AppEvent::ScenarioReady(scenario) => {
                info!(id = %scenario.id, "scenario ready");
                self.current_scenario = Some(scenario);
                self.list_cursor = 0;
                self.button = ButtonState::Success;
                let tx = self.event_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(SUCCESS_HOLD).await;
                    let _ = tx.send(AppEvent::ButtonReset).await;
                });
            }
            AppEvent::ButtonReset => {
                self.button = ButtonState::Default;
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('g') => self.generate(),
            KeyCode::Up => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                let len = self.visible_signals().len();
                if len > 0 {
                    self.list_cursor = (self.list_cursor + 1).min(len - 1);
                }
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_signal_id() {
                    self.toasts.push("Edit Signal", format!("Editing signal: {id}"));
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_signal_id() {
                    self.toasts.push("Delete Signal", format!("Deleting signal: {id}"));
                    self.catalog.remove_signal(&id);
                    let len = self.visible_signals().len();
                    self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
                }
            }
            _ => {}
        }
    }

    fn selected_signal_id(&self) -> Option<String> {
        self.visible_signals()
            .get(self.list_cursor)
            .map(|s| s.id.clone())
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if let Some(update) = self.wheel.handle_mouse(event, self.selection) {
            self.apply_update(update);
        }
    }

    pub fn tick(&mut self) {
        self.toasts.prune();
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }
}

/// Run the TUI until the user quits.
pub async fn run(config: AppConfig) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(&config);

    let tick_rate = Duration::from_millis(50);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        app.drain_events();

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit() {
            break;
        }
    }

    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
