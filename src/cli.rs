// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use log::{debug, warn};
use std::io::{self, BufRead as _, Write as _};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::{Config, load_config, load_config_from};
use crate::core::store::CounterStore;
use crate::display::{DensityPanel, Report, StatsPanel};
use crate::editor::Editor;
use crate::theme::{FileStorage, Theme, ThemeService, default_state_path, terminal_prefers_dark};
use crate::utils::read_input;

/// How long the live loop waits for input when nothing is pending.
const IDLE_WAIT: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File to read text from (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Do not count whitespace characters
    #[arg(short = 'w', long)]
    pub exclude_whitespace: bool,

    /// Enable the character limit with this value (non-numeric input counts as 0)
    #[arg(short, long)]
    pub limit: Option<String>,

    /// Number of letters to show in the density list
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Show every letter in the density list
    #[arg(short, long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Read stdin line by line and print updated stats as you type
    #[arg(long)]
    pub live: bool,

    /// Set or toggle the persisted colour theme, then exit (text output uses the saved theme)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeChoice>,

    /// Config file (defaults to ~/.config/charcount/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Persisted state file (defaults to ~/.config/charcount/state.toml)
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// A line typed in live mode that changes options instead of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveCommand {
    ExcludeWhitespace(bool),
    LimitEnabled(bool),
    Limit(String),
    ToggleShowMore,
    Clear,
}

impl LiveCommand {
    /// Recognises `:ws on|off`, `:limit on|off|<n>`, `:more` and `:clear`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let rest = line.trim().strip_prefix(':')?;
        let mut parts = rest.splitn(2, char::is_whitespace);
        let name = parts.next()?;
        let arg = parts.next().map(str::trim);
        match (name, arg) {
            ("ws", Some("on")) => Some(Self::ExcludeWhitespace(true)),
            ("ws", Some("off")) => Some(Self::ExcludeWhitespace(false)),
            ("limit", Some("on")) => Some(Self::LimitEnabled(true)),
            ("limit", Some("off")) => Some(Self::LimitEnabled(false)),
            ("limit", Some(value)) => Some(Self::Limit(value.to_owned())),
            ("more", None) => Some(Self::ToggleShowMore),
            ("clear", None) => Some(Self::Clear),
            _ => None,
        }
    }
}

/// The store with its input surface and both display panels.
#[derive(Debug)]
pub struct Counter {
    pub store: CounterStore,
    pub editor: Editor,
    pub stats_panel: StatsPanel,
    pub density_panel: DensityPanel,
    pub theme: Theme,
}

impl Counter {
    /// Builds the counter from config, then applies command line overrides
    /// through the editor the same way interactive changes would arrive.
    #[must_use]
    pub fn new(config: &Config, args: &Args) -> Self {
        let mut store = CounterStore::with_options(config.counter.option_state());
        let mut editor = Editor::new(config.editor.debounce_ms);

        if args.exclude_whitespace {
            editor.on_exclude_whitespace_changed(&mut store, true);
        }
        if let Some(raw) = &args.limit {
            editor.on_character_limit_changed(&mut store, raw);
            editor.on_character_limit_toggled(&mut store, true);
        }

        let stats_panel = StatsPanel::new(&store);
        let mut density_panel =
            DensityPanel::new(&store, args.top.unwrap_or(config.display.visible_densities));
        density_panel.set_show_all(args.all);

        Self {
            store,
            editor,
            stats_panel,
            density_panel,
            theme: Theme::default(),
        }
    }

    /// Pulls pending values into both panels. Returns whether either changed.
    pub fn refresh(&mut self) -> bool {
        let stats_changed = self.stats_panel.refresh();
        let densities_changed = self.density_panel.refresh();
        stats_changed || densities_changed
    }

    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(format!(
                "{}\n{}",
                self.stats_panel.render(self.theme),
                self.density_panel.render(self.theme)
            )),
            OutputFormat::Json => {
                let json = serde_json::to_string(&Report::from_store(&self.store))
                    .context("Failed to serialize report as JSON")?;
                Ok(format!("{json}\n"))
            }
            OutputFormat::Yaml => serde_yaml_ng::to_string(&Report::from_store(&self.store))
                .context("Failed to serialize report as YAML"),
        }
    }

    /// Applies one live-mode line. Returns whether the panels need a redraw
    /// without waiting for the debounce.
    pub fn apply_line(&mut self, line: &str, now: Instant) -> bool {
        match LiveCommand::parse(line) {
            Some(LiveCommand::ExcludeWhitespace(exclude)) => {
                self.editor
                    .on_exclude_whitespace_changed(&mut self.store, exclude);
                true
            }
            Some(LiveCommand::LimitEnabled(enabled)) => {
                self.editor
                    .on_character_limit_toggled(&mut self.store, enabled);
                true
            }
            Some(LiveCommand::Limit(raw)) => {
                self.editor
                    .on_character_limit_changed(&mut self.store, &raw);
                true
            }
            Some(LiveCommand::ToggleShowMore) => {
                self.density_panel.toggle_show_more();
                true
            }
            Some(LiveCommand::Clear) => {
                self.editor.clear(now);
                false
            }
            None => {
                let chunk = if self.editor.text().is_empty() {
                    line.to_owned()
                } else {
                    format!("\n{line}")
                };
                // A rejected line is already logged by the editor.
                let _ = self.editor.insert_str(&self.store, &chunk, now);
                false
            }
        }
    }
}

/// Runs the counter for the given arguments.
///
/// # Errors
///
/// This function may return an error if:
/// * The input file or stdin cannot be read
/// * The persisted theme cannot be written
/// * The report cannot be serialized
pub fn run(args: Args) -> Result<()> {
    let config_result = args
        .config
        .as_deref()
        .map_or_else(load_config, load_config_from);
    if let Some(warning) = &config_result.warning {
        warn!("{warning}; using defaults");
    }
    let config = config_result.config;

    let mut themes = load_theme_service(args.state_file.clone());
    if let Some(choice) = args.theme {
        let theme = apply_theme(&mut themes, choice)?;
        return emit(&format!("Theme: {theme}\n"));
    }

    let mut counter = Counter::new(&config, &args);
    counter.theme = themes.theme();

    if args.live {
        return run_live(&mut counter, args.format);
    }

    let text = read_input(args.file.as_deref())?;
    counter.editor.on_text_changed(text, Instant::now());
    counter.editor.flush(&mut counter.store);
    counter.refresh();
    emit(&counter.render(args.format)?)
}

fn load_theme_service(state_file: Option<PathBuf>) -> ThemeService<FileStorage> {
    let path = state_file.unwrap_or_else(default_state_path);
    let storage = FileStorage::open(&path).unwrap_or_else(|e| {
        warn!("{e}; starting from an empty state file");
        FileStorage::empty(&path)
    });
    ThemeService::load(storage, terminal_prefers_dark())
}

fn apply_theme(service: &mut ThemeService<FileStorage>, choice: ThemeChoice) -> Result<Theme> {
    match choice {
        ThemeChoice::Light => service.set_theme(Theme::Light)?,
        ThemeChoice::Dark => service.set_theme(Theme::Dark)?,
        ThemeChoice::Toggle => {
            service.toggle_theme()?;
        }
    }
    Ok(service.theme())
}

fn run_live(counter: &mut Counter, format: OutputFormat) -> Result<()> {
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    debug!("live mode started");

    emit(&counter.render(format)?)?;
    loop {
        let wait = counter
            .editor
            .time_until_update(Instant::now())
            .unwrap_or(IDLE_WAIT);
        let redraw = match rx.recv_timeout(wait) {
            Ok(line) => counter.apply_line(&line, Instant::now()),
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                counter.editor.flush(&mut counter.store);
                if counter.refresh() {
                    emit(&counter.render(format)?)?;
                }
                debug!("live mode finished");
                return Ok(());
            }
        };

        let updated = counter.editor.tick(&mut counter.store, Instant::now());
        let changed = counter.refresh();
        if redraw || (updated && changed) {
            emit(&counter.render(format)?)?;
        }
    }
}

fn emit(rendered: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush().context("Failed to write to stdout")
}
