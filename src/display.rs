// src/display.rs
//! Render-only views over the store's channels.
//!
//! Panels never compute statistics. They keep the last value received from
//! their subscriptions and format it on demand.

use std::fmt::Write as _;

use serde::Serialize;

use crate::core::channel::Subscription;
use crate::core::store::CounterStore;
use crate::models::{CharacterLimitState, CharacterStats, LetterDensity};
use crate::theme::Theme;

pub const DEFAULT_VISIBLE_DENSITIES: usize = 5;

const BAR_WIDTH: f64 = 20.0;

const RESET: &str = "\x1b[0m";

/// ANSI colours used for the highlighted parts of text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    bar: &'static str,
    warning: &'static str,
}

impl Palette {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bar: "\x1b[34m",
                warning: "\x1b[31m",
            },
            Theme::Dark => Self {
                bar: "\x1b[96m",
                warning: "\x1b[91m",
            },
        }
    }

    fn paint(colour: &str, text: &str) -> String {
        if text.is_empty() {
            String::new()
        } else {
            format!("{colour}{text}{RESET}")
        }
    }
}

#[must_use]
pub fn format_read_time(minutes: f64) -> String {
    if minutes == 0.0 {
        String::from("0 minutes")
    } else if minutes < 1.0 {
        String::from("< 1 minute")
    } else {
        format!("{minutes:.2} minutes")
    }
}

#[derive(Debug)]
pub struct StatsPanel {
    stats_updates: Subscription<CharacterStats>,
    limit_updates: Subscription<CharacterLimitState>,
    stats: CharacterStats,
    limit: CharacterLimitState,
}

impl StatsPanel {
    #[must_use]
    pub fn new(store: &CounterStore) -> Self {
        let stats_updates = store.subscribe_stats();
        let limit_updates = store.subscribe_limit_state();
        let stats = stats_updates.latest();
        let limit = limit_updates.latest();
        let mut panel = Self {
            stats_updates,
            limit_updates,
            stats,
            limit,
        };
        panel.refresh();
        panel
    }

    /// Takes any new values from the store. Returns whether anything changed.
    pub fn refresh(&mut self) -> bool {
        let mut changed = false;
        if let Some(stats) = self.stats_updates.poll() {
            self.stats = stats;
            changed = true;
        }
        if let Some(limit) = self.limit_updates.poll() {
            self.limit = limit;
            changed = true;
        }
        changed
    }

    #[must_use]
    pub const fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    #[must_use]
    pub const fn limit(&self) -> &CharacterLimitState {
        &self.limit
    }

    #[must_use]
    pub fn render(&self, theme: Theme) -> String {
        let palette = Palette::for_theme(theme);
        let mut out = String::new();
        let _ = writeln!(out, "Total characters: {}", self.stats.character_count);
        let _ = writeln!(out, "Word count:       {}", self.stats.word_count);
        let _ = writeln!(out, "Sentence count:   {}", self.stats.sentence_count);
        let _ = writeln!(
            out,
            "Reading time:     {}",
            format_read_time(self.stats.read_time)
        );
        if self.limit.is_over_limit {
            let warning = format!(
                "Limit reached! Your text exceeds {} characters.",
                self.limit.limit
            );
            let _ = writeln!(out, "{}", Palette::paint(palette.warning, &warning));
        }
        out
    }
}

#[derive(Debug)]
pub struct DensityPanel {
    updates: Subscription<Vec<LetterDensity>>,
    densities: Vec<LetterDensity>,
    visible: usize,
    show_all: bool,
}

impl DensityPanel {
    #[must_use]
    pub fn new(store: &CounterStore, visible: usize) -> Self {
        let mut updates = store.subscribe_densities();
        let densities = updates.poll().unwrap_or_default();
        Self {
            updates,
            densities,
            visible,
            show_all: false,
        }
    }

    pub fn refresh(&mut self) -> bool {
        self.updates.poll().is_some_and(|densities| {
            self.densities = densities;
            true
        })
    }

    /// Entries currently on screen, honouring the show-more toggle.
    #[must_use]
    pub fn displayed(&self) -> &[LetterDensity] {
        if self.show_all {
            &self.densities
        } else {
            self.densities
                .get(..self.visible)
                .unwrap_or(self.densities.as_slice())
        }
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.densities.len() > self.visible
    }

    pub fn toggle_show_more(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.show_all
    }

    #[must_use]
    #[expect(clippy::as_conversions, reason = "Bar length is display only")]
    #[expect(clippy::cast_possible_truncation, reason = "Bar length is display only")]
    #[expect(clippy::cast_sign_loss, reason = "Percent is never negative")]
    pub fn render(&self, theme: Theme) -> String {
        let palette = Palette::for_theme(theme);
        let mut out = String::from("Letter density\n");
        if self.densities.is_empty() {
            out.push_str("No characters found. Start typing to see letter density.\n");
            return out;
        }

        for density in self.displayed() {
            let bar = Palette::paint(
                palette.bar,
                &"#".repeat((density.percent / 100.0 * BAR_WIDTH).round() as usize),
            );
            let _ = writeln!(
                out,
                "{} {:>6} ({:>5.2}%) {bar}",
                density.letter, density.count, density.percent
            );
        }
        if self.has_more() {
            if self.show_all {
                out.push_str("Show less\n");
            } else {
                let hidden = self.densities.len().saturating_sub(self.visible);
                let _ = writeln!(out, "Show more ({hidden} hidden)");
            }
        }
        out
    }
}

/// Snapshot of every published value, for machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub stats: CharacterStats,
    pub limit: CharacterLimitState,
    pub densities: Vec<LetterDensity>,
}

impl Report {
    #[must_use]
    pub fn from_store(store: &CounterStore) -> Self {
        Self {
            stats: store.stats(),
            limit: store.limit_state(),
            densities: store.densities(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_read_time() {
        assert_eq!(format_read_time(0.0), "0 minutes");
        assert_eq!(format_read_time(0.005), "< 1 minute");
        assert_eq!(format_read_time(1.0), "1.00 minutes");
        assert_eq!(format_read_time(1.5), "1.50 minutes");
    }

    #[test]
    fn test_stats_panel_starts_from_current_values() {
        let mut store = CounterStore::new();
        store.update_stats("One two three.");
        let panel = StatsPanel::new(&store);
        assert_eq!(panel.stats().word_count, 3);
    }

    #[test]
    fn test_stats_panel_refresh() {
        let mut store = CounterStore::new();
        let mut panel = StatsPanel::new(&store);
        assert!(!panel.refresh());

        store.update_stats("Hi. Bye!");
        assert!(panel.refresh());
        assert_eq!(panel.stats().sentence_count, 2);
        assert!(!panel.refresh());
    }

    #[test]
    fn test_stats_panel_renders_limit_warning() {
        let mut store = CounterStore::new();
        store.set_use_character_limit(true);
        store.set_character_limit(5);
        store.update_stats("Hello!");
        let panel = StatsPanel::new(&store);

        let rendered = panel.render(Theme::Light);
        assert!(rendered.contains("Total characters: 6"));
        assert!(rendered.contains("Reading time:     < 1 minute"));
        assert!(rendered.contains("Limit reached! Your text exceeds 5 characters."));
    }

    #[test]
    fn test_density_panel_truncates_and_expands() {
        let mut store = CounterStore::new();
        let mut panel = DensityPanel::new(&store, DEFAULT_VISIBLE_DENSITIES);
        store.update_stats("abcdefg");
        assert!(panel.refresh());

        assert_eq!(panel.displayed().len(), 5);
        assert!(panel.has_more());
        assert!(panel.render(Theme::Light).contains("Show more (2 hidden)"));

        panel.toggle_show_more();
        assert!(panel.is_expanded());
        assert_eq!(panel.displayed().len(), 7);
        assert!(panel.render(Theme::Light).contains("Show less"));
    }

    #[test]
    fn test_density_panel_short_list() {
        let mut store = CounterStore::new();
        store.update_stats("aab");
        let panel = DensityPanel::new(&store, DEFAULT_VISIBLE_DENSITIES);
        assert_eq!(panel.displayed().len(), 2);
        assert!(!panel.has_more());
        assert!(panel.render(Theme::Light).starts_with("Letter density\nA      2 (66.67%)"));
    }

    #[test]
    fn test_density_panel_empty_state() {
        let store = CounterStore::new();
        let panel = DensityPanel::new(&store, DEFAULT_VISIBLE_DENSITIES);
        assert!(panel.render(Theme::Dark).contains("No characters found"));
    }

    #[test]
    fn test_theme_colours_bars_and_warning() {
        let mut store = CounterStore::new();
        store.set_use_character_limit(true);
        store.set_character_limit(1);
        store.update_stats("ab");
        let stats = StatsPanel::new(&store);
        let densities = DensityPanel::new(&store, DEFAULT_VISIBLE_DENSITIES);

        let light = densities.render(Theme::Light);
        let dark = densities.render(Theme::Dark);
        assert_ne!(light, dark);
        assert!(light.contains("\x1b[34m##########\x1b[0m"));
        assert!(dark.contains("\x1b[96m##########\x1b[0m"));

        assert!(stats.render(Theme::Light).contains("\x1b[31mLimit reached!"));
        assert!(stats.render(Theme::Dark).contains("\x1b[91mLimit reached!"));
        assert!(!stats.render(Theme::Dark).contains("\x1b[31m"));
    }

    #[test]
    fn test_report_serializes() -> Result<(), serde_json::Error> {
        let mut store = CounterStore::new();
        store.update_stats("ab");
        let json = serde_json::to_value(Report::from_store(&store))?;
        assert_eq!(json["stats"]["character_count"], 2);
        assert_eq!(json["limit"]["limit"], 300);
        assert_eq!(json["densities"][0]["letter"], "A");
        Ok(())
    }
}
