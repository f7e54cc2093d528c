// tests/integration_tests/editor_flow_test.rs
use std::time::{Duration, Instant};

use charcount::CounterStore;
use charcount::display::{DEFAULT_VISIBLE_DENSITIES, DensityPanel, StatsPanel};
use charcount::editor::{Editor, Key};
use charcount::theme::Theme;

#[test]
fn test_typing_burst_reaches_panels_once() {
    let start = Instant::now();
    let mut store = CounterStore::new();
    let mut editor = Editor::default();
    let mut stats_panel = StatsPanel::new(&store);
    let mut density_panel = DensityPanel::new(&store, DEFAULT_VISIBLE_DENSITIES);

    let mut typed = String::new();
    for (index, c) in "The quick brown fox.".chars().enumerate() {
        typed.push(c);
        let now = start + Duration::from_millis(u64::try_from(index).unwrap_or(0) * 10);
        editor.on_text_changed(typed.clone(), now);
        assert!(!editor.tick(&mut store, now));
    }
    assert!(!stats_panel.refresh());

    let done = start + Duration::from_millis(400);
    assert!(editor.tick(&mut store, done));
    assert!(stats_panel.refresh());
    assert!(density_panel.refresh());

    assert_eq!(stats_panel.stats().word_count, 4);
    assert_eq!(stats_panel.stats().sentence_count, 1);
    assert!(density_panel.has_more());
    assert_eq!(density_panel.displayed().len(), DEFAULT_VISIBLE_DENSITIES);
}

#[test]
fn test_limit_guard_flow() {
    let start = Instant::now();
    let mut store = CounterStore::new();
    let mut editor = Editor::default();
    let mut stats_panel = StatsPanel::new(&store);

    editor.on_character_limit_changed(&mut store, "5");
    editor.on_character_limit_toggled(&mut store, true);
    assert!(editor.insert_str(&store, "Hello", start));
    assert!(!editor.on_key(&store, Key::Char('!')));
    assert!(editor.on_key(&store, Key::Backspace));

    editor.flush(&mut store);
    stats_panel.refresh();
    assert!(!stats_panel.limit().is_over_limit);

    editor.on_character_limit_changed(&mut store, "4");
    stats_panel.refresh();
    assert!(stats_panel.limit().is_over_limit);
    assert!(stats_panel.render(Theme::Light).contains("exceeds 4 characters"));

    editor.on_character_limit_toggled(&mut store, false);
    stats_panel.refresh();
    assert!(!stats_panel.limit().is_over_limit);
}
