// tests/integration_tests/config_test.rs
use super::common::create_test_file;
use anyhow::Result;
use charcount::CounterStore;
use charcount::config::load_config_from;
use tempfile::TempDir;

#[test]
fn test_config_seeds_store_options() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(
        temp_dir.path(),
        "config.toml",
        "[counter]\nexclude_whitespace = true\nuse_character_limit = true\ncharacter_limit = 4\n",
    )?;

    let result = load_config_from(&path);
    assert!(result.warning.is_none());

    let mut store = CounterStore::with_options(result.config.counter.option_state());
    store.update_stats("a b c d e");
    assert_eq!(store.stats().character_count, 5);
    assert!(store.limit_state().is_over_limit);
    assert_eq!(store.default_character_limit(), 300);
    Ok(())
}

#[test]
fn test_unknown_types_fall_back() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(
        temp_dir.path(),
        "config.toml",
        "[editor]\ndebounce_ms = \"fast\"\n",
    )?;

    let result = load_config_from(&path);
    assert!(result.warning.is_some());
    assert_eq!(result.config.editor.debounce_ms, 100);
    Ok(())
}
