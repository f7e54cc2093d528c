// tests/integration_tests/theme_test.rs
use super::common::create_test_file;
use anyhow::Result;
use charcount::theme::{FileStorage, THEME_STORAGE_KEY, Theme, ThemeService};
use tempfile::TempDir;

#[test]
fn test_theme_survives_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("state.toml");

    let mut service = ThemeService::load(FileStorage::open(&path)?, false);
    assert_eq!(service.theme(), Theme::Light);
    service.toggle_theme()?;

    let restarted = ThemeService::load(FileStorage::open(&path)?, false);
    assert_eq!(restarted.theme(), Theme::Dark);
    Ok(())
}

#[test]
fn test_existing_state_file_is_read() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(
        temp_dir.path(),
        "state.toml",
        &format!("\"{THEME_STORAGE_KEY}\" = \"light\"\n"),
    )?;

    let service = ThemeService::load(FileStorage::open(&path)?, true);
    assert_eq!(service.theme(), Theme::Light);
    Ok(())
}
