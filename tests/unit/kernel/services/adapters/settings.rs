use super::*;

#[test]
fn test_write_default_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE);

    write_default_settings(&path).unwrap();
    assert!(path.exists());
    assert_eq!(load_settings_from(&path), Some(SearchSettings::default()));
}

#[test]
fn test_existing_file_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, r#"{ "debounce_ms": 520, "highlight_color": "turquoise" }"#).unwrap();

    write_default_settings(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.debounce_ms, 520);
    assert_eq!(settings.highlight_color, "turquoise");
    assert_eq!(settings.page_size, 3);
}

#[test]
fn test_invalid_or_missing_file_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    assert_eq!(load_settings_from(&path), None);

    std::fs::write(&path, "not json").unwrap();
    assert_eq!(load_settings_from(&path), None);
}
