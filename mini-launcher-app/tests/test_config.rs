use mini_launcher_app::config::Config;
use std::path::PathBuf;

#[test]
fn test_config_defaults_when_fields_absent() {
    let config: Config = serde_yaml::from_str("log_level: debug\n").unwrap();

    assert_eq!(config.log_level, "debug");
    assert_eq!(config.cache_dir, None);
    assert_eq!(
        config.search.storefront_template,
        "market://details?id={package}"
    );
    assert!(!config.icons.revalidate_on_update);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_parses_nested_sections() {
    let config_yaml = r#"
cache_dir: /tmp/launcher-icons
search:
  web_search_template: "https://duckduckgo.com/?q={query}"
  default_scheme: http
icons:
  revalidate_on_update: true
desktop:
  application_dirs: [/opt/apps]
  notification_command: [swaync-client, -t]
"#;

    let config: Config = serde_yaml::from_str(config_yaml).unwrap();

    assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/launcher-icons")));
    assert_eq!(config.search.default_scheme, "http");
    assert!(config.icons.revalidate_on_update);
    assert_eq!(config.desktop.application_dirs, vec![PathBuf::from("/opt/apps")]);
    assert_eq!(
        config.desktop.notification_command,
        Some(vec!["swaync-client".to_string(), "-t".to_string()])
    );

    let bridge = config.bridge_config();
    assert_eq!(bridge.cache_dir, PathBuf::from("/tmp/launcher-icons"));
    assert!(bridge.icons.revalidate_on_update);
    assert_eq!(
        config.desktop_options().web_search_template,
        "https://duckduckgo.com/?q={query}"
    );
}

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/config.yaml");
    assert!(!Config::exists(&path));

    let mut config = Config::default();
    config.log_level = "warn".to_string();
    config.cache_dir = Some(dir.path().join("icons"));
    config.save(&path).unwrap();

    assert!(Config::exists(&path));
    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.log_level, "warn");
    assert_eq!(loaded.cache_dir, Some(dir.path().join("icons")));
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(&dir.path().join("absent.yaml")).unwrap();
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "search: [not, a, map]\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[test]
fn test_explicit_path_wins() {
    let explicit = PathBuf::from("/etc/launcher.yaml");
    assert_eq!(Config::path(Some(&explicit)), explicit);
}

#[test]
fn test_config_validation() {
    assert!(Config::default().validate().is_ok());

    let mut config = Config::default();
    config.search.web_search_template = "https://example.com/search".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.search.storefront_template = String::new();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.cache_dir = Some(PathBuf::new());
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.desktop.settings_command = Some(vec![]);
    assert!(config.validate().is_err());
}
