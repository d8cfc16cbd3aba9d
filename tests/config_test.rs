//! Tests for bot configuration loading.

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use wordchain::RejectPolicy;
use wordgames::BotConfig;

#[test]
fn test_empty_toml_uses_defaults() {
    let config = BotConfig::from_toml("").expect("Empty config should parse");
    assert_eq!(config, BotConfig::default());
    assert_eq!(config.command_prefix(), "!");
    assert_eq!(*config.default_length(), 4);
    assert_eq!(*config.min_length(), 4);
    assert_eq!(*config.max_length(), 7);
    assert_eq!(*config.reject_policy(), RejectPolicy::AllTrivial);
    assert!(config.seed().is_none());
    assert!(*config.color());
}

#[test]
fn test_full_toml() {
    let config = BotConfig::from_toml(
        r#"
        word_file = "/tmp/words.txt"
        command_prefix = "@"
        default_length = 5
        min_length = 3
        max_length = 9
        max_attempts = 100
        max_expansions = 5000
        reject_policy = "any_trivial"
        seed = 42
        color = false
        "#,
    )
    .expect("Config should parse");

    assert_eq!(config.word_file(), &PathBuf::from("/tmp/words.txt"));
    assert_eq!(config.command_prefix(), "@");
    assert_eq!(*config.seed(), Some(42));
    assert!(!*config.color());

    let settings = config.generation_settings();
    assert_eq!(settings.max_attempts, 100);
    assert_eq!(settings.search.max_expansions, 5000);
    assert_eq!(settings.reject_policy, RejectPolicy::AnyTrivial);

    let bounds = config.length_bounds();
    assert_eq!((bounds.min, bounds.max, bounds.default), (3, 9, 5));
}

#[test]
fn test_invalid_configs_are_rejected() {
    for content in [
        "min_length = 8",
        "default_length = 9",
        "min_length = 1\ndefault_length = 4",
        "max_attempts = 0",
        "reject_policy = \"sometimes\"",
        "color = \"yes\"",
    ] {
        assert!(
            BotConfig::from_toml(content).is_err(),
            "Should reject: {}",
            content
        );
    }
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "default_length = 6\nseed = 7").expect("Failed to write config");

    let config = BotConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(*config.default_length(), 6);
    assert_eq!(*config.seed(), Some(7));
}

#[test]
fn test_from_missing_file_fails() {
    let result = BotConfig::from_file("/nonexistent/wordgames.toml");
    let error = result.expect_err("Missing file should fail");
    assert!(error.message.contains("Failed to read config file"));
}

#[test]
fn test_load_without_file_falls_back_to_defaults() {
    let config = BotConfig::load("/nonexistent/wordgames.toml").expect("Load should succeed");
    assert_eq!(config.length_bounds(), BotConfig::default().length_bounds());
    assert_eq!(config.generation_settings(), BotConfig::default().generation_settings());
}

#[test]
fn test_overrides() {
    let config = BotConfig::default()
        .with_word_file("/srv/words")
        .with_seed(Some(3));
    assert_eq!(config.word_file(), &PathBuf::from("/srv/words"));
    assert_eq!(*config.seed(), Some(3));
}
