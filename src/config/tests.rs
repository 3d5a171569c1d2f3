use super::*;

#[test]
fn test_defaults() {
    let config = Config::with_defaults();
    assert_eq!(config.server_addr(), "127.0.0.1:5000");
    assert_eq!(config.voice.language, "en-US");
    assert_eq!(config.voice.sensitivity.level(), 3);
    assert!(config.voice.auto_start);
    assert!(config.voice.prune_stale_controls);
    assert_eq!(config.speech.pitch, 1.0);
    assert_eq!(config.announce_debounce(), Duration::from_millis(750));
    assert!(config.keyboard.enabled);
}

#[test]
fn test_partial_sections_fill_defaults() {
    let config: Config = toml::from_str(
        r#"
        [voice]
        sensitivity = 5

        [server]
        port = 8080
        "#,
    )
    .unwrap();

    assert_eq!(config.voice.sensitivity.level(), 5);
    assert_eq!(config.voice.language, "en-US");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.bind, "127.0.0.1");
}

#[test]
fn test_out_of_range_sensitivity_rejected() {
    let result: Result<Config, _> = toml::from_str("[voice]\nsensitivity = 9\n");
    assert!(result.is_err());
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = Config::with_defaults();
    config.speech.pitch = 3.0;
    assert!(config.validate().is_err());

    let mut config = Config::with_defaults();
    config.server.port = 0;
    assert!(config.validate().is_err());
}
