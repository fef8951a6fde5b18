use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&ShellConfig::default()).is_ok());
}

#[test]
fn window_too_small_is_rejected() {
    let mut config = ShellConfig::default();
    config.window.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width = 100"), "got: {err}");
}

#[test]
fn bad_background_is_rejected() {
    let mut config = ShellConfig::default();
    config.window.background = "charcoal".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.background"), "got: {err}");
}

#[test]
fn absolute_descriptor_is_rejected() {
    let mut config = ShellConfig::default();
    config.assets.descriptor = "/etc/app.json".into();
    assert!(validate(&config).is_err());
}

#[test]
fn all_errors_are_collected() {
    let mut config = ShellConfig::default();
    config.window.width = 1;
    config.window.height = 99_999;
    config.window.background = "nope".into();
    let err = validate(&config).unwrap_err().to_string();
    assert_eq!(err.matches("; ").count(), 2, "got: {err}");
}
