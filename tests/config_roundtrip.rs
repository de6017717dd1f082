// File: tests/config_roundtrip.rs
// Config persistence: defaults, theme round-trip, and error classification.
use nudge::config::Config;
use nudge::context::{AppContext, TestContext};
use nudge::theme::Theme;

#[test]
fn missing_config_is_classified_as_missing() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).expect_err("a fresh dir has no config file");
    assert!(Config::is_missing_config_error(&err));
}

#[test]
fn saved_theme_survives_a_reload() {
    let ctx = TestContext::new();
    let mut cfg = Config::default();
    assert_eq!(cfg.theme, Theme::Light, "Light is the out-of-the-box theme");

    cfg.theme = cfg.theme.toggle();
    cfg.save(&ctx).expect("save should succeed");

    let reloaded = Config::load(&ctx).expect("config file exists now");
    assert_eq!(reloaded.theme, Theme::Dark);
    assert!(
        reloaded.desktop_notifications,
        "untouched fields keep their defaults"
    );
}

#[test]
fn malformed_config_is_not_classified_as_missing() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    std::fs::write(&path, "theme = ").unwrap();

    let err = Config::load(&ctx).expect_err("a syntax error should fail the load");
    assert!(!Config::is_missing_config_error(&err));
}

#[test]
fn partial_config_fills_in_defaults() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    std::fs::write(&path, "theme = \"Dark\"\n").unwrap();

    let cfg = Config::load(&ctx).unwrap();
    assert_eq!(cfg.theme, Theme::Dark);
    assert!(cfg.desktop_notifications);
}

#[test]
fn save_is_atomic_over_an_existing_file() {
    let ctx = TestContext::new();
    let mut cfg = Config::default();
    cfg.save(&ctx).unwrap();

    cfg.theme = Theme::Dark;
    cfg.desktop_notifications = false;
    cfg.save(&ctx).unwrap();

    let reloaded = Config::load(&ctx).unwrap();
    assert_eq!(reloaded.theme, Theme::Dark);
    assert!(!reloaded.desktop_notifications);
}
