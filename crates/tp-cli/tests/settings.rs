//! Tests for the settings file.

use std::path::PathBuf;

use chrono::NaiveDate;
use tp_cli::settings::{PanelSettings, SettingsError, parse_value, resolve_builtin_locale};
use tp_engine::DateEngine;
use tp_panel::TimeColumn;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tp-cli-{}-{name}", std::process::id()))
}

#[test]
fn parses_full_settings() {
    let settings = PanelSettings::parse(
        r#"
        formats = ["h:mm a", "HH:mm"]
        locale = "en-GB"
        fixed_now = "2024-03-05 08:30"

        [columns]
        show_second = false
        use_12_hours = true
        "#,
    )
    .expect("parse");

    assert_eq!(settings.header_format(), "h:mm a");
    let config = settings.panel_config().expect("panel config");
    assert_eq!(config.locale.locale, "en_GB");
    assert_eq!(
        config.columns.active_columns(),
        vec![TimeColumn::Hour, TimeColumn::Minute, TimeColumn::Meridiem]
    );

    let engine = settings.engine().expect("engine");
    let expected = NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(8, 30, 0))
        .expect("valid");
    assert_eq!(engine.now(), expected);
}

#[test]
fn empty_file_means_defaults() {
    let settings = PanelSettings::parse("").expect("parse");
    assert_eq!(settings, PanelSettings::default());
    assert_eq!(settings.header_format(), "HH:mm:ss");
    assert_eq!(settings.columns.active_count(), 3);
}

#[test]
fn empty_format_list_falls_back_to_default_header() {
    let settings = PanelSettings::parse("formats = []").expect("parse");
    assert_eq!(settings.header_format(), "HH:mm:ss");
}

#[test]
fn custom_locale_wins_over_code() {
    let settings = PanelSettings::parse(
        r#"
        locale = "xx_XX"

        [custom_locale]
        locale = "nl_NL"
        am = "a.m."
        pm = "p.m."
        "#,
    )
    .expect("parse");

    let locale = settings.resolve_locale().expect("custom locale");
    assert_eq!(locale.locale, "nl_NL");
    assert_eq!(locale.pm, "p.m.");
    // Fields not given come from the default table.
    assert_eq!(locale.months.len(), 12);
}

#[test]
fn unknown_locale_lists_builtins() {
    let err = resolve_builtin_locale("fr_FR").expect_err("unknown");
    assert!(matches!(err, SettingsError::UnknownLocale { .. }));
    let message = err.to_string();
    assert!(message.contains("fr_FR"));
    assert!(message.contains("de_DE"));
}

#[test]
fn missing_file_gives_defaults() {
    let path = temp_path("missing.toml");
    let settings = PanelSettings::load_from(&path).expect("defaults");
    assert_eq!(settings, PanelSettings::default());
}

#[test]
fn malformed_file_is_an_error() {
    let path = temp_path("malformed.toml");
    std::fs::write(&path, "formats = [").expect("write");
    let result = PanelSettings::load_from(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(SettingsError::Toml { .. })));
}

#[test]
fn parse_value_accepts_common_forms() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid");
    let expected = date.and_hms_opt(14, 5, 9).expect("valid");

    assert_eq!(parse_value("2024-03-05T14:05:09").expect("iso"), expected);
    assert_eq!(parse_value("2024-03-05 14:05:09").expect("space"), expected);
    assert_eq!(
        parse_value("2024-03-05T14:05").expect("minutes"),
        date.and_hms_opt(14, 5, 0).expect("valid")
    );
    assert_eq!(
        parse_value(" 2024-03-05 ").expect("date"),
        date.and_hms_opt(0, 0, 0).expect("valid")
    );
    assert!(matches!(
        parse_value("14:05"),
        Err(SettingsError::InvalidValue(v)) if v == "14:05"
    ));
}
