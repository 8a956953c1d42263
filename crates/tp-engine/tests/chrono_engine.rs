//! Tests for the chrono-backed date engine.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use tp_engine::{ChronoEngine, DateEngine, FormatError, Locale, is_equal};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn fmt(value: &NaiveDateTime, pattern: &str) -> String {
    ChronoEngine::new()
        .format(value, pattern, &Locale::en_us())
        .unwrap()
}

#[test]
fn formats_numeric_date_tokens() {
    let value = at(2024, 3, 5, 0, 0, 0);
    assert_eq!(fmt(&value, "YYYY-MM-DD"), "2024-03-05");
    assert_eq!(fmt(&value, "DD/MM/YYYY"), "05/03/2024");
    assert_eq!(fmt(&value, "D.M.YY"), "5.3.24");
}

#[test]
fn formats_time_tokens() {
    let value = at(2024, 3, 5, 13, 7, 9);
    assert_eq!(fmt(&value, "HH:mm:ss"), "13:07:09");
    assert_eq!(fmt(&value, "H:m:s"), "13:7:9");
    assert_eq!(fmt(&value, "hh:mm A"), "01:07 PM");
    assert_eq!(fmt(&value, "h:mm a"), "1:07 pm");
}

#[test]
fn midnight_is_twelve_am() {
    let value = at(2024, 3, 5, 0, 30, 0);
    assert_eq!(fmt(&value, "h:mm A"), "12:30 AM");
}

#[test]
fn formats_fractional_seconds() {
    let value = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_milli_opt(10, 0, 0, 42)
        .unwrap();
    assert_eq!(fmt(&value, "ss.SSS"), "00.042");
    assert_eq!(fmt(&value, "ss.S"), "00.0");
}

#[test]
fn names_come_from_the_locale() {
    let value = at(2024, 3, 5, 0, 0, 0);
    let engine = ChronoEngine::new();
    assert_eq!(
        engine
            .format(&value, "dddd, D MMMM YYYY", &Locale::en_us())
            .unwrap(),
        "Tuesday, 5 March 2024"
    );
    assert_eq!(
        engine
            .format(&value, "ddd D. MMMM", &Locale::de_de())
            .unwrap(),
        "Di. 5. März"
    );
    assert_eq!(engine.format(&value, "MMM d", &Locale::en_us()).unwrap(), "Mar 2");
}

#[test]
fn bracketed_text_is_literal() {
    let value = at(2024, 3, 5, 8, 0, 0);
    assert_eq!(fmt(&value, "[Today is] YYYY"), "Today is 2024");
    assert_eq!(fmt(&value, "HH[h]mm"), "08h00");
}

#[test]
fn unknown_token_fails() {
    let value = at(2024, 3, 5, 0, 0, 0);
    let err = ChronoEngine::new()
        .format(&value, "YYYY-Qo", &Locale::en_us())
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::UnknownToken {
            token: "Q".to_string(),
            pattern: "YYYY-Qo".to_string(),
        }
    );
}

#[test]
fn unsupported_width_fails() {
    let value = at(2024, 3, 5, 0, 0, 0);
    let err = ChronoEngine::new()
        .format(&value, "YYY", &Locale::en_us())
        .unwrap_err();
    assert!(matches!(err, FormatError::UnknownToken { ref token, .. } if token == "YYY"));
}

#[test]
fn unterminated_literal_fails() {
    let value = at(2024, 3, 5, 0, 0, 0);
    let err = ChronoEngine::new()
        .format(&value, "YYYY [oops", &Locale::en_us())
        .unwrap_err();
    assert!(matches!(err, FormatError::UnterminatedLiteral { .. }));
}

#[test]
fn fixed_now_is_returned() {
    let now = at(2020, 1, 2, 3, 4, 5);
    assert_eq!(ChronoEngine::with_fixed_now(now).now(), now);
}

#[test]
fn same_instant_ignores_sub_second_noise() {
    let engine = ChronoEngine::new();
    let a = at(2024, 3, 5, 10, 0, 0);
    let b = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_milli_opt(10, 0, 0, 999)
        .unwrap();
    assert!(engine.is_same(&a, &b));
    assert!(!engine.is_same(&a, &at(2024, 3, 5, 10, 0, 1)));
}

#[test]
fn optional_equality() {
    let engine = ChronoEngine::new();
    let a = at(2024, 3, 5, 10, 0, 0);
    assert!(is_equal(&engine, None, None));
    assert!(!is_equal(&engine, Some(&a), None));
    assert!(!is_equal(&engine, None, Some(&a)));
    assert!(is_equal(&engine, Some(&a), Some(&a.clone())));
}

proptest! {
    #[test]
    fn iso_date_pattern_matches_chrono(days in 0i64..200_000, secs in 0u32..86_400) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(days);
        let value = date.and_hms_opt(secs / 3600, (secs / 60) % 60, secs % 60).unwrap();
        prop_assert_eq!(
            fmt(&value, "YYYY-MM-DD HH:mm:ss"),
            value.format("%Y-%m-%d %H:%M:%S").to_string()
        );
    }
}
