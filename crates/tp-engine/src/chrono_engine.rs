//! Gregorian date engine backed by `chrono`.
//!
//! Patterns use dayjs-style tokens:
//!
//! | Token          | Output                          |
//! |----------------|---------------------------------|
//! | `YYYY` / `YY`  | 4-digit / 2-digit year          |
//! | `M` / `MM`     | month, plain / zero-padded      |
//! | `MMM` / `MMMM` | short / full month name         |
//! | `D` / `DD`     | day of month                    |
//! | `d`            | weekday number (0 = Sunday)     |
//! | `ddd` / `dddd` | short / full weekday name       |
//! | `H` / `HH`     | 24-hour hour                    |
//! | `h` / `hh`     | 12-hour hour                    |
//! | `m` / `mm`     | minute                          |
//! | `s` / `ss`     | second                          |
//! | `S`..`SSS`     | fractional second               |
//! | `A` / `a`      | meridiem, upper / lower case    |
//!
//! Text inside `[...]` is copied verbatim, as is any non-letter character.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

use crate::engine::DateEngine;
use crate::error::{FormatError, Result};
use crate::locale::Locale;

/// Date engine over [`NaiveDateTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoEngine {
    fixed_now: Option<NaiveDateTime>,
}

impl ChronoEngine {
    /// Engine reading the local wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose `now()` always returns `now`.
    #[must_use]
    pub fn with_fixed_now(now: NaiveDateTime) -> Self {
        Self {
            fixed_now: Some(now),
        }
    }
}

impl DateEngine for ChronoEngine {
    type Value = NaiveDateTime;

    fn now(&self) -> NaiveDateTime {
        self.fixed_now.unwrap_or_else(|| Local::now().naive_local())
    }

    fn is_same(&self, a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
        a.date() == b.date()
            && a.hour() == b.hour()
            && a.minute() == b.minute()
            && a.second() == b.second()
    }

    fn format(&self, value: &NaiveDateTime, pattern: &str, locale: &Locale) -> Result<String> {
        render(value, pattern, locale)
    }
}

fn render(value: &NaiveDateTime, pattern: &str, locale: &Locale) -> Result<String> {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '[' {
            let mut closed = false;
            for literal in chars.by_ref() {
                if literal == ']' {
                    closed = true;
                    break;
                }
                out.push(literal);
            }
            if !closed {
                return Err(FormatError::UnterminatedLiteral {
                    pattern: pattern.to_string(),
                });
            }
            continue;
        }

        if !ch.is_ascii_alphabetic() {
            out.push(ch);
            continue;
        }

        let mut width = 1;
        while chars.peek() == Some(&ch) {
            chars.next();
            width += 1;
        }

        match render_token(value, ch, width, locale) {
            Some(text) => out.push_str(&text),
            None => {
                return Err(FormatError::UnknownToken {
                    token: ch.to_string().repeat(width),
                    pattern: pattern.to_string(),
                });
            }
        }
    }

    Ok(out)
}

fn render_token(
    value: &NaiveDateTime,
    token: char,
    width: usize,
    locale: &Locale,
) -> Option<String> {
    let text = match (token, width) {
        ('Y', 4) => format!("{:04}", value.year()),
        ('Y', 2) => format!("{:02}", value.year().rem_euclid(100)),
        ('M', 1) => value.month().to_string(),
        ('M', 2) => format!("{:02}", value.month()),
        ('M', 3) => locale.month_name(value.month(), true),
        ('M', 4) => locale.month_name(value.month(), false),
        ('D', 1) => value.day().to_string(),
        ('D', 2) => format!("{:02}", value.day()),
        ('d', 1) => value.weekday().num_days_from_sunday().to_string(),
        ('d', 3) => locale.weekday_name(value.weekday().num_days_from_sunday(), true),
        ('d', 4) => locale.weekday_name(value.weekday().num_days_from_sunday(), false),
        ('H', 1) => value.hour().to_string(),
        ('H', 2) => format!("{:02}", value.hour()),
        ('h', 1) => twelve_hour(value.hour()).to_string(),
        ('h', 2) => format!("{:02}", twelve_hour(value.hour())),
        ('m', 1) => value.minute().to_string(),
        ('m', 2) => format!("{:02}", value.minute()),
        ('s', 1) => value.second().to_string(),
        ('s', 2) => format!("{:02}", value.second()),
        ('S', 1..=3) => {
            let millis = format!("{:03}", value.nanosecond() / 1_000_000 % 1000);
            millis[..width].to_string()
        }
        ('A', 1) => meridiem(value.hour(), locale).to_uppercase(),
        ('a', 1) => meridiem(value.hour(), locale).to_lowercase(),
        _ => return None,
    };
    Some(text)
}

fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn meridiem(hour: u32, locale: &Locale) -> &str {
    if hour < 12 { &locale.am } else { &locale.pm }
}
