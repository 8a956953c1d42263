//! Locale tables.
//!
//! A [`Locale`] is a plain value: two locales are the same when every field
//! matches, regardless of where they were built.

use serde::{Deserialize, Serialize};

const BUILTIN_NAMES: [&str; 3] = ["en_US", "en_GB", "de_DE"];

/// Strings needed to render dates and panel labels for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// Locale code, e.g. `en_US`.
    pub locale: String,
    /// Full month names, January first.
    pub months: Vec<String>,
    /// Abbreviated month names, January first.
    pub short_months: Vec<String>,
    /// Full weekday names, Sunday first.
    pub weekdays: Vec<String>,
    /// Abbreviated weekday names, Sunday first.
    pub short_weekdays: Vec<String>,
    /// Ante meridiem label.
    pub am: String,
    /// Post meridiem label.
    pub pm: String,
    /// Label for the "today" shortcut.
    pub today: String,
    /// Label for the "now" shortcut.
    pub now: String,
    /// Label for the confirm button.
    pub ok: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Locale {
    /// US English.
    #[must_use]
    pub fn en_us() -> Self {
        Self {
            locale: "en_US".to_string(),
            months: strings(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            short_months: strings(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            weekdays: strings(&[
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            short_weekdays: strings(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            am: "AM".to_string(),
            pm: "PM".to_string(),
            today: "Today".to_string(),
            now: "Now".to_string(),
            ok: "OK".to_string(),
        }
    }

    /// British English. Same strings as `en_US`, different locale code.
    #[must_use]
    pub fn en_gb() -> Self {
        Self {
            locale: "en_GB".to_string(),
            am: "am".to_string(),
            pm: "pm".to_string(),
            ..Self::en_us()
        }
    }

    /// German.
    #[must_use]
    pub fn de_de() -> Self {
        Self {
            locale: "de_DE".to_string(),
            months: strings(&[
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ]),
            short_months: strings(&[
                "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
                "Nov.", "Dez.",
            ]),
            weekdays: strings(&[
                "Sonntag",
                "Montag",
                "Dienstag",
                "Mittwoch",
                "Donnerstag",
                "Freitag",
                "Samstag",
            ]),
            short_weekdays: strings(&["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."]),
            am: "vorm.".to_string(),
            pm: "nachm.".to_string(),
            today: "Heute".to_string(),
            now: "Jetzt".to_string(),
            ok: "OK".to_string(),
        }
    }

    /// Look up a built-in locale by code (`en_US`, `en_GB`, `de_DE`).
    ///
    /// Hyphenated codes (`en-GB`) are accepted as well.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        match name.replace('-', "_").as_str() {
            "en_US" => Some(Self::en_us()),
            "en_GB" => Some(Self::en_gb()),
            "de_DE" => Some(Self::de_de()),
            _ => None,
        }
    }

    /// Codes of all built-in locales.
    #[must_use]
    pub const fn builtin_names() -> &'static [&'static str] {
        &BUILTIN_NAMES
    }

    /// Month name for a 1-based month, short or full.
    ///
    /// Falls back to the month number when the table is incomplete.
    pub fn month_name(&self, month: u32, short: bool) -> String {
        let table = if short { &self.short_months } else { &self.months };
        lookup(table, month.saturating_sub(1) as usize).unwrap_or_else(|| month.to_string())
    }

    /// Weekday name for a Sunday-based index (0 = Sunday).
    pub fn weekday_name(&self, index: u32, short: bool) -> String {
        let table = if short {
            &self.short_weekdays
        } else {
            &self.weekdays
        };
        lookup(table, index as usize).unwrap_or_else(|| index.to_string())
    }
}

fn lookup(table: &[String], index: usize) -> Option<String> {
    table.get(index).cloned()
}
