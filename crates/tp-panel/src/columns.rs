//! Active column set of the time panel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One selectable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeColumn {
    Hour,
    Minute,
    Second,
    Meridiem,
}

impl TimeColumn {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Meridiem => "meridiem",
        }
    }
}

impl fmt::Display for TimeColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which columns the panel shows.
///
/// An unset hour/minute/second flag counts as shown; only an explicit
/// `false` hides the column. The meridiem column appears in 12-hour mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub show_hour: Option<bool>,
    pub show_minute: Option<bool>,
    pub show_second: Option<bool>,
    pub use_12_hours: bool,
}

impl ColumnConfig {
    /// Infer the column flags from a display pattern such as `HH:mm` or
    /// `h:mm a`.
    ///
    /// Bracketed literals are ignored.
    #[must_use]
    pub fn from_format(pattern: &str) -> Self {
        let mut config = Self {
            show_hour: Some(false),
            show_minute: Some(false),
            show_second: Some(false),
            use_12_hours: false,
        };
        let mut in_literal = false;
        for ch in pattern.chars() {
            match ch {
                '[' => in_literal = true,
                ']' => in_literal = false,
                _ if in_literal => {}
                'H' => config.show_hour = Some(true),
                'h' => {
                    config.show_hour = Some(true);
                    config.use_12_hours = true;
                }
                'm' => config.show_minute = Some(true),
                's' => config.show_second = Some(true),
                'a' | 'A' => config.use_12_hours = true,
                _ => {}
            }
        }
        config
    }

    /// Columns currently enabled, in display order.
    #[must_use]
    pub fn active_columns(&self) -> Vec<TimeColumn> {
        [
            (self.show_hour != Some(false), TimeColumn::Hour),
            (self.show_minute != Some(false), TimeColumn::Minute),
            (self.show_second != Some(false), TimeColumn::Second),
            (self.use_12_hours, TimeColumn::Meridiem),
        ]
        .into_iter()
        .filter_map(|(enabled, column)| enabled.then_some(column))
        .collect()
    }

    /// Number of enabled columns. Recomputed on every call.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_columns().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_count_as_enabled() {
        let config = ColumnConfig::default();
        assert_eq!(
            config.active_columns(),
            vec![TimeColumn::Hour, TimeColumn::Minute, TimeColumn::Second]
        );
    }

    #[test]
    fn explicit_false_hides_column() {
        let config = ColumnConfig {
            show_second: Some(false),
            use_12_hours: true,
            ..ColumnConfig::default()
        };
        assert_eq!(
            config.active_columns(),
            vec![TimeColumn::Hour, TimeColumn::Minute, TimeColumn::Meridiem]
        );
        assert_eq!(config.active_count(), 3);
    }

    #[test]
    fn infers_columns_from_format() {
        assert_eq!(ColumnConfig::from_format("HH:mm").active_count(), 2);
        assert_eq!(
            ColumnConfig::from_format("h:mm:ss a").active_columns(),
            vec![
                TimeColumn::Hour,
                TimeColumn::Minute,
                TimeColumn::Second,
                TimeColumn::Meridiem
            ]
        );
        assert_eq!(
            ColumnConfig::from_format("[at] HH").active_columns(),
            vec![TimeColumn::Hour]
        );
    }
}
