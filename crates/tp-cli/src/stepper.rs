//! Stand-in for the rendering layer's column lists.
//!
//! In a graphical host each column is a scrolling list and Up/Down moves
//! its highlighted option. Here a [`ColumnStepper`] does the same on a
//! plain `NaiveDateTime`, so key sequences can be replayed from the
//! command line.

use chrono::{NaiveDateTime, Timelike};
use tp_panel::{ColumnValueAdjust, Direction, TimeColumn};
use tracing::debug;

/// Steps one unit of the focused column, wrapping within its range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnStepper {
    column: TimeColumn,
    value: NaiveDateTime,
    selected: Option<NaiveDateTime>,
}

impl ColumnStepper {
    #[must_use]
    pub fn new(column: TimeColumn, value: NaiveDateTime) -> Self {
        Self {
            column,
            value,
            selected: None,
        }
    }

    /// The value after all steps so far, if any step happened.
    #[must_use]
    pub fn selected(&self) -> Option<NaiveDateTime> {
        self.selected
    }
}

impl ColumnValueAdjust for ColumnStepper {
    fn on_up_down(&mut self, direction: Direction) {
        let current = self.selected.unwrap_or(self.value);
        let next = step(current, self.column, direction);
        debug!(column = %self.column, from = %current, to = %next, "column value stepped");
        self.selected = Some(next);
    }
}

/// `value` with `column` moved one unit in `direction`.
#[must_use]
pub fn step(value: NaiveDateTime, column: TimeColumn, direction: Direction) -> NaiveDateTime {
    let delta = direction.delta();
    let wrapped = |current: u32, modulus: i64| {
        u32::try_from((i64::from(current) + delta).rem_euclid(modulus)).unwrap_or(0)
    };
    let stepped = match column {
        TimeColumn::Hour => value.with_hour(wrapped(value.hour(), 24)),
        TimeColumn::Minute => value.with_minute(wrapped(value.minute(), 60)),
        TimeColumn::Second => value.with_second(wrapped(value.second(), 60)),
        TimeColumn::Meridiem => value.with_hour((value.hour() + 12) % 24),
    };
    stepped.unwrap_or(value)
}
