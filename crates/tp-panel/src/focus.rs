//! Column focus state machine.
//!
//! The controller only decides which column holds keyboard focus. Changing
//! a column's value belongs to the rendering layer, reached through a
//! [`ColumnValueAdjust`] delegate; committing a value belongs to the panel's
//! owner, reached through an `on_select` callback.

use tp_engine::DateEngine;
use tracing::debug;

use crate::keyboard::{Direction, PanelAction};

/// Origin of a committed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectSource {
    /// Committed from the keyboard.
    Key,
    /// Committed by clicking an option.
    Mouse,
    /// Committed by the confirm button.
    Submit,
}

/// Steps the value of the currently rendered column.
pub trait ColumnValueAdjust {
    fn on_up_down(&mut self, direction: Direction);
}

impl<F: FnMut(Direction)> ColumnValueAdjust for F {
    fn on_up_down(&mut self, direction: Direction) {
        self(direction);
    }
}

/// Everything [`ColumnFocusController::dispatch`] may need for one event.
///
/// `column_count` must be computed by the host right before the event.
pub struct FocusInputs<'a, E: DateEngine> {
    pub engine: &'a E,
    pub column_count: usize,
    pub value: Option<&'a E::Value>,
    pub adjuster: Option<&'a mut dyn ColumnValueAdjust>,
    pub on_select: &'a mut dyn FnMut(E::Value, SelectSource),
}

/// Focused column index, or none.
///
/// After every transition the index is either `None` or below the column
/// count passed with that transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnFocusController {
    focused: Option<usize>,
}

impl ColumnFocusController {
    /// Controller with no column focused.
    #[must_use]
    pub const fn new() -> Self {
        Self { focused: None }
    }

    /// Controller with `index` focused.
    #[must_use]
    pub const fn with_focused(index: usize) -> Self {
        Self {
            focused: Some(index),
        }
    }

    #[must_use]
    pub const fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Move focus one column left or right, wrapping at both ends.
    ///
    /// With nothing focused the start position is one before column 0, so
    /// `Forward` lands on the first column and `Backward` on the last. A
    /// stale index beyond a shrunken column set wraps back into range.
    pub fn move_column(&mut self, direction: Direction, column_count: usize) {
        let previous = self.focused;
        self.focused = if column_count == 0 {
            None
        } else {
            let count = column_count as i64;
            let current = previous.map_or(-1, |index| index as i64);
            Some((current + direction.delta()).rem_euclid(count) as usize)
        };
        debug!(?previous, focused = ?self.focused, column_count, "column focus moved");
    }

    /// Step the focused column's value.
    ///
    /// With nothing focused this focuses column 0 instead and the adjuster
    /// is not called. With no columns at all focus stays empty. A focused
    /// index is forwarded as is; [`dispatch`](Self::dispatch) settles it
    /// against the current column count first.
    pub fn move_value(
        &mut self,
        direction: Direction,
        column_count: usize,
        adjuster: Option<&mut dyn ColumnValueAdjust>,
    ) {
        match self.focused {
            _ if column_count == 0 => {
                self.focused = None;
                debug!("no columns, value move ignored");
            }
            None => {
                self.focused = Some(0);
                debug!("first column focused");
            }
            Some(index) => {
                if let Some(adjuster) = adjuster {
                    debug!(column = index, delta = direction.delta(), "adjusting column value");
                    adjuster.on_up_down(direction);
                }
            }
        }
    }

    /// Commit the current value, or the engine's `now()` when there is none,
    /// then clear focus.
    pub fn commit<E: DateEngine>(
        &mut self,
        engine: &E,
        value: Option<&E::Value>,
        on_select: &mut dyn FnMut(E::Value, SelectSource),
    ) {
        let selected = value.cloned().unwrap_or_else(|| engine.now());
        debug!(value = ?selected, "committing value from keyboard");
        on_select(selected, SelectSource::Key);
        self.focused = None;
    }

    /// Clear focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Pull a focused index that no longer fits `column_count` back into
    /// range, using the same wrapping as column movement.
    pub fn settle(&mut self, column_count: usize) {
        if let Some(index) = self.focused
            && index >= column_count
        {
            self.focused = index.checked_rem(column_count);
            debug!(stale = index, focused = ?self.focused, column_count, "focus settled");
        }
    }

    /// Apply one classified action.
    ///
    /// The focused index is settled against `inputs.column_count` first, so
    /// the column set may change freely between events.
    pub fn dispatch<E: DateEngine>(&mut self, action: PanelAction, inputs: FocusInputs<'_, E>) {
        let FocusInputs {
            engine,
            column_count,
            value,
            adjuster,
            on_select,
        } = inputs;

        self.settle(column_count);
        match action {
            PanelAction::MoveColumn(direction) => self.move_column(direction, column_count),
            PanelAction::MoveValue(direction) => {
                self.move_value(direction, column_count, adjuster);
            }
            PanelAction::Commit => self.commit(engine, value, on_select),
            PanelAction::Blur => self.blur(),
        }
    }
}
