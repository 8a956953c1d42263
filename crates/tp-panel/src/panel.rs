//! The time panel host.
//!
//! [`TimePanel`] owns one focus controller and one text deriver and wires
//! them to its configuration. The two never talk to each other: keyboard
//! events go to the controller, header rendering goes to the deriver.

use std::rc::Rc;

use tp_engine::{DateEngine, FormatSpec, Locale, Result};
use tracing::trace;

use crate::columns::{ColumnConfig, TimeColumn};
use crate::focus::{ColumnFocusController, ColumnValueAdjust, FocusInputs, SelectSource};
use crate::keyboard::{KeyInput, PanelAction, classify};
use crate::value_text::{ValueTextConfig, ValueTextDeriver, ValueTexts};

/// Header pattern used when none is configured.
pub const DEFAULT_FORMAT: &str = "HH:mm:ss";

/// Panel configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePanelConfig {
    pub columns: ColumnConfig,
    /// Header display pattern.
    pub format: String,
    pub locale: Locale,
}

impl Default for TimePanelConfig {
    fn default() -> Self {
        Self {
            columns: ColumnConfig::default(),
            format: DEFAULT_FORMAT.to_string(),
            locale: Locale::default(),
        }
    }
}

impl TimePanelConfig {
    /// Configuration whose columns follow `format`.
    #[must_use]
    pub fn for_format(format: &str, locale: Locale) -> Self {
        Self {
            columns: ColumnConfig::from_format(format),
            format: format.to_string(),
            locale,
        }
    }
}

/// A time-selection panel bound to one date engine.
pub struct TimePanel<E: DateEngine> {
    engine: E,
    config: TimePanelConfig,
    header_formats: Vec<FormatSpec<E>>,
    value: Option<E::Value>,
    focus: ColumnFocusController,
    header: ValueTextDeriver<E>,
}

impl<E: DateEngine> TimePanel<E> {
    pub fn new(engine: E, config: TimePanelConfig) -> Self {
        let header_formats = vec![FormatSpec::pattern(config.format.clone())];
        Self {
            engine,
            config,
            header_formats,
            value: None,
            focus: ColumnFocusController::new(),
            header: ValueTextDeriver::new(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &TimePanelConfig {
        &self.config
    }

    /// Replace the configuration. The focused index is left as is; the next
    /// dispatched event of any kind settles it against the new column set.
    pub fn set_config(&mut self, config: TimePanelConfig) {
        if config.format != self.config.format {
            self.header_formats = vec![FormatSpec::pattern(config.format.clone())];
        }
        self.config = config;
    }

    pub fn value(&self) -> Option<&E::Value> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Option<E::Value>) {
        self.value = value;
    }

    /// Index of the focused column, if any.
    pub fn focused_column(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// Kind of the focused column, if the index is within the active set.
    pub fn focused_kind(&self) -> Option<TimeColumn> {
        let index = self.focus.focused()?;
        self.config.columns.active_columns().get(index).copied()
    }

    /// Handle a key press. Returns whether the panel consumed it.
    ///
    /// `adjuster` is the rendering layer's handle on the focused column;
    /// `on_select` receives keyboard commits.
    pub fn on_key_down(
        &mut self,
        input: &KeyInput,
        adjuster: Option<&mut dyn ColumnValueAdjust>,
        on_select: &mut dyn FnMut(E::Value, SelectSource),
    ) -> bool {
        let Some(action) = classify(input) else {
            trace!(key = %input.key, "key ignored by time panel");
            return false;
        };
        self.apply(action, adjuster, on_select);
        true
    }

    /// Handle focus loss.
    pub fn on_blur(&mut self) {
        self.focus.blur();
    }

    /// Apply an already classified action.
    pub fn apply(
        &mut self,
        action: PanelAction,
        adjuster: Option<&mut dyn ColumnValueAdjust>,
        on_select: &mut dyn FnMut(E::Value, SelectSource),
    ) {
        let column_count = self.config.columns.active_count();
        self.focus.dispatch(
            action,
            FocusInputs {
                engine: &self.engine,
                column_count,
                value: self.value.as_ref(),
                adjuster: adjuster.map(|adjuster| adjuster as &mut dyn ColumnValueAdjust),
                on_select,
            },
        );
    }

    /// Header texts for the current value.
    ///
    /// # Errors
    ///
    /// Returns the formatter error if the header pattern cannot be rendered.
    pub fn header_texts(&mut self) -> Result<Rc<ValueTexts>> {
        let config = ValueTextConfig {
            formats: &self.header_formats,
            engine: &self.engine,
            locale: &self.config.locale,
        };
        self.header.derive(self.value.as_ref(), &config)
    }
}
