//! Replaying key sequences against a panel.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;
use tp_engine::{ChronoEngine, DateEngine, FormatError};
use tp_panel::{
    ColumnValueAdjust, Key, KeyInput, KeyParseError, Modifiers, PanelAction, SelectSource,
    TimeColumn, TimePanel, ValueTexts, classify,
};
use tracing::{debug, info};

use crate::stepper::ColumnStepper;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyEventParseError {
    #[error(transparent)]
    Key(#[from] KeyParseError),

    #[error("unknown modifier '{0}' (expected ctrl, cmd, meta, shift or alt)")]
    Modifier(String),

    #[error("empty key sequence")]
    Empty,
}

/// One replayed event: a key press or focus loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Key(KeyInput),
    Blur,
}

impl FromStr for KeyEvent {
    type Err = KeyEventParseError;

    /// Parses `blur`, a key name, or modifiers joined with `+`
    /// (`ctrl+left`, `shift+tab`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("blur") {
            return Ok(Self::Blur);
        }

        let mut parts: Vec<&str> = token.split('+').collect();
        let key_name = parts.pop().unwrap_or_default();
        let mut modifiers = Modifiers::default();
        for part in parts {
            match part.trim().to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "cmd" | "meta" => modifiers.meta = true,
                "shift" => modifiers.shift = true,
                "alt" | "option" => modifiers.alt = true,
                other => return Err(KeyEventParseError::Modifier(other.to_string())),
            }
        }
        let key = key_name.parse::<Key>()?;
        Ok(Self::Key(KeyInput::with_modifiers(key, modifiers)))
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blur => f.write_str("blur"),
            Self::Key(input) => {
                let m = input.modifiers;
                for (held, name) in [
                    (m.ctrl, "ctrl"),
                    (m.meta, "cmd"),
                    (m.shift, "shift"),
                    (m.alt, "alt"),
                ] {
                    if held {
                        write!(f, "{name}+")?;
                    }
                }
                write!(f, "{}", input.key)
            }
        }
    }
}

/// Parse a comma- or whitespace-separated key sequence.
///
/// # Errors
///
/// Returns the first token that is not a valid event, or
/// [`KeyEventParseError::Empty`] when there are no tokens.
pub fn parse_key_sequence(keys: &str) -> Result<Vec<KeyEvent>, KeyEventParseError> {
    let events = keys
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<KeyEvent>, _>>()?;
    if events.is_empty() {
        return Err(KeyEventParseError::Empty);
    }
    Ok(events)
}

/// Panel state after one replayed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStep {
    pub event: KeyEvent,
    /// Action the panel took, `None` if it ignored the key.
    pub action: Option<PanelAction>,
    pub focused: Option<TimeColumn>,
    pub value: Option<NaiveDateTime>,
    /// Primary header text after the event.
    pub header: String,
    /// Whether the header came back as the same shared instance.
    pub header_reused: bool,
    /// Value sent to the select callback, if the event committed.
    pub committed: Option<NaiveDateTime>,
}

/// Feed `events` to `panel`, recording its state after each one.
///
/// Up/Down on a focused column steps that column with a [`ColumnStepper`]
/// and writes the result back as the panel value; commits also become the
/// panel value.
///
/// # Errors
///
/// Returns the formatter error if the header cannot be rendered.
pub fn run_key_sequence(
    panel: &mut TimePanel<ChronoEngine>,
    events: &[KeyEvent],
) -> Result<Vec<KeyStep>, FormatError> {
    let mut previous_header = panel.header_texts()?;
    let mut steps = Vec::with_capacity(events.len());

    for &event in events {
        let mut committed = None;
        let mut stepper = panel.focused_kind().map(|column| {
            let base = panel.value().copied().unwrap_or_else(|| panel.engine().now());
            ColumnStepper::new(column, base)
        });

        let action = match event {
            KeyEvent::Blur => {
                panel.on_blur();
                Some(PanelAction::Blur)
            }
            KeyEvent::Key(input) => {
                let adjuster = stepper
                    .as_mut()
                    .map(|stepper| stepper as &mut dyn ColumnValueAdjust);
                let mut on_select = |value: NaiveDateTime, source: SelectSource| {
                    debug!(%value, ?source, "value committed");
                    committed = Some(value);
                };
                let handled = panel.on_key_down(&input, adjuster, &mut on_select);
                if handled { classify(&input) } else { None }
            }
        };

        if let Some(selected) = stepper.as_ref().and_then(ColumnStepper::selected) {
            panel.set_value(Some(selected));
        }
        if let Some(value) = committed {
            panel.set_value(Some(value));
        }

        let header = panel.header_texts()?;
        let header_reused = Rc::ptr_eq(&header, &previous_header);
        steps.push(KeyStep {
            event,
            action,
            focused: panel.focused_kind(),
            value: panel.value().copied(),
            header: header.first.clone(),
            header_reused,
            committed,
        });
        previous_header = header;
    }

    info!(events = events.len(), "key sequence replayed");
    Ok(steps)
}

/// Plain-text listing of derived texts: the primary text, then one line per
/// format.
#[must_use]
pub fn render_texts(texts: &ValueTexts) -> String {
    std::iter::once(format!("first: {}", texts.first))
        .chain(
            texts
                .texts
                .iter()
                .enumerate()
                .map(|(index, text)| format!("[{index}] {text}")),
        )
        .map(|line| line + "\n")
        .collect()
}
