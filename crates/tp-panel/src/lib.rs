//! Interaction core of the time-selection panel.
//!
//! Two independent pieces, composed by [`TimePanel`]:
//!
//! - [`ValueTextDeriver`] turns the current value into header text and keeps
//!   the result referentially stable while nothing relevant changed.
//! - [`ColumnFocusController`] tracks which column owns keyboard focus and
//!   routes classified key actions to the commit and value-adjust delegates.

pub mod columns;
pub mod focus;
pub mod keyboard;
pub mod panel;
pub mod value_text;

pub use columns::{ColumnConfig, TimeColumn};
pub use focus::{ColumnFocusController, ColumnValueAdjust, FocusInputs, SelectSource};
pub use keyboard::{Direction, Key, KeyInput, KeyParseError, Modifiers, PanelAction, classify};
pub use panel::{DEFAULT_FORMAT, TimePanel, TimePanelConfig};
pub use value_text::{ValueTextConfig, ValueTextDeriver, ValueTexts};
