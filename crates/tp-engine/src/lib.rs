//! Date-engine abstraction for the time panel.
//!
//! The panel never inspects a date value directly. Everything it needs
//! (the current instant, calendar equality and text formatting) goes through
//! a [`DateEngine`] implementation, so calendar backends can be swapped
//! without touching the interaction code.

pub mod chrono_engine;
pub mod engine;
pub mod error;
pub mod format;
pub mod locale;

pub use chrono_engine::ChronoEngine;
pub use engine::{DateEngine, format_value, is_equal};
pub use error::{FormatError, Result};
pub use format::{CustomFormat, FormatSpec};
pub use locale::Locale;
