//! The date-engine capability set.

use std::fmt::Debug;

use crate::error::Result;
use crate::format::FormatSpec;
use crate::locale::Locale;

/// Capabilities the panel needs from a calendar backend.
///
/// Values are opaque to the panel: they are cloned, compared through
/// [`DateEngine::is_same`] and rendered through [`DateEngine::format`], and
/// never mutated in place.
pub trait DateEngine {
    /// The concrete date/time value handled by this engine.
    type Value: Clone + Debug;

    /// The current instant.
    fn now(&self) -> Self::Value;

    /// Whether two values denote the same calendar instant.
    ///
    /// This is calendar equality, not identity: two distinct values that
    /// represent the same instant must compare equal.
    fn is_same(&self, a: &Self::Value, b: &Self::Value) -> bool;

    /// Render `value` with a named pattern under `locale`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern cannot be rendered by this engine.
    fn format(&self, value: &Self::Value, pattern: &str, locale: &Locale) -> Result<String>;
}

/// Calendar equality over optional values.
///
/// Two absent values are equal; an absent and a present value never are.
pub fn is_equal<E: DateEngine + ?Sized>(
    engine: &E,
    a: Option<&E::Value>,
    b: Option<&E::Value>,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => engine.is_same(a, b),
        _ => false,
    }
}

/// Render `value` with a single format specifier.
///
/// Named patterns are handed to the engine; custom formatters are invoked
/// with the engine and the value.
///
/// # Errors
///
/// Propagates whatever error the engine raises for a named pattern.
pub fn format_value<E: DateEngine>(
    value: &E::Value,
    engine: &E,
    locale: &Locale,
    spec: &FormatSpec<E>,
) -> Result<String> {
    match spec {
        FormatSpec::Pattern(pattern) => engine.format(value, pattern, locale),
        FormatSpec::Custom(custom) => Ok(custom.call(engine, value)),
    }
}
