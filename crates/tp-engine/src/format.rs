//! Format specifiers.
//!
//! A format list is an ordered sequence of [`FormatSpec`]; position 0 is the
//! primary format. Named patterns compare by text, custom formatters only by
//! reference identity, so a formatter rebuilt on every render always reads
//! as a change.

use std::fmt;
use std::rc::Rc;

use crate::engine::DateEngine;

type FormatFn<E> = dyn Fn(&E, &<E as DateEngine>::Value) -> String;

/// A caller-supplied formatting function.
pub struct CustomFormat<E: DateEngine> {
    func: Rc<FormatFn<E>>,
}

impl<E: DateEngine> CustomFormat<E> {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&E, &E::Value) -> String + 'static,
    {
        Self {
            func: Rc::new(func),
        }
    }

    /// Invoke the formatter.
    pub fn call(&self, engine: &E, value: &E::Value) -> String {
        (self.func)(engine, value)
    }

    /// Whether both handles point at the same function instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl<E: DateEngine> Clone for CustomFormat<E> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
        }
    }
}

impl<E: DateEngine> PartialEq for CustomFormat<E> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<E: DateEngine> fmt::Debug for CustomFormat<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomFormat")
            .field("ptr", &Rc::as_ptr(&self.func).cast::<()>())
            .finish()
    }
}

/// One entry of a format list.
pub enum FormatSpec<E: DateEngine> {
    /// A named pattern rendered by the engine (e.g. `YYYY-MM-DD`).
    Pattern(String),
    /// A custom formatter function.
    Custom(CustomFormat<E>),
}

impl<E: DateEngine> FormatSpec<E> {
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern(pattern.into())
    }

    pub fn custom<F>(func: F) -> Self
    where
        F: Fn(&E, &E::Value) -> String + 'static,
    {
        Self::Custom(CustomFormat::new(func))
    }

    /// The pattern text, if this is a named pattern.
    #[must_use]
    pub fn as_pattern(&self) -> Option<&str> {
        match self {
            Self::Pattern(pattern) => Some(pattern),
            Self::Custom(_) => None,
        }
    }
}

impl<E: DateEngine> Clone for FormatSpec<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Pattern(pattern) => Self::Pattern(pattern.clone()),
            Self::Custom(custom) => Self::Custom(custom.clone()),
        }
    }
}

impl<E: DateEngine> PartialEq for FormatSpec<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Pattern(a), Self::Pattern(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl<E: DateEngine> fmt::Debug for FormatSpec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Self::Custom(custom) => f.debug_tuple("Custom").field(custom).finish(),
        }
    }
}

impl<E: DateEngine> From<&str> for FormatSpec<E> {
    fn from(pattern: &str) -> Self {
        Self::Pattern(pattern.to_string())
    }
}

impl<E: DateEngine> From<String> for FormatSpec<E> {
    fn from(pattern: String) -> Self {
        Self::Pattern(pattern)
    }
}
