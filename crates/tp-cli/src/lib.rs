//! Library side of the `timepanel` command-line tool.

pub mod logging;
pub mod session;
pub mod settings;
pub mod stepper;
