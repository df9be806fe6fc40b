//! Execution tracing, gated on the `DEBUG` environment variable.

use std::env;
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

/// Returns true when `DEBUG` is set to a non-empty value.
///
/// The environment is consulted once; the answer is cached for the life of
/// the process.
pub fn enabled() -> bool {
    *ENABLED.get_or_init(|| !env::var("DEBUG").unwrap_or_default().is_empty())
}

/// Prints a line to standard output when tracing is enabled.
///
/// Arguments are not evaluated when tracing is disabled.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        if $crate::utils::trace::enabled() {
            println!($($arg)*);
        }
    };
}
