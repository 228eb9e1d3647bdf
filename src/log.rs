//! Utilities for logging messages from the library.

use once_cell::sync::Lazy;

static LOGGING_ENABLED: Lazy<bool> = Lazy::new(|| std::env::var_os("DRAW2D_LOG").is_some());

/// Whether the `DRAW2D_LOG` environment variable was set at startup.
#[doc(hidden)]
pub fn log_enabled() -> bool {
    *LOGGING_ENABLED
}

/// Prints a log message if the `DRAW2D_LOG` environment variable is set.
///
/// Used sparingly, for conditions a caller may want to diagnose without
/// an error being raised, like a degenerate arc being discarded.
#[doc(hidden)]
#[macro_export]
macro_rules! draw2d_log {
    (
        $($arg:tt)+
    ) => {
        if $crate::log::log_enabled() {
            eprintln!("draw2d: {}", format_args!($($arg)+));
        }
    };
}
