//! Diagnostic logging for the CLI.
//!
//! Everything goes to stderr with a `[chainsim]` prefix so stdout stays
//! clean for board output and JSON records.

use std::sync::atomic::{AtomicBool, Ordering};

pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// Write a line to stderr regardless of verbosity.
pub fn log_line(message: &str) {
    eprintln!("[chainsim] {}", message);
}

/// Verbose-only diagnostic line.
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            $crate::logging::log_line(&format!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_toggles() {
        enable_verbose_logging();
        assert!(is_verbose());
        disable_verbose_logging();
        assert!(!is_verbose());
    }
}
