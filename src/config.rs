//! Runtime configuration read from the environment.

use std::time::Duration;

/// Environment variable holding the debounce delay in milliseconds.
pub const DEBOUNCE_ENV: &str = "PWD_DEBOUNCE_MS";

/// Debounce delay used when the environment does not set one.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Returns the debounce delay applied before a live assessment.
///
/// Priority:
/// 1. Environment variable `PWD_DEBOUNCE_MS`
/// 2. Default of 300 ms
///
/// Values that do not parse as milliseconds fall back to the default.
pub fn get_debounce_delay() -> Duration {
    match std::env::var(DEBOUNCE_ENV) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Ignoring invalid {}={:?}, using default", DEBOUNCE_ENV, raw);
                DEFAULT_DEBOUNCE
            }
        },
        Err(_) => DEFAULT_DEBOUNCE,
    }
}
