//! Toolkit warnings with colored terminal output.
//!
//! Input that is accepted but looks suspicious (an unknown combinator glyph,
//! for instance) is reported here. Each distinct message prints once per
//! process until [`clear_warnings`] is called.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock leaves the set intact.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about accepted-but-suspicious input (prints once per unique message)
///
/// # Example
/// ```
/// chisel_common::warning::warn_once("Selector", "unrecognized combinator '>>'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Chisel {component}] ⚠ {message}").yellow());
    }
}

/// Whether `message` has already been reported for `component`.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Forget all recorded warnings so they print again.
pub fn clear_warnings() {
    let mut guard = warned();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
