//! Diagnostic sink capability.
//!
//! Diagnostics are the caller-visible record of what went wrong during a
//! load. They are fire-and-forget: reporting never fails and never changes
//! the outcome of the operation that reported.

use std::sync::{Mutex, PoisonError};

use log::warn;

/// Receives `(category, message)` pairs as problems are found.
pub trait Diagnostics {
    fn report(&self, category: &str, message: &str);
}

impl<F> Diagnostics for F
where
    F: Fn(&str, &str),
{
    fn report(&self, category: &str, message: &str) {
        self(category, message)
    }
}

/// Forwards every diagnostic to `log::warn!`, using the category as target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, category: &str, message: &str) {
        warn!(target: category, "{}", message);
    }
}

/// Keeps every diagnostic in memory, in report order.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: Mutex<Vec<(String, String)>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all `(category, message)` pairs reported so far.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns only the messages, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, message)| message).collect()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&self, category: &str, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((category.to_string(), message.to_string()));
    }
}
