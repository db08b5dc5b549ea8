//! Warning sink for recoverable resolution failures.
//!
//! Library crates never log; the caller decides where warnings go.

use crate::error::ResolveFailure;
use serde::Serialize;
use std::sync::Mutex;

/// A single recoverable resolution failure, reported once per specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveWarning {
    /// Stable failure code, e.g. `PACKAGE_NOT_FOUND`.
    pub code: &'static str,
    /// The requested package specifier.
    pub specifier: String,
    /// Human-readable message naming the specifier.
    pub message: String,
    /// Likely cause, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl From<&ResolveFailure> for ResolveWarning {
    fn from(failure: &ResolveFailure) -> Self {
        Self {
            code: failure.code(),
            specifier: failure.specifier().to_string(),
            message: failure.to_string(),
            hint: failure.hint(),
        }
    }
}

/// Receives resolution warnings.
pub trait WarningSink: Send + Sync {
    fn warn(&self, warning: ResolveWarning);
}

/// Drops every warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl WarningSink for NullSink {
    fn warn(&self, _warning: ResolveWarning) {}
}

/// Collects warnings in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<ResolveWarning>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings collected so far.
    #[must_use]
    pub fn warnings(&self) -> Vec<ResolveWarning> {
        self.warnings
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WarningSink for CollectingSink {
    fn warn(&self, warning: ResolveWarning) {
        self.warnings
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(warning);
    }
}
