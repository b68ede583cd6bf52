//! Structured diagnostics collected during layout resolution.
//!
//! Resolution never fails, but some inputs are worth reporting (an unknown
//! region tag, a malformed attribute). Callers pass a [`Diagnostics`] sink
//! and inspect it afterwards; every entry is also forwarded to the `log`
//! facade.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational note
    Info,
    /// A value was replaced by a default
    Warning,
}

/// A single diagnostic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

/// A sink for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an informational entry.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("{}", message);
        self.entries.push(Diagnostic {
            severity: Severity::Info,
            message,
        });
    }

    /// Record a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            message,
        });
    }

    /// Get all recorded entries.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Check if any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Check if the sink is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Take the recorded entries, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_entries() {
        let mut diag = Diagnostics::new();
        diag.info("clamped page 7 to 2");
        assert!(!diag.has_warnings());

        diag.warn("unknown region tag 'aside'");
        assert!(diag.has_warnings());
        assert_eq!(diag.len(), 2);
        assert_eq!(
            diag.entries()[1].to_string(),
            "warning: unknown region tag 'aside'"
        );

        let drained = diag.drain();
        assert_eq!(drained.len(), 2);
        assert!(diag.is_empty());
    }
}
