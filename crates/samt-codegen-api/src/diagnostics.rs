// crates/samt-codegen-api/src/diagnostics.rs
// ============================================================================
// Module: Plugin Diagnostics
// Description: Non-fatal diagnostic reporting for codegen plugins.
// Purpose: Collect recoverable errors and warnings without unwinding plugins.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Plugins report recoverable problems through a [`DiagnosticSink`] instead
//! of failing their invocation. The host aggregates collected diagnostics
//! after the run and decides whether the pipeline as a whole failed.
//!
//! [`DiagnosticCollector`] is the host-side sink: an append-only list behind
//! a mutex so independent plugin invocations can share one collector.
//! Reporting order across invocations is not significant.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Diagnostic Types
// ============================================================================

/// Diagnostic severity.
///
/// # Invariants
/// - Only [`Severity::Error`] counts toward [`DiagnosticCollector::has_errors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Recoverable problem that should fail the run after aggregation.
    Error,
    /// Advisory finding that never fails the run.
    Warning,
}

/// Source location in a configuration document.
///
/// # Invariants
/// - `line` and `column` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl Location {
    /// Creates a location from 1-based line and column numbers.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
        }
    }
}

/// A single reported diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic severity.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Location the diagnostic refers to, when known.
    pub location: Option<Location>,
}

// ============================================================================
// SECTION: Diagnostic Sink
// ============================================================================

/// Sink accepting diagnostics from plugins.
///
/// Implementations must never unwind the caller; reporting is best-effort
/// and non-blocking from the plugin's point of view.
pub trait DiagnosticSink {
    /// Records a diagnostic.
    fn report(&self, diagnostic: Diagnostic);

    /// Records an error diagnostic with an optional location.
    fn report_error(&self, message: &str, location: Option<Location>) {
        self.report(Diagnostic {
            severity: Severity::Error,
            message: message.to_owned(),
            location,
        });
    }

    /// Records a warning diagnostic with an optional location.
    fn report_warning(&self, message: &str, location: Option<Location>) {
        self.report(Diagnostic {
            severity: Severity::Warning,
            message: message.to_owned(),
            location,
        });
    }
}

// ============================================================================
// SECTION: Diagnostic Collector
// ============================================================================

/// Append-only diagnostic collector shared across plugin invocations.
///
/// # Invariants
/// - Entries are only ever appended; nothing is removed or reordered.
/// - Safe for concurrent use from independent invocations.
///
/// # Examples
/// ```
/// use samt_codegen_api::diagnostics::DiagnosticCollector;
/// use samt_codegen_api::diagnostics::DiagnosticSink;
///
/// let collector = DiagnosticCollector::new();
/// collector.report_error("Unknown type: bogus", None);
/// assert!(collector.has_errors());
/// assert_eq!(collector.diagnostics().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    /// Collected diagnostics, guarded for concurrent reporting.
    entries: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when at least one error-severity diagnostic was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.with_entries(|entries| {
            entries.iter().any(|diagnostic| diagnostic.severity == Severity::Error)
        })
    }

    /// Returns a snapshot of all diagnostics reported so far.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.with_entries(Clone::clone)
    }

    /// Runs a closure over the entry list, recovering from lock poisoning.
    ///
    /// A poisoned lock still yields the entries collected before the panic.
    fn with_entries<T>(&self, f: impl FnOnce(&Vec<Diagnostic>) -> T) -> T {
        let entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&entries)
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&self, diagnostic: Diagnostic) {
        let mut entries = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push(diagnostic);
    }
}
