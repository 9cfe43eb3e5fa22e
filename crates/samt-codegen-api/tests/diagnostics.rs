// crates/samt-codegen-api/tests/diagnostics.rs
// ============================================================================
// Module: Diagnostics Tests
// Description: Collector aggregation and concurrent reporting coverage.
// Purpose: Validate append-only collection and error aggregation.
// Dependencies: samt-codegen-api
// ============================================================================

//! ## Overview
//! Integration tests for the shared diagnostic collector: severity
//! aggregation, snapshot access, and safety under concurrent reporting from
//! independent invocations.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::sync::Arc;
use std::thread;

use samt_codegen_api::DiagnosticCollector;
use samt_codegen_api::DiagnosticSink;
use samt_codegen_api::Location;
use samt_codegen_api::Severity;

#[test]
fn empty_collector_has_no_errors() {
    let collector = DiagnosticCollector::new();
    assert!(!collector.has_errors());
    assert!(collector.diagnostics().is_empty());
}

#[test]
fn warnings_do_not_count_as_errors() {
    let collector = DiagnosticCollector::new();
    collector.report_warning("sanitized names may collide", None);
    assert!(!collector.has_errors());
    assert_eq!(collector.diagnostics().len(), 1);
}

#[test]
fn errors_are_aggregated_with_locations() {
    let collector = DiagnosticCollector::new();
    collector.report_error("Oneway operations are not supported", Some(Location::new(4, 9)));
    assert!(collector.has_errors());
    let diagnostics = collector.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(diagnostics[0].location, Some(Location::new(4, 9)));
}

#[test]
fn concurrent_reporting_loses_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let collector = Arc::new(DiagnosticCollector::new());
    let mut handles = Vec::new();
    for invocation in 0 .. 8 {
        let shared = Arc::clone(&collector);
        handles.push(thread::spawn(move || {
            for entry in 0 .. 16 {
                shared.report_error(&format!("invocation {invocation} entry {entry}"), None);
            }
        }));
    }
    for handle in handles {
        handle.join().map_err(|_| "reporting thread panicked")?;
    }
    assert_eq!(collector.diagnostics().len(), 8 * 16);
    assert!(collector.has_errors());
    Ok(())
}
