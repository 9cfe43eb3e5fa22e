// crates/samt-codegen-plantuml/tests/dispatch.rs
// ============================================================================
// Module: Generator Dispatch Tests
// Description: Option handling for diagram kind and artifact naming.
// Purpose: Validate defaults, overrides, and unknown-type reporting.
// Dependencies: samt-codegen-plantuml, samt-codegen-api
// ============================================================================

//! ## Overview
//! Integration tests for the generator entry point: the `type` option picks
//! a builder (defaulting to the class diagram), an unrecognized value is
//! reported without aborting, and the `file` option names the artifact.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions and helpers are permitted."
)]

use samt_codegen_api::DiagnosticCollector;
use samt_codegen_api::Generator;
use samt_codegen_api::GeneratorOptions;
use samt_codegen_api::GeneratorParams;
use samt_codegen_api::Package;
use samt_codegen_api::Severity;
use samt_codegen_api::model::Provider;
use samt_codegen_api::model::Transport;
use samt_codegen_plantuml::DEFAULT_OUTPUT_FILE;
use samt_codegen_plantuml::GENERATOR_NAME;
use samt_codegen_plantuml::PlantUmlGenerator;

/// Builds a one-package snapshot with a single provider.
fn snapshot() -> Vec<Package> {
    vec![Package {
        qualified_name: "acme.hello".to_owned(),
        records: Vec::new(),
        enums: Vec::new(),
        services: Vec::new(),
        providers: vec![Provider {
            name: "HelloProvider".to_owned(),
            qualified_name: "acme.hello.HelloProvider".to_owned(),
            transport: Transport {
                name: "STP".to_owned(),
            },
        }],
        consumers: Vec::new(),
    }]
}

/// Runs the generator over the snapshot with the given options.
fn generate(
    packages: &[Package],
    options: &GeneratorOptions,
    collector: &DiagnosticCollector,
) -> Vec<samt_codegen_api::CodegenFile> {
    let params = GeneratorParams {
        packages,
        options,
        diagnostics: collector,
    };
    PlantUmlGenerator::new().generate(&params)
}

#[test]
fn generator_reports_its_configured_name() {
    assert_eq!(PlantUmlGenerator::new().name(), GENERATOR_NAME);
}

#[test]
fn default_type_renders_a_class_diagram() {
    let packages = snapshot();
    let collector = DiagnosticCollector::new();
    let artifacts = generate(&packages, &GeneratorOptions::new(), &collector);
    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0].name, DEFAULT_OUTPUT_FILE);
    assert!(artifacts[0].content.contains("hide empty members"));
    assert!(!collector.has_errors());
}

#[test]
fn component_type_renders_a_component_diagram() {
    let packages = snapshot();
    let mut options = GeneratorOptions::new();
    options.set("type", "component");
    let collector = DiagnosticCollector::new();
    let artifacts = generate(&packages, &options, &collector);
    assert_eq!(artifacts.len(), 1);
    assert!(artifacts[0].content.contains("[HelloProvider] as acme_hello_HelloProvider"));
    assert!(!collector.has_errors());
}

#[test]
fn unknown_type_reports_one_error_and_keeps_the_artifact() {
    let packages = snapshot();
    let mut options = GeneratorOptions::new();
    options.set("type", "bogus");
    let collector = DiagnosticCollector::new();
    let artifacts = generate(&packages, &options, &collector);
    assert_eq!(artifacts.len(), 1);
    assert!(artifacts[0].content.is_empty());
    let diagnostics = collector.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert!(diagnostics[0].message.contains("bogus"));
    assert_eq!(diagnostics[0].message, "Unknown type: bogus");
}

#[test]
fn file_option_overrides_the_artifact_name() {
    let packages = snapshot();
    let mut options = GeneratorOptions::new();
    options.set("file", "architecture.puml");
    let collector = DiagnosticCollector::new();
    let artifacts = generate(&packages, &options, &collector);
    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0].name, "architecture.puml");
}
