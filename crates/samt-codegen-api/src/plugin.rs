// crates/samt-codegen-api/src/plugin.rs
// ============================================================================
// Module: Plugin Interfaces
// Description: Contract surfaces implemented by codegen plugins.
// Purpose: Define generator and transport-parser seams plus their outputs.
// Dependencies: crate::config, crate::diagnostics, crate::model, crate::resolver
// ============================================================================

//! ## Overview
//! Two plugin kinds exist: [`Generator`] turns a model snapshot into named
//! text artifacts, and [`TransportConfigParser`] turns an untyped
//! configuration tree into a typed transport configuration. Both receive
//! their collaborators explicitly through params structs; there is no
//! ambient registry. Plugins report recoverable problems through the
//! supplied [`DiagnosticSink`] and always produce best-effort output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::config::ConfigNode;
use crate::config::GeneratorOptions;
use crate::diagnostics::DiagnosticSink;
use crate::model::Package;
use crate::resolver::OperationResolver;

// ============================================================================
// SECTION: Generated Artifacts
// ============================================================================

/// A named text artifact produced by a generator.
///
/// The host decides where artifacts land on disk; the name is used verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenFile {
    /// Artifact file name.
    pub name: String,
    /// Artifact text body.
    pub content: String,
}

impl CodegenFile {
    /// Creates an artifact from a name and text body.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

// ============================================================================
// SECTION: Generator Interface
// ============================================================================

/// Collaborators handed to a generator invocation.
///
/// # Invariants
/// - `packages` is an immutable snapshot; generators must not rely on any
///   state outside these collaborators.
pub struct GeneratorParams<'a> {
    /// Semantic-model snapshot in package order.
    pub packages: &'a [Package],
    /// Options configured for this generator run.
    pub options: &'a GeneratorOptions,
    /// Sink for recoverable diagnostics.
    pub diagnostics: &'a dyn DiagnosticSink,
}

/// A code generator plugin.
pub trait Generator {
    /// Returns the stable generator name used in host configuration.
    fn name(&self) -> &str;

    /// Produces artifacts for the given snapshot and options.
    ///
    /// Recoverable problems are reported through the params' diagnostic sink;
    /// the invocation itself never fails.
    fn generate(&self, params: &GeneratorParams<'_>) -> Vec<CodegenFile>;
}

// ============================================================================
// SECTION: Transport Parser Interface
// ============================================================================

/// Collaborators handed to a transport configuration parser.
pub struct TransportParserParams<'a> {
    /// Raw configuration tree; `None` when the host supplied no configuration.
    pub config: Option<&'a ConfigNode>,
    /// Resolver from raw keys to model declarations.
    pub resolver: &'a dyn OperationResolver,
    /// Sink for recoverable diagnostics.
    pub diagnostics: &'a dyn DiagnosticSink,
}

/// A typed transport configuration produced by a parser.
pub trait TransportConfiguration: fmt::Debug {
    /// Returns the transport name this configuration belongs to.
    fn transport_name(&self) -> &str;
}

/// A transport configuration parser plugin.
pub trait TransportConfigParser {
    /// Returns the transport name this parser handles.
    fn transport_name(&self) -> &str;

    /// Parses the raw configuration into a typed configuration.
    ///
    /// Structural and resolution problems are reported through the params'
    /// diagnostic sink; the parser always returns a (possibly partial)
    /// configuration.
    fn parse(&self, params: &TransportParserParams<'_>) -> Box<dyn TransportConfiguration>;
}
