// crates/samt-codegen-api/src/lib.rs
// ============================================================================
// Module: SAMT Codegen API
// Description: Shared contract surfaces for SAMT code-generation plugins.
// Purpose: Provide the semantic-model snapshot, plugin interfaces, and
//          diagnostics consumed by generators and transport parsers.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate defines the interface between the SAMT host runtime and
//! code-generation plugins. The host hands each plugin an immutable snapshot
//! of the semantic model (packages of records, enums, services, providers,
//! and consumers), a key/value option map, and a diagnostic sink; plugins
//! return named text artifacts or typed transport configurations.
//!
//! ### Design Notes
//! - The model snapshot is plain immutable data. Plugins never mutate it and
//!   retain no state across invocations, so concurrent invocations over a
//!   shared snapshot are safe without coordination.
//! - Collaborators are passed explicitly through the params structs; there is
//!   no ambient plugin registry.
//! - Diagnostics are non-fatal by construction: reporting never unwinds the
//!   caller, and fatal aggregation is the host's decision via
//!   [`DiagnosticCollector::has_errors`].
//!
//! ## Index
//! - Model: [`model`] ([`Package`], [`Type`], [`Operation`], [`OperationId`])
//! - Plugins: [`plugin`] ([`Generator`], [`TransportConfigParser`], [`CodegenFile`])
//! - Diagnostics: [`diagnostics`] ([`DiagnosticSink`], [`DiagnosticCollector`])
//! - Configuration: [`config`] ([`ConfigNode`], [`GeneratorOptions`])
//! - Resolution: [`resolver`] ([`OperationResolver`], [`ModelIndex`])

pub mod config;
pub mod diagnostics;
pub mod model;
pub mod plugin;
pub mod resolver;

pub use config::ConfigKey;
pub use config::ConfigNode;
pub use config::ConfigValue;
pub use config::GeneratorOptions;
pub use diagnostics::Diagnostic;
pub use diagnostics::DiagnosticCollector;
pub use diagnostics::DiagnosticSink;
pub use diagnostics::Location;
pub use diagnostics::Severity;
pub use model::Consumer;
pub use model::EnumDecl;
pub use model::Field;
pub use model::OnewayOperation;
pub use model::Operation;
pub use model::OperationId;
pub use model::Package;
pub use model::Parameter;
pub use model::Provider;
pub use model::Record;
pub use model::RequestResponseOperation;
pub use model::Service;
pub use model::Transport;
pub use model::Type;
pub use model::TypeReference;
pub use plugin::CodegenFile;
pub use plugin::Generator;
pub use plugin::GeneratorParams;
pub use plugin::TransportConfigParser;
pub use plugin::TransportConfiguration;
pub use plugin::TransportParserParams;
pub use resolver::ModelIndex;
pub use resolver::OperationResolver;
pub use resolver::ResolveError;
