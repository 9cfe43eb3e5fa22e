// crates/samt-codegen-stp/src/lib.rs
// ============================================================================
// Module: STP Transport Library
// Description: Typed configuration and parser for the STP wire protocol.
// Purpose: Validate per-operation path tables against the model snapshot.
// Dependencies: samt-codegen-api, serde
// ============================================================================

//! ## Overview
//! STP (Simple Transport Protocol) binds each request/response operation to
//! a path string. The host supplies the raw configuration tree; this crate
//! resolves its keys against the semantic model and produces the typed
//! [`StpTransportConfiguration`] consumed by transport-specific codegen.
//!
//! Expected configuration shape:
//!
//! ```text
//! paths:
//!   <service name>:
//!     <operation name>: <path string>
//! ```
//!
//! ### Design Notes
//! - Parsing never fails the invocation. Structural mismatches, unknown
//!   names, and unsupported operation kinds are reported through the
//!   diagnostic sink and the parser continues with the remaining entries.
//! - Oneway operations cannot carry a path. Earlier hosts still inserted the
//!   offending entry after reporting it; [`OnewayPathMode`] keeps that
//!   behavior available while defaulting to discarding the entry.
//!
//! ## Index
//! - Public API: [`StpTransportParser`], [`StpTransportConfiguration`],
//!   [`OnewayPathMode`], [`TRANSPORT_NAME`]

use std::collections::BTreeMap;

use samt_codegen_api::OperationId;
use samt_codegen_api::TransportConfigParser;
use samt_codegen_api::TransportConfiguration;
use samt_codegen_api::TransportParserParams;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Public API
// ============================================================================

// ============================================================================
// CONSTANTS: Transport identity and configuration keys
// ============================================================================

/// Stable transport name used in host configuration.
pub const TRANSPORT_NAME: &str = "STP";

/// Configuration field holding the per-operation path table.
const PATHS_FIELD: &str = "paths";

/// Handling of path entries configured for oneway operations.
///
/// The entry is reported as an error either way; the mode only decides
/// whether the path still lands in the resulting configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnewayPathMode {
    /// Drop the entry after reporting it.
    #[default]
    Discard,
    /// Insert the entry anyway, matching the behavior of earlier hosts.
    Keep,
}

/// Typed STP configuration keyed by operation identity.
///
/// # Invariants
/// - Keys are unique; iteration order is the identity ordering and carries
///   no configuration meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StpTransportConfiguration {
    /// Path string per configured operation.
    path_by_operation: BTreeMap<OperationId, String>,
}

impl StpTransportConfiguration {
    /// Returns the configured path for an operation.
    #[must_use]
    pub fn path_for(&self, operation: &OperationId) -> Option<&str> {
        self.path_by_operation.get(operation).map(String::as_str)
    }

    /// Returns the number of configured operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path_by_operation.len()
    }

    /// Returns true when no operation has a configured path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path_by_operation.is_empty()
    }

    /// Iterates over configured operations and their paths.
    pub fn iter(&self) -> impl Iterator<Item = (&OperationId, &str)> {
        self.path_by_operation.iter().map(|(operation, path)| (operation, path.as_str()))
    }
}

impl TransportConfiguration for StpTransportConfiguration {
    fn transport_name(&self) -> &str {
        TRANSPORT_NAME
    }
}

// ============================================================================
// SECTION: Parser
// ============================================================================

/// The STP transport configuration parser plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StpTransportParser {
    /// Handling of path entries configured for oneway operations.
    oneway_paths: OnewayPathMode,
}

impl StpTransportParser {
    /// Creates a parser that discards oneway path entries after reporting.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            oneway_paths: OnewayPathMode::Discard,
        }
    }

    /// Creates a parser with the given oneway entry handling.
    #[must_use]
    pub const fn with_oneway_paths(oneway_paths: OnewayPathMode) -> Self {
        Self {
            oneway_paths,
        }
    }

    /// Parses the raw `paths` table into a typed configuration.
    ///
    /// Absent configuration, or configuration without a `paths` field,
    /// yields an empty configuration without diagnostics. A present
    /// configuration that is not an object is a structural error. Offending
    /// entries are reported and skipped; valid entries are always collected,
    /// and a duplicated operation key resolves to its last entry.
    #[must_use]
    pub fn parse_paths(&self, params: &TransportParserParams<'_>) -> StpTransportConfiguration {
        let Some(config) = params.config else {
            return StpTransportConfiguration::default();
        };
        if config.as_object().is_none() {
            params
                .diagnostics
                .report_error("expected an object as transport configuration", config.location);
            return StpTransportConfiguration::default();
        }
        let Some(paths) = config.field(PATHS_FIELD) else {
            return StpTransportConfiguration::default();
        };
        let Some(services) = paths.as_object() else {
            params
                .diagnostics
                .report_error("expected an object of service names under 'paths'", paths.location);
            return StpTransportConfiguration::default();
        };

        let mut path_by_operation = BTreeMap::new();
        for (service_key, operations_node) in services {
            let Some(operations) = operations_node.as_object() else {
                params.diagnostics.report_error(
                    &format!(
                        "expected an object of operation names for service '{}'",
                        service_key.name
                    ),
                    operations_node.location.or(service_key.location),
                );
                continue;
            };
            for (operation_key, path_node) in operations {
                let resolved =
                    params.resolver.resolve_operation(&service_key.name, &operation_key.name);
                let operation = match resolved {
                    Ok(operation) => operation,
                    Err(err) => {
                        params.diagnostics.report_error(&err.to_string(), operation_key.location);
                        continue;
                    }
                };
                let Some(path) = path_node.as_str() else {
                    params.diagnostics.report_error(
                        &format!(
                            "expected a string path for operation '{}'",
                            operation_key.name
                        ),
                        path_node.location.or(operation_key.location),
                    );
                    continue;
                };
                if operation.is_oneway() {
                    params.diagnostics.report_error(
                        "Oneway operations are not supported",
                        operation_key.location,
                    );
                    if self.oneway_paths == OnewayPathMode::Discard {
                        continue;
                    }
                }
                // Last write wins for duplicated operation keys.
                path_by_operation.insert(
                    OperationId::new(service_key.name.clone(), operation.name().to_owned()),
                    path.to_owned(),
                );
            }
        }

        StpTransportConfiguration {
            path_by_operation,
        }
    }
}

impl TransportConfigParser for StpTransportParser {
    fn transport_name(&self) -> &str {
        TRANSPORT_NAME
    }

    fn parse(&self, params: &TransportParserParams<'_>) -> Box<dyn TransportConfiguration> {
        Box::new(self.parse_paths(params))
    }
}
