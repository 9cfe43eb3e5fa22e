// crates/samt-codegen-api/src/resolver.rs
// ============================================================================
// Module: Operation Resolution
// Description: Name-based lookup of services and operations in a snapshot.
// Purpose: Let transport parsers resolve configuration keys to operations.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Transport configuration keys are raw strings that must be resolved
//! against the semantic model. [`OperationResolver`] is the lookup seam;
//! [`ModelIndex`] is the default implementation over a package slice.
//! Resolution failures are recoverable: callers report them as diagnostics
//! and continue with the remaining entries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::model::Operation;
use crate::model::Package;
use crate::model::Service;

// ============================================================================
// SECTION: Resolution Errors
// ============================================================================

/// Resolution failures for raw service/operation keys.
///
/// # Invariants
/// - Variants are stable for programmatic handling; display forms are used
///   verbatim in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No service with the given name exists in the snapshot.
    #[error("unknown service: {0}")]
    UnknownService(String),
    /// The service exists but declares no such operation.
    #[error("unknown operation: {service}.{operation}")]
    UnknownOperation {
        /// Service the lookup was scoped to.
        service: String,
        /// Operation name that failed to resolve.
        operation: String,
    },
}

// ============================================================================
// SECTION: Resolver Interface
// ============================================================================

/// Lookup seam from raw names to model declarations.
pub trait OperationResolver {
    /// Resolves a service by simple name.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownService`] when no service matches.
    fn resolve_service(&self, name: &str) -> Result<&Service, ResolveError>;

    /// Resolves an operation within the named service.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the service or operation is unknown.
    fn resolve_operation(&self, service: &str, operation: &str)
    -> Result<&Operation, ResolveError>;
}

// ============================================================================
// SECTION: Model Index
// ============================================================================

/// Default resolver over a package slice.
///
/// # Invariants
/// - Lookup scans packages in snapshot order; the first matching declaration
///   wins.
#[derive(Debug, Clone, Copy)]
pub struct ModelIndex<'a> {
    /// Packages backing the index.
    packages: &'a [Package],
}

impl<'a> ModelIndex<'a> {
    /// Creates an index over the given packages.
    #[must_use]
    pub const fn new(packages: &'a [Package]) -> Self {
        Self {
            packages,
        }
    }
}

impl OperationResolver for ModelIndex<'_> {
    fn resolve_service(&self, name: &str) -> Result<&Service, ResolveError> {
        self.packages
            .iter()
            .flat_map(|package| package.services.iter())
            .find(|service| service.name == name)
            .ok_or_else(|| ResolveError::UnknownService(name.to_owned()))
    }

    fn resolve_operation(
        &self,
        service: &str,
        operation: &str,
    ) -> Result<&Operation, ResolveError> {
        let declared = self.resolve_service(service)?;
        declared.operations.iter().find(|candidate| candidate.name() == operation).ok_or_else(
            || ResolveError::UnknownOperation {
                service: service.to_owned(),
                operation: operation.to_owned(),
            },
        )
    }
}
