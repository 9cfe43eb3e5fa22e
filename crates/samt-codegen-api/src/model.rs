// crates/samt-codegen-api/src/model.rs
// ============================================================================
// Module: Semantic Model Snapshot
// Description: Immutable snapshot types for SAMT package declarations.
// Purpose: Provide the read-only model shape consumed by codegen plugins.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the semantic-model snapshot handed to plugins. The
//! snapshot is built once by the host's model builder and is immutable for
//! the duration of a generation run. Packages are consumed as a flat ordered
//! list; plugins never traverse parent/child package relations.
//!
//! Alias resolution is guaranteed acyclic by the model builder, so rendering
//! code may unwrap alias chains recursively without a visited set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Package Declarations
// ============================================================================

/// A SAMT package with its ordered declarations.
///
/// # Invariants
/// - Declaration collections preserve source order; generators must not sort.
/// - `qualified_name` is dot-separated and unique across the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Dot-separated qualified package name.
    pub qualified_name: String,
    /// Record declarations in source order.
    #[serde(default)]
    pub records: Vec<Record>,
    /// Enum declarations in source order.
    #[serde(default)]
    pub enums: Vec<EnumDecl>,
    /// Service declarations in source order.
    #[serde(default)]
    pub services: Vec<Service>,
    /// Provider declarations in source order.
    #[serde(default)]
    pub providers: Vec<Provider>,
    /// Consumer declarations in source order.
    #[serde(default)]
    pub consumers: Vec<Consumer>,
}

/// A record declaration with ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Simple record name.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A single record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type; always present for fields.
    pub ty: TypeReference,
}

/// An enum declaration with its value names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    /// Simple enum name.
    pub name: String,
    /// Value names in declaration order.
    #[serde(default)]
    pub values: Vec<String>,
}

/// A service declaration with ordered operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Simple service name.
    pub name: String,
    /// Operations in declaration order.
    #[serde(default)]
    pub operations: Vec<Operation>,
}

// ============================================================================
// SECTION: Operations
// ============================================================================

/// A service operation.
///
/// # Invariants
/// - Variant meanings are stable: request/response operations may declare a
///   return type, oneway operations never do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// Operation with a request and an optional typed response.
    RequestResponse(RequestResponseOperation),
    /// Fire-and-forget operation without a response.
    Oneway(OnewayOperation),
}

impl Operation {
    /// Returns the operation name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::RequestResponse(operation) => &operation.name,
            Self::Oneway(operation) => &operation.name,
        }
    }

    /// Returns the operation parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        match self {
            Self::RequestResponse(operation) => &operation.parameters,
            Self::Oneway(operation) => &operation.parameters,
        }
    }

    /// Returns true for oneway operations.
    #[must_use]
    pub const fn is_oneway(&self) -> bool {
        matches!(self, Self::Oneway(_))
    }
}

/// A request/response operation with an optional return type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestResponseOperation {
    /// Operation name.
    pub name: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Return type; `None` means the operation returns nothing.
    #[serde(default)]
    pub return_type: Option<TypeReference>,
}

/// A oneway operation; never carries a return type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnewayOperation {
    /// Operation name.
    pub name: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// A single operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter type; always present for parameters.
    pub ty: TypeReference,
}

// ============================================================================
// SECTION: Providers and Consumers
// ============================================================================

/// A provider exposing services over a named transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Simple provider name.
    pub name: String,
    /// Dot-separated qualified provider name.
    pub qualified_name: String,
    /// Transport binding exposed by this provider.
    pub transport: Transport,
}

/// A named wire-protocol binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    /// Transport name, e.g. `"STP"`.
    pub name: String,
}

/// A consumer referencing exactly one provider.
///
/// # Invariants
/// - The snapshot embeds the referenced provider so consumers need no
///   cross-package lookup at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumer {
    /// Provider this consumer binds to.
    pub provider: Provider,
}

// ============================================================================
// SECTION: Type References
// ============================================================================

/// A present reference to a type.
///
/// Absence is expressed as `Option<TypeReference>` at the use site (return
/// types); fields and parameters always carry a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeReference {
    /// Referenced type.
    pub ty: Type,
}

impl TypeReference {
    /// Creates a reference to the given type.
    #[must_use]
    pub const fn new(ty: Type) -> Self {
        Self {
            ty,
        }
    }
}

/// A SAMT type as seen by codegen plugins.
///
/// # Invariants
/// - `Alias` chains are acyclic (model-builder guarantee).
/// - Unrecognized kinds deserialize to [`Type::Unknown`] rather than failing,
///   keeping downstream rendering total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    /// Named alias standing for another type; transparent for rendering.
    Alias {
        /// Alias name as declared.
        name: String,
        /// Type the alias ultimately stands for.
        runtime: Box<Type>,
    },
    /// User-declared type (record, enum, or service).
    UserType {
        /// Simple declaration name.
        name: String,
    },
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit floating point number.
    Float,
    /// 64-bit floating point number.
    Double,
    /// Arbitrary-precision decimal number.
    Decimal,
    /// Boolean value.
    Boolean,
    /// UTF-8 string.
    String,
    /// Raw byte sequence.
    Bytes,
    /// Calendar date without time.
    Date,
    /// Date with time of day.
    DateTime,
    /// Time span.
    Duration,
    /// Homogeneous list.
    List {
        /// Element type.
        element: Box<Type>,
    },
    /// Key/value map.
    Map {
        /// Key type.
        key: Box<Type>,
        /// Value type.
        value: Box<Type>,
    },
    /// Forward-compatibility placeholder for kinds this crate predates.
    #[serde(other)]
    Unknown,
}

// ============================================================================
// SECTION: Operation Identity
// ============================================================================

/// Stable identity of an operation within the snapshot.
///
/// # Invariants
/// - Ordering is lexicographic on `(service, operation)`, giving transport
///   configuration maps a deterministic iteration order.
///
/// # Examples
/// ```
/// use samt_codegen_api::model::OperationId;
///
/// let id = OperationId::new("Greeter", "greet");
/// assert_eq!(id.to_string(), "Greeter.greet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperationId {
    /// Service name the operation belongs to.
    pub service: String,
    /// Operation name within the service.
    pub operation: String,
}

impl OperationId {
    /// Creates an operation identity from service and operation names.
    #[must_use]
    pub fn new(service: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            operation: operation.into(),
        }
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.service, self.operation)
    }
}
