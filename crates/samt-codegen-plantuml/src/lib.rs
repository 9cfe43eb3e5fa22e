// crates/samt-codegen-plantuml/src/lib.rs
// ============================================================================
// Module: PlantUML Generator Library
// Description: Deterministic PlantUML diagram generation from the model snapshot.
// Purpose: Render class and component diagrams for SAMT packages.
// Dependencies: samt-codegen-api
// ============================================================================

//! ## Overview
//! This crate implements the `plantuml` generator plugin. It walks the
//! semantic-model snapshot and renders either a class diagram (records,
//! enums, service interfaces) or a component diagram (providers, consumers,
//! transport edges) as PlantUML text.
//!
//! ### Design Notes
//! - Output is deterministic: declarations are rendered in snapshot order,
//!   never sorted.
//! - Rendering is total. Every type kind maps to a string; unrecognized
//!   kinds render as `UNKNOWN` instead of failing the run.
//! - An unknown `type` option is reported through the diagnostic sink and
//!   still yields exactly one artifact with an empty body, so a single
//!   misconfigured generator does not abort the host's run.
//!
//! ## Index
//! - Public API: [`PlantUmlGenerator`], [`GENERATOR_NAME`], [`DEFAULT_OUTPUT_FILE`]
//! - Diagram builders: [`render_class_diagram`], [`render_component_diagram`]
//! - Type rendering: [`plantuml_type`], [`plantuml_identifier`]

use std::fmt::Write;

use samt_codegen_api::CodegenFile;
use samt_codegen_api::Generator;
use samt_codegen_api::GeneratorParams;
use samt_codegen_api::Operation;
use samt_codegen_api::Package;
use samt_codegen_api::Type;
use samt_codegen_api::TypeReference;

// ============================================================================
// SECTION: Public API
// ============================================================================

// ============================================================================
// CONSTANTS: Generator identity and option defaults
// ============================================================================

/// Stable generator name used in host configuration.
pub const GENERATOR_NAME: &str = "plantuml";

/// Default artifact name when the `file` option is not configured.
pub const DEFAULT_OUTPUT_FILE: &str = "diagram.puml";

/// Option key selecting the diagram kind.
const TYPE_OPTION: &str = "type";

/// Option key overriding the artifact name.
const FILE_OPTION: &str = "file";

/// Default diagram kind when the `type` option is not configured.
const DEFAULT_DIAGRAM_TYPE: &str = "class";

/// The `plantuml` generator plugin.
///
/// # Invariants
/// - Every invocation produces exactly one artifact.
/// - Rendering depends only on the params; the generator holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantUmlGenerator;

impl PlantUmlGenerator {
    /// Creates the generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Generator for PlantUmlGenerator {
    fn name(&self) -> &str {
        GENERATOR_NAME
    }

    fn generate(&self, params: &GeneratorParams<'_>) -> Vec<CodegenFile> {
        // Users pick the diagram kind; anything unrecognized is reported and
        // still yields an (empty) artifact.
        let diagram_type = params.options.get_or_default(TYPE_OPTION, DEFAULT_DIAGRAM_TYPE);
        let content = match diagram_type.as_str() {
            "class" => render_class_diagram(params.packages),
            "component" => render_component_diagram(params.packages),
            other => {
                params.diagnostics.report_error(&format!("Unknown type: {other}"), None);
                String::new()
            }
        };

        // Users can override the output file name.
        let file_name = params.options.get_or_default(FILE_OPTION, DEFAULT_OUTPUT_FILE);
        vec![CodegenFile::new(file_name, content)]
    }
}

// ============================================================================
// SECTION: Class Diagram Rendering
// ============================================================================

/// Renders the class diagram for the given packages.
///
/// Emits one `class` block per record, one `enum` block per enum, and one
/// `interface` block per service, in snapshot order. Operation signatures
/// append a `: ReturnType` suffix only for request/response operations that
/// declare a return type.
#[must_use]
pub fn render_class_diagram(packages: &[Package]) -> String {
    let mut out = String::new();
    out.push_str("@startuml\n");
    out.push_str("hide empty members\n");
    for package in packages {
        for record in &package.records {
            let _ = writeln!(out, "class {} {{", record.name);
            for field in &record.fields {
                let _ = writeln!(out, "  +{}: {}", field.name, plantuml_type(Some(&field.ty)));
            }
            out.push_str("}\n");
        }
        for declaration in &package.enums {
            let _ = writeln!(out, "enum {} {{", declaration.name);
            for value in &declaration.values {
                let _ = writeln!(out, "  {value}");
            }
            out.push_str("}\n");
        }
        for service in &package.services {
            let _ = writeln!(out, "interface {} {{", service.name);
            for operation in &service.operations {
                render_operation(&mut out, operation);
            }
            out.push_str("}\n");
        }
    }
    out.push_str("@enduml\n");
    out
}

/// Renders a single operation line inside an interface block.
fn render_operation(out: &mut String, operation: &Operation) {
    let _ = write!(out, "  +{}(", operation.name());
    let mut first = true;
    for parameter in operation.parameters() {
        if !first {
            out.push_str(", ");
        }
        first = false;
        let _ = write!(out, "{}: {}", parameter.name, plantuml_type(Some(&parameter.ty)));
    }
    out.push(')');
    if let Operation::RequestResponse(operation) = operation
        && let Some(return_type) = operation.return_type.as_ref()
    {
        let _ = write!(out, ": {}", plantuml_type(Some(return_type)));
    }
    out.push('\n');
}

// ============================================================================
// SECTION: Component Diagram Rendering
// ============================================================================

/// Renders the component diagram for the given packages.
///
/// Two passes: the first declares a grouping per qualifying package with one
/// node per provider, the second draws consumer edges labeled with the
/// provider's transport name. The split keeps every grouping declared before
/// any edge references a provider from another grouping.
#[must_use]
pub fn render_component_diagram(packages: &[Package]) -> String {
    let mut out = String::new();
    out.push_str("@startuml\n");
    for package in packages.iter().filter(|package| has_endpoints(package)) {
        let _ = writeln!(
            out,
            "package \"{}\" as {} {{",
            package.qualified_name,
            plantuml_identifier(&package.qualified_name)
        );
        for provider in &package.providers {
            let _ = writeln!(
                out,
                "  [{}] as {}",
                provider.name,
                plantuml_identifier(&provider.qualified_name)
            );
        }
        out.push_str("}\n");
    }
    for package in packages.iter().filter(|package| has_endpoints(package)) {
        for consumer in &package.consumers {
            let _ = writeln!(
                out,
                "{} --> {} : {}",
                plantuml_identifier(&package.qualified_name),
                plantuml_identifier(&consumer.provider.qualified_name),
                consumer.provider.transport.name
            );
        }
    }
    out.push_str("@enduml\n");
    out
}

/// Returns true when a package declares at least one provider or consumer.
///
/// Packages without either contribute nothing to the component diagram.
fn has_endpoints(package: &Package) -> bool {
    !package.providers.is_empty() || !package.consumers.is_empty()
}

// ============================================================================
// SECTION: Type Rendering
// ============================================================================

/// Renders a possibly-absent type reference as PlantUML text.
///
/// Total for every type tree: aliases are unwrapped to their runtime type
/// (the alias name is never shown), user types render by simple name, and
/// unrecognized kinds render as `UNKNOWN`.
///
/// # Examples
/// ```
/// use samt_codegen_api::Type;
/// use samt_codegen_api::TypeReference;
/// use samt_codegen_plantuml::plantuml_type;
///
/// assert_eq!(plantuml_type(None), "Void");
/// let nested = TypeReference::new(Type::List {
///     element: Box::new(Type::Map {
///         key: Box::new(Type::String),
///         value: Box::new(Type::Int),
///     }),
/// });
/// assert_eq!(plantuml_type(Some(&nested)), "List<Map<String, Int>>");
/// ```
#[must_use]
pub fn plantuml_type(reference: Option<&TypeReference>) -> String {
    reference.map_or_else(|| "Void".to_owned(), |reference| render_type(&reference.ty))
}

/// Renders a type; recursion terminates because alias chains are acyclic.
fn render_type(ty: &Type) -> String {
    match ty {
        // Use the runtime type for aliases, we don't want to show the alias name.
        Type::Alias {
            runtime, ..
        } => render_type(runtime),
        Type::UserType {
            name,
        } => name.clone(),
        Type::Int => "Int".to_owned(),
        Type::Long => "Long".to_owned(),
        Type::Float => "Float".to_owned(),
        Type::Double => "Double".to_owned(),
        Type::Decimal => "Decimal".to_owned(),
        Type::Boolean => "Boolean".to_owned(),
        Type::String => "String".to_owned(),
        Type::Bytes => "Bytes".to_owned(),
        Type::Date => "Date".to_owned(),
        Type::DateTime => "DateTime".to_owned(),
        Type::Duration => "Duration".to_owned(),
        Type::List {
            element,
        } => format!("List<{}>", render_type(element)),
        Type::Map {
            key,
            value,
        } => format!("Map<{}, {}>", render_type(key), render_type(value)),
        Type::Unknown => "UNKNOWN".to_owned(),
    }
}

// ============================================================================
// SECTION: Utilities
// ============================================================================

/// Replaces characters PlantUML rejects in identifiers with underscores.
///
/// Distinct inputs may sanitize to the same identifier; collisions are a
/// known limitation left to the diagram author.
///
/// # Examples
/// ```
/// use samt_codegen_plantuml::plantuml_identifier;
///
/// assert_eq!(plantuml_identifier("a.b-c"), "a_b_c");
/// ```
#[must_use]
pub fn plantuml_identifier(name: &str) -> String {
    name.chars().map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' }).collect()
}
