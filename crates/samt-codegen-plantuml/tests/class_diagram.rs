// crates/samt-codegen-plantuml/tests/class_diagram.rs
// ============================================================================
// Module: Class Diagram Tests
// Description: Rendering coverage for record, enum, and interface blocks.
// Purpose: Validate block shapes, ordering, and type rendering in context.
// Dependencies: samt-codegen-plantuml, samt-codegen-api
// ============================================================================

//! ## Overview
//! Integration tests for the class diagram builder: exact block shapes for
//! records, enums, and service interfaces, plus alias and container type
//! rendering as it appears in field and parameter positions.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions and helpers are permitted."
)]

use samt_codegen_api::Operation;
use samt_codegen_api::Type;
use samt_codegen_api::Package;
use samt_codegen_api::TypeReference;
use samt_codegen_api::model::EnumDecl;
use samt_codegen_api::model::Field;
use samt_codegen_api::model::OnewayOperation;
use samt_codegen_api::model::Parameter;
use samt_codegen_api::model::Record;
use samt_codegen_api::model::RequestResponseOperation;
use samt_codegen_api::model::Service;
use samt_codegen_plantuml::render_class_diagram;

/// Builds a package containing only the given declarations.
fn package(
    records: Vec<Record>,
    enums: Vec<EnumDecl>,
    services: Vec<Service>,
) -> Package {
    Package {
        qualified_name: "acme.sample".to_owned(),
        records,
        enums,
        services,
        providers: Vec::new(),
        consumers: Vec::new(),
    }
}

/// Shorthand for a present reference to a type.
fn reference(ty: Type) -> TypeReference {
    TypeReference::new(ty)
}

#[test]
fn record_block_lists_fields_in_order() {
    let packages = vec![package(
        vec![Record {
            name: "Pt".to_owned(),
            fields: vec![
                Field {
                    name: "x".to_owned(),
                    ty: reference(Type::Int),
                },
                Field {
                    name: "y".to_owned(),
                    ty: reference(Type::Int),
                },
            ],
        }],
        Vec::new(),
        Vec::new(),
    )];
    let diagram = render_class_diagram(&packages);
    assert!(diagram.starts_with("@startuml\nhide empty members\n"));
    assert!(diagram.ends_with("@enduml\n"));
    assert!(diagram.contains("class Pt {\n  +x: Int\n  +y: Int\n}\n"));
}

#[test]
fn enum_block_lists_values_verbatim() {
    let packages = vec![package(
        Vec::new(),
        vec![EnumDecl {
            name: "Color".to_owned(),
            values: vec!["RED".to_owned(), "GREEN".to_owned(), "BLUE".to_owned()],
        }],
        Vec::new(),
    )];
    let diagram = render_class_diagram(&packages);
    assert!(diagram.contains("enum Color {\n  RED\n  GREEN\n  BLUE\n}\n"));
}

#[test]
fn interface_block_renders_operation_signatures() {
    let service = Service {
        name: "Greeter".to_owned(),
        operations: vec![
            Operation::RequestResponse(RequestResponseOperation {
                name: "greet".to_owned(),
                parameters: vec![
                    Parameter {
                        name: "name".to_owned(),
                        ty: reference(Type::String),
                    },
                    Parameter {
                        name: "loud".to_owned(),
                        ty: reference(Type::Boolean),
                    },
                ],
                return_type: Some(reference(Type::String)),
            }),
            Operation::Oneway(OnewayOperation {
                name: "wave".to_owned(),
                parameters: Vec::new(),
            }),
        ],
    };
    let packages = vec![package(Vec::new(), Vec::new(), vec![service])];
    let diagram = render_class_diagram(&packages);
    assert!(diagram.contains("interface Greeter {\n"));
    assert!(diagram.contains("  +greet(name: String, loud: Boolean): String\n"));
    assert!(diagram.contains("  +wave()\n"));
}

#[test]
fn request_response_without_return_type_has_no_suffix() {
    let service = Service {
        name: "Sink".to_owned(),
        operations: vec![Operation::RequestResponse(RequestResponseOperation {
            name: "store".to_owned(),
            parameters: vec![Parameter {
                name: "payload".to_owned(),
                ty: reference(Type::Bytes),
            }],
            return_type: None,
        })],
    };
    let packages = vec![package(Vec::new(), Vec::new(), vec![service])];
    let diagram = render_class_diagram(&packages);
    assert!(diagram.contains("  +store(payload: Bytes)\n"));
    assert!(!diagram.contains("store(payload: Bytes):"));
}

#[test]
fn alias_fields_render_as_their_runtime_type() {
    let chained = Type::Alias {
        name: "Outer".to_owned(),
        runtime: Box::new(Type::Alias {
            name: "Inner".to_owned(),
            runtime: Box::new(Type::Int),
        }),
    };
    let packages = vec![package(
        vec![Record {
            name: "Counter".to_owned(),
            fields: vec![Field {
                name: "count".to_owned(),
                ty: reference(chained),
            }],
        }],
        Vec::new(),
        Vec::new(),
    )];
    let diagram = render_class_diagram(&packages);
    assert!(diagram.contains("  +count: Int\n"));
    assert!(!diagram.contains("Outer"));
    assert!(!diagram.contains("Inner"));
}

#[test]
fn container_fields_render_nested_type_arguments() {
    let nested = Type::List {
        element: Box::new(Type::Map {
            key: Box::new(Type::String),
            value: Box::new(Type::Int),
        }),
    };
    let packages = vec![package(
        vec![Record {
            name: "Index".to_owned(),
            fields: vec![Field {
                name: "buckets".to_owned(),
                ty: reference(nested),
            }],
        }],
        Vec::new(),
        Vec::new(),
    )];
    let diagram = render_class_diagram(&packages);
    assert!(diagram.contains("  +buckets: List<Map<String, Int>>\n"));
}

#[test]
fn unknown_kinds_render_as_marker_instead_of_failing() {
    let packages = vec![package(
        vec![Record {
            name: "Future".to_owned(),
            fields: vec![Field {
                name: "payload".to_owned(),
                ty: reference(Type::Unknown),
            }],
        }],
        Vec::new(),
        Vec::new(),
    )];
    let diagram = render_class_diagram(&packages);
    assert!(diagram.contains("  +payload: UNKNOWN\n"));
}

#[test]
fn empty_snapshot_renders_header_and_footer_only() {
    let diagram = render_class_diagram(&[]);
    assert_eq!(diagram, "@startuml\nhide empty members\n@enduml\n");
}
