use miette::Diagnostic;
use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// A malformed schema shape encountered during conversion.
///
/// These are manifest-authoring mistakes, not transient failures: they
/// propagate out of the conversion call stack unchanged and abort the
/// whole manifest conversion.
#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("enum type '{name}' must have at least one value")]
    #[diagnostic(
        code(tycho::missing_enum_values),
        help("list the allowed string values in the 'enum' property")
    )]
    MissingEnumValues { name: String },

    #[error("array type '{name}' must have an 'items' property")]
    #[diagnostic(
        code(tycho::missing_items),
        help("describe the element type under 'items'")
    )]
    MissingItems { name: String },

    #[error("unsupported schema type '{tag}'")]
    #[diagnostic(
        code(tycho::unsupported_type),
        help("supported types are: string, integer, boolean, enum, object, array")
    )]
    UnsupportedType { tag: String },
}
