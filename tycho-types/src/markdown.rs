//! Human-readable documentation writer.

use std::collections::{HashSet, VecDeque};

use crate::factory::TypeFactory;
use crate::index::TypeIndex;
use crate::types::{ObjectType, Type, TypeRef};

/// Render the resource index as markdown documentation.
///
/// Each resource type gets a section listing its body properties; object
/// types reachable from the body (nested objects, array elements,
/// additional-properties values) are expanded once each below it.
pub fn write_index_markdown(index: &TypeIndex, factory: &TypeFactory) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", index.name));

    for (qualified_name, reference) in &index.resources {
        let Type::Resource(resource) = factory.get(*reference) else {
            continue;
        };
        out.push_str(&format!("## Resource {}\n", qualified_name));
        out.push_str(&format!("*Scope: {}*\n\n", resource.scope_type.as_str()));

        let mut seen: HashSet<usize> = HashSet::new();
        let mut pending: VecDeque<TypeRef> = VecDeque::new();
        pending.push_back(resource.body);

        let mut is_body = true;
        while let Some(object_ref) = pending.pop_front() {
            if !seen.insert(object_ref.index()) {
                continue;
            }
            let Type::Object(object) = factory.get(object_ref) else {
                continue;
            };
            if is_body {
                out.push_str("### Properties\n");
                is_body = false;
            } else {
                out.push_str(&format!("### {}\n", object.name));
            }
            render_object(&mut out, factory, object, &mut pending);
            out.push('\n');
        }
    }

    out
}

fn render_object(
    out: &mut String,
    factory: &TypeFactory,
    object: &ObjectType,
    pending: &mut VecDeque<TypeRef>,
) {
    for (name, property) in &object.properties {
        let mut line = format!("* **{}**: {}", name, display_type(factory, property.ty));
        let flags = property.flags.names();
        if !flags.is_empty() {
            line.push_str(&format!(" ({})", flags.join(", ")));
        }
        if let Some(description) = &property.description {
            line.push_str(&format!(": {}", description));
        }
        out.push_str(&line);
        out.push('\n');
        collect_objects(factory, property.ty, pending);
    }
    if let Some(additional) = object.additional_properties {
        out.push_str(&format!(
            "* **\\***: {}\n",
            display_type(factory, additional)
        ));
        collect_objects(factory, additional, pending);
    }
}

/// Queue object descriptors reachable through `reference` for expansion.
fn collect_objects(factory: &TypeFactory, reference: TypeRef, pending: &mut VecDeque<TypeRef>) {
    match factory.get(reference) {
        Type::Object(_) => pending.push_back(reference),
        Type::Array { element } => collect_objects(factory, *element, pending),
        _ => {}
    }
}

/// Short inline rendering of a type, for property lines.
fn display_type(factory: &TypeFactory, reference: TypeRef) -> String {
    match factory.get(reference) {
        Type::String => "string".to_string(),
        Type::Integer => "int".to_string(),
        Type::Boolean => "bool".to_string(),
        Type::StringLiteral { value } => format!("'{}'", value),
        Type::Union { elements } => elements
            .iter()
            .map(|element| display_type(factory, *element))
            .collect::<Vec<_>>()
            .join(" | "),
        Type::Object(object) => object.name.clone(),
        Type::Array { element } => format!("{}[]", display_type(factory, *element)),
        Type::Resource(resource) => resource.name.clone(),
    }
}
