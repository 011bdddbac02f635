//! The conversion pass: schema trees in, descriptor references out.

use indexmap::IndexMap;
use tycho_manifest::{AdditionalProperties, ResourceProvider, Schema, SchemaKind};
use tycho_types::{
    ObjectProperty, PropertyFlags, ResourceFlags, ScopeType, TypeFactory, TypeRef,
};

use crate::error::{Result, SchemaError};

/// Convert every (resource type, API version) pair of a manifest.
///
/// Returns one resource descriptor reference per pair, in manifest order.
/// Aborts on the first malformed schema node; the factory may then hold
/// descriptors from the aborted pass, and the partial result set must be
/// discarded.
pub fn convert_manifest(
    provider: &ResourceProvider,
    factory: &mut TypeFactory,
) -> Result<Vec<TypeRef>> {
    let mut resource_types = Vec::with_capacity(provider.version_count());
    for (type_name, resource_type) in &provider.types {
        for (version_name, api_version) in &resource_type.api_versions {
            resource_types.push(convert_resource_type(
                &provider.name,
                type_name,
                version_name,
                &api_version.schema,
                factory,
            )?);
        }
    }
    Ok(resource_types)
}

/// Convert one API version of a resource type into a resource descriptor.
///
/// The author-defined schema becomes the `properties` object; around it
/// goes the fixed six-property resource body. Only `properties` varies
/// with the input.
pub fn convert_resource_type(
    provider_name: &str,
    type_name: &str,
    version_name: &str,
    schema: &Schema,
    factory: &mut TypeFactory,
) -> Result<TypeRef> {
    let qualified_name = format!("{provider_name}/{type_name}@{version_name}");
    let unqualified_name = format!("{provider_name}/{type_name}");

    let properties_type = convert_schema(schema, &format!("{type_name}Properties"), factory)?;

    let mut body_properties = IndexMap::new();
    let name_type = factory.add_string_type();
    body_properties.insert(
        "name".to_string(),
        ObjectProperty {
            ty: name_type,
            flags: PropertyFlags::REQUIRED | PropertyFlags::IDENTIFIER,
            description: Some("The resource name.".to_string()),
        },
    );
    let location_type = factory.add_string_type();
    body_properties.insert(
        "location".to_string(),
        ObjectProperty {
            ty: location_type,
            flags: PropertyFlags::NONE,
            description: Some("The resource location.".to_string()),
        },
    );
    body_properties.insert(
        "properties".to_string(),
        ObjectProperty {
            ty: properties_type,
            flags: PropertyFlags::REQUIRED,
            description: Some("The resource properties.".to_string()),
        },
    );
    let api_version_type = factory.add_string_literal_type(version_name);
    body_properties.insert(
        "apiVersion".to_string(),
        ObjectProperty {
            ty: api_version_type,
            flags: PropertyFlags::READ_ONLY | PropertyFlags::DEPLOY_TIME_CONSTANT,
            description: Some("The API version.".to_string()),
        },
    );
    let type_literal = factory.add_string_literal_type(unqualified_name);
    body_properties.insert(
        "type".to_string(),
        ObjectProperty {
            ty: type_literal,
            flags: PropertyFlags::READ_ONLY | PropertyFlags::DEPLOY_TIME_CONSTANT,
            description: Some("The resource type.".to_string()),
        },
    );
    let id_type = factory.add_string_type();
    body_properties.insert(
        "id".to_string(),
        ObjectProperty {
            ty: id_type,
            flags: PropertyFlags::READ_ONLY,
            description: Some("The resource id.".to_string()),
        },
    );

    let body = factory.add_object_type(&qualified_name, body_properties, None);

    // The manifest format does not currently express deployment scope.
    Ok(factory.add_resource_type(qualified_name, ScopeType::Unknown, body, ResourceFlags::NONE))
}

/// Convert a schema node into a descriptor reference, recursively
/// expanding nested structure.
///
/// `name` is a diagnostic hint: it names object descriptors in the
/// documentation output and keeps nested error messages traceable, but it
/// never changes the shape of the produced descriptor.
pub fn convert_schema(schema: &Schema, name: &str, factory: &mut TypeFactory) -> Result<TypeRef> {
    match &schema.kind {
        SchemaKind::String => {
            // Edge case: a string with a non-empty enum constraint is a
            // union of literals; an empty list is a plain string.
            if !schema.enum_values.is_empty() {
                return Ok(add_literal_union(&schema.enum_values, factory));
            }
            Ok(factory.add_string_type())
        }
        SchemaKind::Enum => {
            if schema.enum_values.is_empty() {
                return Err(SchemaError::MissingEnumValues {
                    name: name.to_string(),
                });
            }
            Ok(add_literal_union(&schema.enum_values, factory))
        }
        SchemaKind::Object => {
            let additional_properties = match &schema.additional_properties {
                Some(AdditionalProperties::Schema(child)) => Some(convert_schema(
                    child,
                    &format!("{name}AdditionalProperties"),
                    factory,
                )?),
                // The boolean shorthand carries no schema to recurse into.
                Some(AdditionalProperties::Allow(allow)) => {
                    return Err(SchemaError::UnsupportedType {
                        tag: allow.to_string(),
                    });
                }
                None => None,
            };
            let properties = convert_object_properties(schema, factory)?;
            Ok(factory.add_object_type(name, properties, additional_properties))
        }
        SchemaKind::Array => {
            let Some(items) = &schema.items else {
                return Err(SchemaError::MissingItems {
                    name: name.to_string(),
                });
            };
            let element = convert_schema(items, name, factory)?;
            Ok(factory.add_array_type(element))
        }
        SchemaKind::Integer => Ok(factory.add_integer_type()),
        SchemaKind::Boolean => Ok(factory.add_boolean_type()),
        SchemaKind::Other(tag) => Err(SchemaError::UnsupportedType { tag: tag.clone() }),
    }
}

/// Convert the named properties of an object node, in source order.
pub fn convert_object_properties(
    parent: &Schema,
    factory: &mut TypeFactory,
) -> Result<IndexMap<String, ObjectProperty>> {
    let mut properties = IndexMap::with_capacity(parent.properties.len());
    for (key, child) in &parent.properties {
        properties.insert(
            key.clone(),
            convert_object_property(parent, key, child, factory)?,
        );
    }
    Ok(properties)
}

/// Convert a single named property: type reference, flags, description.
fn convert_object_property(
    parent: &Schema,
    key: &str,
    property: &Schema,
    factory: &mut TypeFactory,
) -> Result<ObjectProperty> {
    let ty = convert_schema(property, key, factory)?;

    let mut flags = PropertyFlags::NONE;
    if parent.required.iter().any(|required| required == key) {
        flags |= PropertyFlags::REQUIRED;
    }
    if property.read_only {
        flags |= PropertyFlags::READ_ONLY;
    }

    Ok(ObjectProperty {
        ty,
        flags,
        description: property.description.clone(),
    })
}

/// One string-literal member per value, in the order given; duplicates
/// are kept.
fn add_literal_union(values: &[String], factory: &mut TypeFactory) -> TypeRef {
    let members = values
        .iter()
        .map(|value| factory.add_string_literal_type(value))
        .collect();
    factory.add_union_type(members)
}
