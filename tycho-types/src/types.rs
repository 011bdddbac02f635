//! Core type descriptor definitions.

use indexmap::IndexMap;
use serde::Serialize;

use crate::flags::{PropertyFlags, ResourceFlags};

/// A stable reference to a descriptor inside a [`crate::TypeFactory`].
///
/// References are plain indexes into the factory's append-only list and
/// stay valid for the lifetime of the factory that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeRef(pub(crate) usize);

impl TypeRef {
    /// The position of the referenced descriptor in the factory.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the output type graph.
///
/// Serialized with a `$type` discriminant so artifacts stay
/// self-describing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "$type", rename_all = "camelCase")]
pub enum Type {
    /// An unconstrained string.
    String,
    /// An integer.
    Integer,
    /// A boolean.
    Boolean,
    /// A single fixed string value.
    StringLiteral { value: String },
    /// One of several member types.
    Union { elements: Vec<TypeRef> },
    /// An object with named properties and optional open-ended properties.
    Object(ObjectType),
    /// A homogeneous list.
    Array { element: TypeRef },
    /// A deployable resource type wrapping a body object.
    Resource(ResourceDescriptor),
}

/// An object descriptor: named properties plus an optional descriptor for
/// properties not listed by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectType {
    /// Diagnostic name. Carries no semantic weight; used in documentation
    /// output only.
    pub name: String,
    /// Named properties in source order.
    pub properties: IndexMap<String, ObjectProperty>,
    /// Descriptor for values of properties not listed in `properties`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<TypeRef>,
}

/// A single property of an object descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectProperty {
    /// The property's type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Required/read-only/identifier/deploy-time-constant markers.
    pub flags: PropertyFlags,
    /// Human-readable description, carried through from the manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A resource type descriptor: the qualified name, deployment scope, and
/// body object of one (resource type, API version) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// Qualified name, `<provider>/<type>@<version>`.
    pub name: String,
    /// Deployment scope.
    pub scope_type: ScopeType,
    /// The six-property body object.
    pub body: TypeRef,
    /// Resource-level markers.
    pub flags: ResourceFlags,
}

/// Deployment scope of a resource type.
///
/// Manifests do not currently express a scope, so conversion always emits
/// [`ScopeType::Unknown`]; the remaining scopes are reserved by the
/// artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScopeType {
    Unknown,
    Tenant,
    Subscription,
    ResourceGroup,
    Extension,
}

impl ScopeType {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeType::Unknown => "unknown",
            ScopeType::Tenant => "tenant",
            ScopeType::Subscription => "subscription",
            ScopeType::ResourceGroup => "resourceGroup",
            ScopeType::Extension => "extension",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_type_as_str() {
        assert_eq!(ScopeType::Unknown.as_str(), "unknown");
        assert_eq!(ScopeType::ResourceGroup.as_str(), "resourceGroup");
    }

    #[test]
    fn test_type_serializes_with_discriminant() {
        let value = serde_json::to_value(Type::String).unwrap();
        assert_eq!(value, serde_json::json!({ "$type": "string" }));

        let value = serde_json::to_value(Type::StringLiteral {
            value: "2021-01-01".into(),
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "$type": "stringLiteral", "value": "2021-01-01" })
        );
    }

    #[test]
    fn test_object_property_omits_absent_description() {
        let property = ObjectProperty {
            ty: TypeRef(0),
            flags: PropertyFlags::NONE,
            description: None,
        };
        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value, serde_json::json!({ "type": 0, "flags": 0 }));
    }
}
