//! Append-only descriptor store.

use indexmap::IndexMap;

use crate::flags::ResourceFlags;
use crate::types::{ObjectProperty, ObjectType, ResourceDescriptor, ScopeType, Type, TypeRef};

/// The descriptor store: an insertion-ordered, append-only list of
/// descriptors addressed by index-based [`TypeRef`]s.
///
/// The factory makes no attempt to deduplicate structurally identical
/// descriptors; callers must only rely on a returned reference being
/// valid and stable for the lifetime of the factory.
#[derive(Debug, Default)]
pub struct TypeFactory {
    types: Vec<Type>,
}

impl TypeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// All descriptors created so far, in creation order.
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve a reference issued by this factory.
    ///
    /// # Panics
    ///
    /// Panics if the reference was issued by a different factory and is
    /// out of bounds here.
    pub fn get(&self, reference: TypeRef) -> &Type {
        &self.types[reference.0]
    }

    fn add(&mut self, ty: Type) -> TypeRef {
        self.types.push(ty);
        TypeRef(self.types.len() - 1)
    }

    pub fn add_string_type(&mut self) -> TypeRef {
        self.add(Type::String)
    }

    pub fn add_integer_type(&mut self) -> TypeRef {
        self.add(Type::Integer)
    }

    pub fn add_boolean_type(&mut self) -> TypeRef {
        self.add(Type::Boolean)
    }

    pub fn add_string_literal_type(&mut self, value: impl Into<String>) -> TypeRef {
        self.add(Type::StringLiteral {
            value: value.into(),
        })
    }

    pub fn add_union_type(&mut self, elements: Vec<TypeRef>) -> TypeRef {
        self.add(Type::Union { elements })
    }

    pub fn add_object_type(
        &mut self,
        name: impl Into<String>,
        properties: IndexMap<String, ObjectProperty>,
        additional_properties: Option<TypeRef>,
    ) -> TypeRef {
        self.add(Type::Object(ObjectType {
            name: name.into(),
            properties,
            additional_properties,
        }))
    }

    pub fn add_array_type(&mut self, element: TypeRef) -> TypeRef {
        self.add(Type::Array { element })
    }

    pub fn add_resource_type(
        &mut self,
        name: impl Into<String>,
        scope_type: ScopeType,
        body: TypeRef,
        flags: ResourceFlags,
    ) -> TypeRef {
        self.add(Type::Resource(ResourceDescriptor {
            name: name.into(),
            scope_type,
            body,
            flags,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::PropertyFlags;

    #[test]
    fn test_references_resolve_in_creation_order() {
        let mut factory = TypeFactory::new();
        let string = factory.add_string_type();
        let integer = factory.add_integer_type();

        assert_eq!(string.index(), 0);
        assert_eq!(integer.index(), 1);
        assert_eq!(factory.get(string), &Type::String);
        assert_eq!(factory.get(integer), &Type::Integer);
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn test_no_deduplication() {
        let mut factory = TypeFactory::new();
        let first = factory.add_string_type();
        let second = factory.add_string_type();

        assert_ne!(first, second);
        assert_eq!(factory.get(first), factory.get(second));
    }

    #[test]
    fn test_composed_descriptors() {
        let mut factory = TypeFactory::new();
        let element = factory.add_boolean_type();
        let array = factory.add_array_type(element);

        let mut properties = IndexMap::new();
        properties.insert(
            "enabled".to_string(),
            ObjectProperty {
                ty: array,
                flags: PropertyFlags::REQUIRED,
                description: None,
            },
        );
        let object = factory.add_object_type("settings", properties, None);

        let Type::Object(obj) = factory.get(object) else {
            panic!("expected an object descriptor");
        };
        assert_eq!(obj.name, "settings");
        let Type::Array { element } = factory.get(obj.properties["enabled"].ty) else {
            panic!("expected an array descriptor");
        };
        assert_eq!(factory.get(*element), &Type::Boolean);
    }

    #[test]
    fn test_resource_descriptor() {
        let mut factory = TypeFactory::new();
        let body = factory.add_object_type("Test/widgets@2021-01-01", IndexMap::new(), None);
        let resource = factory.add_resource_type(
            "Test/widgets@2021-01-01",
            ScopeType::Unknown,
            body,
            ResourceFlags::NONE,
        );

        let Type::Resource(descriptor) = factory.get(resource) else {
            panic!("expected a resource descriptor");
        };
        assert_eq!(descriptor.name, "Test/widgets@2021-01-01");
        assert_eq!(descriptor.scope_type, ScopeType::Unknown);
        assert_eq!(descriptor.body, body);
        assert!(descriptor.flags.is_none());
    }
}
