//! End-to-end conversion tests: YAML manifest in, descriptor graph out.

use std::str::FromStr;

use tycho_convert::convert_manifest;
use tycho_manifest::ResourceProvider;
use tycho_types::{PropertyFlags, Type, TypeFactory, TypeRef};

fn convert(manifest: &str) -> (TypeFactory, Vec<TypeRef>) {
    let provider = ResourceProvider::from_str(manifest).expect("failed to parse manifest");
    let mut factory = TypeFactory::new();
    let resource_types = convert_manifest(&provider, &mut factory).expect("conversion failed");
    (factory, resource_types)
}

#[test]
fn converts_a_realistic_manifest() {
    let (factory, resource_types) = convert(
        r#"
        name: MyCompany.Resources
        types:
          testResources:
            apiVersions:
              '2025-01-01-preview':
                schema:
                  type: object
                  properties:
                    application:
                      type: string
                      description: "The name of the application"
                    environment:
                      type: string
                      description: "The name of the environment"
                    status:
                      type: enum
                      enum: ['active', 'inactive', 'pending']
                    replicas:
                      type: integer
                    enabled:
                      type: boolean
                      readOnly: true
                    connections:
                      type: object
                      additionalProperties:
                        type: object
                        properties:
                          endpoint: { type: string }
                          status:
                            type: string
                            enum: ['up', 'down']
                  required: [application, environment]
                capabilities: ['Recipes']
        "#,
    );

    assert_eq!(resource_types.len(), 1);
    let Type::Resource(resource) = factory.get(resource_types[0]) else {
        panic!("expected a resource descriptor");
    };
    assert_eq!(
        resource.name,
        "MyCompany.Resources/testResources@2025-01-01-preview"
    );

    let Type::Object(body) = factory.get(resource.body) else {
        panic!("expected a body object");
    };
    let Type::Object(properties) = factory.get(body.properties["properties"].ty) else {
        panic!("expected a properties object");
    };

    assert_eq!(
        properties.properties.keys().collect::<Vec<_>>(),
        vec![
            "application",
            "environment",
            "status",
            "replicas",
            "enabled",
            "connections"
        ]
    );
    assert_eq!(
        properties.properties["application"].flags,
        PropertyFlags::REQUIRED
    );
    assert_eq!(
        properties.properties["application"].description.as_deref(),
        Some("The name of the application")
    );
    assert_eq!(
        properties.properties["enabled"].flags,
        PropertyFlags::READ_ONLY
    );
    assert_eq!(
        properties.properties["replicas"].flags,
        PropertyFlags::NONE
    );

    // The enum property is a union of its three literals.
    let Type::Union { elements } = factory.get(properties.properties["status"].ty) else {
        panic!("expected a union descriptor");
    };
    assert_eq!(elements.len(), 3);

    // connections is a map of objects with a constrained status string.
    let Type::Object(connections) = factory.get(properties.properties["connections"].ty) else {
        panic!("expected an object descriptor");
    };
    let additional = connections
        .additional_properties
        .expect("additionalProperties");
    let Type::Object(connection) = factory.get(additional) else {
        panic!("expected a connection object descriptor");
    };
    assert_eq!(connection.name, "connectionsAdditionalProperties");
    let Type::Union { elements } = factory.get(connection.properties["status"].ty) else {
        panic!("expected a union descriptor");
    };
    assert_eq!(elements.len(), 2);
}

#[test]
fn converts_every_type_and_version() {
    let (factory, resource_types) = convert(
        r#"
        name: MyCompany.Resources
        types:
          databases:
            defaultApiVersion: '2025-01-01'
            apiVersions:
              '2024-06-01': { schema: { type: object } }
              '2025-01-01': { schema: { type: object } }
          caches:
            apiVersions:
              '2025-01-01': { schema: { type: object } }
        "#,
    );

    let names: Vec<_> = resource_types
        .iter()
        .map(|&reference| match factory.get(reference) {
            Type::Resource(resource) => resource.name.clone(),
            other => panic!("expected a resource descriptor, got {:?}", other),
        })
        .collect();
    assert_eq!(
        names,
        vec![
            "MyCompany.Resources/databases@2024-06-01",
            "MyCompany.Resources/databases@2025-01-01",
            "MyCompany.Resources/caches@2025-01-01",
        ]
    );
}

#[test]
fn aborts_on_the_first_malformed_schema() {
    let provider = ResourceProvider::from_str(
        r#"
        name: MyCompany.Resources
        types:
          testResources:
            apiVersions:
              '2025-01-01':
                schema:
                  type: object
                  properties:
                    metadata:
                      type: object
                      additionalProperties: true
        "#,
    )
    .expect("failed to parse manifest");

    let mut factory = TypeFactory::new();
    let err = convert_manifest(&provider, &mut factory).unwrap_err();
    assert_eq!(err.to_string(), "unsupported schema type 'true'");
}
