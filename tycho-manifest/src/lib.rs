// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Resource-provider manifest model and YAML loading.
//!
//! A manifest names a resource provider and, per resource type and API
//! version, a JSON-Schema-like shape for the resource's properties. This
//! crate owns the parsed object model and manifest-level validation;
//! schema-shape rules are enforced later, during conversion.

mod error;
mod provider;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use provider::{ApiVersion, ManifestFile, ResourceProvider, ResourceType};
pub use schema::{AdditionalProperties, Schema, SchemaKind};
