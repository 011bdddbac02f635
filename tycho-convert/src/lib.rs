//! Schema-to-type-descriptor conversion.
//!
//! The conversion engine walks the schema tree of every (resource type,
//! API version) pair in a manifest and registers an equivalent descriptor
//! tree in a [`tycho_types::TypeFactory`], wrapping each pair's
//! properties in the fixed resource body.
//!
//! # Architecture
//!
//! ```text
//! ResourceProvider → convert_manifest → TypeFactory (descriptors) + Vec<TypeRef> (resources)
//! ```
//!
//! Conversion is a single synchronous pass: it either completes with the
//! full descriptor set, or aborts on the first malformed schema node.

mod convert;
mod error;

pub use convert::{
    convert_manifest, convert_object_properties, convert_resource_type, convert_schema,
};
pub use error::{Result, SchemaError};
