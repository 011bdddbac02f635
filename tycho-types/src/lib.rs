//! Type descriptor graph for the tycho manifest compiler.
//!
//! This crate provides the normalized type model produced by manifest
//! conversion, the append-only store that assigns stable references to
//! descriptors, and the writers for the on-disk artifacts.
//!
//! # Architecture
//!
//! ```text
//! manifest (YAML) → tycho-manifest (parsing) → tycho-convert → tycho-types (graph + artifacts)
//! ```
//!
//! Descriptors are composed by reference: every `add_*` call on
//! [`TypeFactory`] appends a descriptor and returns a [`TypeRef`] that
//! stays valid for the lifetime of the factory. Descriptors are never
//! mutated after creation.

mod factory;
mod flags;
mod index;
mod markdown;
mod types;

pub use factory::TypeFactory;
pub use flags::{PropertyFlags, ResourceFlags};
pub use index::{TypeIndex, write_index_json, write_types_json};
pub use markdown::write_index_markdown;
pub use types::{ObjectProperty, ObjectType, ResourceDescriptor, ScopeType, Type, TypeRef};
