//! Schema nodes: the nested shape description of a resource's properties.

use indexmap::IndexMap;
use serde::Deserialize;

/// One node in a property shape tree.
///
/// Which fields are meaningful depends on [`Schema::kind`]; the parser is
/// deliberately lenient so that shape rules (an `enum` needs values, an
/// `array` needs `items`, unknown kinds are rejected) surface during
/// conversion with a name hint attached, not as opaque parse failures.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Schema {
    /// The node kind tag.
    #[serde(rename = "type")]
    pub kind: SchemaKind,

    /// Human-readable description, carried through to the output.
    pub description: Option<String>,

    /// Named child properties (`object` nodes), in source order.
    #[serde(default)]
    pub properties: IndexMap<String, Schema>,

    /// Names of properties that must be supplied (`object` nodes).
    #[serde(default)]
    pub required: Vec<String>,

    /// Marks a property as set by the platform, never by the author.
    #[serde(default, rename = "readOnly")]
    pub read_only: bool,

    /// Allowed literal values (`enum` nodes, or `string` nodes with a
    /// constrained value set).
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<String>,

    /// Element shape (`array` nodes).
    pub items: Option<Box<Schema>>,

    /// Shape of values for properties not listed in `properties`
    /// (`object` nodes).
    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<AdditionalProperties>,
}

/// The tag of a schema node.
///
/// The closed set of supported kinds, plus a catch-all for tokens the
/// manifest format does not support (e.g. `any`). Unknown tokens parse so
/// that conversion can reject them with a proper diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    String,
    Integer,
    Boolean,
    Enum,
    Object,
    Array,
    #[serde(untagged)]
    Other(String),
}

/// The `additionalProperties` field of an `object` node.
///
/// The boolean shorthand (`additionalProperties: true`) parses but is not
/// convertible; it carries no schema to recurse into.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Schema(Box<Schema>),
    Allow(bool),
}
