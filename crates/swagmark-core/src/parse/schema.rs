use indexmap::IndexMap;
use serde::Deserialize;

/// A reference or inline schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

/// A Swagger 2.0 schema object (the JSON Schema subset Swagger allows).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Schema {
    /// Kept as declared; Swagger also allows `file` here.
    #[serde(rename = "type")]
    pub schema_type: Option<String>,

    pub description: Option<String>,

    #[serde(rename = "default")]
    pub default_value: Option<serde_json::Value>,

    // Object properties
    #[serde(default)]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<AdditionalProperties>,

    // Array items
    pub items: Option<Box<SchemaOrRef>>,

    // Composition
    #[serde(rename = "allOf", default)]
    pub all_of: Vec<SchemaOrRef>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<serde_json::Value>,
}

/// `additionalProperties` can be a boolean or a schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<SchemaOrRef>),
}

/// The value description of a non-body parameter's array elements.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Items {
    #[serde(rename = "type")]
    pub item_type: Option<String>,

    pub items: Option<Box<Items>>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<serde_json::Value>,

    /// Some generators emit `$ref` inside non-body items.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
}
