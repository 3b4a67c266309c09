use serde::Deserialize;

use super::schema::{Items, SchemaOrRef};

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    FormData,
    Body,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Path => "path",
            ParameterLocation::FormData => "formData",
            ParameterLocation::Body => "body",
        }
    }
}

/// An API parameter. Body parameters carry a `schema`; every other location
/// describes its value with `type`, `items` and `enum`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    pub schema: Option<SchemaOrRef>,

    #[serde(rename = "type")]
    pub param_type: Option<String>,

    pub items: Option<Box<Items>>,

    #[serde(rename = "default")]
    pub default_value: Option<serde_json::Value>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<serde_json::Value>,
}

/// A reference or inline parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Parameter(Box<Parameter>),
}
