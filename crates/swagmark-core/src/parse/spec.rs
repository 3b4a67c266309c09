use indexmap::IndexMap;
use serde::Deserialize;

use super::operation::PathItem;
use super::parameter::Parameter;
use super::response::Response;
use super::schema::SchemaOrRef;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Info {
    pub title: String,

    pub description: Option<String>,

    pub version: String,

    #[serde(rename = "termsOfService")]
    pub terms_of_service: Option<String>,

    pub contact: Option<Contact>,

    pub license: Option<License>,
}

/// Contact information.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// License information.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct License {
    pub name: String,
    pub url: Option<String>,
}

/// Tag definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
}

/// Top-level Swagger 2.0 specification.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwaggerSpec {
    pub swagger: String,

    pub info: Info,

    pub host: Option<String>,

    #[serde(rename = "basePath")]
    pub base_path: Option<String>,

    #[serde(default)]
    pub schemes: Vec<String>,

    #[serde(default)]
    pub consumes: Vec<String>,

    #[serde(default)]
    pub produces: Vec<String>,

    /// A `null` path item deserializes to `None`.
    #[serde(default)]
    pub paths: IndexMap<String, Option<PathItem>>,

    #[serde(default)]
    pub definitions: IndexMap<String, SchemaOrRef>,

    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,

    #[serde(default)]
    pub responses: IndexMap<String, Response>,

    #[serde(default)]
    pub tags: Vec<Tag>,
}
