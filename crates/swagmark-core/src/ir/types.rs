use super::operations::ApiOperation;
use super::schemas::ApiDefinition;

/// A fully resolved, render-ready model of a Swagger document.
#[derive(Debug, Clone)]
pub struct ApiDoc {
    pub info: ApiInfo,
    pub host: Option<String>,
    pub base_path: Option<String>,
    pub schemes: Vec<String>,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
    pub tags: Vec<ApiTag>,
    pub paths: Vec<ApiPath>,
    pub definitions: Vec<ApiDefinition>,
}

impl ApiDoc {
    /// Look up a declared tag by name.
    pub fn tag(&self, name: &str) -> Option<&ApiTag> {
        self.tags.iter().find(|t| t.name == name)
    }

    /// Total number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.iter().map(|p| p.operations.len()).sum()
    }
}

/// API metadata.
#[derive(Debug, Clone)]
pub struct ApiInfo {
    pub title: String,
    pub description: Option<String>,
    pub version: String,
    pub terms_of_service: Option<String>,
    pub contact: Option<ApiContact>,
    pub license: Option<ApiLicense>,
}

#[derive(Debug, Clone)]
pub struct ApiContact {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiLicense {
    pub name: String,
    pub url: Option<String>,
}

/// A declared tag. Only used for section headers when grouping by tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTag {
    pub name: String,
    pub description: Option<String>,
}

/// A path and the operations declared on it, in method order.
#[derive(Debug, Clone)]
pub struct ApiPath {
    pub path: String,
    pub operations: Vec<ApiOperation>,
}
