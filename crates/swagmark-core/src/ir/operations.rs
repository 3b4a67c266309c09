use std::fmt;

use super::schemas::TypeRef;
use crate::parse::parameter::ParameterLocation;

/// HTTP method of a Swagger 2.0 operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Head,
    Post,
    Delete,
    Patch,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved API operation, identified by method and path.
#[derive(Debug, Clone)]
pub struct ApiOperation {
    pub method: HttpMethod,
    pub path: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub parameters: Vec<ApiParameter>,
    pub responses: Vec<ApiResponse>,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
    pub tags: Vec<String>,
}

impl ApiOperation {
    /// `"GET /pets"`.
    pub fn method_and_path(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// The summary, if it contains anything besides whitespace.
    pub fn non_blank_summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// A resolved parameter of any location.
#[derive(Debug, Clone)]
pub struct ApiParameter {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub description: Option<String>,
    pub param_type: TypeRef,
    pub default_value: Option<String>,
}

/// A resolved response. `code` is the status code as written, or `default`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub code: String,
    pub description: String,
    pub schema: Option<TypeRef>,
}
