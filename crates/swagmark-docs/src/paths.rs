use heck::ToUpperCamelCase;
use log::{debug, info, warn};
use swagmark_core::config::GroupBy;
use swagmark_core::ir::{ApiDoc, ApiOperation, ApiParameter, group_by_tag};
use swagmark_core::markup::{MarkupDocBuilder, MarkupLanguage};

use crate::aux_files::{AuxFileResolver, derive_key};
use crate::generator::RenderOptions;
use crate::type_formatter::format_type;

const PATHS: &str = "Paths";
const RESOURCES: &str = "Resources";
const DESCRIPTION: &str = "Description";
const PARAMETERS: &str = "Parameters";
const RESPONSES: &str = "Responses";
const CONSUMES: &str = "Consumes";
const PRODUCES: &str = "Produces";
const TAGS: &str = "Tags";
const EXAMPLE_CURL: &str = "Example CURL request";
const EXAMPLE_REQUEST: &str = "Example HTTP request";
const EXAMPLE_RESPONSE: &str = "Example HTTP response";
const NO_CONTENT: &str = "No Content";
const PARAMETER: &str = "Parameter";

const DESCRIPTION_FILE_NAME: &str = "description";
const CURL_EXAMPLE_FILE_NAME: &str = "curl-request";
const REQUEST_EXAMPLE_FILE_NAME: &str = "http-request";
const RESPONSE_EXAMPLE_FILE_NAME: &str = "http-response";

/// Hand-written path descriptions live below this folder of the descriptions root.
pub const PATHS_DESCRIPTIONS_FOLDER: &str = "paths";

const PARAMETERS_HEADER: [&str; 6] = [
    "Type",
    "Name",
    "Description",
    "Required",
    "Schema",
    "Default",
];
const RESPONSES_HEADER: [&str; 3] = ["HTTP Code", "Description", "Schema"];

/// Example files in render order, with the heading each one gets.
const EXAMPLES: [(&str, &str); 3] = [
    (CURL_EXAMPLE_FILE_NAME, EXAMPLE_CURL),
    (REQUEST_EXAMPLE_FILE_NAME, EXAMPLE_REQUEST),
    (RESPONSE_EXAMPLE_FILE_NAME, EXAMPLE_RESPONSE),
];

const PATH_TITLE_LEVEL: usize = 2;
const PATH_SECTION_LEVEL: usize = 3;

/// Renders every operation of the model as its own section.
pub struct PathsDocument<'a> {
    doc: &'a ApiDoc,
    language: MarkupLanguage,
    group_by: GroupBy,
    examples: Option<AuxFileResolver>,
    descriptions: Option<AuxFileResolver>,
}

impl<'a> PathsDocument<'a> {
    pub fn new(doc: &'a ApiDoc, options: &RenderOptions) -> Self {
        let language = options.markup_language;

        let examples = options
            .examples_folder
            .as_ref()
            .map(|root| AuxFileResolver::new(root, language, "Example"));
        let descriptions = options.descriptions_folder.as_ref().map(|root| {
            AuxFileResolver::new(root.join(PATHS_DESCRIPTIONS_FOLDER), language, "Description")
        });

        if examples.is_some() {
            debug!("Include examples is enabled.");
        } else {
            debug!("Include examples is disabled.");
        }
        if descriptions.is_some() {
            debug!("Include hand-written descriptions is enabled.");
        } else {
            debug!("Include hand-written descriptions is disabled.");
        }

        Self {
            doc,
            language,
            group_by: options.paths_group_by,
            examples,
            descriptions,
        }
    }

    /// Append all path sections, grouped as configured. Nothing is written for
    /// a model without paths.
    pub fn build(&self, out: &mut MarkupDocBuilder) {
        if self.doc.paths.is_empty() {
            return;
        }

        match self.group_by {
            GroupBy::AsIs => {
                out.section_title(1, PATHS);
                for path in &self.doc.paths {
                    for op in &path.operations {
                        self.operation(out, op);
                    }
                }
            }
            GroupBy::ByTag => {
                out.section_title(1, RESOURCES);
                for group in group_by_tag(self.doc) {
                    out.section_title(2, &capitalize_words(group.name));
                    if let Some(description) = self
                        .doc
                        .tag(group.name)
                        .and_then(|t| t.description.as_deref())
                        .filter(|d| !d.trim().is_empty())
                    {
                        out.paragraph(description);
                    }
                    for op in group.operations {
                        self.operation(out, op);
                    }
                }
            }
        }
    }

    fn title_level(&self) -> usize {
        PATH_TITLE_LEVEL + self.group_by.heading_offset()
    }

    fn section_level(&self) -> usize {
        PATH_SECTION_LEVEL + self.group_by.heading_offset()
    }

    fn operation(&self, out: &mut MarkupDocBuilder, op: &ApiOperation) {
        self.title(out, op);
        self.description_section(out, op);
        self.parameters_section(out, op);
        self.responses_section(out, op);
        self.list_section(out, CONSUMES, &op.consumes);
        self.list_section(out, PRODUCES, &op.produces);
        if self.group_by == GroupBy::AsIs {
            self.list_section(out, TAGS, &op.tags);
        }
        self.examples_section(out, op);
    }

    /// The summary becomes the title with `METHOD path` listed below it;
    /// without a summary `METHOD path` is the title.
    fn title(&self, out: &mut MarkupDocBuilder, op: &ApiOperation) {
        let method_and_path = op.method_and_path();
        match op.non_blank_summary() {
            Some(summary) => {
                out.section_title(self.title_level(), summary);
                out.listing(&method_and_path);
            }
            None => {
                out.section_title(self.title_level(), &method_and_path);
            }
        }
        info!("Path processed: {method_and_path}");
    }

    fn description_section(&self, out: &mut MarkupDocBuilder, op: &ApiOperation) {
        let description = self
            .hand_written_description(op)
            .or_else(|| op.description.clone());
        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            out.section_title(self.section_level(), DESCRIPTION);
            out.paragraph(&description);
        }
    }

    fn hand_written_description(&self, op: &ApiOperation) -> Option<String> {
        let resolver = self.descriptions.as_ref()?;
        let Some(key) = operation_key(op) else {
            debug!(
                "Hand-written description cannot be read, because summary of operation is empty. \
                 Trying to use description from Swagger source."
            );
            return None;
        };
        let description = resolver.resolve(&key, DESCRIPTION_FILE_NAME);
        if description.is_none() {
            debug!(
                "Hand-written description cannot be read. \
                 Trying to use description from Swagger source."
            );
        }
        description
    }

    fn parameters_section(&self, out: &mut MarkupDocBuilder, op: &ApiOperation) {
        if op.parameters.is_empty() {
            return;
        }

        let rows: Vec<Vec<String>> = op
            .parameters
            .iter()
            .map(|param| {
                vec![
                    parameter_kind(param),
                    param.name.clone(),
                    self.parameter_description(op, param),
                    param.required.to_string(),
                    format_type(&param.param_type, self.language),
                    param.default_value.clone().unwrap_or_default(),
                ]
            })
            .collect();

        out.section_title(self.section_level(), PARAMETERS);
        out.table_with_header_row(&PARAMETERS_HEADER, &rows);
    }

    /// A hand-written file under `<key>/<parameter name>` wins over the
    /// parameter's own description.
    fn parameter_description(&self, op: &ApiOperation, param: &ApiParameter) -> String {
        if let Some(resolver) = &self.descriptions {
            match operation_key(op) {
                Some(key) if !param.name.trim().is_empty() => {
                    let folder = format!("{key}/{}", param.name);
                    if let Some(description) = resolver.resolve(&folder, DESCRIPTION_FILE_NAME) {
                        return description;
                    }
                    debug!(
                        "Hand-written description file cannot be read. \
                         Trying to use description from Swagger source."
                    );
                }
                _ => {
                    debug!(
                        "Hand-written description file cannot be read, because summary of \
                         operation or name of parameter is empty. Trying to use description \
                         from Swagger source."
                    );
                }
            }
        }
        param.description.clone().unwrap_or_default()
    }

    fn responses_section(&self, out: &mut MarkupDocBuilder, op: &ApiOperation) {
        if op.responses.is_empty() {
            return;
        }

        let rows: Vec<Vec<String>> = op
            .responses
            .iter()
            .map(|response| {
                let schema = response
                    .schema
                    .as_ref()
                    .map(|s| format_type(s, self.language))
                    .unwrap_or_else(|| NO_CONTENT.to_string());
                vec![response.code.clone(), response.description.clone(), schema]
            })
            .collect();

        out.section_title(self.section_level(), RESPONSES);
        out.table_with_header_row(&RESPONSES_HEADER, &rows);
    }

    fn list_section(&self, out: &mut MarkupDocBuilder, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        out.section_title(self.section_level(), title);
        out.unordered_list(items);
    }

    /// Curl, request and response examples are looked up independently under
    /// `<examples>/<key>/`.
    fn examples_section(&self, out: &mut MarkupDocBuilder, op: &ApiOperation) {
        let Some(resolver) = &self.examples else {
            return;
        };
        let Some(key) = operation_key(op) else {
            warn!(
                "Example file cannot be read, because summary of operation is empty: {}",
                op.method_and_path()
            );
            return;
        };

        for (file_name, title) in EXAMPLES {
            if let Some(example) = resolver.resolve(&key, file_name) {
                out.section_title(self.section_level(), title);
                out.paragraph(&example);
            }
        }
    }
}

/// The lookup key of an operation, when it has a summary to derive one from.
fn operation_key(op: &ApiOperation) -> Option<String> {
    op.non_blank_summary()
        .map(derive_key)
        .filter(|key| !key.is_empty())
}

/// Uppercase the first letter of every whitespace-separated word and leave
/// the rest of the word as written: `petStore` → `PetStore`, `API` → `API`.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `query` → `QueryParameter`, `formData` → `FormDataParameter`.
fn parameter_kind(param: &ApiParameter) -> String {
    format!("{}{PARAMETER}", param.location.as_str()).to_upper_camel_case()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use swagmark_core::ir::{ApiInfo, ApiPath, ApiResponse, ApiTag, HttpMethod, TypeRef};
    use swagmark_core::parse::parameter::ParameterLocation;

    use super::*;

    fn operation(method: HttpMethod, path: &str, summary: Option<&str>) -> ApiOperation {
        ApiOperation {
            method,
            path: path.to_string(),
            summary: summary.map(str::to_string),
            description: None,
            parameters: vec![],
            responses: vec![],
            consumes: vec![],
            produces: vec![],
            tags: vec![],
        }
    }

    fn api(paths: Vec<ApiPath>) -> ApiDoc {
        ApiDoc {
            info: ApiInfo {
                title: "Petstore".to_string(),
                description: None,
                version: "1.0".to_string(),
                terms_of_service: None,
                contact: None,
                license: None,
            },
            host: None,
            base_path: None,
            schemes: vec![],
            consumes: vec![],
            produces: vec![],
            tags: vec![ApiTag {
                name: "pets".to_string(),
                description: Some("Everything about your pets".to_string()),
            }],
            paths,
            definitions: vec![],
        }
    }

    fn single(op: ApiOperation) -> ApiDoc {
        let path = op.path.clone();
        api(vec![ApiPath {
            path,
            operations: vec![op],
        }])
    }

    fn render(doc: &ApiDoc, options: &RenderOptions) -> String {
        let mut out = MarkupDocBuilder::new(options.markup_language);
        PathsDocument::new(doc, options).build(&mut out);
        out.finish()
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Asserts `needles` occur in `haystack` in the given order.
    fn assert_in_order(haystack: &str, needles: &[&str]) {
        let mut from = 0;
        for needle in needles {
            match haystack[from..].find(needle) {
                Some(pos) => from += pos + needle.len(),
                None => panic!("{needle:?} not found in order in:\n{haystack}"),
            }
        }
    }

    #[test]
    fn test_summary_title_with_listing() {
        let doc = single(operation(HttpMethod::Get, "/pets", Some("List pets")));
        let out = render(&doc, &RenderOptions::default());
        assert_in_order(&out, &["== Paths", "=== List pets", "----\nGET /pets\n----"]);
    }

    #[test]
    fn test_blank_summary_title() {
        let doc = single(operation(HttpMethod::Delete, "/pets/{petId}", Some("   ")));
        let out = render(&doc, &RenderOptions::default());
        assert!(out.contains("=== DELETE /pets/{petId}\n"));
        assert!(!out.contains("----"));
    }

    #[test]
    fn test_parameter_table() {
        let mut op = operation(HttpMethod::Post, "/pets", Some("Add pet"));
        op.parameters = vec![
            ApiParameter {
                name: "limit".to_string(),
                location: ParameterLocation::Query,
                required: false,
                description: Some("Page size".to_string()),
                param_type: TypeRef::Primitive("integer".to_string()),
                default_value: Some("20".to_string()),
            },
            ApiParameter {
                name: "photo".to_string(),
                location: ParameterLocation::FormData,
                required: true,
                description: None,
                param_type: TypeRef::Primitive("file".to_string()),
                default_value: None,
            },
        ];
        let out = render(&single(op), &RenderOptions::default());
        assert_in_order(
            &out,
            &[
                "==== Parameters",
                "|Type|Name|Description|Required|Schema|Default\n",
                "|QueryParameter|limit|Page size|false|integer|20\n",
                "|FormDataParameter|photo||true|file|\n",
            ],
        );
    }

    #[test]
    fn test_empty_lists_render_nothing() {
        let doc = single(operation(HttpMethod::Get, "/pets", Some("List pets")));
        let out = render(&doc, &RenderOptions::default());
        for absent in [PARAMETERS, RESPONSES, CONSUMES, PRODUCES, TAGS, DESCRIPTION] {
            assert!(!out.contains(absent), "unexpected {absent} section in:\n{out}");
        }
    }

    #[test]
    fn test_response_without_schema() {
        let mut op = operation(HttpMethod::Delete, "/pets/{petId}", None);
        op.responses = vec![ApiResponse {
            code: "204".to_string(),
            description: "Pet deleted".to_string(),
            schema: None,
        }];
        let out = render(&single(op), &RenderOptions::default());
        assert!(out.contains("|204|Pet deleted|No Content\n"));
    }

    #[test]
    fn test_by_tag_grouping_and_depth() {
        let mut list = operation(HttpMethod::Get, "/pets", Some("List pets"));
        list.tags = vec!["pets".to_string(), "store".to_string()];
        list.produces = vec!["application/json".to_string()];
        let health = operation(HttpMethod::Get, "/health", Some("Health check"));
        let doc = api(vec![
            ApiPath {
                path: "/pets".to_string(),
                operations: vec![list],
            },
            ApiPath {
                path: "/health".to_string(),
                operations: vec![health],
            },
        ]);

        let options = RenderOptions {
            paths_group_by: GroupBy::ByTag,
            ..RenderOptions::default()
        };
        let out = render(&doc, &options);

        assert_in_order(
            &out,
            &[
                "== Resources",
                "=== Pets",
                "Everything about your pets",
                "==== List pets",
                "===== Produces",
                "=== Store",
                "==== List pets",
            ],
        );
        assert!(!out.contains("Health check"));
        // Tags are implied by placement.
        assert!(!out.contains("Tags"));
        assert!(!out.contains("== Paths"));
    }

    #[test]
    fn test_as_is_lists_tags() {
        let mut op = operation(HttpMethod::Get, "/pets", Some("List pets"));
        op.tags = vec!["pets".to_string()];
        let out = render(&single(op), &RenderOptions::default());
        assert_in_order(&out, &["==== Tags", "* pets"]);
    }

    #[test]
    fn test_hand_written_descriptions() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "paths/list_pets/description.adoc", "Hand-written text.\n");
        write(dir.path(), "paths/list_pets/limit/description.adoc", "Hand-written limit");

        let mut op = operation(HttpMethod::Get, "/pets", Some("List pets."));
        op.description = Some("From the document".to_string());
        op.parameters = vec![
            ApiParameter {
                name: "limit".to_string(),
                location: ParameterLocation::Query,
                required: false,
                description: Some("Declared limit".to_string()),
                param_type: TypeRef::Primitive("integer".to_string()),
                default_value: None,
            },
            ApiParameter {
                name: "offset".to_string(),
                location: ParameterLocation::Query,
                required: false,
                description: Some("Declared offset".to_string()),
                param_type: TypeRef::Primitive("integer".to_string()),
                default_value: None,
            },
        ];

        let options = RenderOptions {
            descriptions_folder: Some(dir.path().to_path_buf()),
            ..RenderOptions::default()
        };
        let out = render(&single(op), &options);

        assert_in_order(&out, &["==== Description", "Hand-written text."]);
        assert!(!out.contains("From the document"));
        assert!(out.contains("|limit|Hand-written limit|"));
        assert!(out.contains("|offset|Declared offset|"));
    }

    #[test]
    fn test_description_falls_back_without_override() {
        let dir = tempfile::tempdir().unwrap();
        let mut op = operation(HttpMethod::Get, "/pets", Some("List pets"));
        op.description = Some("From the document".to_string());

        let options = RenderOptions {
            descriptions_folder: Some(dir.path().to_path_buf()),
            ..RenderOptions::default()
        };
        let out = render(&single(op), &options);
        assert_in_order(&out, &["==== Description", "From the document"]);
    }

    #[test]
    fn test_examples_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "list_pets/curl-request.adoc", "curl http://localhost/pets");
        write(dir.path(), "list_pets/http-response.adoc", "HTTP/1.1 200 OK");

        let op = operation(HttpMethod::Get, "/pets", Some("List pets"));
        let options = RenderOptions {
            examples_folder: Some(dir.path().to_path_buf()),
            ..RenderOptions::default()
        };
        let out = render(&single(op), &options);

        assert_in_order(
            &out,
            &[
                "==== Example CURL request",
                "curl http://localhost/pets",
                "==== Example HTTP response",
                "HTTP/1.1 200 OK",
            ],
        );
        assert!(!out.contains(EXAMPLE_REQUEST));
    }

    #[test]
    fn test_no_examples_without_summary() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "curl-request.adoc", "curl http://localhost/pets");

        let op = operation(HttpMethod::Get, "/pets", None);
        let options = RenderOptions {
            examples_folder: Some(dir.path().to_path_buf()),
            ..RenderOptions::default()
        };
        let out = render(&single(op), &options);
        assert!(!out.contains("Example"));
    }

    #[test]
    fn test_parameter_kind() {
        let param = |location| ApiParameter {
            name: "p".to_string(),
            location,
            required: false,
            description: None,
            param_type: TypeRef::Unknown,
            default_value: None,
        };
        assert_eq!(parameter_kind(&param(ParameterLocation::Query)), "QueryParameter");
        assert_eq!(parameter_kind(&param(ParameterLocation::Path)), "PathParameter");
        assert_eq!(parameter_kind(&param(ParameterLocation::Body)), "BodyParameter");
        assert_eq!(
            parameter_kind(&param(ParameterLocation::FormData)),
            "FormDataParameter"
        );
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("pets"), "Pets");
        assert_eq!(capitalize_words("petStore"), "PetStore");
        assert_eq!(capitalize_words("pet_store"), "Pet_store");
        assert_eq!(capitalize_words("OAuth"), "OAuth");
        assert_eq!(capitalize_words("API"), "API");
        assert_eq!(capitalize_words("user accounts"), "User Accounts");
    }

    #[test]
    fn test_by_tag_headings_keep_tag_spelling() {
        let tagged = |tag: &str, summary: &str| {
            let mut op = operation(HttpMethod::Get, "/things", Some(summary));
            op.tags = vec![tag.to_string()];
            op
        };
        let doc = api(vec![ApiPath {
            path: "/things".to_string(),
            operations: vec![
                tagged("OAuth", "Login"),
                tagged("petStore", "Camel"),
                tagged("pet_store", "Snake"),
                tagged("API", "Acronym"),
            ],
        }]);
        let options = RenderOptions {
            paths_group_by: GroupBy::ByTag,
            ..RenderOptions::default()
        };
        let out = render(&doc, &options);

        assert_in_order(
            &out,
            &["=== OAuth\n", "=== PetStore\n", "=== Pet_store\n", "=== API\n"],
        );
    }
}
