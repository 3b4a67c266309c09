use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::markup::MarkupLanguage;

/// Top-level project configuration loaded from `.swagmark.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwagmarkConfig {
    pub input: String,
    pub output: String,
    pub markup_language: MarkupLanguage,
    pub paths_group_by: GroupBy,
    /// Root of the `<operation>/<example>.<ext>` tree. Absent disables examples.
    pub examples_folder: Option<String>,
    /// Root of the hand-written description tree. Absent disables overrides.
    pub descriptions_folder: Option<String>,
}

impl Default for SwagmarkConfig {
    fn default() -> Self {
        Self {
            input: "swagger.yaml".to_string(),
            output: "docs/generated".to_string(),
            markup_language: MarkupLanguage::Asciidoc,
            paths_group_by: GroupBy::AsIs,
            examples_folder: None,
            descriptions_folder: None,
        }
    }
}

/// How path sections are grouped in the paths document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// One section per path, in document order.
    #[default]
    AsIs,
    /// One section per tag, with the tagged operations nested below it.
    ByTag,
}

impl GroupBy {
    /// Extra heading depth of everything below a path title. Grouping by tag
    /// inserts the tag section above the path level.
    pub fn heading_offset(self) -> usize {
        match self {
            GroupBy::AsIs => 0,
            GroupBy::ByTag => 1,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swagmark.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SwagmarkConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: SwagmarkConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# swagmark configuration
input: swagger.yaml
output: docs/generated
markup_language: asciidoc     # asciidoc | markdown
paths_group_by: as_is         # as_is | by_tag

# Hand-written snippets merged into the paths document. The key of an
# operation is its summary without periods, spaces replaced by underscores,
# lowercased ("Get User Info." -> get_user_info).
#
# examples_folder: docs/examples
#   <key>/curl-request.adoc, <key>/http-request.adoc, <key>/http-response.adoc
#
# descriptions_folder: docs/descriptions
#   paths/<key>/description.adoc
#   paths/<key>/<parameter>/description.adoc
#   definitions/<model>/description.adoc
#   definitions/<model>/<property>/description.adoc
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SwagmarkConfig::default();
        assert_eq!(config.input, "swagger.yaml");
        assert_eq!(config.output, "docs/generated");
        assert_eq!(config.markup_language, MarkupLanguage::Asciidoc);
        assert_eq!(config.paths_group_by, GroupBy::AsIs);
        assert!(config.examples_folder.is_none());
        assert!(config.descriptions_folder.is_none());
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: api/swagger.json
output: target/docs
markup_language: markdown
paths_group_by: by_tag
examples_folder: docs/examples
descriptions_folder: docs/descriptions
"#;
        let config: SwagmarkConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api/swagger.json");
        assert_eq!(config.output, "target/docs");
        assert_eq!(config.markup_language, MarkupLanguage::Markdown);
        assert_eq!(config.paths_group_by, GroupBy::ByTag);
        assert_eq!(config.examples_folder.as_deref(), Some("docs/examples"));
        assert_eq!(
            config.descriptions_folder.as_deref(),
            Some("docs/descriptions")
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "input: petstore.yaml\n";
        let config: SwagmarkConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "petstore.yaml");
        // Defaults applied
        assert_eq!(config.output, "docs/generated");
        assert_eq!(config.paths_group_by, GroupBy::AsIs);
    }

    #[test]
    fn test_default_content_parses() {
        let config: SwagmarkConfig =
            serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.markup_language, MarkupLanguage::Asciidoc);
    }

    #[test]
    fn test_heading_offset() {
        assert_eq!(GroupBy::AsIs.heading_offset(), 0);
        assert_eq!(GroupBy::ByTag.heading_offset(), 1);
    }

    #[test]
    fn test_missing_config_file() {
        let result = load_config(Path::new("does/not/exist/.swagmark.yaml")).unwrap();
        assert!(result.is_none());
    }
}
