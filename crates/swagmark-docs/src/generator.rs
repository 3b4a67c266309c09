use std::path::PathBuf;

use swagmark_core::config::{GroupBy, SwagmarkConfig};
use swagmark_core::ir::ApiDoc;
use swagmark_core::markup::{MarkupDocBuilder, MarkupLanguage};
use swagmark_core::{DocumentGenerator, GeneratedFile};

use crate::definitions::DefinitionsDocument;
use crate::overview::OverviewDocument;
use crate::paths::PathsDocument;

/// Render-wide settings shared by every document.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub markup_language: MarkupLanguage,
    pub paths_group_by: GroupBy,
    /// Enables example lookup when present.
    pub examples_folder: Option<PathBuf>,
    /// Enables hand-written description overrides when present.
    pub descriptions_folder: Option<PathBuf>,
}

impl RenderOptions {
    /// Take the render settings from a project config. Blank folder paths
    /// count as absent.
    pub fn from_config(config: &SwagmarkConfig) -> Self {
        Self {
            markup_language: config.markup_language,
            paths_group_by: config.paths_group_by,
            examples_folder: non_blank_path(config.examples_folder.as_deref()),
            descriptions_folder: non_blank_path(config.descriptions_folder.as_deref()),
        }
    }
}

/// A folder path, or `None` when it is absent or blank.
pub fn non_blank_path(path: Option<&str>) -> Option<PathBuf> {
    path.filter(|p| !p.trim().is_empty()).map(PathBuf::from)
}

/// Emits the overview, paths and definitions documents.
pub struct DocsGenerator;

impl DocumentGenerator for DocsGenerator {
    type Options = RenderOptions;

    fn generate(&self, doc: &ApiDoc, options: &RenderOptions) -> Vec<GeneratedFile> {
        let ext = options.markup_language.primary_extension();

        let mut files = vec![GeneratedFile {
            path: format!("overview.{ext}"),
            content: render_overview(doc, options),
        }];

        if !doc.paths.is_empty() {
            files.push(GeneratedFile {
                path: format!("paths.{ext}"),
                content: render_paths(doc, options),
            });
        }

        if !doc.definitions.is_empty() {
            files.push(GeneratedFile {
                path: format!("definitions.{ext}"),
                content: render_definitions(doc, options),
            });
        }

        files
    }
}

/// Render the overview document.
pub fn render_overview(doc: &ApiDoc, options: &RenderOptions) -> String {
    let mut out = MarkupDocBuilder::new(options.markup_language);
    OverviewDocument::new(doc).build(&mut out);
    out.finish()
}

/// Render the paths document.
pub fn render_paths(doc: &ApiDoc, options: &RenderOptions) -> String {
    let mut out = MarkupDocBuilder::new(options.markup_language);
    PathsDocument::new(doc, options).build(&mut out);
    out.finish()
}

/// Render the definitions document.
pub fn render_definitions(doc: &ApiDoc, options: &RenderOptions) -> String {
    let mut out = MarkupDocBuilder::new(options.markup_language);
    DefinitionsDocument::new(doc, options).build(&mut out);
    out.finish()
}
