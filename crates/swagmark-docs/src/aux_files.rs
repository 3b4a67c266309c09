use std::fs;
use std::path::{Component, Path, PathBuf};

use log::{debug, info, warn};
use swagmark_core::markup::MarkupLanguage;

/// Derive the folder name used for an operation's hand-written files from its
/// summary: periods removed, spaces replaced by underscores, lowercased.
///
/// `"Get User Info."` → `"get_user_info"`
pub fn derive_key(summary: &str) -> String {
    summary.replace('.', "").replace(' ', "_").to_lowercase()
}

/// Looks up optional hand-written snippets below a root folder.
///
/// A snippet lives at `<root>/<subfolder>/<file_name><ext>`, where `<ext>` is
/// tried in the order given by the markup dialect.
#[derive(Debug, Clone)]
pub struct AuxFileResolver {
    root: PathBuf,
    extensions: &'static [&'static str],
    kind: &'static str,
}

impl AuxFileResolver {
    /// `kind` names the snippet in log messages (`"Description"`, `"Example"`).
    pub fn new(root: impl Into<PathBuf>, language: MarkupLanguage, kind: &'static str) -> Self {
        Self::with_extensions(root, language.file_extensions(), kind)
    }

    pub fn with_extensions(
        root: impl Into<PathBuf>,
        extensions: &'static [&'static str],
        kind: &'static str,
    ) -> Self {
        Self {
            root: root.into(),
            extensions,
            kind,
        }
    }

    /// Return the trimmed content of the first readable candidate, or `None`
    /// when no candidate exists or every read fails.
    pub fn resolve(&self, subfolder: &str, file_name: &str) -> Option<String> {
        let folder = self.folder(subfolder);
        for extension in self.extensions {
            let path = folder.join(format!("{file_name}{extension}"));
            if !path.is_file() {
                debug!("{} file is not readable: {}", self.kind, path.display());
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(content) => {
                    info!("{} file processed: {}", self.kind, path.display());
                    return Some(content.trim().to_string());
                }
                Err(e) => {
                    warn!(
                        "Failed to read {} file {}: {e}",
                        self.kind.to_lowercase(),
                        path.display()
                    );
                }
            }
        }
        debug!(
            "No {} file found with correct file name extension in folder: {}",
            self.kind.to_lowercase(),
            folder.display()
        );
        None
    }

    /// `subfolder` below the root. Only plain name components are kept, so
    /// a leading `/` or a `..` can never leave the root.
    fn folder(&self, subfolder: &str) -> PathBuf {
        let mut folder = self.root.clone();
        for component in Path::new(subfolder).components() {
            if let Component::Normal(name) = component {
                folder.push(name);
            }
        }
        folder
    }
}
