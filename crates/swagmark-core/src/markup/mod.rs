pub mod builder;

pub use builder::MarkupDocBuilder;

use serde::Deserialize;

/// Output markup dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupLanguage {
    #[default]
    Asciidoc,
    Markdown,
}

impl MarkupLanguage {
    /// Extensions recognized for hand-written files, in probe order.
    pub fn file_extensions(self) -> &'static [&'static str] {
        match self {
            MarkupLanguage::Asciidoc => &[".adoc", ".asciidoc", ".txt"],
            MarkupLanguage::Markdown => &[".md", ".markdown", ".txt"],
        }
    }

    /// Extension of generated documents, without the leading dot.
    pub fn primary_extension(self) -> &'static str {
        match self {
            MarkupLanguage::Asciidoc => "adoc",
            MarkupLanguage::Markdown => "md",
        }
    }

    /// Whether `<<Name>>` cross references resolve in this dialect.
    pub fn supports_cross_references(self) -> bool {
        matches!(self, MarkupLanguage::Asciidoc)
    }

    /// Link text pointing at a named section, or the bare name where the
    /// dialect has no cross references.
    pub fn cross_reference(self, name: &str) -> String {
        if self.supports_cross_references() {
            format!("<<{name}>>")
        } else {
            name.to_string()
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarkupLanguage::Asciidoc => "asciidoc",
            MarkupLanguage::Markdown => "markdown",
        }
    }
}
