pub mod config;
pub mod error;
pub mod ir;
pub mod markup;
pub mod parse;
pub mod transform;

/// A generated document with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for generators that produce documents from the resolved model.
pub trait DocumentGenerator {
    type Options;

    fn generate(&self, doc: &ir::ApiDoc, options: &Self::Options) -> Vec<GeneratedFile>;
}
