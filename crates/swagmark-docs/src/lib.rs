//! Markup document rendering for a parsed Swagger model.

pub mod aux_files;
pub mod definitions;
pub mod generator;
pub mod overview;
pub mod paths;
pub mod type_formatter;

pub use generator::{DocsGenerator, RenderOptions};
