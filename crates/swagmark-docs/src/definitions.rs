use log::{debug, info};
use swagmark_core::ir::{ApiDefinition, ApiDoc, ApiProperty};
use swagmark_core::markup::{MarkupDocBuilder, MarkupLanguage};

use crate::aux_files::AuxFileResolver;
use crate::generator::RenderOptions;
use crate::type_formatter::format_type;

const DEFINITIONS: &str = "Definitions";
const DESCRIPTION_FILE_NAME: &str = "description";

/// Hand-written definition descriptions live below this folder of the
/// descriptions root.
pub const DEFINITIONS_DESCRIPTIONS_FOLDER: &str = "definitions";

const PROPERTIES_HEADER: [&str; 5] = ["Name", "Description", "Required", "Schema", "Default"];

/// Renders every named model with its property table.
pub struct DefinitionsDocument<'a> {
    doc: &'a ApiDoc,
    language: MarkupLanguage,
    descriptions: Option<AuxFileResolver>,
}

impl<'a> DefinitionsDocument<'a> {
    pub fn new(doc: &'a ApiDoc, options: &RenderOptions) -> Self {
        let language = options.markup_language;
        let descriptions = options.descriptions_folder.as_ref().map(|root| {
            AuxFileResolver::new(
                root.join(DEFINITIONS_DESCRIPTIONS_FOLDER),
                language,
                "Description",
            )
        });
        Self {
            doc,
            language,
            descriptions,
        }
    }

    pub fn build(&self, out: &mut MarkupDocBuilder) {
        if self.doc.definitions.is_empty() {
            return;
        }
        out.section_title(1, DEFINITIONS);
        for definition in &self.doc.definitions {
            self.definition(out, definition);
        }
    }

    fn definition(&self, out: &mut MarkupDocBuilder, definition: &ApiDefinition) {
        out.section_title(2, &definition.name);

        let key = definition.name.to_lowercase();
        let description = self
            .hand_written(&key)
            .or_else(|| definition.description.clone());
        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            out.paragraph(&description);
        }

        if !definition.properties.is_empty() {
            let rows: Vec<Vec<String>> = definition
                .properties
                .iter()
                .map(|property| self.property_row(&key, property))
                .collect();
            out.table_with_header_row(&PROPERTIES_HEADER, &rows);
        }
        info!("Definition processed: {}", definition.name);
    }

    fn property_row(&self, key: &str, property: &ApiProperty) -> Vec<String> {
        let description = self
            .hand_written(&format!("{key}/{}", property.name))
            .or_else(|| property.description.clone())
            .unwrap_or_default();
        vec![
            property.name.clone(),
            description,
            property.required.to_string(),
            format_type(&property.property_type, self.language),
            property.default_value.clone().unwrap_or_default(),
        ]
    }

    fn hand_written(&self, folder: &str) -> Option<String> {
        let resolver = self.descriptions.as_ref()?;
        let description = resolver.resolve(folder, DESCRIPTION_FILE_NAME);
        if description.is_none() {
            debug!(
                "Hand-written description cannot be read. \
                 Trying to use description from Swagger source."
            );
        }
        description
    }
}
