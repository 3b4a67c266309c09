use crate::ir::{ApiDefinition, ApiProperty, TypeRef};
use crate::parse::parameter::{Parameter, ParameterLocation};
use crate::parse::schema::{Items, Schema, SchemaOrRef};
use crate::parse::simple_ref;

/// Convert a parsed `SchemaOrRef` to a `TypeRef`.
pub fn schema_or_ref_to_type(schema_or_ref: &SchemaOrRef) -> TypeRef {
    match schema_or_ref {
        SchemaOrRef::Ref { ref_path } => TypeRef::Ref(simple_ref(ref_path).to_string()),
        SchemaOrRef::Schema(schema) => schema_to_type(schema),
    }
}

/// Convert a parsed `Schema` to a `TypeRef`.
pub fn schema_to_type(schema: &Schema) -> TypeRef {
    match schema.schema_type.as_deref() {
        Some("array") => match &schema.items {
            Some(items) => TypeRef::Array(Box::new(schema_or_ref_to_type(items))),
            None => TypeRef::Array(Box::new(TypeRef::Unknown)),
        },
        Some("string") if !schema.enum_values.is_empty() => {
            TypeRef::Enum(enum_names(&schema.enum_values))
        }
        Some(t) => TypeRef::Primitive(t.to_string()),
        None if !schema.properties.is_empty()
            || !schema.all_of.is_empty()
            || schema.additional_properties.is_some() =>
        {
            TypeRef::Primitive("object".to_string())
        }
        None => TypeRef::Unknown,
    }
}

/// Convert the `items` of a non-body array parameter to a `TypeRef`.
pub fn items_to_type(items: &Items) -> TypeRef {
    if let Some(ref_path) = &items.ref_path {
        return TypeRef::Ref(simple_ref(ref_path).to_string());
    }
    simple_type(
        items.item_type.as_deref(),
        items.items.as_deref(),
        &items.enum_values,
    )
}

/// Resolve the display type of a parameter. Body parameters are described by
/// their schema, all other locations by `type`/`items`/`enum`.
pub fn parameter_type(param: &Parameter) -> TypeRef {
    if param.location == ParameterLocation::Body {
        return param
            .schema
            .as_ref()
            .map(schema_or_ref_to_type)
            .unwrap_or(TypeRef::Unknown);
    }
    simple_type(
        param.param_type.as_deref(),
        param.items.as_deref(),
        &param.enum_values,
    )
}

fn simple_type(
    declared: Option<&str>,
    items: Option<&Items>,
    enum_values: &[serde_json::Value],
) -> TypeRef {
    match declared {
        Some("array") => match items {
            Some(items) => TypeRef::Array(Box::new(items_to_type(items))),
            None => TypeRef::Array(Box::new(TypeRef::Unknown)),
        },
        Some("string") if !enum_values.is_empty() => TypeRef::Enum(enum_names(enum_values)),
        Some(t) => TypeRef::Primitive(t.to_string()),
        None => TypeRef::Unknown,
    }
}

fn enum_names(values: &[serde_json::Value]) -> Vec<String> {
    values.iter().map(value_to_text).collect()
}

/// Render a JSON value as plain text: strings without quotes, everything else
/// as compact JSON.
pub fn value_to_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a named definition into an `ApiDefinition`. Inline `allOf`
/// members contribute their properties after the schema's own.
pub fn definition_to_model(name: &str, schema_or_ref: &SchemaOrRef) -> ApiDefinition {
    let SchemaOrRef::Schema(schema) = schema_or_ref else {
        return ApiDefinition {
            name: name.to_string(),
            description: None,
            properties: Vec::new(),
        };
    };

    let mut properties = collect_properties(schema);
    for member in &schema.all_of {
        if let SchemaOrRef::Schema(inline) = member {
            properties.extend(collect_properties(inline));
        }
    }

    ApiDefinition {
        name: name.to_string(),
        description: schema.description.clone(),
        properties,
    }
}

fn collect_properties(schema: &Schema) -> Vec<ApiProperty> {
    schema
        .properties
        .iter()
        .map(|(prop_name, prop)| {
            let (description, default_value) = match prop {
                SchemaOrRef::Schema(s) => (
                    s.description.clone(),
                    s.default_value.as_ref().map(value_to_text),
                ),
                SchemaOrRef::Ref { .. } => (None, None),
            };
            ApiProperty {
                name: prop_name.clone(),
                description,
                required: schema.required.contains(prop_name),
                property_type: schema_or_ref_to_type(prop),
                default_value,
            }
        })
        .collect()
}
