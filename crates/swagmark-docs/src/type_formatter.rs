use swagmark_core::ir::TypeRef;
use swagmark_core::markup::MarkupLanguage;

/// Rendered in place of a type the model does not describe.
pub const NOT_FOUND: &str = "NOT FOUND";

/// Qualifier appended to the element type of an array.
const ARRAY_QUALIFIER: &str = "array";

/// Map a `TypeRef` to its display string in the given dialect.
pub fn format_type(type_ref: &TypeRef, language: MarkupLanguage) -> String {
    match type_ref {
        TypeRef::Primitive(name) => name.clone(),
        TypeRef::Ref(name) => language.cross_reference(name),
        TypeRef::Array(inner) => {
            let inner_str = format_type(inner, language);
            format!("{inner_str} {ARRAY_QUALIFIER}")
        }
        TypeRef::Enum(values) => format!("enum ({})", values.join(", ")),
        TypeRef::Unknown => NOT_FOUND.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prim(name: &str) -> TypeRef {
        TypeRef::Primitive(name.to_string())
    }

    #[test]
    fn test_primitives() {
        assert_eq!(format_type(&prim("string"), MarkupLanguage::Asciidoc), "string");
        assert_eq!(format_type(&prim("integer"), MarkupLanguage::Markdown), "integer");
        assert_eq!(format_type(&prim("file"), MarkupLanguage::Asciidoc), "file");
    }

    #[test]
    fn test_ref() {
        let pet = TypeRef::Ref("Pet".to_string());
        assert_eq!(format_type(&pet, MarkupLanguage::Asciidoc), "<<Pet>>");
        assert_eq!(format_type(&pet, MarkupLanguage::Markdown), "Pet");
    }

    #[test]
    fn test_array() {
        let strings = TypeRef::Array(Box::new(prim("string")));
        assert_eq!(format_type(&strings, MarkupLanguage::Asciidoc), "string array");

        let pets = TypeRef::Array(Box::new(TypeRef::Ref("Pet".to_string())));
        assert_eq!(format_type(&pets, MarkupLanguage::Asciidoc), "<<Pet>> array");
        assert_eq!(format_type(&pets, MarkupLanguage::Markdown), "Pet array");
    }

    #[test]
    fn test_nested_array() {
        let matrix = TypeRef::Array(Box::new(TypeRef::Array(Box::new(prim("integer")))));
        assert_eq!(
            format_type(&matrix, MarkupLanguage::Markdown),
            "integer array array"
        );
    }

    #[test]
    fn test_enum() {
        let status = TypeRef::Enum(vec!["available".to_string(), "sold".to_string()]);
        assert_eq!(
            format_type(&status, MarkupLanguage::Asciidoc),
            "enum (available, sold)"
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(format_type(&TypeRef::Unknown, MarkupLanguage::Asciidoc), NOT_FOUND);
        let broken = TypeRef::Array(Box::new(TypeRef::Unknown));
        assert_eq!(
            format_type(&broken, MarkupLanguage::Markdown),
            "NOT FOUND array"
        );
    }
}
