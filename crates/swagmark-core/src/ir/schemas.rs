/// The display shape of a parameter, property, or response schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A primitive type name as declared (`string`, `integer`, `file`, ...).
    Primitive(String),
    /// A reference to a named definition.
    Ref(String),
    /// An array of the element type.
    Array(Box<TypeRef>),
    /// A string restricted to the listed values.
    Enum(Vec<String>),
    /// A shape the model does not describe.
    Unknown,
}

/// A named model from `definitions`.
#[derive(Debug, Clone)]
pub struct ApiDefinition {
    pub name: String,
    pub description: Option<String>,
    pub properties: Vec<ApiProperty>,
}

/// A property of a definition.
#[derive(Debug, Clone)]
pub struct ApiProperty {
    pub name: String,
    pub description: Option<String>,
    pub required: bool,
    pub property_type: TypeRef,
    pub default_value: Option<String>,
}
