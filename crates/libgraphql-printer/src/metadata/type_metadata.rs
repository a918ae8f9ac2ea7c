use crate::metadata::DirectiveApplication;
use crate::metadata::FieldMetadata;
use indexmap::IndexMap;

/// Metadata for a single object or input object type, keyed by the type's
/// GraphQL name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeMetadata {
    pub(crate) directives: Vec<DirectiveApplication>,
    pub(crate) extend: bool,
    pub(crate) fields: IndexMap<String, FieldMetadata>,
    pub(crate) is_input: bool,
    pub(crate) name: String,
}
impl TypeMetadata {
    /// Metadata for an input object type.
    pub fn input(name: impl AsRef<str>) -> Self {
        Self::new(name.as_ref(), true)
    }

    /// Metadata for an object (or interface) type.
    pub fn object(name: impl AsRef<str>) -> Self {
        Self::new(name.as_ref(), false)
    }

    fn new(name: &str, is_input: bool) -> Self {
        Self {
            directives: vec![],
            extend: false,
            fields: IndexMap::new(),
            is_input,
            name: name.to_string(),
        }
    }

    /// Marks the type as an extension of a type defined elsewhere. Printed
    /// with a leading `extend`.
    pub fn extend(mut self) -> Self {
        self.extend = true;
        self
    }

    pub fn with_directive(mut self, application: DirectiveApplication) -> Self {
        self.directives.push(application);
        self
    }

    pub fn with_field(mut self, field: FieldMetadata) -> Self {
        self.fields.insert(field.internal_name.to_owned(), field);
        self
    }

    /// Directive applications attached to the type itself, in attachment
    /// order.
    pub fn directives(&self) -> &[DirectiveApplication] {
        self.directives.as_slice()
    }

    pub fn fields(&self) -> &IndexMap<String, FieldMetadata> {
        &self.fields
    }

    pub fn get_field(&self, internal_name: &str) -> Option<&FieldMetadata> {
        self.fields.get(internal_name)
    }

    pub fn is_extend(&self) -> bool {
        self.extend
    }

    pub fn is_input(&self) -> bool {
        self.is_input
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
