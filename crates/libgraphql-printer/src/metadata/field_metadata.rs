use crate::metadata::DirectiveApplication;

/// Metadata for a single field (or input field), keyed by the field's
/// internal name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldMetadata {
    pub(crate) directives: Vec<DirectiveApplication>,
    pub(crate) internal_name: String,
}
impl FieldMetadata {
    pub fn new(internal_name: impl AsRef<str>) -> Self {
        Self {
            directives: vec![],
            internal_name: internal_name.as_ref().to_string(),
        }
    }

    pub fn with_directive(mut self, application: DirectiveApplication) -> Self {
        self.directives.push(application);
        self
    }

    /// Directive applications attached to this field, in attachment order.
    pub fn directives(&self) -> &[DirectiveApplication] {
        self.directives.as_slice()
    }

    pub fn internal_name(&self) -> &str {
        self.internal_name.as_str()
    }
}
