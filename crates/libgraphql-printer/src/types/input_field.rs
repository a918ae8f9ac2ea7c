use crate::types::DeprecationState;
use crate::types::TypeAnnotation;
use crate::Value;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [crate::types::InputObjectType].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputField {
    pub(crate) default_value: Option<Value>,
    pub(crate) deprecation_state: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) internal_name: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    pub fn new(name: impl AsRef<str>, type_annotation: TypeAnnotation) -> Self {
        Self {
            default_value: None,
            deprecation_state: DeprecationState::NotDeprecated,
            description: None,
            internal_name: None,
            name: name.as_ref().to_string(),
            type_annotation,
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<Value>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_deprecation(mut self, reason: Option<&str>) -> Self {
        self.deprecation_state = DeprecationState::Deprecated(
            reason.map(|reason| reason.to_string()),
        );
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn with_internal_name(mut self, internal_name: impl AsRef<str>) -> Self {
        self.internal_name = Some(internal_name.as_ref().to_string());
        self
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation_state
    }

    /// The description of this [`InputField`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the input field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn internal_name(&self) -> Option<&str> {
        self.internal_name.as_deref()
    }

    /// The name of this [`InputField`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
