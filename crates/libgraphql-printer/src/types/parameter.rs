use crate::types::DeprecationState;
use crate::types::TypeAnnotation;
use crate::Value;

/// Represents an argument declared on a [`Field`](crate::types::Field) or on
/// a [`CustomDirective`](crate::types::CustomDirective).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(crate) default_value: Option<Value>,
    pub(crate) deprecation_state: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn new(name: impl AsRef<str>, type_annotation: TypeAnnotation) -> Self {
        Self {
            default_value: None,
            deprecation_state: DeprecationState::NotDeprecated,
            description: None,
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

    /// The literal this [`Parameter`] falls back to when omitted.
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation_state
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
