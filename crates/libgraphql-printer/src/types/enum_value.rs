use crate::types::DeprecationState;

/// Represents a single value defined on an
/// [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub(crate) deprecation_state: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            deprecation_state: DeprecationState::NotDeprecated,
            description: None,
            name: name.as_ref().to_string(),
        }
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

    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation_state
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
