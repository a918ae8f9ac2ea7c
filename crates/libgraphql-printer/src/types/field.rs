use crate::types::DeprecationState;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) deprecation_state: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) internal_name: Option<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn new(name: impl AsRef<str>, type_annotation: TypeAnnotation) -> Self {
        Self {
            deprecation_state: DeprecationState::NotDeprecated,
            description: None,
            internal_name: None,
            name: name.as_ref().to_string(),
            parameters: IndexMap::new(),
            type_annotation,
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

    /// Records the name this field was declared with in the API that built
    /// the schema. Metadata (e.g. schema directives) is looked up by this
    /// name rather than by the GraphQL field name.
    pub fn with_internal_name(mut self, internal_name: impl AsRef<str>) -> Self {
        self.internal_name = Some(internal_name.as_ref().to_string());
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.insert(parameter.name.to_owned(), parameter);
        self
    }

    /// The [`DeprecationState`] of this [`Field`].
    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation_state
    }

    /// The description of this [`Field`].
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name this [`Field`] was declared with by the schema-building API,
    /// if it was recorded.
    pub fn internal_name(&self) -> Option<&str> {
        self.internal_name.as_deref()
    }

    /// The name of this [`Field`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`Parameter`]s accepted by this [`Field`], in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The [`TypeAnnotation`] of this [`Field`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
