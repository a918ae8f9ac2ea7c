use crate::metadata::ArgumentValue;
use crate::types::TypeAnnotation;

/// Declares one argument of a schema directive before it is built.
///
/// `declared_name` is the name the argument was declared with by the
/// schema-building API. The printed name is derived from it unless
/// [`DirectiveArgumentSpec::with_name()`] overrides it.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveArgumentSpec {
    pub(super) declared_name: String,
    pub(super) default_value: ArgumentValue,
    pub(super) description: Option<String>,
    pub(super) name_override: Option<String>,
    pub(super) type_annotation: TypeAnnotation,
}
impl DirectiveArgumentSpec {
    pub fn new(
        declared_name: impl AsRef<str>,
        type_annotation: TypeAnnotation,
    ) -> Self {
        Self {
            declared_name: declared_name.as_ref().to_string(),
            default_value: ArgumentValue::Unset,
            description: None,
            name_override: None,
            type_annotation,
        }
    }

    pub fn with_default_value(mut self, value: impl Into<ArgumentValue>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// Print this argument as `name` verbatim.
    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        self.name_override = Some(name.as_ref().to_string());
        self
    }
}

/// One argument of a built [`SchemaDirective`](crate::metadata::SchemaDirective).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveArgument {
    pub(crate) declared_name: String,
    pub(crate) default_value: ArgumentValue,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl DirectiveArgument {
    /// The name this argument was declared with. Values in a
    /// [`DirectiveApplication`](crate::metadata::DirectiveApplication) are
    /// keyed by this name.
    pub fn declared_name(&self) -> &str {
        self.declared_name.as_str()
    }

    /// The value used when an application does not supply one.
    /// [`ArgumentValue::Unset`] means there is no default.
    pub fn default_value(&self) -> &ArgumentValue {
        &self.default_value
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The GraphQL name of this argument.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
