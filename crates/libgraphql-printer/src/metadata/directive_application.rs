use crate::metadata::ArgumentValue;
use indexmap::IndexMap;

/// A use of a [`SchemaDirective`](crate::metadata::SchemaDirective) on a type
/// or field, along with the argument values supplied for it.
///
/// Values are keyed by each argument's declared name. Arguments with no
/// supplied value fall back to their declared default when printed.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveApplication {
    pub(crate) directive_name: String,
    pub(crate) values: IndexMap<String, ArgumentValue>,
}
impl DirectiveApplication {
    pub fn new(directive_name: impl AsRef<str>) -> Self {
        Self {
            directive_name: directive_name.as_ref().to_string(),
            values: IndexMap::new(),
        }
    }

    pub fn with_value(
        mut self,
        declared_arg_name: impl AsRef<str>,
        value: impl Into<ArgumentValue>,
    ) -> Self {
        self.values.insert(
            declared_arg_name.as_ref().to_string(),
            value.into(),
        );
        self
    }

    /// The GraphQL name of the applied directive.
    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    pub fn value(&self, declared_arg_name: &str) -> Option<&ArgumentValue> {
        self.values.get(declared_arg_name)
    }

    pub fn values(&self) -> &IndexMap<String, ArgumentValue> {
        &self.values
    }
}
