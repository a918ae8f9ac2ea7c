use crate::metadata::ArgumentValue;
use indexmap::IndexMap;

/// An instance of a named record type (e.g. an input type declared in the
/// schema-building API) used as a directive argument value.
///
/// Fields are keyed by their GraphQL names and keep the order they were
/// added in.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Record {
    pub(crate) fields: IndexMap<String, ArgumentValue>,
    pub(crate) type_name: String,
}
impl Record {
    pub fn new(type_name: impl AsRef<str>) -> Self {
        Self {
            fields: IndexMap::new(),
            type_name: type_name.as_ref().to_string(),
        }
    }

    pub fn with_field(
        mut self,
        field_name: impl AsRef<str>,
        value: impl Into<ArgumentValue>,
    ) -> Self {
        self.fields.insert(field_name.as_ref().to_string(), value.into());
        self
    }

    pub fn fields(&self) -> &IndexMap<String, ArgumentValue> {
        &self.fields
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
