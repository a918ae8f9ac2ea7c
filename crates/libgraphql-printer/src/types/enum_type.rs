use crate::types::EnumValue;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            description: None,
            name: name.as_ref().to_string(),
            values: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// Appends `value` after any previously-added values. Re-adding a value
    /// name replaces the earlier definition in place.
    pub fn with_value(mut self, value: EnumValue) -> Self {
        self.values.insert(value.name.to_owned(), value);
        self
    }

    /// The description of this [`EnumType`].
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`EnumType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A map from ValueName -> [`EnumValue`], ordered the same as the values
    /// were added to this [`EnumType`].
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}
