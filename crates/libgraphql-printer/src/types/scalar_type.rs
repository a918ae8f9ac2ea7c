/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) specified_by_url: Option<String>,
}
impl ScalarType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            description: None,
            name: name.as_ref().to_string(),
            specified_by_url: None,
        }
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn with_specified_by_url(mut self, url: impl AsRef<str>) -> Self {
        self.specified_by_url = Some(url.as_ref().to_string());
        self
    }

    /// The description of this [`ScalarType`].
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of this [`ScalarType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The URL given to this scalar's `@specifiedBy` annotation.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }
}
