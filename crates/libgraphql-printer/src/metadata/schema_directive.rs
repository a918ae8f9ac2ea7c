use crate::metadata::DirectiveApplication;
use crate::metadata::DirectiveArgument;
use crate::metadata::SchemaDirectiveBuilder;
use crate::types::DirectiveLocation;
use indexmap::IndexMap;

/// A directive definition derived from a declaration in the schema-building
/// API (rather than from SDL). Build one with [`SchemaDirective::builder()`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDirective {
    pub(crate) arguments: IndexMap<String, DirectiveArgument>,
    pub(crate) declared_name: String,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl SchemaDirective {
    /// Shorthand for [`SchemaDirectiveBuilder::new()`].
    pub fn builder(declared_name: impl AsRef<str>) -> SchemaDirectiveBuilder {
        SchemaDirectiveBuilder::new(declared_name)
    }

    /// Starts a [`DirectiveApplication`] of this directive with no values
    /// supplied.
    pub fn apply(&self) -> DirectiveApplication {
        DirectiveApplication::new(self.name.as_str())
    }

    /// Arguments keyed by their declared name, in declaration order.
    pub fn arguments(&self) -> &IndexMap<String, DirectiveArgument> {
        &self.arguments
    }

    pub fn declared_name(&self) -> &str {
        self.declared_name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Indicates if this directive declares at least one of `locations`.
    pub fn has_location_in(&self, locations: &[DirectiveLocation]) -> bool {
        self.locations.iter().any(|location| locations.contains(location))
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        self.locations.as_slice()
    }

    /// The GraphQL name of this directive (without the leading `@`).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
