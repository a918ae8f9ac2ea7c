use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) description: Option<String>,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            description: None,
            members: IndexMap::new(),
            name: name.as_ref().to_string(),
        }
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn with_member(mut self, type_name: impl AsRef<str>) -> Self {
        let type_name = type_name.as_ref();
        self.members.insert(
            type_name.to_string(),
            NamedGraphQLTypeRef::new(type_name),
        );
        self
    }

    /// The description of this [`UnionType`].
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each [`GraphQLType`] defined as a member
    /// of this union.
    ///
    /// The order of this `Vec` retains the same ordering as the order the
    /// members were added to this union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// An ordered list of [`GraphQLType`]s defined as a member of this union.
    /// Members that do not resolve within `schema` are skipped.
    pub fn member_types<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema GraphQLType> {
        self.members.values()
            .filter_map(|type_ref| type_ref.deref(schema).ok())
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
