use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::DerefByNameError;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}

impl NamedTypeAnnotation {
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<&'schema GraphQLType, DerefByNameError> {
        self.type_ref.deref(schema)
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    /// Check if two named type annotations are definitionally equal (same
    /// type name and same nullability).
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.type_ref.name() == other.type_ref.name()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
