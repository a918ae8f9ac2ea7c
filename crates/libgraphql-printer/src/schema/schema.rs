use crate::named_ref::DerefByNameError;
use crate::schema::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    pub(crate) description: Option<String>,
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, Directive>`] containing all directives
    /// defined within this [`Schema`].
    ///
    /// [^note] This map includes both directives defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in directives like
    /// `@deprecated`.
    pub fn all_directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// The description given to the schema itself.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Returns this [`Schema`]'s Mutation[^note] root operation type (if one
    /// was defined).
    ///
    /// [^note] GraphQL [defines an object type named "Mutation" as the
    /// _default_ Mutation type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but it is also possible to override this default. This method factors
    /// in any such override.
    pub fn mutation_type(&self) -> Option<Result<&GraphQLType, DerefByNameError>> {
        self.mutation_type.as_ref().map(|named_ref| named_ref.deref(self))
    }

    /// Returns this [`Schema`]'s Query root operation type.
    pub fn query_type(&self) -> Result<&GraphQLType, DerefByNameError> {
        self.query_type.deref(self)
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<Result<&GraphQLType, DerefByNameError>> {
        self.subscription_type.as_ref().map(|named_ref| named_ref.deref(self))
    }

    /// The name of the root type used for `operation_kind`, if this schema
    /// defines one.
    pub fn root_operation_type_name(
        &self,
        operation_kind: OperationKind,
    ) -> Option<&str> {
        match operation_kind {
            OperationKind::Mutation =>
                self.mutation_type.as_ref().map(|type_ref| type_ref.name()),
            OperationKind::Query =>
                Some(self.query_type.name()),
            OperationKind::Subscription =>
                self.subscription_type.as_ref().map(|type_ref| type_ref.name()),
        }
    }
}
