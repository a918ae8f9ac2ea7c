use crate::metadata::SchemaAccessor;
use crate::metadata::TypeMetadata;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// Everything a single print call reads from.
#[derive(Clone, Copy)]
pub(super) struct PrintContext<'a> {
    pub accessor: Option<&'a dyn SchemaAccessor>,
    pub schema: &'a Schema,
}
impl<'a> PrintContext<'a> {
    /// Resolves a named input type, falling back to the input types that are
    /// only reachable from schema directive arguments.
    pub fn lookup_input_type(&self, type_name: &str) -> Option<&'a GraphQLType> {
        self.schema.lookup_type(type_name).or_else(|| {
            self.accessor?.get_directive_input_type(type_name)
        })
    }

    pub fn type_metadata(&self, type_name: &str) -> Option<&'a TypeMetadata> {
        self.accessor?.get_type_by_name(type_name)
    }
}
