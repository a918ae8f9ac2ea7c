use crate::metadata::FieldMetadata;
use crate::metadata::SchemaDirective;
use crate::metadata::TypeMetadata;
use crate::types::GraphQLType;

/// Lookup interface the printer uses to correlate a bare
/// [`Schema`](crate::schema::Schema) with the metadata held outside of it.
pub trait SchemaAccessor {
    fn get_type_by_name(&self, type_name: &str) -> Option<&TypeMetadata>;

    /// Fields are looked up by the internal name recorded on the
    /// [`Field`](crate::types::Field) or
    /// [`InputField`](crate::types::InputField), not by their GraphQL name.
    fn get_field_by_name(
        &self,
        type_name: &str,
        internal_name: &str,
    ) -> Option<&FieldMetadata> {
        self.get_type_by_name(type_name)?.get_field(internal_name)
    }

    fn get_schema_directive(&self, directive_name: &str) -> Option<&SchemaDirective>;

    /// Input types only reachable through schema directive arguments. They
    /// are used to encode argument values but are never printed.
    fn get_directive_input_type(&self, type_name: &str) -> Option<&GraphQLType>;
}
