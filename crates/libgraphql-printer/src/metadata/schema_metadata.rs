use crate::metadata::FieldMetadata;
use crate::metadata::SchemaAccessor;
use crate::metadata::SchemaDirective;
use crate::metadata::SchemaMetadataError;
use crate::metadata::TypeMetadata;
use crate::types::GraphQLType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaMetadataError>;

/// A registry of schema directives, per-type metadata and directive input
/// types.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaMetadata {
    directive_input_types: IndexMap<String, GraphQLType>,
    schema_directives: IndexMap<String, SchemaDirective>,
    types: IndexMap<String, TypeMetadata>,
}
impl SchemaMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an input type that is only reachable through schema
    /// directive arguments.
    pub fn add_directive_input_type(
        mut self,
        type_: impl Into<GraphQLType>,
    ) -> Result<Self> {
        let type_ = type_.into();
        let type_name = type_.name().to_string();
        if !type_.is_input_type() {
            return Err(SchemaMetadataError::InvalidDirectiveInputType {
                type_name,
            });
        }
        if self.directive_input_types.contains_key(&type_name) {
            return Err(SchemaMetadataError::DuplicateDirectiveInputType {
                type_name,
            });
        }
        self.directive_input_types.insert(type_name, type_);
        Ok(self)
    }

    pub fn add_schema_directive(mut self, directive: SchemaDirective) -> Result<Self> {
        if self.schema_directives.contains_key(directive.name()) {
            return Err(SchemaMetadataError::DuplicateSchemaDirective {
                directive_name: directive.name().to_string(),
            });
        }
        self.schema_directives.insert(directive.name().to_string(), directive);
        Ok(self)
    }

    pub fn add_type(mut self, type_metadata: TypeMetadata) -> Result<Self> {
        if self.types.contains_key(type_metadata.name()) {
            return Err(SchemaMetadataError::DuplicateTypeMetadata {
                type_name: type_metadata.name().to_string(),
            });
        }
        self.types.insert(type_metadata.name().to_string(), type_metadata);
        Ok(self)
    }

    pub fn schema_directives(&self) -> &IndexMap<String, SchemaDirective> {
        &self.schema_directives
    }

    pub fn types(&self) -> &IndexMap<String, TypeMetadata> {
        &self.types
    }
}
impl SchemaAccessor for SchemaMetadata {
    fn get_type_by_name(&self, type_name: &str) -> Option<&TypeMetadata> {
        self.types.get(type_name)
    }

    fn get_field_by_name(
        &self,
        type_name: &str,
        internal_name: &str,
    ) -> Option<&FieldMetadata> {
        self.types.get(type_name)?.get_field(internal_name)
    }

    fn get_schema_directive(&self, directive_name: &str) -> Option<&SchemaDirective> {
        self.schema_directives.get(directive_name)
    }

    fn get_directive_input_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.directive_input_types.get(type_name)
    }
}
