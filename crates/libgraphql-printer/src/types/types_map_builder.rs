use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectTypeValidator;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::UnionTypeValidator;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_SCALARS: [GraphQLType; 5] = [
    GraphQLType::Bool,
    GraphQLType::Float,
    GraphQLType::ID,
    GraphQLType::Int,
    GraphQLType::String,
];

/// Collects the types of a schema under construction. The built-in scalars
/// are present from the start; everything else is checked as a whole by
/// [`TypesMapBuilder::into_types_map()`] once all types are known.
#[derive(Debug)]
pub struct TypesMapBuilder {
    types: IndexMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: BUILTIN_SCALARS.into_iter()
                .map(|type_| (type_.name().to_string(), type_))
                .collect(),
        }
    }

    pub fn add_new_type(&mut self, type_: GraphQLType) -> Result<()> {
        let type_name = type_.name().to_string();
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName { type_name });
        }
        if self.types.contains_key(&type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition { type_name });
        }

        log::trace!("adding {} type `{type_name}`", GraphQLTypeKind::from(&type_).name());
        self.types.insert(type_name, type_);
        Ok(())
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    /// Validates every collected type against the others and hands back the
    /// finished map, in insertion order.
    pub fn into_types_map(self) -> Result<IndexMap<String, GraphQLType>> {
        let errors = self.types.values()
            .flat_map(|type_| validate_type(type_, &self.types))
            .collect::<Vec<_>>();
        if errors.is_empty() {
            Ok(self.types)
        } else {
            Err(SchemaBuildError::TypeValidationErrors { errors })
        }
    }
}
impl Default for TypesMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_type(
    type_: &GraphQLType,
    types: &IndexMap<String, GraphQLType>,
) -> Vec<TypeValidationError> {
    match type_ {
        GraphQLType::InputObject(input_type) =>
            InputObjectTypeValidator::new(input_type, types).validate(),
        GraphQLType::Interface(iface) =>
            ObjectOrInterfaceTypeValidator::new(&iface.0, types).validate(),
        GraphQLType::Object(object_type) =>
            ObjectOrInterfaceTypeValidator::new(&object_type.0, types).validate(),
        GraphQLType::Union(union_type) =>
            UnionTypeValidator::new(union_type, types).validate(),
        GraphQLType::Bool
            | GraphQLType::Enum(_)
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::Scalar(_)
            | GraphQLType::String => vec![],
    }
}
