mod deprecation_state;
mod directive;
mod directive_location;
mod enum_type;
mod enum_value;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod input_object_type_validator;
mod interface_type;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_or_interface_type_validator;
mod object_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod types_map_builder;
mod union_type;
mod union_type_validator;

pub use deprecation_state::DEFAULT_DEPRECATION_REASON;
pub use deprecation_state::DeprecationState;
pub(crate) use directive::BUILTIN_DIRECTIVE_NAMES;
pub use directive::CustomDirective;
pub use directive::Directive;
pub use directive::NamedDirectiveRef;
pub use directive_location::DirectiveLocation;
pub use enum_type::EnumType;
pub use enum_value::EnumValue;
pub use field::Field;
pub(crate) use graphql_type::INTROSPECTION_TYPE_NAMES;
pub use graphql_type::GraphQLType;
pub use graphql_type::NamedGraphQLTypeRef;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
use input_object_type_validator::InputObjectTypeValidator;
pub use interface_type::InterfaceType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
use union_type_validator::UnionTypeValidator;

#[cfg(test)]
mod tests;
