use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input object fields may declare their types as a reference to an \
        input object type only if it does not create a circular chain of types \
        that cannot be broken with at least one nullable field. Unbroken \
        input-object cycle found: {}",
        circular_field_path.join(" -> "),
    )]
    CircularInputFieldChain {
        circular_field_path: Vec<String>,
    },

    #[error(
        "The `{type_name}` type declares that it implements \
        `{non_interface_type_name}`, which is not an interface type"
    )]
    ImplementsNonInterfaceType {
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements \
        `{undefined_interface_name}`, which is not defined in the schema"
    )]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter was declared with the \
        `{outputonly_type_name}` type, which is not an input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        outputonly_type_name: String,
        parameter_name: String,
    },

    #[error(
        "The `{union_type_name}` union declares `{invalid_member_type_name}` \
        as a member, but union members must be object types (found a {} type)",
        invalid_member_type_kind.name(),
    )]
    InvalidUnionMemberTypeKind {
        invalid_member_type_kind: GraphQLTypeKind,
        invalid_member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface \
        but does not define its `{field_name}` field"
    )]
    MissingInterfaceSpecifiedField {
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error("Reference to an undefined type: `{undefined_type_name}`")]
    UndefinedTypeName {
        undefined_type_name: String,
    },
}
