use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaMetadataError {
    #[error(
        "The `@{directive_name}` schema directive declares more than one \
        argument named `{argument_name}`"
    )]
    DuplicateDirectiveArgument {
        argument_name: String,
        directive_name: String,
    },

    #[error("Multiple directive input types were registered with the name `{type_name}`")]
    DuplicateDirectiveInputType {
        type_name: String,
    },

    #[error("Multiple schema directives were registered with the name `@{directive_name}`")]
    DuplicateSchemaDirective {
        directive_name: String,
    },

    #[error("Metadata for the `{type_name}` type was registered more than once")]
    DuplicateTypeMetadata {
        type_name: String,
    },

    #[error("Directive input types must be input types, but `{type_name}` is not")]
    InvalidDirectiveInputType {
        type_name: String,
    },

    #[error("Schema directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        directive_name: String,
    },

    #[error("The `{declared_name}` schema directive declares no locations")]
    NoDirectiveLocations {
        declared_name: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
    },
}
