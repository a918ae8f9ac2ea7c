use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PrintError {
    #[error(
        "`{annotated_item}` is annotated with `@{directive_name}`, but no \
        schema directive with that name is known to the schema's metadata"
    )]
    UndefinedSchemaDirective {
        annotated_item: String,
        directive_name: String,
    },
}
