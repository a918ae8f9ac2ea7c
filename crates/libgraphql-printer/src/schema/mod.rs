mod operation_kind;
mod schema;
mod schema_builder;
mod type_validation_error;

pub use operation_kind::OperationKind;
pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use type_validation_error::TypeValidationError;
