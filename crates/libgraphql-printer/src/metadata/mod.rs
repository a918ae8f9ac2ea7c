//! Metadata that richer schema-building APIs attach to a
//! [`Schema`](crate::schema::Schema) but that a bare GraphQL type system has no
//! place for: schema directive definitions, the directive applications
//! attached to types and fields, and the `extend` flag.
//!
//! The printer reads this metadata through the [`SchemaAccessor`] trait.
//! [`SchemaMetadata`] is the registry implementation most callers will want.

mod argument_value;
mod directive_application;
mod directive_argument;
mod field_metadata;
mod record;
mod schema_accessor;
mod schema_directive;
mod schema_directive_builder;
mod schema_metadata;
mod schema_metadata_error;
mod type_metadata;

pub use argument_value::ArgumentValue;
pub use directive_application::DirectiveApplication;
pub use directive_argument::DirectiveArgument;
pub use directive_argument::DirectiveArgumentSpec;
pub use field_metadata::FieldMetadata;
pub use record::Record;
pub use schema_accessor::SchemaAccessor;
pub use schema_directive::SchemaDirective;
pub use schema_directive_builder::SchemaDirectiveBuilder;
pub use schema_metadata::SchemaMetadata;
pub use schema_metadata_error::SchemaMetadataError;
pub use type_metadata::TypeMetadata;

#[cfg(test)]
mod tests;
