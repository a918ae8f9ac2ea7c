//! Prints a built GraphQL [`Schema`] as a deterministic SDL document,
//! joining each type back to the schema-directive metadata that the bare
//! type system does not carry.

pub mod metadata;
mod named_ref;
pub mod printer;
pub mod schema;
mod str_converters;
pub mod types;
mod value;

pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use printer::print_schema;
pub use printer::SchemaPrinter;
pub use schema::Schema;
pub use str_converters::to_camel_case;
pub use value::Value;
