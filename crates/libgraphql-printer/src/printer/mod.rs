//! Renders a [`Schema`](crate::schema::Schema) as SDL text.
//!
//! Types are printed sorted by name, each through a printer chosen by the
//! type's kind. Objects and input objects are joined with their
//! [metadata](crate::metadata) so that schema directives and the `extend`
//! flag make it into the output.

mod description;
mod directive_renderer;
mod field_printer;
mod literal_encoder;
mod print_context;
mod print_error;
mod schema_printer;
mod type_printer;
mod value_serializer;

use description::print_description;
use directive_renderer::print_deprecated;
use directive_renderer::print_directive_applications;
use directive_renderer::print_directive_definition;
use directive_renderer::FIELD_DIRECTIVE_LOCATIONS;
use field_printer::print_args;
use field_printer::print_block;
use field_printer::print_fields;
use field_printer::print_input_fields;
use literal_encoder::encode_literal;
use print_context::PrintContext;
pub use print_error::PrintError;
pub use schema_printer::print_schema;
pub use schema_printer::SchemaPrinter;
use type_printer::print_type;
pub use value_serializer::serialize_argument_value;
pub use value_serializer::SerializedValue;

#[cfg(test)]
mod tests;
