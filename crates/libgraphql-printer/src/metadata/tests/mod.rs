mod schema_directive_builder_tests;
mod schema_metadata_tests;
