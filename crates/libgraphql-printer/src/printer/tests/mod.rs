mod schema_directive_tests;

use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;

type TestResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn non_null(type_name: &str) -> TypeAnnotation {
    TypeAnnotation::named(type_name).non_null()
}

fn query_type() -> ObjectType {
    ObjectType::new("Query")
        .with_field(Field::new("hello", TypeAnnotation::named("String")))
}

fn query_only_schema() -> TestResult<Schema> {
    Ok(Schema::builder()
        .add_type(query_type())?
        .build()?)
}
