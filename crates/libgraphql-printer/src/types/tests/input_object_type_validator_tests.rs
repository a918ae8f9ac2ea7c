use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn validation_errors(builder: TypesMapBuilder) -> Vec<TypeValidationError> {
    match builder.into_types_map() {
        Ok(_) => vec![],
        Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
        Err(err) => panic!("unexpected error: {err:?}"),
    }
}

#[test]
fn basic_flat_input_object_type_validates() -> Result<()> {
    let mut builder = TypesMapBuilder::new();
    builder.add_new_type(
        InputObjectType::new("TestInputObject")
            .with_field(InputField::new("field1", TypeAnnotation::named("Int")))
            .with_field(InputField::new("field2", TypeAnnotation::named("Int").non_null()))
            .into()
    )?;

    assert_eq!(validation_errors(builder), vec![]);

    Ok(())
}

#[test]
fn input_field_with_undefined_type() -> Result<()> {
    let mut builder = TypesMapBuilder::new();
    builder.add_new_type(
        InputObjectType::new("TestInputObject")
            .with_field(InputField::new("field1", TypeAnnotation::named("Missing")))
            .into()
    )?;

    assert_eq!(validation_errors(builder), vec![
        TypeValidationError::UndefinedTypeName {
            undefined_type_name: "Missing".to_string(),
        },
    ]);

    Ok(())
}

#[test]
fn input_field_with_object_type() -> Result<()> {
    let mut builder = TypesMapBuilder::new();
    builder.add_new_type(ObjectType::new("User").into())?;
    builder.add_new_type(
        InputObjectType::new("TestInputObject")
            .with_field(InputField::new("user", TypeAnnotation::named("User")))
            .into()
    )?;

    assert_eq!(validation_errors(builder), vec![
        TypeValidationError::InvalidInputFieldWithOutputType {
            field_name: "user".to_string(),
            invalid_type_name: "User".to_string(),
            parent_type_name: "TestInputObject".to_string(),
        },
    ]);

    Ok(())
}

#[test]
fn nullable_self_reference_validates() -> Result<()> {
    let mut builder = TypesMapBuilder::new();
    builder.add_new_type(
        InputObjectType::new("Node")
            .with_field(InputField::new("next", TypeAnnotation::named("Node")))
            .into()
    )?;

    assert_eq!(validation_errors(builder), vec![]);

    Ok(())
}

#[test]
fn non_null_self_reference_is_a_cycle() -> Result<()> {
    let mut builder = TypesMapBuilder::new();
    builder.add_new_type(
        InputObjectType::new("Node")
            .with_field(InputField::new("next", TypeAnnotation::named("Node").non_null()))
            .into()
    )?;

    assert_eq!(validation_errors(builder), vec![
        TypeValidationError::CircularInputFieldChain {
            circular_field_path: vec![
                "Node.next".to_string(),
                "Node".to_string(),
            ],
        },
    ]);

    Ok(())
}

#[test]
fn non_null_list_of_self_breaks_the_cycle() -> Result<()> {
    let mut builder = TypesMapBuilder::new();
    builder.add_new_type(
        InputObjectType::new("Node")
            .with_field(InputField::new(
                "children",
                TypeAnnotation::list(TypeAnnotation::named("Node").non_null()),
            ))
            .into()
    )?;

    assert_eq!(validation_errors(builder), vec![]);

    Ok(())
}

#[test]
fn two_type_cycle_is_reported_for_each_type() -> Result<()> {
    let mut builder = TypesMapBuilder::new();
    builder.add_new_type(
        InputObjectType::new("A")
            .with_field(InputField::new("b", TypeAnnotation::named("B").non_null()))
            .into()
    )?;
    builder.add_new_type(
        InputObjectType::new("B")
            .with_field(InputField::new("a", TypeAnnotation::named("A").non_null()))
            .into()
    )?;

    assert_eq!(validation_errors(builder), vec![
        TypeValidationError::CircularInputFieldChain {
            circular_field_path: vec![
                "A.b".to_string(),
                "B.a".to_string(),
                "A".to_string(),
            ],
        },
        TypeValidationError::CircularInputFieldChain {
            circular_field_path: vec![
                "B.a".to_string(),
                "A.b".to_string(),
                "B".to_string(),
            ],
        },
    ]);

    Ok(())
}
