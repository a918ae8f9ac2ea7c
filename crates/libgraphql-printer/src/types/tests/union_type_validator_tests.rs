use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn union_of_object_types_validates() -> Result<()> {
    let mut builder = TypesMapBuilder::new();
    builder.add_new_type(ObjectType::new("Cat").into())?;
    builder.add_new_type(ObjectType::new("Dog").into())?;
    builder.add_new_type(UnionType::new("Pet").with_member("Cat").with_member("Dog").into())?;

    let types = builder.into_types_map()?;
    let union_type = types.get("Pet").and_then(|t| t.as_union()).unwrap();
    assert_eq!(union_type.member_type_names(), vec!["Cat", "Dog"]);

    Ok(())
}

#[test]
fn union_with_invalid_members() -> Result<()> {
    let mut builder = TypesMapBuilder::new();
    builder.add_new_type(ScalarType::new("Date").into())?;
    builder.add_new_type(
        UnionType::new("Thing")
            .with_member("Date")
            .with_member("Missing")
            .into()
    )?;

    let errors = match builder.into_types_map() {
        Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
        other => panic!("expected validation errors, got {other:?}"),
    };
    assert_eq!(errors, vec![
        TypeValidationError::InvalidUnionMemberTypeKind {
            invalid_member_type_kind: GraphQLTypeKind::Scalar,
            invalid_member_type_name: "Date".to_string(),
            union_type_name: "Thing".to_string(),
        },
        TypeValidationError::UndefinedTypeName {
            undefined_type_name: "Missing".to_string(),
        },
    ]);

    Ok(())
}
