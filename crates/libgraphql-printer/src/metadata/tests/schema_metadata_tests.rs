use crate::metadata::FieldMetadata;
use crate::metadata::SchemaAccessor;
use crate::metadata::SchemaDirective;
use crate::metadata::SchemaMetadata;
use crate::metadata::SchemaMetadataError;
use crate::metadata::TypeMetadata;
use crate::types::DirectiveLocation;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, SchemaMetadataError>;

fn sensitive_directive() -> Result<SchemaDirective> {
    SchemaDirective::builder("Sensitive")
        .location(DirectiveLocation::FieldDefinition)
        .argument("reason", TypeAnnotation::named("String").non_null())
        .build()
}

#[test]
fn lookups_by_name() -> Result<()> {
    let sensitive = sensitive_directive()?;
    let metadata = SchemaMetadata::new()
        .add_schema_directive(sensitive.clone())?
        .add_type(
            TypeMetadata::object("Query")
                .with_field(
                    FieldMetadata::new("first_name")
                        .with_directive(sensitive.apply().with_value("reason", "GDPR"))
                )
        )?
        .add_directive_input_type(
            InputObjectType::new("SensitiveValue")
                .with_field(InputField::new("key", TypeAnnotation::named("String").non_null()))
        )?;

    assert_eq!(metadata.get_schema_directive("sensitive"), Some(&sensitive));
    assert!(metadata.get_schema_directive("Sensitive").is_none());

    let type_metadata = metadata.get_type_by_name("Query").unwrap();
    assert!(!type_metadata.is_extend());
    assert!(!type_metadata.is_input());

    let field_metadata = metadata.get_field_by_name("Query", "first_name").unwrap();
    assert_eq!(field_metadata.directives().len(), 1);
    assert!(metadata.get_field_by_name("Query", "firstName").is_none());
    assert!(metadata.get_field_by_name("User", "first_name").is_none());

    assert_eq!(
        metadata.get_directive_input_type("SensitiveValue").map(|t| t.name()),
        Some("SensitiveValue"),
    );

    Ok(())
}

#[test]
fn duplicates_are_rejected() -> Result<()> {
    let result = SchemaMetadata::new()
        .add_schema_directive(sensitive_directive()?)?
        .add_schema_directive(sensitive_directive()?);
    assert_eq!(result, Err(SchemaMetadataError::DuplicateSchemaDirective {
        directive_name: "sensitive".to_string(),
    }));

    let result = SchemaMetadata::new()
        .add_type(TypeMetadata::object("Query"))?
        .add_type(TypeMetadata::object("Query").extend());
    assert_eq!(result, Err(SchemaMetadataError::DuplicateTypeMetadata {
        type_name: "Query".to_string(),
    }));

    let result = SchemaMetadata::new()
        .add_directive_input_type(InputObjectType::new("Meta"))?
        .add_directive_input_type(InputObjectType::new("Meta"));
    assert_eq!(result, Err(SchemaMetadataError::DuplicateDirectiveInputType {
        type_name: "Meta".to_string(),
    }));

    Ok(())
}

#[test]
fn directive_input_types_must_be_input_types() {
    let result = SchemaMetadata::new().add_directive_input_type(ObjectType::new("User"));

    assert_eq!(result, Err(SchemaMetadataError::InvalidDirectiveInputType {
        type_name: "User".to_string(),
    }));
}

#[test]
fn type_metadata_flags() {
    let input = TypeMetadata::input("Input").extend();
    assert!(input.is_input());
    assert!(input.is_extend());
    assert_eq!(input.name(), "Input");
}
