use super::non_null;
use super::TestResult;
use crate::metadata::ArgumentValue;
use crate::metadata::FieldMetadata;
use crate::metadata::Record;
use crate::metadata::SchemaDirective;
use crate::metadata::SchemaMetadata;
use crate::metadata::TypeMetadata;
use crate::print_schema;
use crate::printer::PrintError;
use crate::schema::Schema;
use crate::types::DirectiveLocation;
use crate::types::Field;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;

fn query_with_first_name() -> TestResult<Schema> {
    Ok(Schema::builder()
        .add_type(
            ObjectType::new("Query").with_field(
                Field::new("firstName", non_null("String"))
                    .with_internal_name("first_name")
            )
        )?
        .build()?)
}

fn first_name_metadata(
    directive: &SchemaDirective,
    reason: impl Into<ArgumentValue>,
) -> TestResult<SchemaMetadata> {
    Ok(SchemaMetadata::new()
        .add_schema_directive(directive.clone())?
        .add_type(
            TypeMetadata::object("Query").with_field(
                FieldMetadata::new("first_name")
                    .with_directive(directive.apply().with_value("reason", reason))
            )
        )?)
}

#[test]
fn field_directive() -> TestResult<()> {
    let sensitive = SchemaDirective::builder("Sensitive")
        .location(DirectiveLocation::FieldDefinition)
        .argument("reason", non_null("String"))
        .build()?;
    let schema = query_with_first_name()?;
    let metadata = first_name_metadata(&sensitive, "GDPR")?;

    assert_eq!(
        print_schema(&schema, &metadata)?,
        concat!(
            "type Query {\n",
            "  firstName: String! @sensitive(reason: \"GDPR\")\n",
            "}",
        ),
    );
    Ok(())
}

#[test]
fn directive_names_are_camel_cased() -> TestResult<()> {
    let sensitive = SchemaDirective::builder("SensitiveField")
        .location(DirectiveLocation::FieldDefinition)
        .argument("reason", non_null("String"))
        .build()?;
    let schema = query_with_first_name()?;
    let metadata = first_name_metadata(&sensitive, "GDPR")?;

    assert_eq!(
        print_schema(&schema, &metadata)?,
        concat!(
            "type Query {\n",
            "  firstName: String! @sensitiveField(reason: \"GDPR\")\n",
            "}",
        ),
    );
    Ok(())
}

#[test]
fn directives_on_types_fields_and_inputs() -> TestResult<()> {
    let meta_annot = TypeAnnotation::list(non_null("SensitiveValue"));
    let sensitive_data = SchemaDirective::builder("SensitiveData")
        .locations([DirectiveLocation::Object, DirectiveLocation::FieldDefinition])
        .argument("reason", non_null("String"))
        .argument_with_default("meta", meta_annot.clone(), ArgumentValue::Unset)
        .build()?;
    let sensitive_input = SchemaDirective::builder("SensitiveInput")
        .location(DirectiveLocation::InputObject)
        .argument("reason", non_null("String"))
        .argument_with_default("meta", meta_annot, ArgumentValue::Unset)
        .build()?;

    let schema = Schema::builder()
        .add_type(
            InputObjectType::new("Input").with_field(
                InputField::new("firstName", non_null("String"))
                    .with_internal_name("first_name")
            )
        )?
        .add_type(
            ObjectType::new("User")
                .with_field(
                    Field::new("firstName", non_null("String"))
                        .with_internal_name("first_name")
                )
                .with_field(
                    Field::new("phone", non_null("String"))
                        .with_internal_name("phone")
                )
                .with_field(
                    Field::new("phoneShareAccepted", non_null("Boolean"))
                        .with_internal_name("phone_share_accepted")
                )
        )?
        .add_type(
            ObjectType::new("Query").with_field(
                Field::new("user", non_null("User"))
                    .with_internal_name("user")
                    .with_parameter(Parameter::new("input", non_null("Input")))
            )
        )?
        .build()?;

    let metadata = SchemaMetadata::new()
        .add_schema_directive(sensitive_data.clone())?
        .add_schema_directive(sensitive_input.clone())?
        .add_directive_input_type(
            InputObjectType::new("SensitiveValue")
                .with_field(InputField::new("key", non_null("String")))
                .with_field(InputField::new("value", non_null("String")))
        )?
        .add_type(
            TypeMetadata::input("Input")
                .with_directive(sensitive_input.apply().with_value("reason", "GDPR"))
        )?
        .add_type(
            TypeMetadata::object("User")
                .with_directive(sensitive_data.apply().with_value("reason", "GDPR"))
                .with_field(
                    FieldMetadata::new("phone").with_directive(
                        sensitive_data.apply()
                            .with_value("reason", "PRIVATE")
                            .with_value("meta", vec![
                                Record::new("SensitiveValue")
                                    .with_field("key", "can_share_field")
                                    .with_field("value", "phone_share_accepted"),
                            ])
                    )
                )
        )?;

    assert_eq!(
        print_schema(&schema, &metadata)?,
        concat!(
            "input Input @sensitiveInput(reason: \"GDPR\") {\n",
            "  firstName: String!\n",
            "}\n",
            "\n",
            "type Query {\n",
            "  user(input: Input!): User!\n",
            "}\n",
            "\n",
            "type User @sensitiveData(reason: \"GDPR\") {\n",
            "  firstName: String!\n",
            "  phone: String! @sensitiveData(reason: \"PRIVATE\", meta: [{key: \"can_share_field\", value: \"phone_share_accepted\"}])\n",
            "  phoneShareAccepted: Boolean!\n",
            "}",
        ),
    );
    Ok(())
}

mod argument_values {
    use super::*;

    fn print_with(directive: SchemaDirective, application_reason: ArgumentValue) -> TestResult<String> {
        let schema = query_with_first_name()?;
        let metadata = first_name_metadata(&directive, application_reason)?;
        Ok(print_schema(&schema, &metadata)?)
    }

    #[test]
    fn unset_value_is_omitted_even_with_a_default() -> TestResult<()> {
        let directive = SchemaDirective::builder("Sensitive")
            .location(DirectiveLocation::FieldDefinition)
            .argument_with_default("reason", TypeAnnotation::named("String"), "unknown")
            .build()?;

        assert_eq!(
            print_with(directive, ArgumentValue::Unset)?,
            "type Query {\n  firstName: String! @sensitive\n}",
        );
        Ok(())
    }

    #[test]
    fn declared_default_is_used_when_no_value_is_supplied() -> TestResult<()> {
        let directive = SchemaDirective::builder("Sensitive")
            .location(DirectiveLocation::FieldDefinition)
            .argument_with_default("reason", TypeAnnotation::named("String"), "unknown")
            .build()?;
        let schema = query_with_first_name()?;
        let metadata = SchemaMetadata::new()
            .add_schema_directive(directive.clone())?
            .add_type(
                TypeMetadata::object("Query").with_field(
                    FieldMetadata::new("first_name").with_directive(directive.apply())
                )
            )?;

        assert_eq!(
            print_schema(&schema, &metadata)?,
            "type Query {\n  firstName: String! @sensitive(reason: \"unknown\")\n}",
        );
        Ok(())
    }

    #[test]
    fn null_prints_only_for_nullable_arguments() -> TestResult<()> {
        let nullable = SchemaDirective::builder("Sensitive")
            .location(DirectiveLocation::FieldDefinition)
            .argument("reason", TypeAnnotation::named("String"))
            .build()?;
        assert_eq!(
            print_with(nullable, ArgumentValue::Null)?,
            "type Query {\n  firstName: String! @sensitive(reason: null)\n}",
        );

        let non_null_arg = SchemaDirective::builder("Sensitive")
            .location(DirectiveLocation::FieldDefinition)
            .argument("reason", non_null("String"))
            .build()?;
        assert_eq!(
            print_with(non_null_arg, ArgumentValue::Null)?,
            "type Query {\n  firstName: String! @sensitive\n}",
        );
        Ok(())
    }

    #[test]
    fn values_that_cannot_be_coerced_are_dropped() -> TestResult<()> {
        let directive = SchemaDirective::builder("Sensitive")
            .location(DirectiveLocation::FieldDefinition)
            .argument("reason", non_null("Int"))
            .build()?;
        assert_eq!(
            print_with(directive, "not a number".into())?,
            "type Query {\n  firstName: String! @sensitive\n}",
        );
        Ok(())
    }

    #[test]
    fn arguments_print_in_declaration_order_under_their_graphql_names() -> TestResult<()> {
        let directive = SchemaDirective::builder("Cache")
            .location(DirectiveLocation::FieldDefinition)
            .argument("max_age", TypeAnnotation::named("Int"))
            .argument("reason", TypeAnnotation::named("String"))
            .build()?;
        let schema = query_with_first_name()?;
        let metadata = SchemaMetadata::new()
            .add_schema_directive(directive.clone())?
            .add_type(
                TypeMetadata::object("Query").with_field(
                    FieldMetadata::new("first_name").with_directive(
                        directive.apply()
                            .with_value("reason", "stale")
                            .with_value("max_age", 60)
                    )
                )
            )?;

        assert_eq!(
            print_schema(&schema, &metadata)?,
            "type Query {\n  firstName: String! @cache(maxAge: 60, reason: \"stale\")\n}",
        );
        Ok(())
    }
}

mod locations {
    use super::*;

    #[test]
    fn directives_outside_the_printed_location_are_skipped() -> TestResult<()> {
        let field_only = SchemaDirective::builder("FieldOnly")
            .location(DirectiveLocation::FieldDefinition)
            .build()?;
        let object_only = SchemaDirective::builder("ObjectOnly")
            .location(DirectiveLocation::Object)
            .build()?;
        let schema = query_with_first_name()?;
        let metadata = SchemaMetadata::new()
            .add_schema_directive(field_only.clone())?
            .add_schema_directive(object_only.clone())?
            .add_type(
                TypeMetadata::object("Query")
                    .with_directive(field_only.apply())
                    .with_directive(object_only.apply())
                    .with_field(
                        FieldMetadata::new("first_name")
                            .with_directive(object_only.apply())
                            .with_directive(field_only.apply())
                    )
            )?;

        assert_eq!(
            print_schema(&schema, &metadata)?,
            "type Query @objectOnly {\n  firstName: String! @fieldOnly\n}",
        );
        Ok(())
    }

    #[test]
    fn input_metadata_on_object_uses_input_object_location() -> TestResult<()> {
        let input_only = SchemaDirective::builder("InputOnly")
            .location(DirectiveLocation::InputObject)
            .build()?;
        let schema = query_with_first_name()?;
        let metadata = SchemaMetadata::new()
            .add_schema_directive(input_only.clone())?
            .add_type(TypeMetadata::input("Query").with_directive(input_only.apply()))?;

        assert_eq!(
            print_schema(&schema, &metadata)?,
            "type Query @inputOnly {\n  firstName: String!\n}",
        );
        Ok(())
    }

    #[test]
    fn input_fields_accept_input_field_definition_directives() -> TestResult<()> {
        let directive = SchemaDirective::builder("Trimmed")
            .location(DirectiveLocation::InputFieldDefinition)
            .build()?;
        let schema = Schema::builder()
            .add_type(super::super::query_type())?
            .add_type(
                InputObjectType::new("Filter").with_field(
                    InputField::new("name", TypeAnnotation::named("String"))
                        .with_internal_name("name")
                        .with_default_value("any")
                        .with_deprecation(Some("Use `query`."))
                )
            )?
            .build()?;
        let metadata = SchemaMetadata::new()
            .add_schema_directive(directive.clone())?
            .add_type(
                TypeMetadata::input("Filter")
                    .with_field(FieldMetadata::new("name").with_directive(directive.apply()))
            )?;

        assert_eq!(
            print_schema(&schema, &metadata)?,
            concat!(
                "input Filter {\n",
                "  name: String = \"any\" @trimmed @deprecated(reason: \"Use `query`.\")\n",
                "}\n",
                "\n",
                "type Query {\n",
                "  hello: String\n",
                "}",
            ),
        );
        Ok(())
    }
}

#[test]
fn fields_are_matched_by_internal_name() -> TestResult<()> {
    let sensitive = SchemaDirective::builder("Sensitive")
        .location(DirectiveLocation::FieldDefinition)
        .build()?;
    let schema = Schema::builder()
        .add_type(
            ObjectType::new("Query")
                .with_field(Field::new("firstName", non_null("String")))
                .with_field(
                    Field::new("lastName", non_null("String"))
                        .with_internal_name("last_name")
                )
        )?
        .build()?;
    let metadata = SchemaMetadata::new()
        .add_schema_directive(sensitive.clone())?
        .add_type(
            TypeMetadata::object("Query")
                .with_field(FieldMetadata::new("firstName").with_directive(sensitive.apply()))
                .with_field(FieldMetadata::new("last_name").with_directive(sensitive.apply()))
        )?;

    assert_eq!(
        print_schema(&schema, &metadata)?,
        concat!(
            "type Query {\n",
            "  firstName: String!\n",
            "  lastName: String! @sensitive\n",
            "}",
        ),
    );
    Ok(())
}

#[test]
fn extend_flag_applies_to_object_types_only() -> TestResult<()> {
    let schema = Schema::builder()
        .add_type(super::query_type())?
        .add_type(
            InputObjectType::new("Filter")
                .with_field(InputField::new("name", TypeAnnotation::named("String")))
        )?
        .build()?;
    let metadata = SchemaMetadata::new()
        .add_type(TypeMetadata::object("Query").extend())?
        .add_type(TypeMetadata::input("Filter").extend())?;

    assert_eq!(
        print_schema(&schema, &metadata)?,
        concat!(
            "input Filter {\n",
            "  name: String\n",
            "}\n",
            "\n",
            "extend type Query {\n",
            "  hello: String\n",
            "}",
        ),
    );
    Ok(())
}

#[test]
fn unknown_schema_directive_is_an_error() -> TestResult<()> {
    let sensitive = SchemaDirective::builder("Sensitive")
        .location(DirectiveLocation::FieldDefinition)
        .build()?;
    let schema = query_with_first_name()?;
    let metadata = SchemaMetadata::new().add_type(
        TypeMetadata::object("Query").with_field(
            FieldMetadata::new("first_name").with_directive(sensitive.apply())
        )
    )?;

    assert_eq!(
        print_schema(&schema, &metadata),
        Err(PrintError::UndefinedSchemaDirective {
            annotated_item: "Query.firstName".to_string(),
            directive_name: "sensitive".to_string(),
        }),
    );
    Ok(())
}
