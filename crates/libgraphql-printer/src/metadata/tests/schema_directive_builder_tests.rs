use crate::metadata::ArgumentValue;
use crate::metadata::DirectiveArgumentSpec;
use crate::metadata::SchemaDirective;
use crate::metadata::SchemaMetadataError;
use crate::types::DirectiveLocation;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, SchemaMetadataError>;

mod naming {
    use super::*;

    #[test]
    fn declared_name_is_lower_camel_cased() -> Result<()> {
        let directive = SchemaDirective::builder("SensitiveField")
            .location(DirectiveLocation::FieldDefinition)
            .argument("reason", TypeAnnotation::named("String").non_null())
            .build()?;

        assert_eq!(directive.declared_name(), "SensitiveField");
        assert_eq!(directive.name(), "sensitiveField");

        Ok(())
    }

    #[test]
    fn name_override_is_used_verbatim() -> Result<()> {
        let directive = SchemaDirective::builder("SensitiveField")
            .name("Sensitive_Field")
            .location(DirectiveLocation::FieldDefinition)
            .build()?;

        assert_eq!(directive.name(), "Sensitive_Field");

        Ok(())
    }

    #[test]
    fn argument_names_are_lower_camel_cased() -> Result<()> {
        let directive = SchemaDirective::builder("Cache")
            .location(DirectiveLocation::Object)
            .argument("max_age", TypeAnnotation::named("Int"))
            .argument_spec(
                DirectiveArgumentSpec::new("scope_hint", TypeAnnotation::named("String"))
                    .with_name("scope_hint")
            )
            .build()?;

        let args = directive.arguments();
        assert_eq!(args.keys().collect::<Vec<_>>(), vec!["max_age", "scope_hint"]);
        assert_eq!(args["max_age"].name(), "maxAge");
        assert_eq!(args["max_age"].declared_name(), "max_age");
        assert_eq!(args["scope_hint"].name(), "scope_hint");

        Ok(())
    }

    #[test]
    fn auto_camel_case_can_be_disabled() -> Result<()> {
        let directive = SchemaDirective::builder("Sensitive_Field")
            .auto_camel_case(false)
            .location(DirectiveLocation::FieldDefinition)
            .argument("max_age", TypeAnnotation::named("Int"))
            .build()?;

        assert_eq!(directive.name(), "Sensitive_Field");
        assert_eq!(directive.arguments()["max_age"].name(), "max_age");

        Ok(())
    }
}

mod validation {
    use super::*;

    #[test]
    fn at_least_one_location_is_required() {
        let result = SchemaDirective::builder("Sensitive").build();

        assert_eq!(result, Err(SchemaMetadataError::NoDirectiveLocations {
            declared_name: "Sensitive".to_string(),
        }));
    }

    #[test]
    fn duplicate_arguments_are_rejected() {
        let result = SchemaDirective::builder("Sensitive")
            .location(DirectiveLocation::Object)
            .argument("reason", TypeAnnotation::named("String"))
            .argument("reason", TypeAnnotation::named("Int"))
            .build();

        assert_eq!(result, Err(SchemaMetadataError::DuplicateDirectiveArgument {
            argument_name: "reason".to_string(),
            directive_name: "sensitive".to_string(),
        }));
    }

    #[test]
    fn arguments_colliding_after_camel_casing_are_rejected() {
        let result = SchemaDirective::builder("Sensitive")
            .location(DirectiveLocation::Object)
            .argument("max_age", TypeAnnotation::named("Int"))
            .argument("maxAge", TypeAnnotation::named("Int"))
            .build();

        assert!(matches!(
            result,
            Err(SchemaMetadataError::DuplicateDirectiveArgument { .. }),
        ));
    }

    #[test]
    fn builtin_directive_names_are_rejected() {
        let result = SchemaDirective::builder("Deprecated")
            .location(DirectiveLocation::FieldDefinition)
            .build();

        assert_eq!(result, Err(SchemaMetadataError::RedefinitionOfBuiltinDirective {
            directive_name: "deprecated".to_string(),
        }));
    }
}

#[test]
fn locations_and_flags() -> Result<()> {
    let directive = SchemaDirective::builder("Tag")
        .description("Tags a type.")
        .locations([
            DirectiveLocation::Object,
            DirectiveLocation::FieldDefinition,
            DirectiveLocation::Object,
        ])
        .repeatable()
        .argument_with_default("name", TypeAnnotation::named("String"), "untagged")
        .build()?;

    assert_eq!(directive.locations(), &[
        DirectiveLocation::Object,
        DirectiveLocation::FieldDefinition,
    ]);
    assert!(directive.is_repeatable());
    assert_eq!(directive.description(), Some("Tags a type."));
    assert!(directive.has_location_in(&[DirectiveLocation::Object]));
    assert!(!directive.has_location_in(&[DirectiveLocation::InputObject]));
    assert_eq!(
        directive.arguments()["name"].default_value(),
        &ArgumentValue::String("untagged".to_string()),
    );

    Ok(())
}

#[test]
fn arguments_without_defaults_are_unset() -> Result<()> {
    let directive = SchemaDirective::builder("Sensitive")
        .location(DirectiveLocation::Object)
        .argument("reason", TypeAnnotation::named("String"))
        .build()?;

    assert!(directive.arguments()["reason"].default_value().is_unset());
    assert_eq!(directive.apply().directive_name(), "sensitive");

    Ok(())
}
