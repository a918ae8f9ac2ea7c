use crate::metadata::DirectiveApplication;
use crate::metadata::SchemaDirective;
use crate::printer::encode_literal;
use crate::printer::print_args;
use crate::printer::print_description;
use crate::printer::serialize_argument_value;
use crate::printer::PrintContext;
use crate::printer::PrintError;
use crate::types::CustomDirective;
use crate::types::DeprecationState;
use crate::types::DirectiveLocation;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::Value;

type Result<T> = std::result::Result<T, PrintError>;

pub(in crate::printer) const FIELD_DIRECTIVE_LOCATIONS: &[DirectiveLocation] = &[
    DirectiveLocation::FieldDefinition,
    DirectiveLocation::InputFieldDefinition,
];
pub(in crate::printer) const INPUT_OBJECT_DIRECTIVE_LOCATIONS: &[DirectiveLocation] = &[
    DirectiveLocation::InputObject,
];
pub(in crate::printer) const OBJECT_DIRECTIVE_LOCATIONS: &[DirectiveLocation] = &[
    DirectiveLocation::Object,
];

/// Prints each application whose directive declares one of
/// `allowed_locations`, in attachment order.
pub(in crate::printer) fn print_directive_applications(
    ctx: &PrintContext<'_>,
    applications: &[DirectiveApplication],
    allowed_locations: &[DirectiveLocation],
    annotated_item: &str,
) -> Result<String> {
    let Some(accessor) = ctx.accessor else {
        return Ok(String::new());
    };

    let mut output = String::new();
    for application in applications {
        let directive_name = application.directive_name();
        let directive = accessor.get_schema_directive(directive_name).ok_or_else(
            || PrintError::UndefinedSchemaDirective {
                annotated_item: annotated_item.to_string(),
                directive_name: directive_name.to_string(),
            }
        )?;
        if directive.has_location_in(allowed_locations) {
            output.push_str(&print_schema_directive(ctx, directive, application));
        }
    }
    Ok(output)
}

/// Prints ` @name(arg: value, ...)` for one application of `directive`.
///
/// Each declared argument takes the supplied value, falling back to its
/// default. Arguments whose value is unset, or that can't be encoded as a
/// literal of the argument's type, are left out.
pub(in crate::printer) fn print_schema_directive(
    ctx: &PrintContext<'_>,
    directive: &SchemaDirective,
    application: &DirectiveApplication,
) -> String {
    let mut params = vec![];
    for (declared_name, argument) in directive.arguments() {
        let value = application.value(declared_name)
            .unwrap_or(argument.default_value());
        if value.is_unset() {
            continue;
        }

        let serialized = serialize_argument_value(value);
        match encode_literal(ctx, &serialized, argument.type_annotation()) {
            Some(literal) => params.push(format!("{}: {literal}", argument.name())),
            None => log::debug!(
                "dropping `{}` argument of `@{}`: {serialized:?} can't be encoded as `{}`",
                argument.name(),
                directive.name(),
                argument.type_annotation(),
            ),
        }
    }

    if params.is_empty() {
        format!(" @{}", directive.name())
    } else {
        format!(" @{}({})", directive.name(), params.join(", "))
    }
}

pub(in crate::printer) fn print_deprecated(deprecation_state: &DeprecationState) -> String {
    match deprecation_state {
        DeprecationState::NotDeprecated => String::new(),
        DeprecationState::Deprecated(Some(reason))
            if reason != DEFAULT_DEPRECATION_REASON =>
            format!(" @deprecated(reason: {})", Value::from(reason.as_str())),
        DeprecationState::Deprecated(_) => " @deprecated".to_string(),
    }
}

/// Prints a custom directive definition, e.g.
/// `directive @key(fields: String!) repeatable on OBJECT | INTERFACE`.
pub(in crate::printer) fn print_directive_definition(
    directive: &CustomDirective,
) -> String {
    let locations = directive.locations()
        .iter()
        .map(|location| location.name())
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        "{}directive @{}{}{} on {locations}",
        print_description(directive.description(), "", true),
        directive.name(),
        print_args(directive.parameters(), ""),
        if directive.is_repeatable() { " repeatable" } else { "" },
    )
}
