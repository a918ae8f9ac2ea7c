use crate::printer::print_deprecated;
use crate::printer::print_description;
use crate::printer::print_directive_applications;
use crate::printer::PrintContext;
use crate::printer::PrintError;
use crate::printer::FIELD_DIRECTIVE_LOCATIONS;
use crate::types::DeprecationState;
use crate::types::Field;
use crate::types::InputField;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, PrintError>;

/// Wraps `lines` in a `{ ... }` block, or prints nothing when there are no
/// lines.
pub(in crate::printer) fn print_block(lines: &[String]) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        format!(" {{\n{}\n}}", lines.join("\n"))
    }
}

/// Prints an argument list. Arguments stay on one line unless at least one of
/// them has a description.
pub(in crate::printer) fn print_args(
    parameters: &IndexMap<String, Parameter>,
    indentation: &str,
) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let has_descriptions = parameters.values().any(|param| {
        param.description().is_some_and(|description| !description.is_empty())
    });
    if !has_descriptions {
        let args = parameters.values()
            .map(print_parameter)
            .collect::<Vec<_>>();
        return format!("({})", args.join(", "));
    }

    let arg_indentation = format!("  {indentation}");
    let args = parameters.values()
        .enumerate()
        .map(|(i, param)| format!(
            "{}{arg_indentation}{}",
            print_description(param.description(), &arg_indentation, i == 0),
            print_parameter(param),
        ))
        .collect::<Vec<_>>();
    format!("(\n{}\n{indentation})", args.join("\n"))
}

fn print_parameter(param: &Parameter) -> String {
    print_input_value(
        param.name(),
        param.type_annotation(),
        param.default_value(),
        "",
        param.deprecation_state(),
    )
}

/// `name: Type = default`, followed by any directives and the deprecation
/// clause.
fn print_input_value(
    name: &str,
    type_annotation: &TypeAnnotation,
    default_value: Option<&Value>,
    directives: &str,
    deprecation_state: &DeprecationState,
) -> String {
    let default_value = default_value
        .map(|value| format!(" = {value}"))
        .unwrap_or_default();
    format!(
        "{name}: {type_annotation}{default_value}{directives}{}",
        print_deprecated(deprecation_state),
    )
}

/// Prints the field block of an object or interface type. Interfaces are
/// printed without field directives.
pub(in crate::printer) fn print_fields(
    ctx: &PrintContext<'_>,
    type_name: &str,
    fields: &IndexMap<String, Field>,
    with_directives: bool,
) -> Result<String> {
    let mut lines = vec![];
    for (i, field) in fields.values().enumerate() {
        let directives =
            if with_directives {
                print_field_directives(ctx, type_name, field.name(), field.internal_name())?
            } else {
                String::new()
            };
        lines.push(format!(
            "{}  {}{}: {}{directives}{}",
            print_description(field.description(), "  ", i == 0),
            field.name(),
            print_args(field.parameters(), "  "),
            field.type_annotation(),
            print_deprecated(field.deprecation_state()),
        ));
    }
    Ok(print_block(&lines))
}

pub(in crate::printer) fn print_input_fields(
    ctx: &PrintContext<'_>,
    type_name: &str,
    fields: &IndexMap<String, InputField>,
) -> Result<String> {
    let mut lines = vec![];
    for (i, field) in fields.values().enumerate() {
        let directives =
            print_field_directives(ctx, type_name, field.name(), field.internal_name())?;
        lines.push(format!(
            "{}  {}",
            print_description(field.description(), "  ", i == 0),
            print_input_value(
                field.name(),
                field.type_annotation(),
                field.default_value(),
                &directives,
                field.deprecation_state(),
            ),
        ));
    }
    Ok(print_block(&lines))
}

/// Field metadata is correlated through the field's internal name. Fields
/// without one (or without metadata) get no directives.
fn print_field_directives(
    ctx: &PrintContext<'_>,
    type_name: &str,
    field_name: &str,
    internal_name: Option<&str>,
) -> Result<String> {
    let Some(accessor) = ctx.accessor else {
        return Ok(String::new());
    };
    let field_metadata = internal_name.and_then(|internal_name| {
        accessor.get_field_by_name(type_name, internal_name)
    });
    let Some(field_metadata) = field_metadata else {
        log::trace!("no metadata for field `{type_name}.{field_name}`");
        return Ok(String::new());
    };

    print_directive_applications(
        ctx,
        field_metadata.directives(),
        FIELD_DIRECTIVE_LOCATIONS,
        &format!("{type_name}.{field_name}"),
    )
}
