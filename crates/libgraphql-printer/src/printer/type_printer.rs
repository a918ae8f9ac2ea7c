use crate::printer::directive_renderer::INPUT_OBJECT_DIRECTIVE_LOCATIONS;
use crate::printer::directive_renderer::OBJECT_DIRECTIVE_LOCATIONS;
use crate::printer::print_block;
use crate::printer::print_deprecated;
use crate::printer::print_description;
use crate::printer::print_directive_applications;
use crate::printer::print_fields;
use crate::printer::print_input_fields;
use crate::printer::PrintContext;
use crate::printer::PrintError;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::Value;

type Result<T> = std::result::Result<T, PrintError>;

/// Routes `type_` to the printer for its kind: scalars, then enums, then
/// objects, then input objects, and finally the generic printer for
/// everything else.
pub(in crate::printer) fn print_type(
    ctx: &PrintContext<'_>,
    type_: &GraphQLType,
) -> Result<String> {
    let kind = GraphQLTypeKind::from(type_);
    log::trace!("printing {} type `{}`", kind.name(), type_.name());

    if let Some(scalar_type) = type_.as_scalar() {
        return Ok(print_scalar(scalar_type));
    }
    if let Some(enum_type) = type_.as_enum() {
        return Ok(print_enum(enum_type));
    }
    if let Some(object_type) = type_.as_object() {
        return print_object(ctx, object_type);
    }
    if let Some(input_type) = type_.as_input_object() {
        return print_input_object(ctx, input_type);
    }
    print_generic(ctx, type_)
}

/// Interfaces and unions carry no metadata, so they print as plain SDL.
/// Built-in scalars are never passed here by the schema printer but still
/// print as `scalar Name`.
fn print_generic(ctx: &PrintContext<'_>, type_: &GraphQLType) -> Result<String> {
    Ok(match type_ {
        GraphQLType::Interface(iface) => print_interface(ctx, iface)?,
        GraphQLType::Union(union_type) => print_union(union_type),
        GraphQLType::Enum(enum_type) => print_enum(enum_type),
        GraphQLType::InputObject(input_type) => print_input_object(ctx, input_type)?,
        GraphQLType::Object(object_type) => print_object(ctx, object_type)?,
        GraphQLType::Scalar(scalar_type) => print_scalar(scalar_type),
        GraphQLType::Bool
            | GraphQLType::Float
            | GraphQLType::ID
            | GraphQLType::Int
            | GraphQLType::String => format!("scalar {}", type_.name()),
    })
}

fn print_scalar(scalar_type: &ScalarType) -> String {
    let specified_by = scalar_type.specified_by_url()
        .map(|url| format!(" @specifiedBy(url: {})", Value::from(url)))
        .unwrap_or_default();
    format!(
        "{}scalar {}{specified_by}",
        print_description(scalar_type.description(), "", true),
        scalar_type.name(),
    )
}

fn print_enum(enum_type: &EnumType) -> String {
    let values = enum_type.values()
        .values()
        .enumerate()
        .map(|(i, value)| format!(
            "{}  {}{}",
            print_description(value.description(), "  ", i == 0),
            value.name(),
            print_deprecated(value.deprecation_state()),
        ))
        .collect::<Vec<_>>();
    format!(
        "{}enum {}{}",
        print_description(enum_type.description(), "", true),
        enum_type.name(),
        print_block(&values),
    )
}

fn print_implemented_interfaces(interface_names: &[&str]) -> String {
    if interface_names.is_empty() {
        String::new()
    } else {
        format!(" implements {}", interface_names.join(" & "))
    }
}

fn print_object(ctx: &PrintContext<'_>, object_type: &ObjectType) -> Result<String> {
    let type_name = object_type.name();
    let metadata = ctx.type_metadata(type_name);
    if metadata.is_none() {
        log::trace!("no metadata for type `{type_name}`");
    }

    let extend = metadata.is_some_and(|metadata| metadata.is_extend());
    let directives = match metadata {
        Some(metadata) => {
            let allowed_locations =
                if metadata.is_input() {
                    INPUT_OBJECT_DIRECTIVE_LOCATIONS
                } else {
                    OBJECT_DIRECTIVE_LOCATIONS
                };
            print_directive_applications(
                ctx,
                metadata.directives(),
                allowed_locations,
                type_name,
            )?
        },
        None => String::new(),
    };

    Ok(format!(
        "{}{}type {type_name}{}{directives}{}",
        print_description(object_type.description(), "", true),
        if extend { "extend " } else { "" },
        print_implemented_interfaces(&object_type.interface_names()),
        print_fields(ctx, type_name, object_type.fields(), metadata.is_some())?,
    ))
}

fn print_input_object(
    ctx: &PrintContext<'_>,
    input_type: &InputObjectType,
) -> Result<String> {
    let type_name = input_type.name();
    let metadata = ctx.type_metadata(type_name);
    if metadata.is_none() {
        log::trace!("no metadata for type `{type_name}`");
    }

    // Input objects have no `extend` or `implements` clause, whatever the
    // metadata says.
    let directives = match metadata {
        Some(metadata) => print_directive_applications(
            ctx,
            metadata.directives(),
            INPUT_OBJECT_DIRECTIVE_LOCATIONS,
            type_name,
        )?,
        None => String::new(),
    };

    Ok(format!(
        "{}input {type_name}{directives}{}",
        print_description(input_type.description(), "", true),
        print_input_fields(ctx, type_name, input_type.fields())?,
    ))
}

fn print_interface(ctx: &PrintContext<'_>, iface: &InterfaceType) -> Result<String> {
    Ok(format!(
        "{}interface {}{}{}",
        print_description(iface.description(), "", true),
        iface.name(),
        print_implemented_interfaces(&iface.interface_names()),
        print_fields(ctx, iface.name(), iface.fields(), false)?,
    ))
}

fn print_union(union_type: &UnionType) -> String {
    let member_type_names = union_type.member_type_names();
    let members =
        if member_type_names.is_empty() {
            String::new()
        } else {
            format!(" = {}", member_type_names.join(" | "))
        };
    format!(
        "{}union {}{members}",
        print_description(union_type.description(), "", true),
        union_type.name(),
    )
}
