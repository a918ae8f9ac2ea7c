use crate::printer::PrintContext;
use crate::printer::SerializedValue;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// Encodes `value` as a literal of the type described by `type_annotation`.
///
/// Returns `None` when the value is [`SerializedValue::Unset`] or cannot be
/// coerced to the type. Composite values drop the parts that cannot be
/// coerced rather than failing as a whole.
pub(in crate::printer) fn encode_literal(
    ctx: &PrintContext<'_>,
    value: &SerializedValue,
    type_annotation: &TypeAnnotation,
) -> Option<Value> {
    match value {
        SerializedValue::Unset => return None,
        SerializedValue::Null if type_annotation.nullable() => return Some(Value::Null),
        SerializedValue::Null => return None,
        _ => (),
    }

    match type_annotation {
        TypeAnnotation::List(list_annot) => {
            let item_annot = list_annot.inner_type_annotation();
            match value {
                SerializedValue::List(items) => Some(Value::List(
                    items.iter()
                        .filter_map(|item| encode_literal(ctx, item, item_annot))
                        .collect()
                )),
                _ => encode_literal(ctx, value, item_annot),
            }
        },

        TypeAnnotation::Named(named_annot) => {
            let type_name = named_annot.graphql_type_name();
            let Some(type_) = ctx.lookup_input_type(type_name) else {
                log::debug!("no input type named `{type_name}` to encode a literal against");
                return None;
            };
            encode_named(ctx, value, type_)
        },
    }
}

fn encode_named(
    ctx: &PrintContext<'_>,
    value: &SerializedValue,
    type_: &GraphQLType,
) -> Option<Value> {
    match type_ {
        GraphQLType::Bool => encode_boolean(value),
        GraphQLType::Enum(enum_type) => encode_enum(value, enum_type),
        GraphQLType::Float => encode_float(value),
        GraphQLType::ID => encode_id(value),
        GraphQLType::InputObject(input_type) => encode_input_object(ctx, value, input_type),
        GraphQLType::Int => encode_int(value),
        GraphQLType::Scalar(_) => encode_custom_scalar(value),
        GraphQLType::String => encode_string(value),
        GraphQLType::Interface(_)
            | GraphQLType::Object(_)
            | GraphQLType::Union(_) => None,
    }
}

fn encode_input_object(
    ctx: &PrintContext<'_>,
    value: &SerializedValue,
    input_type: &InputObjectType,
) -> Option<Value> {
    let SerializedValue::Map(entries) = value else {
        return None;
    };

    let mut fields = IndexMap::new();
    for (field_name, field) in input_type.fields() {
        let Some(field_value) = entries.get(field_name) else {
            continue;
        };
        if let Some(literal) = encode_literal(ctx, field_value, field.type_annotation()) {
            fields.insert(field_name.to_owned(), literal);
        }
    }
    Some(Value::Object(fields))
}

fn encode_enum(value: &SerializedValue, enum_type: &EnumType) -> Option<Value> {
    let value_name = match value {
        SerializedValue::EnumMember(name) | SerializedValue::String(name) => name,
        _ => return None,
    };
    enum_type.values()
        .contains_key(value_name)
        .then(|| Value::EnumValue(value_name.to_owned()))
}

fn encode_int(value: &SerializedValue) -> Option<Value> {
    let num = match value {
        SerializedValue::Boolean(value) => i64::from(*value),
        SerializedValue::Int(value) => *value,
        SerializedValue::Float(value) => integral_float_to_i64(*value)?,
        SerializedValue::String(value) => value.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    i32::try_from(num).ok().map(|num| Value::Int(num.into()))
}

fn encode_float(value: &SerializedValue) -> Option<Value> {
    let num = match value {
        SerializedValue::Boolean(value) => return Some(Value::Int(i64::from(*value))),
        SerializedValue::Int(value) => return Some(Value::Int(*value)),
        SerializedValue::Float(value) => *value,
        _ => return None,
    };
    float_literal(num)
}

fn encode_string(value: &SerializedValue) -> Option<Value> {
    Some(Value::String(match value {
        SerializedValue::Boolean(value) => value.to_string(),
        SerializedValue::Float(value) if value.is_finite() => format!("{value:?}"),
        SerializedValue::Int(value) => value.to_string(),
        SerializedValue::String(value) => value.to_owned(),
        _ => return None,
    }))
}

fn encode_boolean(value: &SerializedValue) -> Option<Value> {
    match value {
        SerializedValue::Boolean(value) => Some(Value::Bool(*value)),
        SerializedValue::Float(value) if value.is_finite() => Some(Value::Bool(*value != 0.0)),
        SerializedValue::Int(value) => Some(Value::Bool(*value != 0)),
        _ => None,
    }
}

/// IDs are serialized as strings, but an ID that looks like an integer is
/// printed as an int literal.
fn encode_id(value: &SerializedValue) -> Option<Value> {
    let id = match value {
        SerializedValue::Float(value) => integral_float_to_i64(*value)?.to_string(),
        SerializedValue::Int(value) => value.to_string(),
        SerializedValue::String(value) => value.to_owned(),
        _ => return None,
    };
    if is_integer_string(&id)
        && let Ok(num) = id.parse::<i64>() {
        return Some(Value::Int(num));
    }
    Some(Value::String(id))
}

/// Custom scalars carry no serialization rules of their own here, so the
/// literal follows the runtime kind of the value.
fn encode_custom_scalar(value: &SerializedValue) -> Option<Value> {
    match value {
        SerializedValue::Boolean(value) => Some(Value::Bool(*value)),
        SerializedValue::Float(value) => float_literal(*value),
        SerializedValue::Int(value) => Some(Value::Int(*value)),
        SerializedValue::String(value) => Some(Value::String(value.to_owned())),
        SerializedValue::EnumMember(_)
            | SerializedValue::List(_)
            | SerializedValue::Map(_)
            | SerializedValue::Null
            | SerializedValue::Unset => None,
    }
}

/// Floats with no fractional part print as int literals, unless they are
/// large enough to print in exponent form.
fn float_literal(num: f64) -> Option<Value> {
    if !num.is_finite() {
        return None;
    }
    let int_value = integral_float_to_i64(num).filter(|_| num.abs() < 1e16);
    Some(match int_value {
        Some(num) => Value::Int(num),
        None => Value::Float(num),
    })
}

fn integral_float_to_i64(num: f64) -> Option<i64> {
    let in_range = num >= i64::MIN as f64 && num < i64::MAX as f64;
    (num.is_finite() && num.fract() == 0.0 && in_range).then_some(num as i64)
}

/// Matches `^-?(0|[1-9][0-9]*)$`.
fn is_integer_string(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}
