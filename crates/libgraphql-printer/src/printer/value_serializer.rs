use crate::metadata::ArgumentValue;
use indexmap::IndexMap;

/// A directive argument value with every [`Record`](crate::metadata::Record)
/// flattened into a map of its fields.
#[derive(Clone, Debug, PartialEq)]
pub enum SerializedValue {
    Boolean(bool),
    EnumMember(String),
    Float(f64),
    Int(i64),
    List(Vec<SerializedValue>),
    Map(IndexMap<String, SerializedValue>),
    Null,
    String(String),
    Unset,
}

/// Recursively converts `value` into a [`SerializedValue`]. Records become
/// maps in field declaration order; sequences and mappings are converted
/// element-wise and everything else is carried over unchanged.
pub fn serialize_argument_value(value: &ArgumentValue) -> SerializedValue {
    match value {
        ArgumentValue::Boolean(value) => SerializedValue::Boolean(*value),
        ArgumentValue::EnumMember(name) => SerializedValue::EnumMember(name.to_owned()),
        ArgumentValue::Float(value) => SerializedValue::Float(*value),
        ArgumentValue::Int(value) => SerializedValue::Int(*value),
        ArgumentValue::Null => SerializedValue::Null,
        ArgumentValue::String(value) => SerializedValue::String(value.to_owned()),
        ArgumentValue::Unset => SerializedValue::Unset,

        ArgumentValue::Mapping(entries) => SerializedValue::Map(serialize_entries(entries)),
        ArgumentValue::Record(record) => SerializedValue::Map(serialize_entries(record.fields())),
        ArgumentValue::Sequence(items) => SerializedValue::List(
            items.iter().map(serialize_argument_value).collect()
        ),
    }
}

fn serialize_entries(
    entries: &IndexMap<String, ArgumentValue>,
) -> IndexMap<String, SerializedValue> {
    entries.iter()
        .map(|(key, value)| (key.to_owned(), serialize_argument_value(value)))
        .collect()
}
