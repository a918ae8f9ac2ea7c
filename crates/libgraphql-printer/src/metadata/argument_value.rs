use crate::metadata::Record;
use indexmap::IndexMap;

/// A value supplied for (or declared as the default of) a schema directive
/// argument.
///
/// [`ArgumentValue::Unset`] is distinct from [`ArgumentValue::Null`]: an
/// argument bound to `Unset` is never printed, while `Null` prints as a
/// `null` literal.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ArgumentValue {
    Boolean(bool),
    EnumMember(String),
    Float(f64),
    Int(i64),
    Mapping(IndexMap<String, ArgumentValue>),
    Null,
    Record(Record),
    Sequence(Vec<ArgumentValue>),
    String(String),
    #[default]
    Unset,
}
impl ArgumentValue {
    /// A member of an enum, referred to by its GraphQL value name.
    pub fn enum_member(value_name: impl AsRef<str>) -> Self {
        Self::EnumMember(value_name.as_ref().to_string())
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}
impl std::convert::From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<f64> for ArgumentValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<i32> for ArgumentValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<Record> for ArgumentValue {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}
impl<T: Into<ArgumentValue>> std::convert::From<Vec<T>> for ArgumentValue {
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<ArgumentValue>> std::convert::From<Option<T>> for ArgumentValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
