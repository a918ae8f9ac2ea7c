use indexmap::IndexMap;
use std::fmt;
use std::fmt::Write;

/// A GraphQL input value literal, as it would appear in SDL (e.g. as a
/// default value or as a directive argument).
///
/// [`Value`]'s [`Display`](fmt::Display) impl prints the literal using
/// GraphQL syntax: strings are quoted and escaped, lists print as
/// `[a, b]` and objects print as `{key: value, other: value}`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Bool(bool),
    EnumValue(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }
}
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::EnumValue(name) => f.write_str(name),
            Self::Float(value) => write_float(f, *value),
            Self::Int(value) => fmt::Display::fmt(value, f),
            Self::Null => f.write_str("null"),
            Self::String(value) => write_quoted(f, value),

            Self::List(values) => {
                let mut values = values.iter().peekable();
                f.write_char('[')?;
                while let Some(value) = values.next() {
                    fmt::Display::fmt(value, f)?;
                    if values.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }
                f.write_char(']')
            },

            Self::Object(entries) => {
                let mut entries = entries.iter().peekable();
                f.write_char('{')?;
                while let Some((key, value)) = entries.next() {
                    write!(f, "{key}: {value}")?;
                    if entries.peek().is_some() {
                        f.write_str(", ")?;
                    }
                }
                f.write_char('}')
            },
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Magnitudes outside `[1e-4, 1e16)` print in exponent form with a signed,
/// at least two-digit exponent (`1e+300`, `2.5e-05`).
fn write_float(out: &mut impl Write, value: f64) -> fmt::Result {
    let magnitude = value.abs();
    if !value.is_finite() || magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return write!(out, "{value}");
    }

    let exponent_form = format!("{value:e}");
    let (mantissa, exponent) = exponent_form.split_once('e')
        .unwrap_or((exponent_form.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(out, "{mantissa}e{sign}{digits:0>2}")
}

/// Writes `s` as a double-quoted GraphQL string, escaping quotes,
/// backslashes and control characters.
pub(crate) fn write_quoted(out: &mut impl Write, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\""),
            '\\' => out.write_str("\\\\"),
            '\u{8}' => out.write_str("\\b"),
            '\u{c}' => out.write_str("\\f"),
            '\n' => out.write_str("\\n"),
            '\r' => out.write_str("\\r"),
            '\t' => out.write_str("\\t"),
            c if c.is_control() => write!(out, "\\u{:04X}", c as u32),
            c => out.write_char(c),
        }?
    }
    out.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::Value;
    use indexmap::IndexMap;
    use proptest::prelude::*;

    #[test]
    fn scalar_literals() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Int(-42).to_string(), "-42");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Float(0.0).to_string(), "0");
        assert_eq!(Value::Float(0.0001).to_string(), "0.0001");
    }

    #[test]
    fn large_and_small_floats_use_exponent_form() {
        assert_eq!(Value::Float(1e300).to_string(), "1e+300");
        assert_eq!(Value::Float(-2.5e16).to_string(), "-2.5e+16");
        assert_eq!(Value::Float(2.5e-5).to_string(), "2.5e-05");
        assert_eq!(Value::Float(1e-300).to_string(), "1e-300");
        assert_eq!(Value::Float(123456789.5).to_string(), "123456789.5");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::EnumValue("RED".to_string()).to_string(), "RED");
    }

    #[test]
    fn string_literals_are_escaped() {
        assert_eq!(Value::from("GDPR").to_string(), "\"GDPR\"");
        assert_eq!(Value::from("GDPR").as_str(), Some("GDPR"));
        assert_eq!(Value::Int(1).as_str(), None);
        assert_eq!(
            Value::from("say \"hi\"\n").to_string(),
            "\"say \\\"hi\\\"\\n\"",
        );
        assert_eq!(Value::from("a\\b").to_string(), "\"a\\\\b\"");
        assert_eq!(Value::from("\u{1}").to_string(), "\"\\u0001\"");
    }

    #[test]
    fn nested_composite_literals() {
        let record = Value::Object(IndexMap::from([
            ("key".to_string(), Value::from("k")),
            ("value".to_string(), Value::from("v")),
        ]));
        let list = Value::List(vec![record, Value::Null]);

        assert_eq!(list.to_string(), "[{key: \"k\", value: \"v\"}, null]");
        assert_eq!(Value::List(vec![]).to_string(), "[]");
        assert_eq!(Value::Object(IndexMap::new()).to_string(), "{}");
    }

    proptest! {
        #[test]
        fn quoted_strings_never_contain_raw_newlines_or_bare_quotes(
            s in "\\PC*|[\"\\\\\n\r\t]*",
        ) {
            let printed = Value::String(s).to_string();
            prop_assert!(printed.starts_with('"'));
            prop_assert!(printed.ends_with('"'));
            prop_assert!(!printed.contains('\n'));

            let inner = &printed[1..printed.len() - 1];
            let mut chars = inner.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    prop_assert!(chars.next().is_some());
                } else {
                    prop_assert_ne!(c, '"');
                }
            }
        }
    }
}
