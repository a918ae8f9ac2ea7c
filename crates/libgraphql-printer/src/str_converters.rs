use heck::ToLowerCamelCase;

/// Converts a declared (snake_case or PascalCase) name into the lower camel
/// case form GraphQL names conventionally use: `first_name` -> `firstName`,
/// `SensitiveField` -> `sensitiveField`.
pub fn to_camel_case(name: &str) -> String {
    name.to_lower_camel_case()
}

#[cfg(test)]
mod tests {
    use super::to_camel_case;

    #[test]
    fn snake_case_names() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("phone_share_accepted"), "phoneShareAccepted");
    }

    #[test]
    fn pascal_case_names() {
        assert_eq!(to_camel_case("Sensitive"), "sensitive");
        assert_eq!(to_camel_case("SensitiveField"), "sensitiveField");
    }

    #[test]
    fn already_camel_cased() {
        assert_eq!(to_camel_case("reason"), "reason");
        assert_eq!(to_camel_case("firstName"), "firstName");
    }
}
