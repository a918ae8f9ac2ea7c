use crate::metadata::DirectiveArgument;
use crate::metadata::DirectiveArgumentSpec;
use crate::metadata::SchemaDirective;
use crate::metadata::SchemaMetadataError;
use crate::str_converters::to_camel_case;
use crate::types::BUILTIN_DIRECTIVE_NAMES;
use crate::types::DirectiveLocation;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaMetadataError>;

/// Utility for building a [`SchemaDirective`].
///
/// Unless a name override is given, the directive's GraphQL name is the
/// declared name converted to lowerCamelCase (`SensitiveField` becomes
/// `sensitiveField`). The same conversion is applied to argument names.
/// Both conversions can be turned off with
/// [`SchemaDirectiveBuilder::auto_camel_case()`].
#[derive(Clone, Debug)]
pub struct SchemaDirectiveBuilder {
    arguments: Vec<DirectiveArgumentSpec>,
    auto_camel_case: bool,
    declared_name: String,
    description: Option<String>,
    locations: Vec<DirectiveLocation>,
    name_override: Option<String>,
    repeatable: bool,
}
impl SchemaDirectiveBuilder {
    pub fn new(declared_name: impl AsRef<str>) -> Self {
        Self {
            arguments: vec![],
            auto_camel_case: true,
            declared_name: declared_name.as_ref().to_string(),
            description: None,
            locations: vec![],
            name_override: None,
            repeatable: false,
        }
    }

    /// Declares an argument with no default value.
    pub fn argument(
        self,
        declared_name: impl AsRef<str>,
        type_annotation: TypeAnnotation,
    ) -> Self {
        self.argument_spec(DirectiveArgumentSpec::new(declared_name, type_annotation))
    }

    pub fn argument_spec(mut self, spec: DirectiveArgumentSpec) -> Self {
        self.arguments.push(spec);
        self
    }

    pub fn argument_with_default(
        self,
        declared_name: impl AsRef<str>,
        type_annotation: TypeAnnotation,
        default_value: impl Into<crate::metadata::ArgumentValue>,
    ) -> Self {
        self.argument_spec(
            DirectiveArgumentSpec::new(declared_name, type_annotation)
                .with_default_value(default_value)
        )
    }

    pub fn auto_camel_case(mut self, auto_camel_case: bool) -> Self {
        self.auto_camel_case = auto_camel_case;
        self
    }

    pub fn description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn location(mut self, location: DirectiveLocation) -> Self {
        if !self.locations.contains(&location) {
            self.locations.push(location);
        }
        self
    }

    pub fn locations(
        self,
        locations: impl IntoIterator<Item = DirectiveLocation>,
    ) -> Self {
        locations.into_iter().fold(self, Self::location)
    }

    /// Use `name` verbatim as the directive's GraphQL name.
    pub fn name(mut self, name: impl AsRef<str>) -> Self {
        self.name_override = Some(name.as_ref().to_string());
        self
    }

    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    pub fn build(self) -> Result<SchemaDirective> {
        let name = self.resolve_name(&self.declared_name, &self.name_override);
        if BUILTIN_DIRECTIVE_NAMES.contains(&name.as_str()) {
            return Err(SchemaMetadataError::RedefinitionOfBuiltinDirective {
                directive_name: name,
            });
        }
        if name.starts_with("__") {
            return Err(SchemaMetadataError::InvalidDunderPrefixedDirectiveName {
                directive_name: name,
            });
        }
        if self.locations.is_empty() {
            return Err(SchemaMetadataError::NoDirectiveLocations {
                declared_name: self.declared_name,
            });
        }

        let mut arguments = IndexMap::<String, DirectiveArgument>::new();
        for spec in &self.arguments {
            let arg_name = self.resolve_name(&spec.declared_name, &spec.name_override);
            let is_duplicate =
                arguments.contains_key(&spec.declared_name)
                    || arguments.values().any(|arg| arg.name == arg_name);
            if is_duplicate {
                return Err(SchemaMetadataError::DuplicateDirectiveArgument {
                    argument_name: arg_name,
                    directive_name: name,
                });
            }

            arguments.insert(spec.declared_name.to_owned(), DirectiveArgument {
                declared_name: spec.declared_name.to_owned(),
                default_value: spec.default_value.to_owned(),
                description: spec.description.to_owned(),
                name: arg_name,
                type_annotation: spec.type_annotation.to_owned(),
            });
        }

        Ok(SchemaDirective {
            arguments,
            declared_name: self.declared_name,
            description: self.description,
            locations: self.locations,
            name,
            repeatable: self.repeatable,
        })
    }

    fn resolve_name(
        &self,
        declared_name: &str,
        name_override: &Option<String>,
    ) -> String {
        match name_override {
            Some(name) => name.to_owned(),
            None if self.auto_camel_case => to_camel_case(declared_name),
            None => declared_name.to_string(),
        }
    }
}
