use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::DirectiveLocation;
use crate::types::Parameter;
use indexmap::IndexMap;

/// Names of the directives every GraphQL schema defines implicitly.
pub(crate) const BUILTIN_DIRECTIVE_NAMES: &[&str] = &[
    "deprecated",
    "include",
    "skip",
    "specifiedBy",
];

/// Represents a defined directive.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Directive {
    Custom(Box<CustomDirective>),
    Deprecated,
    Include,
    Skip,
    SpecifiedBy,
}
impl Directive {
    pub fn as_custom(&self) -> Option<&CustomDirective> {
        if let Self::Custom(directive) = self {
            Some(directive)
        } else {
            None
        }
    }

    /// Indicates if this directive is one of the directives defined by the
    /// GraphQL specification itself (`@deprecated`, `@include`, `@skip`,
    /// `@specifiedBy`).
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        match self {
            Self::Custom(directive) => directive.locations(),
            Self::Deprecated => &[
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::EnumValue,
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::InputFieldDefinition,
            ],
            Self::Include | Self::Skip => &[
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment,
            ],
            Self::SpecifiedBy => &[DirectiveLocation::Scalar],
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Custom(directive) => directive.name(),
            Self::Deprecated => "deprecated",
            Self::Include => "include",
            Self::Skip => "skip",
            Self::SpecifiedBy => "specifiedBy",
        }
    }
}
impl DerefByName for Directive {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.directive_defs.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string())
        )
    }
}
impl std::convert::From<CustomDirective> for Directive {
    fn from(value: CustomDirective) -> Self {
        Self::Custom(Box::new(value))
    }
}

pub type NamedDirectiveRef = NamedRef<Schema, Directive>;

/// A user-defined directive definition, printed in SDL as
/// `directive @name(args) repeatable on LOCATION | LOCATION`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CustomDirective {
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) repeatable: bool,
}
impl CustomDirective {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            description: None,
            locations: vec![],
            name: name.as_ref().to_string(),
            parameters: IndexMap::new(),
            repeatable: false,
        }
    }

    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn with_location(mut self, location: DirectiveLocation) -> Self {
        if !self.locations.contains(&location) {
            self.locations.push(location);
        }
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.insert(parameter.name.to_owned(), parameter);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    /// The locations this directive may be applied at, in declaration order.
    pub fn locations(&self) -> &[DirectiveLocation] {
        self.locations.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }
}
