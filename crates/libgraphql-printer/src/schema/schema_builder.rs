use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::BUILTIN_DIRECTIVE_NAMES;
use crate::types::CustomDirective;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`].
///
/// ```
/// use libgraphql_printer::schema::Schema;
/// use libgraphql_printer::types::Field;
/// use libgraphql_printer::types::ObjectType;
/// use libgraphql_printer::types::TypeAnnotation;
///
/// let schema = Schema::builder()
///     .add_type(
///         ObjectType::new("Query")
///             .with_field(Field::new("hello", TypeAnnotation::named("String"))),
///     )?
///     .build()?;
///
/// assert_eq!(schema.root_operation_type_name(
///     libgraphql_printer::schema::OperationKind::Query,
/// ), Some("Query"));
/// # Ok::<(), libgraphql_printer::schema::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    description: Option<String>,
    directive_defs: IndexMap<String, Directive>,
    mutation_type_name: Option<String>,
    query_type_name: Option<String>,
    subscription_type_name: Option<String>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    /// Defines a custom directive. Built-in directives (`@deprecated`,
    /// `@include`, `@skip`, `@specifiedBy`) are always defined and may not be
    /// redefined.
    pub fn add_directive(mut self, directive: CustomDirective) -> Result<Self> {
        let directive_name = directive.name();
        if BUILTIN_DIRECTIVE_NAMES.contains(&directive_name) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: directive_name.to_string(),
            });
        }

        if directive_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                directive_name: directive_name.to_string(),
            });
        }

        if self.directive_defs.contains_key(directive_name) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: directive_name.to_string(),
            });
        }

        self.directive_defs.insert(
            directive_name.to_string(),
            Directive::from(directive),
        );
        Ok(self)
    }

    pub fn add_type(mut self, type_: impl Into<GraphQLType>) -> Result<Self> {
        self.types_map_builder.add_new_type(type_.into())?;
        Ok(self)
    }

    pub fn build(self) -> Result<Schema> {
        let mut errors = self.validate_directive_parameters();
        let types = match self.types_map_builder.into_types_map() {
            Ok(types) => types,
            Err(SchemaBuildError::TypeValidationErrors {
                errors: mut type_errors,
            }) => {
                errors.append(&mut type_errors);
                return Err(SchemaBuildError::TypeValidationErrors { errors });
            },
            Err(err) => return Err(err),
        };
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        let query_type = resolve_operation_type(
            &types,
            OperationKind::Query,
            self.query_type_name,
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = resolve_operation_type(
            &types,
            OperationKind::Mutation,
            self.mutation_type_name,
        )?;
        let subscription_type = resolve_operation_type(
            &types,
            OperationKind::Subscription,
            self.subscription_type_name,
        )?;

        let root_types = [
            (OperationKind::Query, Some(&query_type)),
            (OperationKind::Mutation, mutation_type.as_ref()),
            (OperationKind::Subscription, subscription_type.as_ref()),
        ];
        for (i, (operation1, type1)) in root_types.iter().enumerate() {
            for (operation2, type2) in &root_types[i + 1..] {
                if let (Some(type1), Some(type2)) = (type1, type2)
                    && type1.name() == type2.name() {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: type1.name().to_string(),
                        operation1: *operation1,
                        operation2: *operation2,
                    });
                }
            }
        }

        log::trace!(
            "built schema with {} types and {} directives",
            types.len(),
            self.directive_defs.len(),
        );

        Ok(Schema {
            description: self.description,
            directive_defs: self.directive_defs,
            mutation_type,
            query_type,
            subscription_type,
            types,
        })
    }

    pub fn new() -> Self {
        Self {
            description: None,
            directive_defs: IndexMap::from([
                ("deprecated".to_string(), Directive::Deprecated),
                ("include".to_string(), Directive::Include),
                ("skip".to_string(), Directive::Skip),
                ("specifiedBy".to_string(), Directive::SpecifiedBy),
            ]),
            mutation_type_name: None,
            query_type_name: None,
            subscription_type_name: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    /// Use the object type named `type_name` as the Mutation root type rather
    /// than the default (an object type named `Mutation`, if one exists).
    pub fn with_mutation_type(mut self, type_name: impl AsRef<str>) -> Self {
        self.mutation_type_name = Some(type_name.as_ref().to_string());
        self
    }

    /// Use the object type named `type_name` as the Query root type rather
    /// than the default (an object type named `Query`).
    pub fn with_query_type(mut self, type_name: impl AsRef<str>) -> Self {
        self.query_type_name = Some(type_name.as_ref().to_string());
        self
    }

    /// Use the object type named `type_name` as the Subscription root type
    /// rather than the default (an object type named `Subscription`, if one
    /// exists).
    pub fn with_subscription_type(mut self, type_name: impl AsRef<str>) -> Self {
        self.subscription_type_name = Some(type_name.as_ref().to_string());
        self
    }

    fn validate_directive_parameters(&self) -> Vec<TypeValidationError> {
        let mut errors = vec![];
        let custom_directives = self.directive_defs.values()
            .filter_map(|directive| directive.as_custom());
        for directive in custom_directives {
            for (param_name, param) in directive.parameters() {
                let innermost_type_name =
                    param.type_annotation()
                        .innermost_named_type_annotation()
                        .graphql_type_name();
                match self.types_map_builder.get_type(innermost_type_name) {
                    Some(type_) if !type_.is_input_type() => errors.push(
                        TypeValidationError::InvalidParameterWithOutputOnlyType {
                            outputonly_type_name: innermost_type_name.to_string(),
                            parameter_name: param_name.to_string(),
                        }
                    ),
                    Some(_) => (),
                    None => errors.push(TypeValidationError::UndefinedTypeName {
                        undefined_type_name: innermost_type_name.to_string(),
                    }),
                }
            }
        }
        errors
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicitly named root types must exist and be object types. When no name
/// was given, an object type with the operation's default name is used if
/// one exists.
fn resolve_operation_type(
    types: &IndexMap<String, GraphQLType>,
    operation: OperationKind,
    explicit_type_name: Option<String>,
) -> Result<Option<NamedGraphQLTypeRef>> {
    let type_name = match explicit_type_name {
        Some(type_name) => type_name,
        None => return Ok(match types.get(operation.default_type_name()) {
            Some(GraphQLType::Object(_)) =>
                Some(NamedGraphQLTypeRef::new(operation.default_type_name())),
            _ => None,
        }),
    };

    match types.get(type_name.as_str()) {
        Some(GraphQLType::Object(_)) =>
            Ok(Some(NamedGraphQLTypeRef::new(type_name))),
        Some(type_) => Err(SchemaBuildError::NonObjectOperationType {
            operation,
            type_kind: type_.into(),
            type_name,
        }),
        None => Err(SchemaBuildError::UndefinedOperationType {
            operation,
            type_name,
        }),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
    },

    #[error("Multiple GraphQL types were defined with the name `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Custom directive names must not start with `__`: `{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        directive_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation:?} root operation type must be an object type, but \
        `{type_name}` is a {} type",
        type_kind.name(),
    )]
    NonObjectOperationType {
        operation: OperationKind,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "The {operation1:?} and {operation2:?} root operation are defined with \
        the same GraphQL type, but this is not allowed in GraphQL. All root \
        operations must be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationKind,
        operation2: OperationKind,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error(
        "The {operation:?} root operation type was set to `{type_name}`, but \
        no type with that name is defined"
    )]
    UndefinedOperationType {
        operation: OperationKind,
        type_name: String,
    },
}
