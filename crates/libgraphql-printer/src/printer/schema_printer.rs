use crate::metadata::SchemaAccessor;
use crate::printer::print_description;
use crate::printer::print_directive_definition;
use crate::printer::print_type;
use crate::printer::PrintContext;
use crate::printer::PrintError;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::types::GraphQLType;

type Result<T> = std::result::Result<T, PrintError>;

/// Prints a [`Schema`] as an SDL document.
///
/// Without metadata the schema prints as bare SDL. With metadata attached
/// (see [`SchemaPrinter::with_metadata()`]), objects and input objects also
/// print their schema directives and `extend` flag.
///
/// ```
/// use libgraphql_printer::schema::Schema;
/// use libgraphql_printer::types::Field;
/// use libgraphql_printer::types::ObjectType;
/// use libgraphql_printer::types::TypeAnnotation;
/// use libgraphql_printer::SchemaPrinter;
///
/// let schema = Schema::builder()
///     .add_type(ObjectType::new("Query").with_field(
///         Field::new("name", TypeAnnotation::named("String").non_null()),
///     ))?
///     .build()?;
///
/// assert_eq!(
///     SchemaPrinter::new(&schema).print()?,
///     "type Query {\n  name: String!\n}",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy)]
pub struct SchemaPrinter<'a> {
    accessor: Option<&'a dyn SchemaAccessor>,
    schema: &'a Schema,
}
impl<'a> SchemaPrinter<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            accessor: None,
            schema,
        }
    }

    /// Joins types and fields with the metadata exposed by `accessor` while
    /// printing.
    pub fn with_metadata(mut self, accessor: &'a dyn SchemaAccessor) -> Self {
        self.accessor = Some(accessor);
        self
    }

    /// Prints the schema definition (when needed), then every custom
    /// directive definition, then every user-defined type sorted by name.
    /// Blocks are separated by a blank line.
    pub fn print(&self) -> Result<String> {
        let ctx = PrintContext {
            accessor: self.accessor,
            schema: self.schema,
        };

        let mut blocks = vec![];
        if let Some(schema_def) = print_schema_definition(self.schema) {
            blocks.push(schema_def);
        }

        let custom_directives = self.schema.all_directives()
            .values()
            .filter_map(|directive| directive.as_custom());
        for directive in custom_directives {
            blocks.push(print_directive_definition(directive));
        }

        let mut types = self.schema.all_types()
            .values()
            .filter(|type_| is_defined_type(type_))
            .collect::<Vec<_>>();
        types.sort_by(|a, b| a.name().cmp(b.name()));
        for type_ in types {
            blocks.push(print_type(&ctx, type_)?);
        }

        Ok(blocks.into_iter()
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}
impl std::fmt::Debug for SchemaPrinter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaPrinter")
            .field("has_metadata", &self.accessor.is_some())
            .field("schema", &self.schema)
            .finish()
    }
}

/// Prints `schema` with its schema directives and type metadata resolved
/// through `accessor`.
pub fn print_schema(schema: &Schema, accessor: &dyn SchemaAccessor) -> Result<String> {
    SchemaPrinter::new(schema)
        .with_metadata(accessor)
        .print()
}

/// Built-in scalars and introspection types are implied by every schema and
/// are never printed.
fn is_defined_type(type_: &GraphQLType) -> bool {
    !type_.is_builtin() && !type_.is_introspection()
}

/// The `schema { ... }` block is only needed when a root operation type is
/// not named after its operation, or when the schema has a description.
fn print_schema_definition(schema: &Schema) -> Option<String> {
    let operations = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ];
    let uses_default_names = operations.iter().all(|operation| {
        schema.root_operation_type_name(*operation)
            .is_none_or(|type_name| type_name == operation.default_type_name())
    });
    if uses_default_names && schema.description().is_none() {
        return None;
    }

    let operation_types = operations.iter()
        .filter_map(|operation| {
            schema.root_operation_type_name(*operation).map(|type_name| {
                format!("  {}: {type_name}", operation.keyword())
            })
        })
        .collect::<Vec<_>>();
    Some(format!(
        "{}schema {{\n{}\n}}",
        print_description(schema.description(), "", true),
        operation_types.join("\n"),
    ))
}
