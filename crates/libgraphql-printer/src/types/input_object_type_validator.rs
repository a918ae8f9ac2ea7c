use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashSet;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let fields = self.type_.fields();
        self.validate_fields_recursive(
            self.type_.name(),
            fields,
            &mut vec![],
            HashSet::from([self.type_.name()]),
        );
        self.errors
    }

    fn validate_fields_recursive(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputField>,
        path: &mut Vec<(&'a str, Option<&'a str>)>,
        seen_type_names: HashSet<&'a str>,
    ) {
        // Only the root type reports per-field errors; nested input objects
        // are reported by their own validator.
        let is_root = type_name == self.type_.name();
        for (field_name, field) in fields {
            let innermost_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .graphql_type_name();

            let innermost_type =
                if let Some(t) = self.types_map.get(innermost_type_name) {
                    t
                } else {
                    if is_root {
                        self.errors.push(TypeValidationError::UndefinedTypeName {
                            undefined_type_name: innermost_type_name.to_string(),
                        });
                    }
                    continue
                };

            // Input object fields can not be declared with an output-only
            // type.
            //
            // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
            if is_root && !innermost_type.is_input_type() {
                self.errors.push(
                    TypeValidationError::InvalidInputFieldWithOutputType {
                        field_name: field_name.to_owned(),
                        invalid_type_name: innermost_type_name.to_string(),
                        parent_type_name: type_name.to_owned(),
                    }
                );
            }

            // Look for input-type cycles that aren't broken by at least one
            // nullable type.
            if annot_contains_cycle_breaking_nullable_type(field.type_annotation()) {
                continue;
            }

            path.push((type_name, Some(field_name)));
            if innermost_type_name == self.type_.name() {
                let mut circular_field_path = path.iter()
                    .map(|(type_name, field_name)| match field_name {
                        Some(field_name) => format!("{type_name}.{field_name}"),
                        None => type_name.to_string(),
                    })
                    .collect::<Vec<_>>();
                circular_field_path.push(innermost_type_name.to_string());
                self.errors.push(TypeValidationError::CircularInputFieldChain {
                    circular_field_path,
                });
            } else if !seen_type_names.contains(innermost_type_name)
                && let GraphQLType::InputObject(input_obj_type) = innermost_type {
                let mut seen_type_names = seen_type_names.clone();
                seen_type_names.insert(innermost_type_name);
                self.validate_fields_recursive(
                    innermost_type_name,
                    input_obj_type.fields(),
                    path,
                    seen_type_names,
                );
            }
            path.pop();
        }
    }
}

fn annot_contains_cycle_breaking_nullable_type(
    type_annot: &TypeAnnotation,
) -> bool {
    match type_annot {
        TypeAnnotation::List(list_annot) =>
            list_annot.nullable() || annot_contains_cycle_breaking_nullable_type(
                list_annot.inner_type_annotation()
            ),
        TypeAnnotation::Named(named_annot) =>
            named_annot.nullable(),
    }
}
