use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a IndexMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let type_name = self.type_.name();
        let type_fields = self.type_.fields();
        for iface_name in self.type_.interface_names() {
            // Verify that this implemented interface name is actually a defined
            // type.
            let iface_type =
                if let Some(iface_type) = self.types_map.get(iface_name) {
                    iface_type
                } else {
                    self.errors.push(
                        TypeValidationError::ImplementsUndefinedInterface {
                            type_name: type_name.to_string(),
                            undefined_interface_name: iface_name.to_string(),
                        }
                    );
                    continue;
                };

            // Verify that the defined type being implemented is an interface
            // type.
            let iface =
                if let Some(iface) = iface_type.as_interface() {
                    iface
                } else {
                    self.errors.push(
                        TypeValidationError::ImplementsNonInterfaceType {
                            type_name: type_name.to_string(),
                            non_interface_type_name: iface_type.name().to_string(),
                        }
                    );
                    continue;
                };

            // Verify that all of this interface's fields are present on the
            // implementing type.
            //
            // https://spec.graphql.org/October2021/#IsValidImplementation()
            for field_name in iface.fields().keys() {
                if !type_fields.contains_key(field_name) {
                    self.errors.push(
                        TypeValidationError::MissingInterfaceSpecifiedField {
                            field_name: field_name.to_string(),
                            interface_name: iface_name.to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                }
            }
        }

        for (field_name, field) in type_fields {
            // All fields on an object type must be declared with an output
            // type.
            //
            // https://spec.graphql.org/October2021/#sel-JAHZhCFDBFABLBgB_pM
            let innermost_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .graphql_type_name();
            if let Some(innermost_type) = self.types_map.get(innermost_type_name) {
                if !innermost_type.is_output_type() {
                    self.errors.push(
                        TypeValidationError::InvalidOutputFieldWithInputType {
                            field_name: field_name.to_string(),
                            input_type_name: innermost_type_name.to_string(),
                            parent_type_name: type_name.to_string(),
                        }
                    );
                }
            } else {
                self.errors.push(TypeValidationError::UndefinedTypeName {
                    undefined_type_name: innermost_type_name.to_string(),
                });
            }

            for (param_name, param) in field.parameters() {
                // All parameters must be declared with an input type.
                //
                // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
                let innermost_type_name =
                    param.type_annotation()
                        .innermost_named_type_annotation()
                        .graphql_type_name();
                if let Some(innermost_type) = self.types_map.get(innermost_type_name) {
                    if !innermost_type.is_input_type() {
                        self.errors.push(
                            TypeValidationError::InvalidParameterWithOutputOnlyType {
                                outputonly_type_name:
                                    innermost_type_name.to_string(),
                                parameter_name: param_name.to_string(),
                            }
                        );
                    }
                } else {
                    self.errors.push(TypeValidationError::UndefinedTypeName {
                        undefined_type_name: innermost_type_name.to_string(),
                    })
                }
            }
        }

        self.errors
    }
}
