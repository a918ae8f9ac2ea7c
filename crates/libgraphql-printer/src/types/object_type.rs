use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects)
/// defined within some [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);
impl ObjectType {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(ObjectOrInterfaceTypeData::new(name.as_ref()))
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.0.description = Some(description.as_ref().to_string());
        self
    }

    /// Appends `field` after any previously-added fields.
    pub fn with_field(mut self, field: Field) -> Self {
        self.0.fields.insert(field.name.to_owned(), field);
        self
    }

    /// Declares that this type implements the interface named
    /// `interface_name`.
    pub fn with_interface(mut self, interface_name: impl AsRef<str>) -> Self {
        self.0.interfaces.push(NamedGraphQLTypeRef::new(interface_name));
        self
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The description of this [`ObjectType`].
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the
    /// same ordering as the order the fields were declared in.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The list of [`InterfaceType`]s implemented by this [`ObjectType`],
    /// in declaration order.
    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    /// The names of all [`InterfaceType`]s implemented by this
    /// [`ObjectType`].
    ///
    /// This can be useful when the [`Schema`] object is unavailable or
    /// inconvenient to access but the type's name is all that is needed.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
