use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Names of the meta-types defined by the GraphQL introspection system.
pub(crate) const INTROSPECTION_TYPE_NAMES: &[&str] = &[
    "__Directive",
    "__DirectiveLocation",
    "__EnumValue",
    "__Field",
    "__InputValue",
    "__Schema",
    "__Type",
    "__TypeKind",
];

/// Represents a defined GraphQL type
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Bool,
    Enum(Box<EnumType>),
    Float,
    ID,
    InputObject(Box<InputObjectType>),
    Int,
    Interface(Box<InterfaceType>),
    Object(Box<ObjectType>),
    Scalar(Box<ScalarType>),
    String,
    Union(Box<UnionType>),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The description of this type. Built-in scalars never have one.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String => None,
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// Indicates if this is one of the scalars every GraphQL schema defines
    /// implicitly (`Boolean`, `Float`, `ID`, `Int`, `String`).
    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String
        )
    }

    /// Indicates if this type is one of the introspection meta-types
    /// (`__Schema`, `__Type`, etc).
    pub fn is_introspection(&self) -> bool {
        INTROSPECTION_TYPE_NAMES.contains(&self.name())
    }

    /// Indicates if this type may be used as the type of an input field or a
    /// parameter.
    pub fn is_input_type(&self) -> bool {
        !matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// Indicates if this type may be used as the type of an object or
    /// interface field.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}
impl DerefByName for GraphQLType {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.types.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
impl std::convert::From<EnumType> for GraphQLType {
    fn from(value: EnumType) -> Self {
        Self::Enum(Box::new(value))
    }
}
impl std::convert::From<InputObjectType> for GraphQLType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(Box::new(value))
    }
}
impl std::convert::From<InterfaceType> for GraphQLType {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(Box::new(value))
    }
}
impl std::convert::From<ObjectType> for GraphQLType {
    fn from(value: ObjectType) -> Self {
        Self::Object(Box::new(value))
    }
}
impl std::convert::From<ScalarType> for GraphQLType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(Box::new(value))
    }
}
impl std::convert::From<UnionType> for GraphQLType {
    fn from(value: UnionType) -> Self {
        Self::Union(Box::new(value))
    }
}

pub type NamedGraphQLTypeRef = crate::NamedRef<Schema, GraphQLType>;
