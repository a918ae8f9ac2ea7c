use std::marker::PhantomData;

/// A reference to a `TResource` by name, resolved against a `TSource` that
/// owns it.
///
/// Types refer to each other this way so that a [`Schema`](crate::Schema)
/// can own all of its types without self-references: an
/// [`ObjectType`](crate::types::ObjectType) keeps the interfaces it
/// implements, and a [`UnionType`](crate::types::UnionType) its members, as
/// `NamedRef<Schema, GraphQLType>`s that are only looked up when a caller
/// passes the schema to [`NamedRef::deref()`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedRef<TSource, TResource>
where
    TResource: DerefByName<Source = TSource>,
{
    name: String,
    #[serde(skip)]
    phantom: PhantomData<(TSource, TResource)>,
}
impl<TSource, TResource> NamedRef<TSource, TResource>
where
    TResource: DerefByName<Source = TSource>,
{
    pub fn deref<'a>(&self, source: &'a TSource) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, &self.name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
        }
    }
}

/// Anything a [`NamedRef`] can point at.
pub trait DerefByName: Clone + std::fmt::Debug + Sized {
    type Source;

    fn deref_name<'a>(source: &'a Self::Source, name: &str) -> Result<&'a Self, DerefByNameError>;
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No definition named `{0}` exists")]
    DanglingReference(String),
}
