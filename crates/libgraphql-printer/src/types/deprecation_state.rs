/// The reason GraphQL assumes for a `@deprecated` annotation that omits its
/// `reason` argument.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Indicates whether a field, parameter, input field, or enum value has been
/// marked `@deprecated` (and, optionally, why).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum DeprecationState {
    Deprecated(Option<String>),
    #[default]
    NotDeprecated,
}
impl DeprecationState {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    /// The explicitly-specified deprecation reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Deprecated(reason) => reason.as_deref(),
            Self::NotDeprecated => None,
        }
    }
}
