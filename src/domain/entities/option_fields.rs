use serde::{Deserialize, Deserializer};

/// Represents optional field semantics in update drafts.
///
/// - `Unchanged` → field not present in the draft
/// - `SetToNull` → explicitly null, clears the stored value
/// - `SetToValue` → set to provided value
#[derive(Debug, Clone, PartialEq)]
pub enum OptionField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

impl<T> OptionField<T> {
    /// Convert to nested option:
    /// - `None` → unchanged
    /// - `Some(None)` → clear
    /// - `Some(Some(T))` → set to value
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            Self::Unchanged => None,
            Self::SetToNull => Some(None),
            Self::SetToValue(v) => Some(Some(v)),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// If `SetToValue`, returns a reference to the inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl<T> From<Option<T>> for OptionField<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => OptionField::SetToValue(v),
            None => OptionField::SetToNull,
        }
    }
}

/// Deserializes a *present* JSON field into `SetToNull`/`SetToValue`.
/// Pair with `#[serde(default)]` on the container so an absent field stays
/// `Unchanged`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<OptionField<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(OptionField::from)
}
