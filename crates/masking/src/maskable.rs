//! Header values that may or may not carry a secret.

use std::{fmt, hash};

use crate::{ExposeInterface, PeekInterface, Secret};

/// A value that is either wrapped in [`Secret`] or kept in the clear.
///
/// Outgoing request headers are stored as `Maskable<String>` so that credentials
/// never show up when a request is logged.
#[derive(Clone, Eq, PartialEq)]
pub enum Maskable<T: Clone + Eq> {
    /// Redacted whenever formatted
    Masked(Secret<T>),
    /// Formatted as is
    Normal(T),
}

impl<T: Clone + Eq + fmt::Debug> fmt::Debug for Maskable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Masked(secret) => fmt::Debug::fmt(secret, f),
            Self::Normal(value) => fmt::Debug::fmt(value, f),
        }
    }
}

impl<T: Clone + Eq + hash::Hash> hash::Hash for Maskable<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Masked(secret) => secret.peek().hash(state),
            Self::Normal(value) => value.hash(state),
        }
    }
}

impl<T: Clone + Eq> Maskable<T> {
    /// Unwraps the value, exposing it if it was masked.
    pub fn into_inner(self) -> T {
        match self {
            Self::Masked(secret) => secret.expose(),
            Self::Normal(value) => value,
        }
    }

    /// Whether the value is wrapped in [`Secret`].
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Masked(_))
    }
}

/// Conversion into a masked [`Maskable`].
pub trait Mask {
    /// Type held by the resulting [`Maskable`]
    type Output: Clone + Eq;

    /// Wraps `self` as [`Maskable::Masked`].
    fn into_masked(self) -> Maskable<Self::Output>;
}

impl Mask for String {
    type Output = Self;

    fn into_masked(self) -> Maskable<Self> {
        Maskable::Masked(Secret::new(self))
    }
}

impl Mask for Secret<String> {
    type Output = String;

    fn into_masked(self) -> Maskable<String> {
        Maskable::Masked(self)
    }
}

impl<T: Clone + Eq> From<T> for Maskable<T> {
    fn from(value: T) -> Self {
        Self::Normal(value)
    }
}

impl From<&str> for Maskable<String> {
    fn from(value: &str) -> Self {
        Self::Normal(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_values_are_redacted_in_debug_output() {
        let header = "Basic c2VjcmV0".to_string().into_masked();

        assert!(header.is_masked());
        assert!(!format!("{header:?}").contains("c2VjcmV0"));
        assert_eq!(header.into_inner(), "Basic c2VjcmV0");
    }

    #[test]
    fn plain_values_stay_readable() {
        let header: Maskable<String> = "application/json".into();

        assert!(!header.is_masked());
        assert_eq!(format!("{header:?}"), "\"application/json\"");
    }
}
