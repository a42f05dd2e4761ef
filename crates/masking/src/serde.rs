//!
//! Serde-related.
//!

pub use erased_serde::Serialize as ErasedSerialize;
use serde::{de, Deserialize, Serialize, Serializer};

use crate::{PeekInterface, Secret, Strategy};

/// Marker trait for secret types which can be [`Serialize`]-d by [`serde`].
///
/// Only types marked with this trait receive a [`Serialize`] impl for `Secret<T>`, which keeps
/// secrets from leaking through serialization by accident. Every type which implements
/// `DeserializeOwned` receives a [`Deserialize`] impl.
pub trait SerializableSecret: Serialize {}

impl SerializableSecret for String {}
impl SerializableSecret for u8 {}
impl SerializableSecret for u16 {}
impl SerializableSecret for i32 {}
impl SerializableSecret for i64 {}

impl<'de, T, I> Deserialize<'de> for Secret<T, I>
where
    T: Clone + de::DeserializeOwned + Sized,
    I: Strategy<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<T, I> Serialize for Secret<T, I>
where
    T: SerializableSecret + Serialize + Sized,
    I: Strategy<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.peek().serialize(serializer)
    }
}

/// Trait object for request bodies.
///
/// The usual Serde `Serialize` trait cannot be used as a trait object because of its generic
/// methods, so request bodies are boxed as `Box<dyn ErasedMaskSerialize + Send>` instead.
pub trait ErasedMaskSerialize: ErasedSerialize {}

impl<T: Serialize + ErasedSerialize> ErasedMaskSerialize for T {}

erased_serde::serialize_trait_object!(ErasedMaskSerialize);

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Credentials {
        access_key: Secret<String>,
    }

    #[test]
    fn secret_round_trips_through_json_unmasked() {
        let credentials: Credentials =
            serde_json::from_str(r#"{"access_key":"abc123"}"#).unwrap();

        assert_eq!(credentials.access_key.peek(), "abc123");
        assert_eq!(
            serde_json::to_string(&credentials).unwrap(),
            r#"{"access_key":"abc123"}"#
        );
    }

    #[test]
    fn boxed_body_serializes_like_the_inner_value() {
        let body: Box<dyn ErasedMaskSerialize + Send> = Box::new(Credentials {
            access_key: Secret::new("abc123".to_string()),
        });

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "access_key": "abc123" })
        );
    }

    #[test]
    fn debug_output_is_masked() {
        let credentials = Secret::<String>::new("abc123".to_string());

        assert_eq!(
            format!("{credentials:?}"),
            "*** alloc::string::String ***"
        );
    }
}
