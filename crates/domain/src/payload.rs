//! Turning a raw JSON object into a typed create draft or update patch.
//!
//! Every draft and patch lists the keys it accepts ([`Payload::FIELDS`]) and
//! the keys it silently drops ([`Payload::IGNORED`]): server-owned fields
//! such as `id` or timestamps, which clients commonly echo back. Any other
//! key is rejected with [`ValidationError::UnknownField`]. An empty object
//! carries nothing to create or change and counts as no body at all, unless
//! the payload opts in with [`Payload::ALLOW_EMPTY`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Keys owned by the server on every record kind.
pub const SERVER_FIELDS: &[&str] = &["id", "created_at", "updated_at", "__class__"];

/// A request body shape with an explicit list of accepted keys.
pub trait Payload: DeserializeOwned {
    /// Keys that are deserialized into the payload.
    const FIELDS: &'static [&'static str];

    /// Keys that are accepted and dropped before deserializing.
    const IGNORED: &'static [&'static str];

    /// Whether `{}` is a meaningful body for this payload.
    const ALLOW_EMPTY: bool = false;

    /// Parse a JSON object into this payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAJson`] for an empty object unless
    /// [`Payload::ALLOW_EMPTY`] is set, [`ValidationError::UnknownField`]
    /// for the first key that is
    /// neither accepted nor ignored, and [`ValidationError::InvalidBody`]
    /// when an accepted key carries a value of the wrong type.
    fn from_object(mut object: Map<String, Value>) -> Result<Self, ValidationError> {
        if object.is_empty() && !Self::ALLOW_EMPTY {
            return Err(ValidationError::NotAJson);
        }
        object.retain(|key, _| {
            !SERVER_FIELDS.contains(&key.as_str()) && !Self::IGNORED.contains(&key.as_str())
        });
        if let Some(key) = object
            .keys()
            .find(|key| !Self::FIELDS.contains(&key.as_str()))
        {
            return Err(ValidationError::UnknownField(key.clone()));
        }
        serde_json::from_value(Value::Object(object)).map_err(ValidationError::InvalidBody)
    }
}

/// Unwrap a required field, naming it in the error when absent.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when `value` is `None`.
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}
