//! Request extractors: JSON object bodies and typed path ids.

use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

use hbnb_domain::error::{HbnbError, NotFoundError, ValidationError};
use hbnb_domain::payload::Payload;

use crate::error::ApiError;

/// A request body parsed as a JSON object into a [`Payload`].
///
/// Anything that is not a JSON object, including an unreadable body, is
/// rejected with [`ValidationError::NotAJson`], as is `{}` for payloads that
/// do not allow it. The `Content-Type` header is
/// not inspected.
pub struct JsonPayload<T>(pub T);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: Payload + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| not_a_json())?;
        let Ok(Value::Object(object)) = serde_json::from_slice::<Value>(&bytes) else {
            return Err(not_a_json());
        };
        let payload = T::from_object(object).map_err(HbnbError::from)?;
        Ok(Self(payload))
    }
}

fn not_a_json() -> ApiError {
    HbnbError::from(ValidationError::NotAJson).into()
}

/// Parse a path segment into a typed id. A malformed id names no record.
///
/// # Errors
///
/// Returns a not-found [`ApiError`] when `raw` is not a valid id.
pub fn path_id<T: FromStr>(raw: &str, entity: &'static str) -> Result<T, ApiError> {
    T::from_str(raw).map_err(|_| {
        ApiError::from(NotFoundError {
            entity,
            id: raw.to_string(),
        })
    })
}
