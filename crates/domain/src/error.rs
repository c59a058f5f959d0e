//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `#[from]` (or a manual `From` impl for boxed storage errors).

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    /// The client sent something the domain refuses.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Client input that violates a domain rule.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The request body is not a JSON object.
    #[error("Not a JSON")]
    NotAJson,

    /// A required field is absent from the request body.
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// The request body carries a field the record kind does not accept.
    #[error("Unknown field {0}")]
    UnknownField(String),

    /// A known field carries a value of the wrong shape.
    #[error("Invalid body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// A record was built with an empty `name`.
    #[error("name must not be empty")]
    EmptyName,

    /// A required text field other than `name` is empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// A lookup by id found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Record kind, e.g. `"State"`.
    pub entity: &'static str,
    /// The id that was looked up, as received.
    pub id: String,
}
