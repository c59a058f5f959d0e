//! User: an account that owns places.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::UserId;
use crate::payload::{Payload, require};
use crate::time::{Timestamp, now};

/// A registered user. The password never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `email` or `password` is empty.
    pub fn validate(&self) -> Result<(), HbnbError> {
        if self.email.is_empty() {
            return Err(ValidationError::EmptyField("email").into());
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyField("password").into());
        }
        Ok(())
    }

    /// Record a modification at `at`.
    pub fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    email: Option<String>,
    password: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, at: Timestamp) -> Self {
        self.created_at = Some(at);
        self
    }

    #[must_use]
    pub fn updated_at(mut self, at: Timestamp) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `email` or `password` is
    /// missing or empty.
    pub fn build(self) -> Result<User, HbnbError> {
        let created_at = self.created_at.unwrap_or_else(now);
        let user = User {
            id: self.id.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        };
        user.validate()?;
        Ok(user)
    }
}

/// Body of a user creation request.
#[derive(Debug, Default, Deserialize)]
pub struct NewUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Payload for NewUser {
    const FIELDS: &'static [&'static str] = &["email", "password", "first_name", "last_name"];
    const IGNORED: &'static [&'static str] = &[];
}

impl NewUser {
    /// Build a fresh [`User`] from the draft.
    ///
    /// `email` is checked before `password`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] naming the first absent
    /// required field.
    pub fn into_user(self) -> Result<User, HbnbError> {
        let email = require(self.email, "email")?;
        let password = require(self.password, "password")?;
        let mut builder = User::builder().email(email).password(password);
        if let Some(first_name) = self.first_name {
            builder = builder.first_name(first_name);
        }
        if let Some(last_name) = self.last_name {
            builder = builder.last_name(last_name);
        }
        builder.build()
    }
}

/// Fields of a user that a client may change. The email is fixed.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Payload for UserUpdate {
    const FIELDS: &'static [&'static str] = &["password", "first_name", "last_name"];
    const IGNORED: &'static [&'static str] = &["email"];
}

impl UserUpdate {
    /// Overwrite the fields present in the patch.
    pub fn apply(self, user: &mut User) {
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
    }
}
