//! State: top-level geographic grouping that owns cities.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::StateId;
use crate::payload::{Payload, require};
use crate::time::{Timestamp, now};

/// A state (or region) that cities belong to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl State {
    /// Create a builder for constructing a [`State`].
    #[must_use]
    pub fn builder() -> StateBuilder {
        StateBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HbnbError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Record a modification at `at`.
    pub fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }
}

/// Step-by-step builder for [`State`].
#[derive(Debug, Default)]
pub struct StateBuilder {
    id: Option<StateId>,
    name: Option<String>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl StateBuilder {
    #[must_use]
    pub fn id(mut self, id: StateId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
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

    /// Consume the builder, validate, and return a [`State`].
    ///
    /// Timestamps default to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<State, HbnbError> {
        let created_at = self.created_at.unwrap_or_else(now);
        let state = State {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        };
        state.validate()?;
        Ok(state)
    }
}

/// Body of a state creation request.
#[derive(Debug, Default, Deserialize)]
pub struct NewState {
    pub name: Option<String>,
}

impl Payload for NewState {
    const FIELDS: &'static [&'static str] = &["name"];
    const IGNORED: &'static [&'static str] = &[];
}

impl NewState {
    /// Build a fresh [`State`] from the draft.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent, or
    /// [`ValidationError::EmptyName`] when it is empty.
    pub fn into_state(self) -> Result<State, HbnbError> {
        State::builder().name(require(self.name, "name")?).build()
    }
}

/// Fields of a state that a client may change.
#[derive(Debug, Default, Deserialize)]
pub struct StateUpdate {
    pub name: Option<String>,
}

impl Payload for StateUpdate {
    const FIELDS: &'static [&'static str] = &["name"];
    const IGNORED: &'static [&'static str] = &[];
}

impl StateUpdate {
    /// Overwrite the fields present in the patch.
    pub fn apply(self, state: &mut State) {
        if let Some(name) = self.name {
            state.name = name;
        }
    }
}
