//! State service: use-cases for managing states.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::StateId;
use hbnb_domain::state::{NewState, State, StateUpdate};
use hbnb_domain::time::now;

use crate::ports::StateRepository;

/// Application service for state CRUD operations.
pub struct StateService<R> {
    repo: R,
}

impl<R: StateRepository> StateService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new state from a client draft.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if a required field is missing or
    /// invariants fail, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_state(&self, draft: NewState) -> Result<State, HbnbError> {
        let state = draft.into_state()?;
        self.repo.create(state).await
    }

    /// Look up a state by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no state with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_state(&self, id: StateId) -> Result<State, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "State",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all states.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_states(&self) -> Result<Vec<State>, HbnbError> {
        self.repo.get_all().await
    }

    /// Apply a patch to an existing state and refresh its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the state does not exist,
    /// [`HbnbError::Validation`] if the patched state breaks an invariant,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_state(&self, id: StateId, patch: StateUpdate) -> Result<State, HbnbError> {
        let mut state = self.get_state(id).await?;
        patch.apply(&mut state);
        state.validate()?;
        state.touch(now());
        self.repo.update(state).await
    }

    /// Delete a state by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the state does not exist, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_state(&self, id: StateId) -> Result<(), HbnbError> {
        self.get_state(id).await?;
        self.repo.delete(id).await
    }
}
