//! User service: use-cases for managing users.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::UserId;
use hbnb_domain::time::now;
use hbnb_domain::user::{NewUser, User, UserUpdate};

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new user from a client draft.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `email` or `password` is missing
    /// or empty, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_user(&self, draft: NewUser) -> Result<User, HbnbError> {
        let user = draft.into_user()?;
        self.repo.create(user).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, HbnbError> {
        self.repo.get_all().await
    }

    /// Apply a patch to an existing user and refresh its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the user does not exist,
    /// [`HbnbError::Validation`] if the result breaks an invariant, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_user(&self, id: UserId, patch: UserUpdate) -> Result<User, HbnbError> {
        let mut user = self.get_user(id).await?;
        patch.apply(&mut user);
        user.validate()?;
        user.touch(now());
        self.repo.update(user).await
    }

    /// Delete a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the user does not exist, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), HbnbError> {
        self.get_user(id).await?;
        self.repo.delete(id).await
    }
}
