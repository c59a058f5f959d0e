//! Amenity service: use-cases for managing amenities.

use hbnb_domain::amenity::{Amenity, AmenityUpdate, NewAmenity};
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::AmenityId;
use hbnb_domain::time::now;

use crate::ports::AmenityRepository;

/// Application service for amenity CRUD operations.
pub struct AmenityService<R> {
    repo: R,
}

impl<R: AmenityRepository> AmenityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new amenity from a client draft.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `name` is missing or empty, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_amenity(&self, draft: NewAmenity) -> Result<Amenity, HbnbError> {
        let amenity = draft.into_amenity()?;
        self.repo.create(amenity).await
    }

    /// Look up an amenity by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no amenity with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_amenity(&self, id: AmenityId) -> Result<Amenity, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Amenity",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all amenities.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, HbnbError> {
        self.repo.get_all().await
    }

    /// Apply a patch to an existing amenity and refresh its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the amenity does not exist,
    /// [`HbnbError::Validation`] if the result breaks an invariant, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_amenity(
        &self,
        id: AmenityId,
        patch: AmenityUpdate,
    ) -> Result<Amenity, HbnbError> {
        let mut amenity = self.get_amenity(id).await?;
        patch.apply(&mut amenity);
        amenity.validate()?;
        amenity.touch(now());
        self.repo.update(amenity).await
    }

    /// Delete an amenity by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the amenity does not exist, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_amenity(&self, id: AmenityId) -> Result<(), HbnbError> {
        self.get_amenity(id).await?;
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryAmenityRepo;

    fn make_service() -> AmenityService<InMemoryAmenityRepo> {
        AmenityService::new(InMemoryAmenityRepo::default())
    }

    fn draft(name: &str) -> NewAmenity {
        NewAmenity {
            name: Some(name.to_string()),
        }
    }

    #[tokio::test]
    async fn should_create_and_fetch_amenity() {
        let svc = make_service();
        let created = svc.create_amenity(draft("Wifi")).await.unwrap();
        assert_eq!(svc.get_amenity(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_update_amenity_name() {
        let svc = make_service();
        let created = svc.create_amenity(draft("Wifi")).await.unwrap();

        let updated = svc
            .update_amenity(
                created.id,
                AmenityUpdate {
                    name: Some("Fast wifi".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Fast wifi");
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_amenity() {
        let svc = make_service();
        let result = svc
            .update_amenity(AmenityId::new(), AmenityUpdate::default())
            .await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_amenity() {
        let svc = make_service();
        let created = svc.create_amenity(draft("Pool")).await.unwrap();
        svc.delete_amenity(created.id).await.unwrap();
        assert!(svc.list_amenities().await.unwrap().is_empty());
    }
}
