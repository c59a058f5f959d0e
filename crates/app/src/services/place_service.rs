//! Place service: use-cases for managing places and their amenities.

use std::str::FromStr;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{AmenityId, CityId, PlaceId, UserId};
use hbnb_domain::place::{NewPlace, Place, PlaceUpdate};
use hbnb_domain::time::now;

use crate::ports::{AmenityRepository, CityRepository, PlaceRepository, UserRepository};

/// Outcome of linking an amenity to a place.
#[derive(Debug)]
pub enum AmenityLink {
    /// The link was created.
    Created(Amenity),
    /// The amenity was already linked to the place.
    Existing(Amenity),
}

/// Application service for place CRUD and place/amenity links.
///
/// Holds the city, user and amenity repositories to check that every
/// reference a place carries points at an existing record.
pub struct PlaceService<PR, CR, UR, AR> {
    places: PR,
    cities: CR,
    users: UR,
    amenities: AR,
}

fn not_found(entity: &'static str, id: impl ToString) -> HbnbError {
    NotFoundError {
        entity,
        id: id.to_string(),
    }
    .into()
}

impl<PR, CR, UR, AR> PlaceService<PR, CR, UR, AR>
where
    PR: PlaceRepository,
    CR: CityRepository,
    UR: UserRepository,
    AR: AmenityRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(places: PR, cities: CR, users: UR, amenities: AR) -> Self {
        Self {
            places,
            cities,
            users,
            amenities,
        }
    }

    async fn require_city(&self, city_id: CityId) -> Result<(), HbnbError> {
        match self.cities.get_by_id(city_id).await? {
            Some(_) => Ok(()),
            None => Err(not_found("City", city_id)),
        }
    }

    async fn get_amenity(&self, amenity_id: AmenityId) -> Result<Amenity, HbnbError> {
        self.amenities
            .get_by_id(amenity_id)
            .await?
            .ok_or_else(|| not_found("Amenity", amenity_id))
    }

    /// Create a place inside an existing city, owned by an existing user.
    ///
    /// Checks run in order: city exists, `user_id` present, user exists,
    /// `name` present.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the city or the user does not
    /// exist, [`HbnbError::Validation`] if `user_id` or `name` is missing,
    /// or a storage error propagated from a repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_place(&self, city_id: CityId, draft: NewPlace) -> Result<Place, HbnbError> {
        self.require_city(city_id).await?;

        let owner = draft.owner()?;
        let user_id = UserId::from_str(owner).map_err(|_| not_found("User", owner))?;
        if self.users.get_by_id(user_id).await?.is_none() {
            return Err(not_found("User", user_id));
        }

        let place = draft.into_place(city_id, user_id)?;
        self.places.create(place).await
    }

    /// Look up a place by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_place(&self, id: PlaceId) -> Result<Place, HbnbError> {
        self.places
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found("Place", id))
    }

    /// List all places.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_places(&self) -> Result<Vec<Place>, HbnbError> {
        self.places.get_all().await
    }

    /// List the places of a city.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the city does not exist, or a
    /// storage error propagated from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_places_of_city(&self, city_id: CityId) -> Result<Vec<Place>, HbnbError> {
        self.require_city(city_id).await?;
        self.places.find_by_city(city_id).await
    }

    /// Apply a patch to an existing place and refresh its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the place does not exist,
    /// [`HbnbError::Validation`] if the result breaks an invariant, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_place(&self, id: PlaceId, patch: PlaceUpdate) -> Result<Place, HbnbError> {
        let mut place = self.get_place(id).await?;
        patch.apply(&mut place);
        place.validate()?;
        place.touch(now());
        self.places.update(place).await
    }

    /// Delete a place by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the place does not exist, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_place(&self, id: PlaceId) -> Result<(), HbnbError> {
        self.get_place(id).await?;
        self.places.delete(id).await
    }

    /// List the amenities linked to a place, in link order.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the place does not exist, or a
    /// storage error propagated from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_amenities_of_place(&self, id: PlaceId) -> Result<Vec<Amenity>, HbnbError> {
        let place = self.get_place(id).await?;
        let mut amenities = Vec::with_capacity(place.amenity_ids.len());
        for amenity_id in place.amenity_ids {
            if let Some(amenity) = self.amenities.get_by_id(amenity_id).await? {
                amenities.push(amenity);
            }
        }
        Ok(amenities)
    }

    /// Link an amenity to a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the place or the amenity does not
    /// exist, or a storage error propagated from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn link_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<AmenityLink, HbnbError> {
        let place = self.get_place(place_id).await?;
        let amenity = self.get_amenity(amenity_id).await?;
        if place.has_amenity(amenity_id) {
            return Ok(AmenityLink::Existing(amenity));
        }
        self.places.add_amenity(place_id, amenity_id).await?;
        Ok(AmenityLink::Created(amenity))
    }

    /// Remove the link between an amenity and a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the place or the amenity does not
    /// exist or they are not linked, or a storage error propagated from a
    /// repository.
    #[tracing::instrument(skip(self))]
    pub async fn unlink_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<(), HbnbError> {
        let place = self.get_place(place_id).await?;
        self.get_amenity(amenity_id).await?;
        if !place.has_amenity(amenity_id) {
            return Err(not_found("Amenity", amenity_id));
        }
        self.places.remove_amenity(place_id, amenity_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::{InMemoryAmenityRepo, InMemoryCityRepo, InMemoryPlaceRepo, InMemoryUserRepo};
    use hbnb_domain::city::City;
    use hbnb_domain::error::ValidationError;
    use hbnb_domain::id::StateId;
    use hbnb_domain::user::User;

    type Service = PlaceService<InMemoryPlaceRepo, InMemoryCityRepo, InMemoryUserRepo, InMemoryAmenityRepo>;

    struct Fixture {
        svc: Service,
        city_id: CityId,
        user_id: UserId,
        amenities: InMemoryAmenityRepo,
    }

    async fn fixture() -> Fixture {
        let cities = InMemoryCityRepo::default();
        let users = InMemoryUserRepo::default();
        let amenities = InMemoryAmenityRepo::default();

        let city = City::builder()
            .name("San Francisco")
            .state_id(StateId::new())
            .build()
            .unwrap();
        let city_id = cities.create(city).await.unwrap().id;
        let user = User::builder()
            .email("host@example.com")
            .password("pw")
            .build()
            .unwrap();
        let user_id = users.create(user).await.unwrap().id;

        Fixture {
            svc: PlaceService::new(
                InMemoryPlaceRepo::default(),
                cities,
                users,
                amenities.clone(),
            ),
            city_id,
            user_id,
            amenities,
        }
    }

    fn draft(user_id: UserId, name: &str) -> NewPlace {
        NewPlace {
            user_id: Some(user_id.to_string()),
            name: Some(name.to_string()),
            ..NewPlace::default()
        }
    }

    async fn seed_amenity(repo: &InMemoryAmenityRepo, name: &str) -> AmenityId {
        let amenity = Amenity::builder().name(name).build().unwrap();
        repo.create(amenity).await.unwrap().id
    }

    #[tokio::test]
    async fn should_create_place_when_city_and_user_exist() {
        let fx = fixture().await;
        let place = fx
            .svc
            .create_place(fx.city_id, draft(fx.user_id, "Loft"))
            .await
            .unwrap();

        assert_eq!(place.city_id, fx.city_id);
        assert_eq!(place.user_id, fx.user_id);
        assert_eq!(fx.svc.get_place(place.id).await.unwrap(), place);
    }

    #[tokio::test]
    async fn should_return_not_found_when_city_missing() {
        let fx = fixture().await;
        let result = fx
            .svc
            .create_place(CityId::new(), draft(fx.user_id, "Loft"))
            .await;
        assert!(matches!(result, Err(HbnbError::NotFound(ref e)) if e.entity == "City"));
    }

    #[tokio::test]
    async fn should_report_missing_user_id() {
        let fx = fixture().await;
        let result = fx
            .svc
            .create_place(
                fx.city_id,
                NewPlace {
                    name: Some("Loft".to_string()),
                    ..NewPlace::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField("user_id")))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_unknown_or_malformed() {
        let fx = fixture().await;
        let result = fx
            .svc
            .create_place(fx.city_id, draft(UserId::new(), "Loft"))
            .await;
        assert!(matches!(result, Err(HbnbError::NotFound(ref e)) if e.entity == "User"));

        let malformed = NewPlace {
            user_id: Some("nobody".to_string()),
            name: Some("Loft".to_string()),
            ..NewPlace::default()
        };
        let result = fx.svc.create_place(fx.city_id, malformed).await;
        assert!(matches!(result, Err(HbnbError::NotFound(ref e)) if e.entity == "User"));
    }

    #[tokio::test]
    async fn should_check_user_before_name() {
        let fx = fixture().await;
        let result = fx
            .svc
            .create_place(
                fx.city_id,
                NewPlace {
                    user_id: Some(UserId::new().to_string()),
                    ..NewPlace::default()
                },
            )
            .await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));

        let result = fx
            .svc
            .create_place(
                fx.city_id,
                NewPlace {
                    user_id: Some(fx.user_id.to_string()),
                    ..NewPlace::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField("name")))
        ));
    }

    #[tokio::test]
    async fn should_list_places_of_city() {
        let fx = fixture().await;
        fx.svc
            .create_place(fx.city_id, draft(fx.user_id, "A"))
            .await
            .unwrap();
        fx.svc
            .create_place(fx.city_id, draft(fx.user_id, "B"))
            .await
            .unwrap();

        let places = fx.svc.list_places_of_city(fx.city_id).await.unwrap();
        assert_eq!(places.len(), 2);

        let result = fx.svc.list_places_of_city(CityId::new()).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_update_place_fields_but_keep_references() {
        let fx = fixture().await;
        let place = fx
            .svc
            .create_place(fx.city_id, draft(fx.user_id, "Loft"))
            .await
            .unwrap();

        let updated = fx
            .svc
            .update_place(
                place.id,
                PlaceUpdate {
                    price_by_night: Some(90),
                    description: Some("Sunny".to_string()),
                    ..PlaceUpdate::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price_by_night, 90);
        assert_eq!(updated.description, "Sunny");
        assert_eq!(updated.city_id, place.city_id);
        assert_eq!(updated.user_id, place.user_id);
        assert_eq!(updated.created_at, place.created_at);
    }

    #[tokio::test]
    async fn should_link_amenity_once() {
        let fx = fixture().await;
        let place = fx
            .svc
            .create_place(fx.city_id, draft(fx.user_id, "Loft"))
            .await
            .unwrap();
        let wifi = seed_amenity(&fx.amenities, "Wifi").await;

        let first = fx.svc.link_amenity(place.id, wifi).await.unwrap();
        assert!(matches!(first, AmenityLink::Created(ref a) if a.id == wifi));

        let second = fx.svc.link_amenity(place.id, wifi).await.unwrap();
        assert!(matches!(second, AmenityLink::Existing(_)));

        let amenities = fx.svc.list_amenities_of_place(place.id).await.unwrap();
        assert_eq!(amenities.len(), 1);
        assert_eq!(amenities[0].name, "Wifi");
    }

    #[tokio::test]
    async fn should_return_not_found_when_linking_unknown_amenity() {
        let fx = fixture().await;
        let place = fx
            .svc
            .create_place(fx.city_id, draft(fx.user_id, "Loft"))
            .await
            .unwrap();
        let result = fx.svc.link_amenity(place.id, AmenityId::new()).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_unlink_only_linked_amenity() {
        let fx = fixture().await;
        let place = fx
            .svc
            .create_place(fx.city_id, draft(fx.user_id, "Loft"))
            .await
            .unwrap();
        let wifi = seed_amenity(&fx.amenities, "Wifi").await;
        let pool = seed_amenity(&fx.amenities, "Pool").await;
        fx.svc.link_amenity(place.id, wifi).await.unwrap();

        let result = fx.svc.unlink_amenity(place.id, pool).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));

        fx.svc.unlink_amenity(place.id, wifi).await.unwrap();
        assert!(
            fx.svc
                .list_amenities_of_place(place.id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn should_delete_place() {
        let fx = fixture().await;
        let place = fx
            .svc
            .create_place(fx.city_id, draft(fx.user_id, "Loft"))
            .await
            .unwrap();
        fx.svc.delete_place(place.id).await.unwrap();
        assert!(matches!(
            fx.svc.get_place(place.id).await,
            Err(HbnbError::NotFound(_))
        ));
    }
}
