//! City service: use-cases for managing cities and listing them per state.

use hbnb_domain::city::{City, CityUpdate, NewCity};
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{CityId, StateId};
use hbnb_domain::time::now;

use crate::ports::{CityRepository, StateRepository};

/// Application service for city CRUD operations.
///
/// Holds the state repository too, so that every city it creates belongs to
/// a state that exists.
pub struct CityService<CR, SR> {
    cities: CR,
    states: SR,
}

impl<CR: CityRepository, SR: StateRepository> CityService<CR, SR> {
    /// Create a new service backed by the given repositories.
    pub fn new(cities: CR, states: SR) -> Self {
        Self { cities, states }
    }

    async fn require_state(&self, state_id: StateId) -> Result<(), HbnbError> {
        match self.states.get_by_id(state_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError {
                entity: "State",
                id: state_id.to_string(),
            }
            .into()),
        }
    }

    /// Create a city inside an existing state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the state does not exist,
    /// [`HbnbError::Validation`] if `name` is missing or empty, or a storage
    /// error propagated from a repository.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_city(&self, state_id: StateId, draft: NewCity) -> Result<City, HbnbError> {
        self.require_state(state_id).await?;
        let city = draft.into_city(state_id)?;
        self.cities.create(city).await
    }

    /// Look up a city by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no city with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_city(&self, id: CityId) -> Result<City, HbnbError> {
        self.cities.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "City",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all cities.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_cities(&self) -> Result<Vec<City>, HbnbError> {
        self.cities.get_all().await
    }

    /// List the cities of a state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the state does not exist, or a
    /// storage error propagated from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_cities_of_state(&self, state_id: StateId) -> Result<Vec<City>, HbnbError> {
        self.require_state(state_id).await?;
        self.cities.find_by_state(state_id).await
    }

    /// Apply a patch to an existing city and refresh its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the city does not exist,
    /// [`HbnbError::Validation`] if the result breaks an invariant, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_city(&self, id: CityId, patch: CityUpdate) -> Result<City, HbnbError> {
        let mut city = self.get_city(id).await?;
        patch.apply(&mut city);
        city.validate()?;
        city.touch(now());
        self.cities.update(city).await
    }

    /// Delete a city by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the city does not exist, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_city(&self, id: CityId) -> Result<(), HbnbError> {
        self.get_city(id).await?;
        self.cities.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::{InMemoryCityRepo, InMemoryStateRepo};
    use hbnb_domain::error::ValidationError;
    use hbnb_domain::state::State;

    struct Fixture {
        svc: CityService<InMemoryCityRepo, InMemoryStateRepo>,
        states: InMemoryStateRepo,
    }

    fn fixture() -> Fixture {
        let states = InMemoryStateRepo::default();
        Fixture {
            svc: CityService::new(InMemoryCityRepo::default(), states.clone()),
            states,
        }
    }

    async fn seed_state(states: &InMemoryStateRepo, name: &str) -> StateId {
        let state = State::builder().name(name).build().unwrap();
        states.create(state).await.unwrap().id
    }

    fn draft(name: &str) -> NewCity {
        NewCity {
            name: Some(name.to_string()),
        }
    }

    #[tokio::test]
    async fn should_create_city_in_existing_state() {
        let fx = fixture();
        let state_id = seed_state(&fx.states, "California").await;

        let city = fx.svc.create_city(state_id, draft("Fresno")).await.unwrap();

        assert_eq!(city.state_id, state_id);
        assert_eq!(fx.svc.get_city(city.id).await.unwrap(), city);
    }

    #[tokio::test]
    async fn should_return_not_found_when_state_missing_on_create() {
        let fx = fixture();
        let result = fx.svc.create_city(StateId::new(), draft("Ghost")).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_check_state_before_required_fields() {
        let fx = fixture();
        let result = fx
            .svc
            .create_city(StateId::new(), NewCity::default())
            .await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));

        let state_id = seed_state(&fx.states, "Nevada").await;
        let result = fx.svc.create_city(state_id, NewCity::default()).await;
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField("name")))
        ));
    }

    #[tokio::test]
    async fn should_list_only_cities_of_requested_state() {
        let fx = fixture();
        let ca = seed_state(&fx.states, "California").await;
        let nv = seed_state(&fx.states, "Nevada").await;
        fx.svc.create_city(ca, draft("Fresno")).await.unwrap();
        fx.svc.create_city(nv, draft("Reno")).await.unwrap();
        fx.svc.create_city(ca, draft("Napa")).await.unwrap();

        let cities = fx.svc.list_cities_of_state(ca).await.unwrap();
        let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Fresno", "Napa"]);
        assert_eq!(fx.svc.list_cities().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_return_not_found_when_listing_cities_of_unknown_state() {
        let fx = fixture();
        let result = fx.svc.list_cities_of_state(StateId::new()).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_update_city_name_but_keep_state() {
        let fx = fixture();
        let state_id = seed_state(&fx.states, "Oregon").await;
        let city = fx.svc.create_city(state_id, draft("Salem")).await.unwrap();

        let updated = fx
            .svc
            .update_city(
                city.id,
                CityUpdate {
                    name: Some("Portland".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Portland");
        assert_eq!(updated.state_id, state_id);
        assert_eq!(updated.created_at, city.created_at);
    }

    #[tokio::test]
    async fn should_delete_city() {
        let fx = fixture();
        let state_id = seed_state(&fx.states, "Idaho").await;
        let city = fx.svc.create_city(state_id, draft("Boise")).await.unwrap();

        fx.svc.delete_city(city.id).await.unwrap();
        assert!(matches!(
            fx.svc.get_city(city.id).await,
            Err(HbnbError::NotFound(_))
        ));
    }
}
