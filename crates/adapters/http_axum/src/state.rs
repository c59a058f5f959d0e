//! Shared application state for axum handlers.

use std::sync::Arc;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_app::services::amenity_service::AmenityService;
use hbnb_app::services::city_service::CityService;
use hbnb_app::services::place_search_service::PlaceSearchService;
use hbnb_app::services::place_service::PlaceService;
use hbnb_app::services::state_service::StateService;
use hbnb_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the five repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`: only the `Arc` wrappers are cloned.
pub struct AppState<SR, CR, AR, UR, PR> {
    /// State CRUD service.
    pub state_service: Arc<StateService<SR>>,
    /// City CRUD service.
    pub city_service: Arc<CityService<CR, SR>>,
    /// Amenity CRUD service.
    pub amenity_service: Arc<AmenityService<AR>>,
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Place CRUD and place/amenity link service.
    pub place_service: Arc<PlaceService<PR, CR, UR, AR>>,
    /// Place search service.
    pub search_service: Arc<PlaceSearchService<PR, CR>>,
}

impl<SR, CR, AR, UR, PR> Clone for AppState<SR, CR, AR, UR, PR> {
    fn clone(&self) -> Self {
        Self {
            state_service: Arc::clone(&self.state_service),
            city_service: Arc::clone(&self.city_service),
            amenity_service: Arc::clone(&self.amenity_service),
            user_service: Arc::clone(&self.user_service),
            place_service: Arc::clone(&self.place_service),
            search_service: Arc::clone(&self.search_service),
        }
    }
}

impl<SR, CR, AR, UR, PR> AppState<SR, CR, AR, UR, PR>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        state_service: StateService<SR>,
        city_service: CityService<CR, SR>,
        amenity_service: AmenityService<AR>,
        user_service: UserService<UR>,
        place_service: PlaceService<PR, CR, UR, AR>,
        search_service: PlaceSearchService<PR, CR>,
    ) -> Self {
        Self {
            state_service: Arc::new(state_service),
            city_service: Arc::new(city_service),
            amenity_service: Arc::new(amenity_service),
            user_service: Arc::new(user_service),
            place_service: Arc::new(place_service),
            search_service: Arc::new(search_service),
        }
    }
}

impl<SR, CR, AR, UR, PR> AppState<SR, CR, AR, UR, PR>
where
    SR: StateRepository + Clone + Send + Sync + 'static,
    CR: CityRepository + Clone + Send + Sync + 'static,
    AR: AmenityRepository + Clone + Send + Sync + 'static,
    UR: UserRepository + Clone + Send + Sync + 'static,
    PR: PlaceRepository + Clone + Send + Sync + 'static,
{
    /// Build every service from one set of cloneable repositories.
    pub fn from_repositories(states: SR, cities: CR, amenities: AR, users: UR, places: PR) -> Self {
        Self::new(
            StateService::new(states.clone()),
            CityService::new(cities.clone(), states),
            AmenityService::new(amenities.clone()),
            UserService::new(users.clone()),
            PlaceService::new(places.clone(), cities.clone(), users, amenities),
            PlaceSearchService::new(places, cities),
        )
    }
}
