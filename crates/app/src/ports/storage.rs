//! Storage port: repository traits for persistence.
//!
//! One repository per record kind. `get_all` and the `find_by_*` queries
//! return records in insertion order.

use std::future::Future;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, StateId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

/// Repository for persisting and querying [`State`]s.
pub trait StateRepository {
    /// Create a new state in storage.
    fn create(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    /// Get a state by its unique identifier.
    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, HbnbError>> + Send;

    /// Get all states.
    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, HbnbError>> + Send;

    /// Update an existing state.
    fn update(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    /// Delete a state, and with it every city of that state.
    fn delete(&self, id: StateId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`City`]s.
pub trait CityRepository {
    /// Create a new city in storage.
    fn create(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send;

    /// Get a city by its unique identifier.
    fn get_by_id(&self, id: CityId)
    -> impl Future<Output = Result<Option<City>, HbnbError>> + Send;

    /// Get all cities.
    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send;

    /// Find every city of a state. Unknown states yield an empty list.
    fn find_by_state(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send;

    /// Update an existing city.
    fn update(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send;

    /// Delete a city, and with it every place of that city.
    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`Amenity`] records.
pub trait AmenityRepository {
    /// Create a new amenity in storage.
    fn create(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, HbnbError>> + Send;

    /// Get an amenity by its unique identifier.
    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send;

    /// Get all amenities.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send;

    /// Update an existing amenity.
    fn update(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, HbnbError>> + Send;

    /// Delete an amenity and unlink it from every place.
    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Create a new user in storage.
    fn create(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(&self, id: UserId)
    -> impl Future<Output = Result<Option<User>, HbnbError>> + Send;

    /// Get all users.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HbnbError>> + Send;

    /// Update an existing user.
    fn update(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    /// Delete a user, and with it every place the user owns.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`Place`]s and their amenity links.
///
/// Every returned [`Place`] has `amenity_ids` populated from the link table.
pub trait PlaceRepository {
    /// Create a new place in storage. `amenity_ids` is not persisted here.
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    /// Get a place by its unique identifier.
    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send;

    /// Get all places.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    /// Find every place of a city. Unknown cities yield an empty list.
    fn find_by_city(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    /// Update the scalar fields of an existing place.
    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    /// Delete a place and its amenity links.
    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Link an amenity to a place. Linking twice is a no-op.
    fn add_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), HbnbError>> + Send;

    /// Remove the link between an amenity and a place, if any.
    fn remove_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), HbnbError>> + Send;
}
