//! In-memory repository doubles shared by the service tests.
//!
//! Each repository is a cloneable handle on a shared `Vec`, so several
//! services can be wired to the same data the way the `SQLite` adapter shares
//! a pool. Records keep insertion order.

use std::future::Future;
use std::sync::{Arc, Mutex};

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, StateId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

use crate::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};

macro_rules! in_memory_crud {
    ($repo:ident, $trait:ident, $record:ty, $id:ty) => {
        #[derive(Clone, Default)]
        pub struct $repo {
            pub store: Arc<Mutex<Vec<$record>>>,
        }

        impl $trait for $repo {
            fn create(&self, record: $record) -> impl Future<Output = Result<$record, HbnbError>> + Send {
                self.store.lock().unwrap().push(record.clone());
                async { Ok(record) }
            }

            fn get_by_id(
                &self,
                id: $id,
            ) -> impl Future<Output = Result<Option<$record>, HbnbError>> + Send {
                let result = self.store.lock().unwrap().iter().find(|r| r.id == id).cloned();
                async { Ok(result) }
            }

            fn get_all(&self) -> impl Future<Output = Result<Vec<$record>, HbnbError>> + Send {
                let result = self.store.lock().unwrap().clone();
                async { Ok(result) }
            }

            fn update(&self, record: $record) -> impl Future<Output = Result<$record, HbnbError>> + Send {
                let mut store = self.store.lock().unwrap();
                if let Some(slot) = store.iter_mut().find(|r| r.id == record.id) {
                    *slot = record.clone();
                }
                async { Ok(record) }
            }

            fn delete(&self, id: $id) -> impl Future<Output = Result<(), HbnbError>> + Send {
                self.store.lock().unwrap().retain(|r| r.id != id);
                async { Ok(()) }
            }
        }
    };
}

in_memory_crud!(InMemoryStateRepo, StateRepository, State, StateId);
in_memory_crud!(InMemoryAmenityRepo, AmenityRepository, Amenity, AmenityId);
in_memory_crud!(InMemoryUserRepo, UserRepository, User, UserId);

#[derive(Clone, Default)]
pub struct InMemoryCityRepo {
    pub store: Arc<Mutex<Vec<City>>>,
}

impl CityRepository for InMemoryCityRepo {
    fn create(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        self.store.lock().unwrap().push(city.clone());
        async { Ok(city) }
    }

    fn get_by_id(&self, id: CityId) -> impl Future<Output = Result<Option<City>, HbnbError>> + Send {
        let result = self.store.lock().unwrap().iter().find(|c| c.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn find_by_state(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        let result: Vec<City> = self
            .store
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.state_id == state_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn update(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        let mut store = self.store.lock().unwrap();
        if let Some(slot) = store.iter_mut().find(|c| c.id == city.id) {
            *slot = city.clone();
        }
        async { Ok(city) }
    }

    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.store.lock().unwrap().retain(|c| c.id != id);
        async { Ok(()) }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryPlaceRepo {
    pub store: Arc<Mutex<Vec<Place>>>,
}

impl PlaceRepository for InMemoryPlaceRepo {
    fn create(&self, mut place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        place.amenity_ids.clear();
        self.store.lock().unwrap().push(place.clone());
        async { Ok(place) }
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
        let result = self.store.lock().unwrap().iter().find(|p| p.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn find_by_city(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let result: Vec<Place> = self
            .store
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.city_id == city_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn update(&self, mut place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let mut store = self.store.lock().unwrap();
        if let Some(slot) = store.iter_mut().find(|p| p.id == place.id) {
            place.amenity_ids.clone_from(&slot.amenity_ids);
            *slot = place.clone();
        }
        async { Ok(place) }
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.store.lock().unwrap().retain(|p| p.id != id);
        async { Ok(()) }
    }

    fn add_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let mut store = self.store.lock().unwrap();
        if let Some(place) = store.iter_mut().find(|p| p.id == place_id)
            && !place.has_amenity(amenity_id)
        {
            place.amenity_ids.push(amenity_id);
        }
        async { Ok(()) }
    }

    fn remove_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let mut store = self.store.lock().unwrap();
        if let Some(place) = store.iter_mut().find(|p| p.id == place_id) {
            place.amenity_ids.retain(|id| *id != amenity_id);
        }
        async { Ok(()) }
    }
}
