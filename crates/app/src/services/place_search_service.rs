//! Place search: combine location and amenity filters across collections.

use hbnb_domain::error::HbnbError;
use hbnb_domain::place::Place;
use hbnb_domain::search::PlaceSearch;

use crate::ports::{CityRepository, PlaceRepository};

/// Application service answering place searches.
pub struct PlaceSearchService<PR, CR> {
    places: PR,
    cities: CR,
}

fn push_unique(found: &mut Vec<Place>, candidates: Vec<Place>) {
    for place in candidates {
        if !found.iter().any(|p| p.id == place.id) {
            found.push(place);
        }
    }
}

impl<PR: PlaceRepository, CR: CityRepository> PlaceSearchService<PR, CR> {
    /// Create a new service backed by the given repositories.
    pub fn new(places: PR, cities: CR) -> Self {
        Self { places, cities }
    }

    /// Run a search.
    ///
    /// Places of every city of the requested states come first, then places
    /// of the requested cities, each group in request order and without
    /// duplicates. When that yields nothing, every place is a candidate.
    /// Candidates are then narrowed to those offering every requested
    /// amenity. Unknown state and city ids contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, search: PlaceSearch) -> Result<Vec<Place>, HbnbError> {
        let mut found = Vec::new();

        for state_id in &search.states {
            for city in self.cities.find_by_state(*state_id).await? {
                push_unique(&mut found, self.places.find_by_city(city.id).await?);
            }
        }
        for city_id in &search.cities {
            push_unique(&mut found, self.places.find_by_city(*city_id).await?);
        }

        let candidates = if found.is_empty() {
            self.places.get_all().await?
        } else {
            found
        };

        let matches: Vec<Place> = candidates
            .into_iter()
            .filter(|place| search.matches_amenities(place))
            .collect();
        tracing::debug!(count = matches.len(), "place search finished");
        Ok(matches)
    }
}
