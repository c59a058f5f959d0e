//! Place search filter.
//!
//! A search narrows the set of places by location (states and cities, which
//! are unioned) and then by amenities (which are intersected). Ids that do not
//! parse are treated like ids that do not exist.

use std::str::FromStr;

use serde::Deserialize;

use crate::id::{AmenityId, CityId, StateId};
use crate::payload::Payload;
use crate::place::Place;

/// Body of a `places_search` request, as sent by the client.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceSearchRequest {
    pub states: Option<Vec<String>>,
    pub cities: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
}

impl Payload for PlaceSearchRequest {
    const FIELDS: &'static [&'static str] = &["states", "cities", "amenities"];
    const IGNORED: &'static [&'static str] = &[];
    const ALLOW_EMPTY: bool = true;
}

impl PlaceSearchRequest {
    /// Turn raw ids into a typed filter.
    ///
    /// Unparseable state and city ids are dropped, like unknown ones.
    /// Returns `None` when an amenity id does not parse: no place can be
    /// linked to it, so nothing can match.
    #[must_use]
    pub fn resolve(self) -> Option<PlaceSearch> {
        let amenities = self
            .amenities
            .unwrap_or_default()
            .iter()
            .map(|raw| AmenityId::from_str(raw).ok())
            .collect::<Option<Vec<_>>>()?;

        Some(PlaceSearch {
            states: parse_lenient(self.states),
            cities: parse_lenient(self.cities),
            amenities,
        })
    }
}

fn parse_lenient<T: FromStr>(raw: Option<Vec<String>>) -> Vec<T> {
    raw.unwrap_or_default()
        .iter()
        .filter_map(|id| T::from_str(id).ok())
        .collect()
}

/// Typed place search filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceSearch {
    /// Places in any city of these states.
    pub states: Vec<StateId>,
    /// Places in any of these cities.
    pub cities: Vec<CityId>,
    /// Places must offer every one of these.
    pub amenities: Vec<AmenityId>,
}

impl PlaceSearch {
    /// Whether `place` offers every requested amenity.
    #[must_use]
    pub fn matches_amenities(&self, place: &Place) -> bool {
        self.amenities.iter().all(|id| place.has_amenity(*id))
    }
}
