//! Place: a rentable listing in a city, owned by a user.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::{AmenityId, CityId, PlaceId, UserId};
use crate::payload::{Payload, require};
use crate::time::{Timestamp, now};

/// A listing. `amenity_ids` mirrors the place/amenity link table in link
/// order; it is maintained by the repository, never by update patches.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct Place {
    pub id: PlaceId,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub number_rooms: u32,
    pub number_bathrooms: u32,
    pub max_guest: u32,
    pub price_by_night: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub amenity_ids: Vec<AmenityId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Place {
    /// Create a builder for constructing a [`Place`].
    #[must_use]
    pub fn builder() -> PlaceBuilder {
        PlaceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HbnbError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Record a modification at `at`.
    pub fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }

    /// Whether `amenity_id` is linked to this place.
    #[must_use]
    pub fn has_amenity(&self, amenity_id: AmenityId) -> bool {
        self.amenity_ids.contains(&amenity_id)
    }
}

/// Step-by-step builder for [`Place`].
#[derive(Debug, Default)]
pub struct PlaceBuilder {
    id: Option<PlaceId>,
    city_id: Option<CityId>,
    user_id: Option<UserId>,
    name: Option<String>,
    description: Option<String>,
    number_rooms: u32,
    number_bathrooms: u32,
    max_guest: u32,
    price_by_night: u32,
    latitude: f64,
    longitude: f64,
    amenity_ids: Vec<AmenityId>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl PlaceBuilder {
    #[must_use]
    pub fn id(mut self, id: PlaceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn city_id(mut self, city_id: CityId) -> Self {
        self.city_id = Some(city_id);
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn number_rooms(mut self, value: u32) -> Self {
        self.number_rooms = value;
        self
    }

    #[must_use]
    pub fn number_bathrooms(mut self, value: u32) -> Self {
        self.number_bathrooms = value;
        self
    }

    #[must_use]
    pub fn max_guest(mut self, value: u32) -> Self {
        self.max_guest = value;
        self
    }

    #[must_use]
    pub fn price_by_night(mut self, value: u32) -> Self {
        self.price_by_night = value;
        self
    }

    #[must_use]
    pub fn latitude(mut self, value: f64) -> Self {
        self.latitude = value;
        self
    }

    #[must_use]
    pub fn longitude(mut self, value: f64) -> Self {
        self.longitude = value;
        self
    }

    #[must_use]
    pub fn amenity(mut self, amenity_id: AmenityId) -> Self {
        self.amenity_ids.push(amenity_id);
        self
    }

    #[must_use]
    pub fn created_at(mut self, at: Timestamp) -> Self {
        self.created_at = Some(at);
        self
    }

    #[must_use]
    pub fn updated_at(mut self, at: Timestamp) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Consume the builder, validate, and return a [`Place`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `city_id` or `user_id` is
    /// missing, or `name` is missing or empty.
    pub fn build(self) -> Result<Place, HbnbError> {
        let city_id = require(self.city_id, "city_id")?;
        let user_id = require(self.user_id, "user_id")?;
        let created_at = self.created_at.unwrap_or_else(now);
        let place = Place {
            id: self.id.unwrap_or_default(),
            city_id,
            user_id,
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            number_rooms: self.number_rooms,
            number_bathrooms: self.number_bathrooms,
            max_guest: self.max_guest,
            price_by_night: self.price_by_night,
            latitude: self.latitude,
            longitude: self.longitude,
            amenity_ids: self.amenity_ids,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        };
        place.validate()?;
        Ok(place)
    }
}

/// Read an optional count sent either as an integer or as a float with no
/// fractional part (`2.0`).
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn whole_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let count = match (number.as_u64(), number.as_f64()) {
        (Some(value), _) => u32::try_from(value).ok(),
        (None, Some(value))
            if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) =>
        {
            Some(value as u32)
        }
        _ => None,
    };
    count.map(Some).ok_or_else(|| {
        D::Error::custom(format!("expected a whole non-negative count, got {number}"))
    })
}

/// Body of a place creation request. The city comes from the path; the
/// owner is named by `user_id` and must exist.
#[derive(Debug, Default, Deserialize)]
pub struct NewPlace {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "whole_count")]
    pub number_rooms: Option<u32>,
    #[serde(default, deserialize_with = "whole_count")]
    pub number_bathrooms: Option<u32>,
    #[serde(default, deserialize_with = "whole_count")]
    pub max_guest: Option<u32>,
    #[serde(default, deserialize_with = "whole_count")]
    pub price_by_night: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Payload for NewPlace {
    const FIELDS: &'static [&'static str] = &[
        "user_id",
        "name",
        "description",
        "number_rooms",
        "number_bathrooms",
        "max_guest",
        "price_by_night",
        "latitude",
        "longitude",
    ];
    const IGNORED: &'static [&'static str] = &["city_id", "amenity_ids"];
}

impl NewPlace {
    /// The raw owner id, as sent by the client.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `user_id` is absent.
    pub fn owner(&self) -> Result<&str, ValidationError> {
        self.user_id
            .as_deref()
            .ok_or(ValidationError::MissingField("user_id"))
    }

    /// Build a fresh [`Place`] in `city_id`, owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent.
    pub fn into_place(self, city_id: CityId, user_id: UserId) -> Result<Place, HbnbError> {
        let mut builder = Place::builder()
            .city_id(city_id)
            .user_id(user_id)
            .name(require(self.name, "name")?);
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        if let Some(value) = self.number_rooms {
            builder = builder.number_rooms(value);
        }
        if let Some(value) = self.number_bathrooms {
            builder = builder.number_bathrooms(value);
        }
        if let Some(value) = self.max_guest {
            builder = builder.max_guest(value);
        }
        if let Some(value) = self.price_by_night {
            builder = builder.price_by_night(value);
        }
        if let Some(value) = self.latitude {
            builder = builder.latitude(value);
        }
        if let Some(value) = self.longitude {
            builder = builder.longitude(value);
        }
        builder.build()
    }
}

/// Fields of a place that a client may change. City and owner are fixed.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "whole_count")]
    pub number_rooms: Option<u32>,
    #[serde(default, deserialize_with = "whole_count")]
    pub number_bathrooms: Option<u32>,
    #[serde(default, deserialize_with = "whole_count")]
    pub max_guest: Option<u32>,
    #[serde(default, deserialize_with = "whole_count")]
    pub price_by_night: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Payload for PlaceUpdate {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "description",
        "number_rooms",
        "number_bathrooms",
        "max_guest",
        "price_by_night",
        "latitude",
        "longitude",
    ];
    const IGNORED: &'static [&'static str] = &["city_id", "user_id", "amenity_ids"];
}

impl PlaceUpdate {
    /// Overwrite the fields present in the patch.
    pub fn apply(self, place: &mut Place) {
        if let Some(name) = self.name {
            place.name = name;
        }
        if let Some(description) = self.description {
            place.description = description;
        }
        if let Some(value) = self.number_rooms {
            place.number_rooms = value;
        }
        if let Some(value) = self.number_bathrooms {
            place.number_bathrooms = value;
        }
        if let Some(value) = self.max_guest {
            place.max_guest = value;
        }
        if let Some(value) = self.price_by_night {
            place.price_by_night = value;
        }
        if let Some(value) = self.latitude {
            place.latitude = value;
        }
        if let Some(value) = self.longitude {
            place.longitude = value;
        }
    }
}
