//! Amenity: a feature a place can offer (wifi, pool, …).

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::AmenityId;
use crate::payload::{Payload, require};
use crate::time::{Timestamp, now};

/// A feature that can be linked to any number of places.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Amenity {
    /// Create a builder for constructing an [`Amenity`].
    #[must_use]
    pub fn builder() -> AmenityBuilder {
        AmenityBuilder::default()
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
}

/// Step-by-step builder for [`Amenity`].
#[derive(Debug, Default)]
pub struct AmenityBuilder {
    id: Option<AmenityId>,
    name: Option<String>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl AmenityBuilder {
    #[must_use]
    pub fn id(mut self, id: AmenityId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
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

    /// Consume the builder, validate, and return an [`Amenity`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Amenity, HbnbError> {
        let created_at = self.created_at.unwrap_or_else(now);
        let amenity = Amenity {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        };
        amenity.validate()?;
        Ok(amenity)
    }
}

/// Body of an amenity creation request.
#[derive(Debug, Default, Deserialize)]
pub struct NewAmenity {
    pub name: Option<String>,
}

impl Payload for NewAmenity {
    const FIELDS: &'static [&'static str] = &["name"];
    const IGNORED: &'static [&'static str] = &[];
}

impl NewAmenity {
    /// Build a fresh [`Amenity`] from the draft.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent.
    pub fn into_amenity(self) -> Result<Amenity, HbnbError> {
        Amenity::builder().name(require(self.name, "name")?).build()
    }
}

/// Fields of an amenity that a client may change.
#[derive(Debug, Default, Deserialize)]
pub struct AmenityUpdate {
    pub name: Option<String>,
}

impl Payload for AmenityUpdate {
    const FIELDS: &'static [&'static str] = &["name"];
    const IGNORED: &'static [&'static str] = &[];
}

impl AmenityUpdate {
    /// Overwrite the fields present in the patch.
    pub fn apply(self, amenity: &mut Amenity) {
        if let Some(name) = self.name {
            amenity.name = name;
        }
    }
}
