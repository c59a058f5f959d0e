//! City: belongs to a state and hosts places.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::{CityId, StateId};
use crate::payload::{Payload, require};
use crate::time::{Timestamp, now};

/// A city inside a [`State`](crate::state::State).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__class__")]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub state_id: StateId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl City {
    /// Create a builder for constructing a [`City`].
    #[must_use]
    pub fn builder() -> CityBuilder {
        CityBuilder::default()
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

/// Step-by-step builder for [`City`].
#[derive(Debug, Default)]
pub struct CityBuilder {
    id: Option<CityId>,
    name: Option<String>,
    state_id: Option<StateId>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl CityBuilder {
    #[must_use]
    pub fn id(mut self, id: CityId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn state_id(mut self, state_id: StateId) -> Self {
        self.state_id = Some(state_id);
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

    /// Consume the builder, validate, and return a [`City`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `name` is missing or empty, or
    /// if no `state_id` was given.
    pub fn build(self) -> Result<City, HbnbError> {
        let state_id = require(self.state_id, "state_id")?;
        let created_at = self.created_at.unwrap_or_else(now);
        let city = City {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            state_id,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        };
        city.validate()?;
        Ok(city)
    }
}

/// Body of a city creation request. The owning state comes from the path.
#[derive(Debug, Default, Deserialize)]
pub struct NewCity {
    pub name: Option<String>,
}

impl Payload for NewCity {
    const FIELDS: &'static [&'static str] = &["name"];
    const IGNORED: &'static [&'static str] = &["state_id"];
}

impl NewCity {
    /// Build a fresh [`City`] attached to `state_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent.
    pub fn into_city(self, state_id: StateId) -> Result<City, HbnbError> {
        City::builder()
            .name(require(self.name, "name")?)
            .state_id(state_id)
            .build()
    }
}

/// Fields of a city that a client may change. The owning state is fixed.
#[derive(Debug, Default, Deserialize)]
pub struct CityUpdate {
    pub name: Option<String>,
}

impl Payload for CityUpdate {
    const FIELDS: &'static [&'static str] = &["name"];
    const IGNORED: &'static [&'static str] = &["state_id"];
}

impl CityUpdate {
    /// Overwrite the fields present in the patch.
    pub fn apply(self, city: &mut City) {
        if let Some(name) = self.name {
            city.name = name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_build_city_attached_to_state() {
        let state_id = StateId::new();
        let city = City::builder()
            .name("San Francisco")
            .state_id(state_id)
            .build()
            .unwrap();
        assert_eq!(city.state_id, state_id);
    }

    #[test]
    fn should_refuse_city_without_state() {
        let result = City::builder().name("Nowhere").build();
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField("state_id")))
        ));
    }

    #[test]
    fn should_ignore_state_id_in_update_body() {
        let body = json!({"name": "Oakland", "state_id": StateId::new().to_string()});
        let serde_json::Value::Object(map) = body else {
            unreachable!()
        };
        let update = CityUpdate::from_object(map).unwrap();

        let state_id = StateId::new();
        let mut city = City::builder()
            .name("Berkeley")
            .state_id(state_id)
            .build()
            .unwrap();
        update.apply(&mut city);

        assert_eq!(city.name, "Oakland");
        assert_eq!(city.state_id, state_id);
    }

    #[test]
    fn should_serialize_with_class_discriminator() {
        let city = City::builder()
            .name("Reno")
            .state_id(StateId::new())
            .build()
            .unwrap();
        let json = serde_json::to_value(&city).unwrap();
        assert_eq!(json["__class__"], "City");
        assert_eq!(json["state_id"], city.state_id.to_string());
    }
}
