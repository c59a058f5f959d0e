//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod amenity_service;
pub mod city_service;
pub mod place_search_service;
pub mod place_service;
pub mod state_service;
pub mod user_service;
