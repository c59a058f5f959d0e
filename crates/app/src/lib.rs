//! # hbnb-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StateRepository`, `CityRepository`, `AmenityRepository`,
//!     `UserRepository`: CRUD per record kind
//!   - `PlaceRepository`: CRUD for places plus the place/amenity links
//! - Define **driving/inbound ports** as use-case structs:
//!   - one service per record kind (create, get, list, update, delete,
//!     nested listing)
//!   - `PlaceSearchService`: multi-criteria place search
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod in_memory;
